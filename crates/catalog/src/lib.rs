// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

#![cfg_attr(not(debug_assertions), deny(warnings))]

pub use error::Error;
mod error;
pub mod selector;
pub mod snapshot;
pub mod test_utils;

pub type Result<T> = std::result::Result<T, Error>;
