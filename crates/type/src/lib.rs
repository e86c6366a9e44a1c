// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

#![cfg_attr(not(debug_assertions), deny(warnings))]

pub mod error;
mod oid;

pub use error::{Error, diagnostic};
pub use oid::{DatabaseOid, TableOid};

pub type Result<T> = std::result::Result<T, Error>;
