// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use std::{
	fmt,
	fmt::{Display, Formatter},
	ops::Deref,
};

use serde::{Deserialize, Serialize};

/// Object identifier of a database, assigned by the catalog producer at
/// capture time. Opaque to this crate: never generated, never mutated.
#[repr(transparent)]
#[derive(Debug, Copy, Clone, PartialOrd, PartialEq, Ord, Eq, Hash, Serialize, Deserialize)]
pub struct DatabaseOid(pub u32);

impl Deref for DatabaseOid {
	type Target = u32;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

impl PartialEq<u32> for DatabaseOid {
	fn eq(&self, other: &u32) -> bool {
		self.0.eq(other)
	}
}

impl From<DatabaseOid> for u32 {
	fn from(value: DatabaseOid) -> Self {
		value.0
	}
}

impl From<u32> for DatabaseOid {
	fn from(value: u32) -> Self {
		DatabaseOid(value)
	}
}

impl Display for DatabaseOid {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		Display::fmt(&self.0, f)
	}
}

/// Object identifier of a table within a database.
#[repr(transparent)]
#[derive(Debug, Copy, Clone, PartialOrd, PartialEq, Ord, Eq, Hash, Serialize, Deserialize)]
pub struct TableOid(pub u32);

impl TableOid {
	/// Sentinel in resolution results: no specific table, the whole
	/// database is selected.
	pub const WHOLE_DATABASE: TableOid = TableOid(0);
}

impl Deref for TableOid {
	type Target = u32;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

impl PartialEq<u32> for TableOid {
	fn eq(&self, other: &u32) -> bool {
		self.0.eq(other)
	}
}

impl From<TableOid> for u32 {
	fn from(value: TableOid) -> Self {
		value.0
	}
}

impl From<u32> for TableOid {
	fn from(value: u32) -> Self {
		TableOid(value)
	}
}

impl Display for TableOid {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		Display::fmt(&self.0, f)
	}
}
