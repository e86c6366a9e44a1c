// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

mod resolve;
mod resolve_pattern;

use std::collections::HashMap;

use pgvault_type::{DatabaseOid, TableOid};
use serde::{Deserialize, Serialize};

/// Everything captured about one database: its OID and the OIDs of its
/// tables, keyed by schema qualified name (`schema.table`).
///
/// OIDs are assigned by the catalog producer at capture time and are opaque
/// here. The wire form embeds into the backup metadata as
/// `{"oid": …, "tables": {…}}` with `tables` omitted when empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatabaseEntry {
	pub oid: DatabaseOid,
	#[serde(default, skip_serializing_if = "HashMap::is_empty")]
	pub tables: HashMap<String, TableOid>,
}

impl DatabaseEntry {
	pub fn new(oid: DatabaseOid) -> Self {
		Self {
			oid,
			tables: HashMap::new(),
		}
	}

	pub fn with_table(mut self, name: impl Into<String>, oid: TableOid) -> Self {
		self.tables.insert(name.into(), oid);
		self
	}
}

/// The catalog captured at backup time: every database by name, with its OID
/// and table OIDs.
///
/// Built once by the capture side, then read only: every resolution method
/// takes `&self` and the snapshot holds no interior mutability. Callers that
/// need fresher metadata publish a new snapshot instead of mutating this one,
/// which keeps concurrent resolution against a shared snapshot safe.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CatalogSnapshot {
	databases: HashMap<String, DatabaseEntry>,
}

impl CatalogSnapshot {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn insert(&mut self, name: impl Into<String>, entry: DatabaseEntry) -> Option<DatabaseEntry> {
		self.databases.insert(name.into(), entry)
	}

	pub fn get(&self, name: &str) -> Option<&DatabaseEntry> {
		self.databases.get(name)
	}

	pub fn get_mut(&mut self, name: &str) -> Option<&mut DatabaseEntry> {
		self.databases.get_mut(name)
	}

	pub fn iter(&self) -> impl Iterator<Item = (&String, &DatabaseEntry)> {
		self.databases.iter()
	}

	pub fn len(&self) -> usize {
		self.databases.len()
	}

	pub fn is_empty(&self) -> bool {
		self.databases.is_empty()
	}
}

impl FromIterator<(String, DatabaseEntry)> for CatalogSnapshot {
	fn from_iter<I: IntoIterator<Item = (String, DatabaseEntry)>>(iter: I) -> Self {
		Self {
			databases: iter.into_iter().collect(),
		}
	}
}

impl Extend<(String, DatabaseEntry)> for CatalogSnapshot {
	fn extend<I: IntoIterator<Item = (String, DatabaseEntry)>>(&mut self, iter: I) {
		self.databases.extend(iter)
	}
}
