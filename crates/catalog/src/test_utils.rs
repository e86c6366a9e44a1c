// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use pgvault_type::{DatabaseOid, TableOid};

use crate::snapshot::{CatalogSnapshot, DatabaseEntry};

pub fn create_database(snapshot: &mut CatalogSnapshot, database: &str, oid: u32) {
	snapshot.insert(database, DatabaseEntry::new(DatabaseOid(oid)));
}

pub fn create_table(snapshot: &mut CatalogSnapshot, database: &str, table: &str, oid: u32) {
	let entry = snapshot.get_mut(database).expect("database not found");
	entry.tables.insert(table.to_string(), TableOid(oid));
}
