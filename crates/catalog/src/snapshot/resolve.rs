// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use pgvault_type::{DatabaseOid, TableOid};
use tracing::instrument;

use crate::{Error, selector::Selector, snapshot::CatalogSnapshot};

impl CatalogSnapshot {
	/// Resolves one selector to exactly one `(database, table)` OID pair.
	///
	/// A selector without a table part resolves to
	/// [`TableOid::WHOLE_DATABASE`]. Unlike [`Self::resolve_pattern`], a
	/// name missing from the snapshot is an error here: the caller asked
	/// for one specific object and it is not part of this backup.
	#[instrument(name = "snapshot::resolve", level = "trace", skip(self))]
	pub fn resolve(&self, key: &str) -> crate::Result<(DatabaseOid, TableOid)> {
		let selector = Selector::parse(key)?;

		let Some(entry) = self.get(&selector.database) else {
			return Err(Error::DatabaseNotFound {
				name: selector.database,
			});
		};

		let Some(table) = selector.table else {
			return Ok((entry.oid, TableOid::WHOLE_DATABASE));
		};

		match entry.tables.get(&table) {
			Some(oid) => Ok((entry.oid, *oid)),
			None => Err(Error::TableNotFound {
				database: selector.database,
				table,
			}),
		}
	}
}
