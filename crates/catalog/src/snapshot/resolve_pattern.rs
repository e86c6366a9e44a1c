// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use std::collections::HashMap;

use pgvault_type::{DatabaseOid, TableOid};
use regex::Regex;
use tracing::{debug, instrument};

use crate::{selector::Selector, snapshot::CatalogSnapshot};

impl CatalogSnapshot {
	/// Resolves one selector, where `*` matches zero or more arbitrary
	/// characters, to every `(database, table)` OID pair it selects.
	///
	/// A selector without a table part selects whole databases: every
	/// matching database maps to `[TableOid::WHOLE_DATABASE]`. With a
	/// table part, every matching database maps to the OIDs of its
	/// matching tables, which leaves the database keyed to an empty list
	/// when none of its tables match.
	///
	/// Absence of matches is not an error. Once the selector parses, the
	/// result is total: an empty map just means nothing matched, which is
	/// the expected outcome for best-effort bulk selection over possibly
	/// partial selector sets.
	#[instrument(name = "snapshot::resolve_pattern", level = "trace", skip(self))]
	pub fn resolve_pattern(&self, key: &str) -> crate::Result<HashMap<DatabaseOid, Vec<TableOid>>> {
		let selector = Selector::parse(key)?;
		debug!(
			database = %selector.database,
			table = selector.table.as_deref().unwrap_or(""),
			"unpacked selector"
		);

		let Some(database_regexp) = compile_wildcard(&selector.database) else {
			return Ok(HashMap::new());
		};
		let table_regexp = match selector.table.as_deref() {
			Some(table) => match compile_wildcard(table) {
				Some(regexp) => Some(regexp),
				None => return Ok(HashMap::new()),
			},
			None => None,
		};

		let mut to_restore: HashMap<DatabaseOid, Vec<TableOid>> = HashMap::new();
		for (database, entry) in self.iter() {
			if !database_regexp.is_match(database) {
				continue;
			}

			let matched = to_restore.entry(entry.oid).or_default();

			let Some(table_regexp) = &table_regexp else {
				debug!(database = %database, "whole database selected");
				matched.push(TableOid::WHOLE_DATABASE);
				continue;
			};

			for (table, oid) in &entry.tables {
				if table_regexp.is_match(table) {
					matched.push(*oid);
				}
			}
		}

		Ok(to_restore)
	}
}

/// Translates a selector part into an anchored pattern: every `*` becomes
/// `.*`, everything else is passed through to the regex engine verbatim.
/// Only `*` is a user facing wildcard; other metacharacters keep their regex
/// meaning, so a `.` in a name matches any character. A part that does not
/// compile selects nothing.
fn compile_wildcard(part: &str) -> Option<Regex> {
	let pattern = format!("^{}$", part.replace('*', ".*"));
	match Regex::new(&pattern) {
		Ok(regexp) => Some(regexp),
		Err(cause) => {
			debug!(pattern = %pattern, %cause, "pattern does not compile, selecting nothing");
			None
		}
	}
}

#[cfg(test)]
mod tests {
	use std::collections::HashMap;

	use pgvault_type::{DatabaseOid, TableOid};

	use crate::{
		Error,
		snapshot::CatalogSnapshot,
		test_utils::{create_database, create_table},
	};

	fn snapshot() -> CatalogSnapshot {
		let mut snapshot = CatalogSnapshot::new();
		create_database(&mut snapshot, "db1", 1);
		create_table(&mut snapshot, "db1", "public.a", 10);
		create_table(&mut snapshot, "db1", "public.b", 11);
		create_database(&mut snapshot, "db2", 2);
		create_table(&mut snapshot, "db2", "public.a", 20);
		snapshot
	}

	fn sorted(result: &HashMap<DatabaseOid, Vec<TableOid>>, database: DatabaseOid) -> Vec<TableOid> {
		let mut tables = result[&database].clone();
		tables.sort();
		tables
	}

	#[test]
	fn test_whole_database_wildcard() {
		let snapshot = snapshot();

		let result = snapshot.resolve_pattern("db*").unwrap();

		assert_eq!(result.len(), 2);
		assert_eq!(result[&DatabaseOid(1)], vec![TableOid::WHOLE_DATABASE]);
		assert_eq!(result[&DatabaseOid(2)], vec![TableOid::WHOLE_DATABASE]);
	}

	#[test]
	fn test_table_wildcard() {
		let snapshot = snapshot();

		let result = snapshot.resolve_pattern("db1/public.*").unwrap();

		assert_eq!(result.len(), 1);
		assert_eq!(sorted(&result, DatabaseOid(1)), vec![TableOid(10), TableOid(11)]);
	}

	#[test]
	fn test_exact_name_as_pattern() {
		let snapshot = snapshot();

		let result = snapshot.resolve_pattern("db1/public.a").unwrap();

		assert_eq!(result.len(), 1);
		assert_eq!(result[&DatabaseOid(1)], vec![TableOid(10)]);
	}

	#[test]
	fn test_bare_table_wildcard_scopes_to_public() {
		let snapshot = snapshot();

		// `*` has no `.`, so it qualifies to `public.*` before translation.
		let result = snapshot.resolve_pattern("db1/*").unwrap();

		assert_eq!(result.len(), 1);
		assert_eq!(sorted(&result, DatabaseOid(1)), vec![TableOid(10), TableOid(11)]);
	}

	#[test]
	fn test_unmatched_pattern_selects_nothing() {
		let snapshot = snapshot();

		let result = snapshot.resolve_pattern("nomatch*").unwrap();

		assert!(result.is_empty());
	}

	#[test]
	fn test_matched_database_without_matching_tables_keeps_empty_entry() {
		let snapshot = snapshot();

		let result = snapshot.resolve_pattern("db1/zz*").unwrap();

		assert_eq!(result.len(), 1);
		assert_eq!(result[&DatabaseOid(1)], Vec::<TableOid>::new());
	}

	#[test]
	fn test_invalid_selector_propagated() {
		let snapshot = snapshot();

		let err = snapshot.resolve_pattern("a/b/c").unwrap_err();

		assert_eq!(
			err,
			Error::InvalidSelector {
				key: "a/b/c".to_string()
			}
		);
	}

	#[test]
	fn test_dot_matches_any_character() {
		let mut snapshot = snapshot();
		create_table(&mut snapshot, "db1", "publicXa", 12);

		// Only `*` is a wildcard, but `.` keeps its regex meaning.
		let result = snapshot.resolve_pattern("db1/public.a").unwrap();

		assert_eq!(sorted(&result, DatabaseOid(1)), vec![TableOid(10), TableOid(12)]);
	}

	#[test]
	fn test_non_compiling_database_pattern_selects_nothing() {
		let snapshot = snapshot();

		let result = snapshot.resolve_pattern("db[").unwrap();

		assert!(result.is_empty());
	}

	#[test]
	fn test_non_compiling_table_pattern_selects_nothing() {
		let snapshot = snapshot();

		let result = snapshot.resolve_pattern("db1/a[").unwrap();

		assert!(result.is_empty());
	}

	#[test]
	fn test_empty_selector_matches_nothing() {
		let snapshot = snapshot();

		let result = snapshot.resolve_pattern("").unwrap();

		assert!(result.is_empty());
	}

	#[test]
	fn test_empty_snapshot() {
		let snapshot = CatalogSnapshot::new();

		let result = snapshot.resolve_pattern("db*").unwrap();

		assert!(result.is_empty());
	}
}
