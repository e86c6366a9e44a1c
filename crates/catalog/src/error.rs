// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use pgvault_type::diagnostic::{
	Diagnostic, IntoDiagnostic,
	catalog::{database_not_found, invalid_selector, table_not_found},
};

/// Resolution failures. All variants carry the offending input and none of
/// them is retryable: a malformed selector or a selector that does not match
/// the captured catalog stays wrong until the caller changes it.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
	#[error("unexpected format of database or table to restore: `{key}`, use 'dat', 'dat/rel' or 'dat/nmsp.rel'")]
	InvalidSelector {
		key: String,
	},

	#[error("can't find database in catalog metadata with name: `{name}`")]
	DatabaseNotFound {
		name: String,
	},

	#[error("can't find table in catalog metadata for `{database}` database and name: `{table}`")]
	TableNotFound {
		database: String,
		table: String,
	},
}

impl IntoDiagnostic for Error {
	fn into_diagnostic(self) -> Diagnostic {
		match self {
			Error::InvalidSelector {
				key,
			} => invalid_selector(key),
			Error::DatabaseNotFound {
				name,
			} => database_not_found(name),
			Error::TableNotFound {
				database,
				table,
			} => table_not_found(database, table),
		}
	}
}

impl From<Error> for pgvault_type::Error {
	fn from(err: Error) -> Self {
		pgvault_type::Error(err.into_diagnostic())
	}
}

#[cfg(test)]
mod tests {
	use pgvault_type::diagnostic::IntoDiagnostic;

	use super::Error;

	#[test]
	fn test_invalid_selector_display() {
		let err = Error::InvalidSelector {
			key: "a/b/c".to_string(),
		};
		assert_eq!(
			err.to_string(),
			"unexpected format of database or table to restore: `a/b/c`, use 'dat', 'dat/rel' or 'dat/nmsp.rel'"
		);
	}

	#[test]
	fn test_database_not_found_display() {
		let err = Error::DatabaseNotFound {
			name: "db1".to_string(),
		};
		assert_eq!(err.to_string(), "can't find database in catalog metadata with name: `db1`");
	}

	#[test]
	fn test_table_not_found_display() {
		let err = Error::TableNotFound {
			database: "db1".to_string(),
			table: "public.users".to_string(),
		};
		assert_eq!(
			err.to_string(),
			"can't find table in catalog metadata for `db1` database and name: `public.users`"
		);
	}

	#[test]
	fn test_into_diagnostic_maps_codes() {
		let diagnostic = Error::InvalidSelector {
			key: "a/b/c".to_string(),
		}
		.into_diagnostic();
		assert_eq!(diagnostic.code, "CATALOG_001");

		let diagnostic = Error::DatabaseNotFound {
			name: "db1".to_string(),
		}
		.into_diagnostic();
		assert_eq!(diagnostic.code, "CATALOG_002");

		let diagnostic = Error::TableNotFound {
			database: "db1".to_string(),
			table: "public.users".to_string(),
		}
		.into_diagnostic();
		assert_eq!(diagnostic.code, "CATALOG_003");
	}

	#[test]
	fn test_converts_into_product_error() {
		let err: pgvault_type::Error = Error::DatabaseNotFound {
			name: "db1".to_string(),
		}
		.into();

		assert_eq!(err.code, "CATALOG_002");
		assert!(err.message.contains("db1"));
	}
}
