// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use crate::error::diagnostic::Diagnostic;

pub fn invalid_selector(key: impl Into<String>) -> Diagnostic {
	let key = key.into();
	Diagnostic {
		code: "CATALOG_001".to_string(),
		message: format!("unexpected format of database or table to restore: `{}`", key),
		label: Some("selector has more than two `/` separated parts or a table with more than one `.`".to_string()),
		help: Some("use 'dat', 'dat/rel' or 'dat/nmsp.rel'".to_string()),
		notes: vec![],
	}
}

pub fn database_not_found(name: impl Into<String>) -> Diagnostic {
	let name = name.into();
	Diagnostic {
		code: "CATALOG_002".to_string(),
		message: format!("can't find database in catalog metadata with name: `{}`", name),
		label: Some("database is not part of this backup".to_string()),
		help: Some("check the database name against the backup catalog listing".to_string()),
		notes: vec![],
	}
}

pub fn table_not_found(database: impl Into<String>, table: impl Into<String>) -> Diagnostic {
	let database = database.into();
	let table = table.into();
	Diagnostic {
		code: "CATALOG_003".to_string(),
		message: format!(
			"can't find table in catalog metadata for `{}` database and name: `{}`",
			database, table
		),
		label: Some("table is not part of this backup".to_string()),
		help: Some("table names resolve against the `public` schema unless qualified as 'nmsp.rel'".to_string()),
		notes: vec![],
	}
}
