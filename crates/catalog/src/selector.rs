// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use std::{
	fmt,
	fmt::{Display, Formatter},
	str::FromStr,
};

use crate::Error;

/// Schema a bare table name is qualified with.
pub const DEFAULT_SCHEMA: &str = "public";

/// A parsed backup/restore selector.
///
/// Selectors arrive as user supplied text in one of three forms: `dat`
/// selects a whole database, `dat/rel` a table in the `public` schema and
/// `dat/nmsp.rel` a schema qualified table. `table` is always stored in the
/// normalized `schema.table` form; `None` means the whole database.
#[derive(Debug, Clone, PartialEq)]
pub struct Selector {
	pub database: String,
	pub table: Option<String>,
}

impl Selector {
	/// Parses a raw selector string.
	///
	/// Splits on `/` into database and table part, then qualifies a bare
	/// table name with [`DEFAULT_SCHEMA`]. Any other shape fails with
	/// [`Error::InvalidSelector`] carrying the raw input.
	pub fn parse(key: &str) -> crate::Result<Selector> {
		let tokens: Vec<&str> = key.split('/').collect();
		match tokens.as_slice() {
			[database] => Ok(Selector {
				database: (*database).to_string(),
				table: None,
			}),
			[database, table] => {
				let table = qualify_table(table).ok_or_else(|| Error::InvalidSelector {
					key: key.to_string(),
				})?;
				Ok(Selector {
					database: (*database).to_string(),
					table: Some(table),
				})
			}
			_ => Err(Error::InvalidSelector {
				key: key.to_string(),
			}),
		}
	}
}

/// Normalizes a table part to `schema.table`, `None` if it has more than one
/// `.`. The empty table part qualifies like any other bare name.
fn qualify_table(table: &str) -> Option<String> {
	let tokens: Vec<&str> = table.split('.').collect();
	match tokens.as_slice() {
		[name] => Some(format!("{}.{}", DEFAULT_SCHEMA, name)),
		[_, _] => Some(table.to_string()),
		_ => None,
	}
}

impl FromStr for Selector {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Selector::parse(s)
	}
}

impl Display for Selector {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		match &self.table {
			Some(table) => write!(f, "{}/{}", self.database, table),
			None => f.write_str(&self.database),
		}
	}
}
