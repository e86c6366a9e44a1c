// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

pub mod catalog;
pub mod render;

/// A structured description of a failure: stable code, human readable
/// message and optional guidance for the operator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagnostic {
	pub code: String,
	pub message: String,
	pub label: Option<String>,
	pub help: Option<String>,
	pub notes: Vec<String>,
}

impl Display for Diagnostic {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_fmt(format_args!("{}", self.code))
	}
}

/// Conversion of crate local error types into a [`Diagnostic`].
pub trait IntoDiagnostic {
	fn into_diagnostic(self) -> Diagnostic;
}

#[cfg(test)]
mod tests {
	use super::catalog::invalid_selector;

	#[test]
	fn test_display_prints_code() {
		let diagnostic = invalid_selector("a/b/c");
		assert_eq!(diagnostic.to_string(), "CATALOG_001");
	}

	#[test]
	fn test_serde_roundtrip() {
		let diagnostic = invalid_selector("a/b/c");
		let json = serde_json::to_string(&diagnostic).unwrap();
		let back: super::Diagnostic = serde_json::from_str(&json).unwrap();
		assert_eq!(back, diagnostic);
	}
}
