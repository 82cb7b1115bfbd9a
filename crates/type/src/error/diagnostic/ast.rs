// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use crate::{Fragment, error::diagnostic::Diagnostic};

/// A character sequence the tokenizer does not recognise.
pub fn lex_error(fragment: Fragment, message: impl Into<String>) -> Diagnostic {
	Diagnostic {
		code: "AST_001".to_string(),
		statement: None,
		message: format!("tokenizer error: {}", message.into()),
		fragment: Some(fragment),
		label: Some("unrecognized input".to_string()),
		help: Some("check syntax and token format".to_string()),
		notes: vec![],
		cause: None,
	}
}

pub fn unexpected_eof_error() -> Diagnostic {
	Diagnostic {
		code: "AST_002".to_string(),
		statement: None,
		message: "unexpected end of input".to_string(),
		fragment: None,
		label: None,
		help: Some("complete the statement".to_string()),
		notes: vec![],
		cause: None,
	}
}

pub fn unexpected_token_error(expected: &str, fragment: Fragment) -> Diagnostic {
	let found = fragment.text().to_string();
	Diagnostic {
		code: "AST_003".to_string(),
		statement: None,
		message: format!("unexpected token: expected {}, got '{}'", expected, found),
		fragment: Some(fragment),
		label: Some(format!("expected {}", expected)),
		help: None,
		notes: vec![],
		cause: None,
	}
}

pub fn unsupported_token_error(fragment: Fragment) -> Diagnostic {
	let value = fragment.text().to_string();
	Diagnostic {
		code: "AST_004".to_string(),
		statement: None,
		message: format!("unsupported token '{}'", value),
		fragment: Some(fragment),
		label: Some("not supported at this position".to_string()),
		help: None,
		notes: vec![],
		cause: None,
	}
}

pub fn expected_identifier_error(fragment: Fragment) -> Diagnostic {
	let value = fragment.text().to_string();
	Diagnostic {
		code: "AST_005".to_string(),
		statement: None,
		message: format!("expected identifier, found '{}'", value),
		fragment: Some(fragment),
		label: Some("expected an identifier here".to_string()),
		help: Some("use a column name like 'age' or a quoted name".to_string()),
		notes: vec![],
		cause: None,
	}
}

pub fn invalid_take_count(fragment: Fragment) -> Diagnostic {
	let value = fragment.text().to_string();
	Diagnostic {
		code: "AST_006".to_string(),
		statement: None,
		message: format!("invalid take count '{}'", value),
		fragment: Some(fragment),
		label: Some("expected a non-negative integer".to_string()),
		help: Some("write the number of rows to keep, e.g. 'take 10'".to_string()),
		notes: vec![],
		cause: None,
	}
}
