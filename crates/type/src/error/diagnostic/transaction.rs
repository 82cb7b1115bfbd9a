// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use crate::error::diagnostic::Diagnostic;

pub fn transaction_already_committed() -> Diagnostic {
	Diagnostic {
		code: "TXN_001".to_string(),
		statement: None,
		message: "transaction already committed".to_string(),
		fragment: None,
		label: None,
		help: Some("begin a new transaction".to_string()),
		notes: vec![],
		cause: None,
	}
}

pub fn transaction_already_rolled_back() -> Diagnostic {
	Diagnostic {
		code: "TXN_001".to_string(),
		statement: None,
		message: "transaction already rolled back".to_string(),
		fragment: None,
		label: None,
		help: Some("begin a new transaction".to_string()),
		notes: vec![],
		cause: None,
	}
}

pub fn transaction_aborted(reason: impl Into<String>) -> Diagnostic {
	Diagnostic {
		code: "TXN_002".to_string(),
		statement: None,
		message: "transaction aborted before it completed".to_string(),
		fragment: None,
		label: None,
		help: None,
		notes: vec![reason.into()],
		cause: None,
	}
}
