// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use crate::{Fragment, error::diagnostic::Diagnostic};

pub fn parameter_not_found(fragment: Fragment) -> Diagnostic {
	let name = fragment.text().to_string();
	Diagnostic {
		code: "PARAMS_001".to_string(),
		statement: None,
		message: format!("parameter '{}' not found", name),
		fragment: Some(fragment),
		label: Some("no value was bound for this parameter".to_string()),
		help: Some("pass the parameter with the query".to_string()),
		notes: vec![],
		cause: None,
	}
}

pub fn invalid_parameter_reference(fragment: Fragment) -> Diagnostic {
	let name = fragment.text().to_string();
	Diagnostic {
		code: "PARAMS_002".to_string(),
		statement: None,
		message: format!("invalid parameter reference '{}'", name),
		fragment: Some(fragment),
		label: Some("positional parameters start at $1".to_string()),
		help: Some("use $1, $2, ... for positional or $name for named parameters".to_string()),
		notes: vec![],
		cause: None,
	}
}
