// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use crate::{Fragment, Type, error::diagnostic::Diagnostic};

pub fn column_not_found(fragment: Fragment) -> Diagnostic {
	let name = fragment.text().to_string();
	Diagnostic {
		code: "QUERY_001".to_string(),
		statement: None,
		message: format!("column `{}` not found", name),
		fragment: Some(fragment),
		label: Some("this column does not exist in the current context".to_string()),
		help: Some("check for typos or ensure the column is defined in the input".to_string()),
		notes: vec![],
		cause: None,
	}
}

pub fn operator_type_mismatch(fragment: Fragment, operator: &str, left: Type, right: Type) -> Diagnostic {
	Diagnostic {
		code: "QUERY_002".to_string(),
		statement: None,
		message: format!("cannot apply operator '{}' to {} and {}", operator, left, right),
		fragment: Some(fragment),
		label: Some("incompatible operand types".to_string()),
		help: None,
		notes: vec![],
		cause: None,
	}
}

pub fn prefix_type_mismatch(fragment: Fragment, operator: &str, operand: Type) -> Diagnostic {
	Diagnostic {
		code: "QUERY_002".to_string(),
		statement: None,
		message: format!("cannot apply operator '{}' to {}", operator, operand),
		fragment: Some(fragment),
		label: Some("incompatible operand type".to_string()),
		help: None,
		notes: vec![],
		cause: None,
	}
}

pub fn filter_not_boolean(fragment: Fragment, ty: Type) -> Diagnostic {
	Diagnostic {
		code: "QUERY_003".to_string(),
		statement: None,
		message: format!("filter condition must be Boolean, got {}", ty),
		fragment: Some(fragment),
		label: Some("this expression is not a boolean".to_string()),
		help: Some("compare the value, e.g. 'filter age > 18'".to_string()),
		notes: vec![],
		cause: None,
	}
}

pub fn incompatible_inline_values(column: &str, existing: Type, found: Type) -> Diagnostic {
	Diagnostic {
		code: "QUERY_004".to_string(),
		statement: None,
		message: format!("column `{}` mixes values of type {} and {}", column, existing, found),
		fragment: None,
		label: None,
		help: Some("all values of an inline column must share a type or be numbers".to_string()),
		notes: vec![],
		cause: None,
	}
}

pub fn operator_without_input(fragment: Fragment) -> Diagnostic {
	let name = fragment.text().to_string();
	Diagnostic {
		code: "QUERY_005".to_string(),
		statement: None,
		message: format!("'{}' must be the first operator of a pipeline", name),
		fragment: Some(fragment),
		label: Some("a source cannot consume the output of another operator".to_string()),
		help: Some("move it to the start of the statement or begin a new statement with ';'".to_string()),
		notes: vec![],
		cause: None,
	}
}
