// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use crate::{Fragment, Type, error::diagnostic::Diagnostic};

pub fn literal_out_of_range(fragment: Fragment) -> Diagnostic {
	let value = fragment.text().to_string();
	Diagnostic {
		code: "NUMBER_001".to_string(),
		statement: None,
		message: format!("number '{}' is out of range", value),
		fragment: Some(fragment),
		label: Some("does not fit into any numeric type".to_string()),
		help: Some(format!(
			"integer literals must be between {} and {}",
			i128::MIN,
			u128::MAX
		)),
		notes: vec![],
		cause: None,
	}
}

pub fn arithmetic_overflow(fragment: Fragment, ty: Type) -> Diagnostic {
	Diagnostic {
		code: "NUMBER_002".to_string(),
		statement: None,
		message: "arithmetic overflow".to_string(),
		fragment: Some(fragment),
		label: Some(format!("the result does not fit into {}", ty)),
		help: Some(format!("the result type is {}, use wider operands or cast before the operation", ty)),
		notes: vec![],
		cause: None,
	}
}

pub fn division_by_zero(fragment: Fragment) -> Diagnostic {
	Diagnostic {
		code: "NUMBER_003".to_string(),
		statement: None,
		message: "division by zero".to_string(),
		fragment: Some(fragment),
		label: Some("the divisor evaluates to zero".to_string()),
		help: None,
		notes: vec![],
		cause: None,
	}
}
