// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use reifydb_type::Fragment;

use crate::expression::{AliasExpression, Expression};

#[derive(Debug, Clone, PartialEq)]
pub enum QueryNode {
	/// Rows written inline with `from [ {...}, ... ]`; each entry names its column.
	InlineData {
		rows: Vec<Vec<AliasExpression>>,
	},
	Map {
		expressions: Vec<Expression>,
	},
	Extend {
		expressions: Vec<Expression>,
	},
	Filter {
		condition: Expression,
	},
	Take {
		take: usize,
	},
	Sort {
		keys: Vec<SortKey>,
	},
}

#[derive(Debug, Clone, PartialEq)]
pub struct SortKey {
	pub column: Fragment,
	pub direction: SortDirection,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SortDirection {
	Asc,
	Desc,
}

impl std::fmt::Display for SortDirection {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			SortDirection::Asc => f.write_str("asc"),
			SortDirection::Desc => f.write_str("desc"),
		}
	}
}
