// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use reifydb_rql::expression::ColumnExpression;
use reifydb_type::{diagnostic::query::column_not_found, err};

use crate::{
	columnar::Column,
	evaluate::{EvaluationContext, Evaluator},
};

impl Evaluator {
	pub(crate) fn column(&mut self, expr: &ColumnExpression, ctx: &EvaluationContext) -> crate::Result<Column> {
		match ctx.columns.column(expr.name()) {
			Some(column) => Ok(column.clone()),
			None => err!(column_not_found(expr.0.clone())),
		}
	}
}

#[cfg(test)]
mod tests {
	use reifydb_type::{Params, Type, Value};

	use crate::{
		ArithmeticPolicy,
		columnar::{Column, Columns},
		evaluate::tests::{eval, eval_with},
	};

	#[test]
	fn test_column() {
		let columns = Columns::new(vec![Column::new("age", Type::Int1, vec![Value::Int1(30)])]);
		let column = eval_with("age", &columns, &Params::None, ArithmeticPolicy::Error).unwrap();
		assert_eq!(column.name, "age");
		assert_eq!(column.data, vec![Value::Int1(30)]);
	}

	#[test]
	fn test_column_not_found() {
		let err = eval("age").unwrap_err();
		assert_eq!(err.code(), "QUERY_001");
		assert_eq!(err.0.fragment.unwrap().text(), "age");
	}
}
