// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use reifydb_rql::expression::ParameterExpression;
use reifydb_type::{diagnostic::params::parameter_not_found, return_error};

use crate::{
	columnar::Column,
	evaluate::{EvaluationContext, Evaluator},
};

impl Evaluator {
	pub(crate) fn parameter(&mut self, expr: &ParameterExpression, ctx: &EvaluationContext) -> crate::Result<Column> {
		let value = match expr {
			ParameterExpression::Positional {
				position,
				..
			} => ctx.params.get_positional(*position),
			ParameterExpression::Named {
				name,
				..
			} => ctx.params.get_named(name),
		};

		let fragment = expr.fragment();
		let Some(value) = value else {
			return_error!(parameter_not_found(fragment));
		};

		Ok(Column::broadcast(fragment.text(), value.clone(), ctx.row_count()))
	}
}

#[cfg(test)]
mod tests {
	use reifydb_type::{Params, Value};

	use crate::{
		ArithmeticPolicy,
		columnar::Columns,
		evaluate::tests::eval_with,
	};

	fn eval_params(rql: &str, params: Params) -> crate::Result<Value> {
		let mut column = eval_with(rql, &Columns::single_row(), &params, ArithmeticPolicy::Error)?;
		Ok(column.data.remove(0))
	}

	#[test]
	fn test_positional() {
		assert_eq!(eval_params("$1 + $2", reifydb_type::params![1i8, 2i8]).unwrap(), Value::Int1(3));
	}

	#[test]
	fn test_named() {
		assert_eq!(eval_params("$name", reifydb_type::params! { name: "reifydb" }).unwrap(), Value::utf8("reifydb"));
	}

	#[test]
	fn test_missing() {
		let err = eval_params("$3", reifydb_type::params![1i8]).unwrap_err();
		assert_eq!(err.code(), "PARAMS_001");
		let err = eval_params("$name", Params::None).unwrap_err();
		assert_eq!(err.code(), "PARAMS_001");
	}
}
