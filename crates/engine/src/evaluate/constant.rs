// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use reifydb_rql::expression::ConstantExpression;
use reifydb_type::{Value, diagnostic::number::literal_out_of_range, number::parse_number_literal, return_error};

use crate::{
	columnar::Column,
	evaluate::{EvaluationContext, Evaluator},
};

impl Evaluator {
	pub(crate) fn constant(&mut self, expr: &ConstantExpression, ctx: &EvaluationContext) -> crate::Result<Column> {
		let fragment = expr.fragment();
		let value = constant_value(expr)?;
		Ok(Column::broadcast(fragment.text(), value, ctx.row_count()))
	}
}

fn constant_value(expr: &ConstantExpression) -> crate::Result<Value> {
	Ok(match expr {
		ConstantExpression::Undefined {
			..
		} => Value::Undefined,
		ConstantExpression::Bool {
			fragment,
		} => Value::Boolean(fragment.text().eq_ignore_ascii_case("true")),
		ConstantExpression::Number {
			fragment,
		} => match parse_number_literal(fragment.text()) {
			Some(value) => value,
			None => return_error!(literal_out_of_range(fragment.clone())),
		},
		ConstantExpression::Text {
			fragment,
		} => Value::utf8(fragment.text()),
	})
}

#[cfg(test)]
mod tests {
	use reifydb_type::{Type, Value};

	use crate::evaluate::tests::{eval, eval_one};

	#[test]
	fn test_smallest_integer_type() {
		assert_eq!(eval_one("1"), Value::Int1(1));
		assert_eq!(eval_one("300"), Value::Int2(300));
		assert_eq!(eval_one("1_000_000"), Value::Int4(1_000_000));
	}

	#[test]
	fn test_negative_literal_fits_int1() {
		assert_eq!(eval_one("-128"), Value::Int1(-128));
	}

	#[test]
	fn test_float() {
		assert_eq!(eval_one("1.5"), Value::float8(1.5));
		assert_eq!(eval("1e3").unwrap().ty, Type::Float8);
	}

	#[test]
	fn test_text_bool_undefined() {
		assert_eq!(eval_one("'reifydb'"), Value::utf8("reifydb"));
		assert_eq!(eval_one("true"), Value::Boolean(true));
		assert_eq!(eval_one("false"), Value::Boolean(false));
		assert_eq!(eval_one("undefined"), Value::Undefined);
	}

	#[test]
	fn test_out_of_range() {
		let err = eval("999999999999999999999999999999999999999999").unwrap_err();
		assert_eq!(err.code(), "NUMBER_001");
	}
}
