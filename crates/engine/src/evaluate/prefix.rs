// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use reifydb_rql::expression::{PrefixExpression, PrefixOperator};
use reifydb_type::{
	Type, Value,
	diagnostic::{number::arithmetic_overflow, query::prefix_type_mismatch},
	number, return_error,
};

use crate::{
	ArithmeticPolicy,
	columnar::Column,
	evaluate::{EvaluationContext, Evaluator, logic::is_logical},
};

impl Evaluator {
	pub(crate) fn prefix(&mut self, expr: &PrefixExpression, ctx: &EvaluationContext) -> crate::Result<Column> {
		let column = self.evaluate(&expr.expression, ctx)?;
		let name = expr.fragment.text();

		match &expr.operator {
			PrefixOperator::Plus(_) => {
				if column.ty != Type::Undefined && !column.ty.is_number() {
					return_error!(prefix_type_mismatch(expr.fragment.clone(), "+", column.ty));
				}
				Ok(column.with_name(name))
			}
			PrefixOperator::Minus(_) => {
				if column.ty == Type::Undefined {
					return Ok(column.with_name(name));
				}
				if !column.ty.is_number() {
					return_error!(prefix_type_mismatch(expr.fragment.clone(), "-", column.ty));
				}

				let ty = if column.ty.is_unsigned_integer() {
					Type::promote(Type::Int1, column.ty)
				} else {
					column.ty
				};

				let mut data = Vec::with_capacity(column.len());
				for value in &column.data {
					if value.is_undefined() {
						data.push(Value::Undefined);
						continue;
					}

					match number::negate(value) {
						Some(negated) => data.push(negated),
						None => match ctx.arithmetic {
							ArithmeticPolicy::Error => {
								return_error!(arithmetic_overflow(expr.fragment.clone(), ty))
							}
							ArithmeticPolicy::Undefined => data.push(Value::Undefined),
						},
					}
				}

				Ok(Column::new(name, ty, data))
			}
			PrefixOperator::Not(_) => {
				if !is_logical(column.ty) {
					return_error!(prefix_type_mismatch(expr.fragment.clone(), "not", column.ty));
				}

				let data = column
					.data
					.iter()
					.map(|v| v.as_bool().map_or(Value::Undefined, |b| Value::Boolean(!b)))
					.collect();
				Ok(Column::new(name, Type::Boolean, data))
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use reifydb_type::{Params, Type, Value};

	use crate::{
		ArithmeticPolicy,
		columnar::{Column, Columns},
		evaluate::tests::{eval, eval_one, eval_with},
	};

	#[test]
	fn test_negate_expression() {
		assert_eq!(eval_one("-(1 + 2)"), Value::Int1(-3));
		assert_eq!(eval_one("+5"), Value::Int1(5));
	}

	#[test]
	fn test_negate_column() {
		let columns = Columns::new(vec![Column::new("a", Type::Int1, vec![Value::Int1(4), Value::Undefined])]);
		let column = eval_with("-a", &columns, &Params::None, ArithmeticPolicy::Error).unwrap();
		assert_eq!(column.data, vec![Value::Int1(-4), Value::Undefined]);
	}

	#[test]
	fn test_negate_overflow() {
		let columns = Columns::new(vec![Column::new("a", Type::Int1, vec![Value::Int1(-128)])]);
		let err = eval_with("-a", &columns, &Params::None, ArithmeticPolicy::Error).unwrap_err();
		assert_eq!(err.code(), "NUMBER_002");

		let column = eval_with("-a", &columns, &Params::None, ArithmeticPolicy::Undefined).unwrap();
		assert_eq!(column.data, vec![Value::Undefined]);
	}

	#[test]
	fn test_negate_unsigned_widens() {
		let columns = Columns::new(vec![Column::new("a", Type::Uint1, vec![Value::Uint1(200)])]);
		let column = eval_with("-a", &columns, &Params::None, ArithmeticPolicy::Error).unwrap();
		assert_eq!(column.ty, Type::Int2);
		assert_eq!(column.data, vec![Value::Int2(-200)]);
	}

	#[test]
	fn test_not() {
		assert_eq!(eval_one("not true"), Value::Boolean(false));
		assert_eq!(eval_one("not (1 > 2)"), Value::Boolean(true));
		assert_eq!(eval_one("not undefined"), Value::Undefined);
	}

	#[test]
	fn test_mismatch() {
		assert_eq!(eval("-'a'").unwrap_err().code(), "QUERY_002");
		assert_eq!(eval("not 1").unwrap_err().code(), "QUERY_002");
	}
}
