// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use reifydb_rql::expression::{AddExpression, DivExpression, Expression, MulExpression, RemExpression, SubExpression};
use reifydb_type::{
	Fragment, Type, Value,
	diagnostic::{
		number::{arithmetic_overflow, division_by_zero},
		query::operator_type_mismatch,
	},
	number, return_error,
};

use crate::{
	ArithmeticPolicy,
	columnar::Column,
	evaluate::{EvaluationContext, Evaluator},
};

#[derive(Debug, Clone, Copy, PartialEq)]
enum Arith {
	Add,
	Sub,
	Mul,
	Div,
	Rem,
}

impl Arith {
	fn apply(self, l: &Value, r: &Value, target: Type) -> Option<Value> {
		match self {
			Arith::Add => number::add(l, r, target),
			Arith::Sub => number::sub(l, r, target),
			Arith::Mul => number::mul(l, r, target),
			Arith::Div => number::div(l, r, target),
			Arith::Rem => number::rem(l, r, target),
		}
	}

	fn symbol(self) -> &'static str {
		match self {
			Arith::Add => AddExpression::SYMBOL,
			Arith::Sub => SubExpression::SYMBOL,
			Arith::Mul => MulExpression::SYMBOL,
			Arith::Div => DivExpression::SYMBOL,
			Arith::Rem => RemExpression::SYMBOL,
		}
	}
}

impl Evaluator {
	pub(crate) fn add(&mut self, expr: &AddExpression, ctx: &EvaluationContext) -> crate::Result<Column> {
		self.arith(Arith::Add, &expr.left, &expr.right, &expr.fragment, ctx)
	}

	pub(crate) fn sub(&mut self, expr: &SubExpression, ctx: &EvaluationContext) -> crate::Result<Column> {
		self.arith(Arith::Sub, &expr.left, &expr.right, &expr.fragment, ctx)
	}

	pub(crate) fn mul(&mut self, expr: &MulExpression, ctx: &EvaluationContext) -> crate::Result<Column> {
		self.arith(Arith::Mul, &expr.left, &expr.right, &expr.fragment, ctx)
	}

	pub(crate) fn div(&mut self, expr: &DivExpression, ctx: &EvaluationContext) -> crate::Result<Column> {
		self.arith(Arith::Div, &expr.left, &expr.right, &expr.fragment, ctx)
	}

	pub(crate) fn rem(&mut self, expr: &RemExpression, ctx: &EvaluationContext) -> crate::Result<Column> {
		self.arith(Arith::Rem, &expr.left, &expr.right, &expr.fragment, ctx)
	}

	fn arith(
		&mut self,
		op: Arith,
		left: &Expression,
		right: &Expression,
		fragment: &Fragment,
		ctx: &EvaluationContext,
	) -> crate::Result<Column> {
		let l = self.evaluate(left, ctx)?;
		let r = self.evaluate(right, ctx)?;
		let name = fragment.text();

		match (l.ty, r.ty) {
			(Type::Undefined, _) | (_, Type::Undefined) => Ok(Column::undefined(name, l.len())),
			(Type::Utf8, Type::Utf8) if op == Arith::Add => Ok(concat(name, &l, &r)),
			(lt, rt) if lt.is_number() && rt.is_number() => {
				let target = Type::promote(lt, rt);
				let mut data = Vec::with_capacity(l.len());

				for (lv, rv) in l.data.iter().zip(&r.data) {
					if lv.is_undefined() || rv.is_undefined() {
						data.push(Value::Undefined);
						continue;
					}

					match op.apply(lv, rv, target) {
						Some(value) => data.push(value),
						None => match ctx.arithmetic {
							ArithmeticPolicy::Error => {
								if matches!(op, Arith::Div | Arith::Rem) && number::is_zero(rv) {
									return_error!(division_by_zero(fragment.clone()));
								}
								return_error!(arithmetic_overflow(fragment.clone(), target));
							}
							ArithmeticPolicy::Undefined => data.push(Value::Undefined),
						},
					}
				}

				Ok(Column::new(name, target, data))
			}
			(lt, rt) => return_error!(operator_type_mismatch(fragment.clone(), op.symbol(), lt, rt)),
		}
	}
}

fn concat(name: &str, l: &Column, r: &Column) -> Column {
	let data = l
		.data
		.iter()
		.zip(&r.data)
		.map(|(lv, rv)| match (lv.as_str(), rv.as_str()) {
			(Some(lv), Some(rv)) => Value::utf8(format!("{lv}{rv}")),
			_ => Value::Undefined,
		})
		.collect();
	Column::new(name, Type::Utf8, data)
}
