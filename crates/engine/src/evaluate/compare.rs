// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use std::cmp::Ordering;

use reifydb_rql::expression::{
	EqualExpression, Expression, GreaterThanEqualExpression, GreaterThanExpression, LessThanEqualExpression,
	LessThanExpression, NotEqualExpression,
};
use reifydb_type::{Fragment, Type, Value, diagnostic::query::operator_type_mismatch, number, return_error};

use crate::{
	columnar::Column,
	evaluate::{EvaluationContext, Evaluator},
};

impl Evaluator {
	pub(crate) fn equal(&mut self, expr: &EqualExpression, ctx: &EvaluationContext) -> crate::Result<Column> {
		self.compare(EqualExpression::SYMBOL, Ordering::is_eq, &expr.left, &expr.right, &expr.fragment, ctx)
	}

	pub(crate) fn not_equal(&mut self, expr: &NotEqualExpression, ctx: &EvaluationContext) -> crate::Result<Column> {
		self.compare(NotEqualExpression::SYMBOL, Ordering::is_ne, &expr.left, &expr.right, &expr.fragment, ctx)
	}

	pub(crate) fn less_than(&mut self, expr: &LessThanExpression, ctx: &EvaluationContext) -> crate::Result<Column> {
		self.compare(LessThanExpression::SYMBOL, Ordering::is_lt, &expr.left, &expr.right, &expr.fragment, ctx)
	}

	pub(crate) fn less_than_equal(
		&mut self,
		expr: &LessThanEqualExpression,
		ctx: &EvaluationContext,
	) -> crate::Result<Column> {
		self.compare(LessThanEqualExpression::SYMBOL, Ordering::is_le, &expr.left, &expr.right, &expr.fragment, ctx)
	}

	pub(crate) fn greater_than(
		&mut self,
		expr: &GreaterThanExpression,
		ctx: &EvaluationContext,
	) -> crate::Result<Column> {
		self.compare(GreaterThanExpression::SYMBOL, Ordering::is_gt, &expr.left, &expr.right, &expr.fragment, ctx)
	}

	pub(crate) fn greater_than_equal(
		&mut self,
		expr: &GreaterThanEqualExpression,
		ctx: &EvaluationContext,
	) -> crate::Result<Column> {
		self.compare(
			GreaterThanEqualExpression::SYMBOL,
			Ordering::is_ge,
			&expr.left,
			&expr.right,
			&expr.fragment,
			ctx,
		)
	}

	fn compare(
		&mut self,
		symbol: &str,
		holds: fn(Ordering) -> bool,
		left: &Expression,
		right: &Expression,
		fragment: &Fragment,
		ctx: &EvaluationContext,
	) -> crate::Result<Column> {
		let l = self.evaluate(left, ctx)?;
		let r = self.evaluate(right, ctx)?;

		if !comparable(l.ty, r.ty) {
			return_error!(operator_type_mismatch(fragment.clone(), symbol, l.ty, r.ty));
		}

		let data = l
			.data
			.iter()
			.zip(&r.data)
			.map(|(lv, rv)| match number::compare(lv, rv) {
				Some(ordering) => Value::Boolean(holds(ordering)),
				None => Value::Undefined,
			})
			.collect();

		Ok(Column::new(fragment.text(), Type::Boolean, data))
	}
}

fn comparable(l: Type, r: Type) -> bool {
	match (l, r) {
		(Type::Undefined, _) | (_, Type::Undefined) => true,
		(l, r) if l.is_number() && r.is_number() => true,
		(l, r) => l == r,
	}
}
