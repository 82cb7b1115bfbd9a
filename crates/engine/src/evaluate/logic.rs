// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use reifydb_rql::expression::{AndExpression, Expression, OrExpression, XorExpression};
use reifydb_type::{Fragment, Type, Value, diagnostic::query::operator_type_mismatch, return_error};

use crate::{
	columnar::Column,
	evaluate::{EvaluationContext, Evaluator},
};

// Three-valued logic: Undefined is "unknown".
fn and(l: Option<bool>, r: Option<bool>) -> Option<bool> {
	match (l, r) {
		(Some(false), _) | (_, Some(false)) => Some(false),
		(Some(true), Some(true)) => Some(true),
		_ => None,
	}
}

fn or(l: Option<bool>, r: Option<bool>) -> Option<bool> {
	match (l, r) {
		(Some(true), _) | (_, Some(true)) => Some(true),
		(Some(false), Some(false)) => Some(false),
		_ => None,
	}
}

fn xor(l: Option<bool>, r: Option<bool>) -> Option<bool> {
	Some(l? != r?)
}

impl Evaluator {
	pub(crate) fn and(&mut self, expr: &AndExpression, ctx: &EvaluationContext) -> crate::Result<Column> {
		self.logic(AndExpression::SYMBOL, and, &expr.left, &expr.right, &expr.fragment, ctx)
	}

	pub(crate) fn or(&mut self, expr: &OrExpression, ctx: &EvaluationContext) -> crate::Result<Column> {
		self.logic(OrExpression::SYMBOL, or, &expr.left, &expr.right, &expr.fragment, ctx)
	}

	pub(crate) fn xor(&mut self, expr: &XorExpression, ctx: &EvaluationContext) -> crate::Result<Column> {
		self.logic(XorExpression::SYMBOL, xor, &expr.left, &expr.right, &expr.fragment, ctx)
	}

	fn logic(
		&mut self,
		symbol: &str,
		op: fn(Option<bool>, Option<bool>) -> Option<bool>,
		left: &Expression,
		right: &Expression,
		fragment: &Fragment,
		ctx: &EvaluationContext,
	) -> crate::Result<Column> {
		let l = self.evaluate(left, ctx)?;
		let r = self.evaluate(right, ctx)?;

		if !is_logical(l.ty) || !is_logical(r.ty) {
			return_error!(operator_type_mismatch(fragment.clone(), symbol, l.ty, r.ty));
		}

		let data = l
			.data
			.iter()
			.zip(&r.data)
			.map(|(lv, rv)| op(lv.as_bool(), rv.as_bool()).map_or(Value::Undefined, Value::Boolean))
			.collect();

		Ok(Column::new(fragment.text(), Type::Boolean, data))
	}
}

pub(crate) fn is_logical(ty: Type) -> bool {
	matches!(ty, Type::Boolean | Type::Undefined)
}
