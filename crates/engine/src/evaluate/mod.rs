// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use reifydb_rql::expression::Expression;
use reifydb_type::Params;

use crate::{ArithmeticPolicy, columnar::{Column, Columns}};

mod alias;
mod arith;
mod column;
mod compare;
mod constant;
mod logic;
mod parameter;
mod prefix;

pub(crate) struct EvaluationContext<'a> {
	pub(crate) columns: &'a Columns,
	pub(crate) params: &'a Params,
	pub(crate) arithmetic: ArithmeticPolicy,
}

impl EvaluationContext<'_> {
	pub(crate) fn row_count(&self) -> usize {
		self.columns.row_count()
	}
}

/// Evaluates expressions column at a time: every call produces one value per input row.
pub(crate) struct Evaluator;

impl Evaluator {
	pub(crate) fn evaluate(&mut self, expr: &Expression, ctx: &EvaluationContext) -> crate::Result<Column> {
		match expr {
			Expression::Alias(expr) => self.alias(expr, ctx),
			Expression::Add(expr) => self.add(expr, ctx),
			Expression::And(expr) => self.and(expr, ctx),
			Expression::Column(expr) => self.column(expr, ctx),
			Expression::Constant(expr) => self.constant(expr, ctx),
			Expression::Div(expr) => self.div(expr, ctx),
			Expression::Equal(expr) => self.equal(expr, ctx),
			Expression::GreaterThan(expr) => self.greater_than(expr, ctx),
			Expression::GreaterThanEqual(expr) => self.greater_than_equal(expr, ctx),
			Expression::LessThan(expr) => self.less_than(expr, ctx),
			Expression::LessThanEqual(expr) => self.less_than_equal(expr, ctx),
			Expression::Mul(expr) => self.mul(expr, ctx),
			Expression::NotEqual(expr) => self.not_equal(expr, ctx),
			Expression::Or(expr) => self.or(expr, ctx),
			Expression::Parameter(expr) => self.parameter(expr, ctx),
			Expression::Prefix(expr) => self.prefix(expr, ctx),
			Expression::Rem(expr) => self.rem(expr, ctx),
			Expression::Sub(expr) => self.sub(expr, ctx),
			Expression::Xor(expr) => self.xor(expr, ctx),
		}
	}
}

pub(crate) fn evaluate(expr: &Expression, ctx: &EvaluationContext) -> crate::Result<Column> {
	Evaluator.evaluate(expr, ctx)
}

#[cfg(test)]
pub(crate) mod tests {
	use reifydb_rql::{
		ast::parse_str,
		expression::{Expression, compile_expression},
	};
	use reifydb_type::{Params, Type, Value};

	use super::*;

	/// Compiles the single expression of `map <rql>`.
	pub(crate) fn expression(rql: &str) -> Expression {
		let mut statements = parse_str(&format!("map {rql}")).unwrap();
		let map = statements.remove(0).nodes.remove(0);
		let mut nodes = map.as_map().nodes.clone();
		compile_expression(nodes.remove(0)).unwrap()
	}

	pub(crate) fn eval_with(
		rql: &str,
		columns: &Columns,
		params: &Params,
		arithmetic: ArithmeticPolicy,
	) -> crate::Result<Column> {
		let ctx = EvaluationContext {
			columns,
			params,
			arithmetic,
		};
		evaluate(&expression(rql), &ctx)
	}

	pub(crate) fn eval(rql: &str) -> crate::Result<Column> {
		eval_with(rql, &Columns::single_row(), &Params::None, ArithmeticPolicy::Error)
	}

	pub(crate) fn eval_one(rql: &str) -> Value {
		eval(rql).unwrap().data.remove(0)
	}

	#[test]
	fn test_column_is_named_after_source_text() {
		let column = eval("1 + 4").unwrap();
		assert_eq!(column.name, "1 + 4");
		assert_eq!(column.ty, Type::Int1);
		assert_eq!(column.data, vec![Value::Int1(5)]);
	}

	#[test]
	fn test_one_value_per_row() {
		let columns = Columns::new(vec![Column::new("a", Type::Int1, vec![Value::Int1(1), Value::Int1(2)])]);
		let column = eval_with("a * 10", &columns, &Params::None, ArithmeticPolicy::Error).unwrap();
		assert_eq!(column.data, vec![Value::Int1(10), Value::Int1(20)]);
	}
}
