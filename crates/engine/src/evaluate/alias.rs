// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use reifydb_rql::expression::AliasExpression;

use crate::{
	columnar::Column,
	evaluate::{EvaluationContext, Evaluator},
};

impl Evaluator {
	pub(crate) fn alias(&mut self, expr: &AliasExpression, ctx: &EvaluationContext) -> crate::Result<Column> {
		let column = self.evaluate(&expr.expression, ctx)?;
		Ok(column.with_name(expr.alias.name()))
	}
}
