// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use reifydb_rql::expression::Expression;
use reifydb_type::{Type, Value, diagnostic::query::filter_not_boolean, return_error};

use crate::{columnar::Columns, evaluate::evaluate, execute::Executor};

impl Executor<'_> {
	/// Keeps the rows where `condition` is `true`; `false` and Undefined both drop the row.
	pub(crate) fn filter(&mut self, input: Columns, condition: &Expression) -> crate::Result<Columns> {
		let predicate = evaluate(condition, &self.context(&input))?;
		if !matches!(predicate.ty, Type::Boolean | Type::Undefined) {
			return_error!(filter_not_boolean(condition.fragment(), predicate.ty));
		}

		let mask: Vec<bool> = predicate.data.iter().map(|v| matches!(v, Value::Boolean(true))).collect();
		Ok(input.filter(&mask))
	}
}
