// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use reifydb_core::Frame;
use reifydb_rql::plan::{QueryNode, QueryPlan};
use reifydb_type::Params;
use tracing::{instrument, trace};

use crate::{
	ArithmeticPolicy,
	columnar::Columns,
	evaluate::EvaluationContext,
	transaction::Transaction,
};

mod filter;
mod inline;
mod map;
mod sort;
mod take;

/// Runs query plans one operator after another, each consuming the columns of the previous one.
pub(crate) struct Executor<'a> {
	params: &'a Params,
	arithmetic: ArithmeticPolicy,
}

impl<'a> Executor<'a> {
	pub(crate) fn new(params: &'a Params, arithmetic: ArithmeticPolicy) -> Self {
		Self {
			params,
			arithmetic,
		}
	}

	#[instrument(name = "engine::execute", level = "trace", skip_all, fields(version = txn.version()))]
	pub(crate) fn execute(&mut self, txn: &impl Transaction, plan: QueryPlan) -> crate::Result<Frame> {
		txn.check_active()?;

		let mut columns = Columns::single_row();
		for node in plan.nodes {
			columns = match node {
				QueryNode::InlineData {
					rows,
				} => self.inline_data(rows)?,
				QueryNode::Map {
					expressions,
				} => self.map(columns, &expressions)?,
				QueryNode::Extend {
					expressions,
				} => self.extend(columns, &expressions)?,
				QueryNode::Filter {
					condition,
				} => self.filter(columns, &condition)?,
				QueryNode::Take {
					take,
				} => self.take(columns, take),
				QueryNode::Sort {
					keys,
				} => self.sort(columns, &keys)?,
			};
			trace!(rows = columns.row_count(), columns = columns.columns.len(), "operator done");
		}

		Ok(columns.into_frame())
	}

	fn context<'c>(&'c self, columns: &'c Columns) -> EvaluationContext<'c> {
		EvaluationContext {
			columns,
			params: self.params,
			arithmetic: self.arithmetic,
		}
	}
}
