// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

mod node;

pub use node::{QueryNode, SortDirection, SortKey};
use reifydb_type::{
	diagnostic::{ast, query},
	return_error,
};
use tracing::instrument;

use crate::{
	ast::{Ast, AstExtend, AstFilter, AstFrom, AstMap, AstSort, AstStatement, tokenize::Keyword},
	expression::{AliasExpression, Expression, IdentExpression, compile_expression},
};

/// The operators of one statement, applied in order.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryPlan {
	pub nodes: Vec<QueryNode>,
}

#[instrument(name = "rql::plan", level = "trace", skip(statements))]
pub fn plan(statements: Vec<AstStatement>) -> crate::Result<Vec<QueryPlan>> {
	let mut result = Vec::with_capacity(statements.len());
	for statement in statements {
		result.push(plan_statement(statement)?);
	}
	Ok(result)
}

fn plan_statement(statement: AstStatement) -> crate::Result<QueryPlan> {
	let mut nodes = Vec::with_capacity(statement.len());

	for (idx, node) in statement.into_iter().enumerate() {
		nodes.push(match node {
			Ast::From(from) => {
				if idx > 0 {
					return_error!(query::operator_without_input(from.token.fragment));
				}
				compile_from(from)?
			}
			Ast::Map(map) => compile_map(map)?,
			Ast::Extend(extend) => compile_extend(extend)?,
			Ast::Filter(filter) => compile_filter(filter)?,
			Ast::Take(take) => QueryNode::Take {
				take: take.take,
			},
			Ast::Sort(sort) => compile_sort(sort),
			node => return_error!(ast::unsupported_token_error(node.fragment())),
		});
	}

	Ok(QueryPlan {
		nodes,
	})
}

fn compile_projections(nodes: Vec<Ast>) -> crate::Result<Vec<Expression>> {
	let mut expressions = Vec::with_capacity(nodes.len());
	for node in nodes {
		expressions.push(compile_expression(node)?);
	}
	Ok(expressions)
}

fn compile_map(map: AstMap) -> crate::Result<QueryNode> {
	Ok(QueryNode::Map {
		expressions: compile_projections(map.nodes)?,
	})
}

fn compile_extend(extend: AstExtend) -> crate::Result<QueryNode> {
	Ok(QueryNode::Extend {
		expressions: compile_projections(extend.nodes)?,
	})
}

fn compile_filter(filter: AstFilter) -> crate::Result<QueryNode> {
	Ok(QueryNode::Filter {
		condition: compile_expression(*filter.node)?,
	})
}

fn compile_from(from: AstFrom) -> crate::Result<QueryNode> {
	let mut rows = Vec::with_capacity(from.rows.len());

	for row in from.rows {
		let mut columns = Vec::with_capacity(row.keyed_values.len());
		for keyed_value in row.keyed_values {
			let expression = compile_expression(*keyed_value.value)?;
			columns.push(AliasExpression {
				alias: IdentExpression(keyed_value.key.fragment()),
				fragment: expression.fragment(),
				expression: Box::new(expression),
			});
		}
		rows.push(columns);
	}

	Ok(QueryNode::InlineData {
		rows,
	})
}

fn compile_sort(sort: AstSort) -> QueryNode {
	let keys = sort
		.columns
		.into_iter()
		.zip(sort.directions)
		.map(|(column, direction)| SortKey {
			column: column.fragment(),
			direction: match direction {
				Some(token) if token.is_keyword(Keyword::Desc) => SortDirection::Desc,
				_ => SortDirection::Asc,
			},
		})
		.collect();

	QueryNode::Sort {
		keys,
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::ast::parse_str;

	fn plan_str(rql: &str) -> crate::Result<Vec<QueryPlan>> {
		plan(parse_str(rql)?)
	}

	#[test]
	fn test_plan_per_statement() {
		let plans = plan_str("map 1; map 2, 3").unwrap();
		assert_eq!(plans.len(), 2);
		let QueryNode::Map {
			expressions,
		} = &plans[1].nodes[0]
		else {
			panic!("expected map");
		};
		assert_eq!(expressions.len(), 2);
	}

	#[test]
	fn test_pipeline_order() {
		let plans = plan_str("from [{a: 1}] filter a > 0 extend {b: a} sort a desc take 2").unwrap();
		let nodes = &plans[0].nodes;
		assert_eq!(nodes.len(), 5);
		assert!(matches!(nodes[0], QueryNode::InlineData { .. }));
		assert!(matches!(nodes[1], QueryNode::Filter { .. }));
		assert!(matches!(nodes[2], QueryNode::Extend { .. }));
		assert!(matches!(&nodes[3], QueryNode::Sort { keys } if keys[0].direction == SortDirection::Desc));
		assert!(matches!(nodes[4], QueryNode::Take { take: 2 }));
	}

	#[test]
	fn test_from_must_be_first() {
		let err = plan_str("map 1 | from [{a: 1}]").unwrap_err();
		assert_eq!(err.code(), "QUERY_005");
	}

	#[test]
	fn test_inline_data_columns() {
		let plans = plan_str("from [{a: 1, b: 'x'}, {b: 'y'}]").unwrap();
		let QueryNode::InlineData {
			rows,
		} = &plans[0].nodes[0]
		else {
			panic!("expected inline data");
		};
		assert_eq!(rows.len(), 2);
		assert_eq!(rows[0][0].alias.name(), "a");
		assert_eq!(rows[0][1].alias.name(), "b");
		assert_eq!(rows[1][0].alias.name(), "b");
	}

	#[test]
	fn test_bare_expression_is_rejected() {
		let err = plan_str("1 + 2").unwrap_err();
		assert_eq!(err.code(), "AST_004");
	}

	#[test]
	fn test_sort_defaults_to_asc() {
		let plans = plan_str("sort a").unwrap();
		let QueryNode::Sort {
			keys,
		} = &plans[0].nodes[0]
		else {
			panic!("expected sort");
		};
		assert_eq!(keys[0].direction, SortDirection::Asc);
		assert_eq!(keys[0].column.text(), "a");
	}
}
