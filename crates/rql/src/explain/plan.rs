// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use crate::{
	ast::parse_str,
	explain::{branch, child_prefix},
	plan::{QueryNode, QueryPlan, plan},
};

pub fn explain_plan(query: &str) -> crate::Result<String> {
	let plans = plan(parse_str(query)?)?;

	let mut result = String::new();
	for query_plan in &plans {
		render_plan(query_plan, &mut result);
	}
	Ok(result)
}

fn render_plan(plan: &QueryPlan, output: &mut String) {
	let len = plan.nodes.len();
	for (i, node) in plan.nodes.iter().enumerate() {
		render_node(node, "", i == len - 1, output);
	}
}

fn render_list(items: Vec<String>, prefix: &str, output: &mut String) {
	let len = items.len();
	for (i, item) in items.into_iter().enumerate() {
		output.push_str(&format!("{}{} {}\n", prefix, branch(i == len - 1), item));
	}
}

fn render_node(node: &QueryNode, prefix: &str, is_last: bool, output: &mut String) {
	let branch = branch(is_last);
	let child_prefix = child_prefix(prefix, is_last);

	match node {
		QueryNode::InlineData {
			rows,
		} => {
			let mut names: Vec<&str> = Vec::new();
			for row in rows {
				for column in row {
					if !names.contains(&column.alias.name()) {
						names.push(column.alias.name());
					}
				}
			}
			output.push_str(&format!("{}{} InlineData\n", prefix, branch));
			render_list(
				vec![format!("columns: [{}]", names.join(", ")), format!("rows: {}", rows.len())],
				&child_prefix,
				output,
			);
		}
		QueryNode::Map {
			expressions,
		} => {
			output.push_str(&format!("{}{} Map\n", prefix, branch));
			render_list(expressions.iter().map(|e| e.to_string()).collect(), &child_prefix, output);
		}
		QueryNode::Extend {
			expressions,
		} => {
			output.push_str(&format!("{}{} Extend\n", prefix, branch));
			render_list(expressions.iter().map(|e| e.to_string()).collect(), &child_prefix, output);
		}
		QueryNode::Filter {
			condition,
		} => {
			output.push_str(&format!("{}{} Filter\n", prefix, branch));
			render_list(vec![format!("condition: {}", condition)], &child_prefix, output);
		}
		QueryNode::Take {
			take,
		} => {
			output.push_str(&format!("{}{} Take {}\n", prefix, branch, take));
		}
		QueryNode::Sort {
			keys,
		} => {
			output.push_str(&format!("{}{} Sort\n", prefix, branch));
			render_list(
				keys.iter().map(|key| format!("by: {} {}", key.column.text(), key.direction)).collect(),
				&child_prefix,
				output,
			);
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_explain_plan() {
		let result =
			explain_plan("from [{a: 1, b: 2}, {c: 3}] filter a > 1 map a + 1, b as c sort c desc take 5").unwrap();
		let expected = "\
├── InlineData
│   ├── columns: [a, b, c]
│   └── rows: 2
├── Filter
│   └── condition: (a > 1)
├── Map
│   ├── (a + 1)
│   └── b as c
├── Sort
│   └── by: c desc
└── Take 5
";
		assert_eq!(result, expected);
	}

	#[test]
	fn test_explain_plan_error() {
		let err = explain_plan("take 1 | from []").unwrap_err();
		assert_eq!(err.code(), "QUERY_005");
	}
}
