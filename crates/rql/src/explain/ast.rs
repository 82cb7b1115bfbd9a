// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use reifydb_type::Fragment;

use crate::{
	ast::{Ast, AstInline, AstLiteral, parse_str},
	explain::{branch, child_prefix},
};

pub fn explain_ast(query: &str) -> crate::Result<String> {
	let statements = parse_str(query)?;

	let mut result = String::new();
	for statement in &statements {
		let len = statement.nodes.len();
		for (i, ast) in statement.nodes.iter().enumerate() {
			render_ast_tree_inner(ast, "", i == len - 1, &mut result);
		}
	}
	Ok(result)
}

fn render_line(output: &mut String, prefix: &str, is_last: bool, description: &str, fragment: &Fragment) {
	output.push_str(&format!(
		"{}{} {} @ line {}, column {} - \"{}\"\n",
		prefix,
		branch(is_last),
		description,
		fragment.line,
		fragment.column,
		fragment.text().escape_debug()
	));
}

fn render_ast_tree_inner(ast: &Ast, prefix: &str, is_last: bool, output: &mut String) {
	let description = match ast {
		Ast::Extend(_) => "Extend".to_string(),
		Ast::Filter(_) => "Filter".to_string(),
		Ast::From(from) => format!("From ({} rows)", from.rows.len()),
		Ast::Identifier(_) => "Identifier".to_string(),
		Ast::Infix(infix) => format!("Infix ({})", infix.operator.name()),
		Ast::Literal(literal) => match literal {
			AstLiteral::Boolean(_) => "Literal (Boolean)".to_string(),
			AstLiteral::Number(_) => "Literal (Number)".to_string(),
			AstLiteral::Text(_) => "Literal (Text)".to_string(),
			AstLiteral::Undefined(_) => "Literal (Undefined)".to_string(),
		},
		Ast::Map(_) => "Map".to_string(),
		Ast::Parameter(_) => "Parameter".to_string(),
		Ast::Prefix(prefix) => format!("Prefix ({})", prefix.operator.name()),
		Ast::Sort(sort) => {
			let keys: Vec<String> = sort
				.columns
				.iter()
				.zip(sort.directions.iter())
				.map(|(column, direction)| match direction {
					Some(direction) => format!("{} {}", column.name(), direction.value().to_lowercase()),
					None => column.name().to_string(),
				})
				.collect();
			format!("Sort ({})", keys.join(", "))
		}
		Ast::Take(take) => format!("Take {}", take.take),
		Ast::Tuple(_) => "Tuple".to_string(),
	};

	let fragment = match ast {
		Ast::Infix(infix) => &infix.operator.token().fragment,
		Ast::Prefix(prefix) => &prefix.operator.token().fragment,
		ast => &ast.token().fragment,
	};

	render_line(output, prefix, is_last, &description, fragment);

	let child_prefix = child_prefix(prefix, is_last);

	let children: Vec<&Ast> = match ast {
		Ast::Extend(extend) => extend.nodes.iter().collect(),
		Ast::Filter(filter) => vec![&*filter.node],
		Ast::Infix(infix) => vec![&*infix.left, &*infix.right],
		Ast::Map(map) => map.nodes.iter().collect(),
		Ast::Prefix(prefix) => vec![&*prefix.node],
		Ast::Tuple(tuple) => tuple.nodes.iter().collect(),
		Ast::From(from) => {
			let len = from.rows.len();
			for (i, row) in from.rows.iter().enumerate() {
				render_inline(row, &child_prefix, i == len - 1, output);
			}
			vec![]
		}
		_ => vec![],
	};

	let len = children.len();
	for (i, child) in children.into_iter().enumerate() {
		render_ast_tree_inner(child, &child_prefix, i == len - 1, output);
	}
}

fn render_inline(row: &AstInline, prefix: &str, is_last: bool, output: &mut String) {
	let names: Vec<&str> = row.keyed_values.iter().map(|kv| kv.key.name()).collect();
	let description = format!("Row ({} fields: {})", names.len(), names.join(", "));
	render_line(output, prefix, is_last, &description, &row.token.fragment);

	let child_prefix = child_prefix(prefix, is_last);
	let len = row.keyed_values.len();
	for (i, keyed_value) in row.keyed_values.iter().enumerate() {
		render_ast_tree_inner(&keyed_value.value, &child_prefix, i == len - 1, output);
	}
}
