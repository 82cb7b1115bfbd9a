// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use reifydb_type::{
	diagnostic::{ast, params},
	return_error,
};

use crate::{
	ast::{Ast, AstInfix, AstLiteral, AstParameter, AstPrefixOperator, InfixOperator},
	expression::{
		AddExpression, AliasExpression, AndExpression, ColumnExpression, ConstantExpression, DivExpression,
		EqualExpression, Expression, GreaterThanEqualExpression, GreaterThanExpression, IdentExpression,
		LessThanEqualExpression, LessThanExpression, MulExpression, NotEqualExpression, OrExpression,
		ParameterExpression, PrefixExpression, PrefixOperator, RemExpression, SubExpression, XorExpression,
	},
};

pub fn compile_expression(ast: Ast) -> crate::Result<Expression> {
	match ast {
		Ast::Literal(literal) => {
			let fragment = literal.token().fragment.clone();
			Ok(Expression::Constant(match literal {
				AstLiteral::Boolean(_) => ConstantExpression::Bool {
					fragment,
				},
				AstLiteral::Number(_) => ConstantExpression::Number {
					fragment,
				},
				AstLiteral::Text(_) => ConstantExpression::Text {
					fragment,
				},
				AstLiteral::Undefined(_) => ConstantExpression::Undefined {
					fragment,
				},
			}))
		}
		Ast::Identifier(identifier) => Ok(Expression::Column(ColumnExpression(identifier.fragment()))),
		Ast::Parameter(parameter) => compile_parameter(parameter),
		Ast::Infix(infix) => compile_infix(infix),
		Ast::Tuple(mut tuple) => {
			if tuple.nodes.len() != 1 {
				return_error!(ast::unsupported_token_error(tuple.fragment));
			}
			match tuple.nodes.pop() {
				Some(node) => compile_expression(node),
				None => return_error!(ast::unsupported_token_error(tuple.fragment)),
			}
		}
		Ast::Prefix(prefix) => {
			let operator = match prefix.operator {
				AstPrefixOperator::Plus(token) => PrefixOperator::Plus(token.fragment),
				AstPrefixOperator::Negate(token) => PrefixOperator::Minus(token.fragment),
				AstPrefixOperator::Not(token) => PrefixOperator::Not(token.fragment),
			};

			Ok(Expression::Prefix(PrefixExpression {
				operator,
				expression: Box::new(compile_expression(*prefix.node)?),
				fragment: prefix.fragment,
			}))
		}
		node => return_error!(ast::unsupported_token_error(node.fragment())),
	}
}

fn compile_parameter(parameter: AstParameter) -> crate::Result<Expression> {
	let fragment = parameter.0.fragment;
	let reference = fragment.text().trim_start_matches('$');

	if reference.starts_with(|c: char| c.is_ascii_digit()) {
		return match reference.parse::<usize>() {
			Ok(position) if position > 0 => Ok(Expression::Parameter(ParameterExpression::Positional {
				position,
				fragment,
			})),
			_ => return_error!(params::invalid_parameter_reference(fragment)),
		};
	}

	Ok(Expression::Parameter(ParameterExpression::Named {
		name: reference.to_string(),
		fragment,
	}))
}

macro_rules! binary {
	($variant:ident, $expr:ident, $infix:expr) => {{
		let left = compile_expression(*$infix.left)?;
		let right = compile_expression(*$infix.right)?;
		Ok(Expression::$variant($expr {
			left: Box::new(left),
			right: Box::new(right),
			fragment: $infix.fragment,
		}))
	}};
}

fn compile_infix(infix: AstInfix) -> crate::Result<Expression> {
	match infix.operator {
		InfixOperator::As(_) => {
			let alias = match *infix.right {
				Ast::Identifier(identifier) => IdentExpression(identifier.fragment()),
				node => return_error!(ast::expected_identifier_error(node.fragment())),
			};
			Ok(Expression::Alias(AliasExpression {
				alias,
				expression: Box::new(compile_expression(*infix.left)?),
				fragment: infix.fragment,
			}))
		}
		InfixOperator::Add(_) => binary!(Add, AddExpression, infix),
		InfixOperator::Subtract(_) => binary!(Sub, SubExpression, infix),
		InfixOperator::Multiply(_) => binary!(Mul, MulExpression, infix),
		InfixOperator::Divide(_) => binary!(Div, DivExpression, infix),
		InfixOperator::Rem(_) => binary!(Rem, RemExpression, infix),
		InfixOperator::Equal(_) => binary!(Equal, EqualExpression, infix),
		InfixOperator::NotEqual(_) => binary!(NotEqual, NotEqualExpression, infix),
		InfixOperator::LessThan(_) => binary!(LessThan, LessThanExpression, infix),
		InfixOperator::LessThanEqual(_) => binary!(LessThanEqual, LessThanEqualExpression, infix),
		InfixOperator::GreaterThan(_) => binary!(GreaterThan, GreaterThanExpression, infix),
		InfixOperator::GreaterThanEqual(_) => binary!(GreaterThanEqual, GreaterThanEqualExpression, infix),
		InfixOperator::And(_) => binary!(And, AndExpression, infix),
		InfixOperator::Or(_) => binary!(Or, OrExpression, infix),
		InfixOperator::Xor(_) => binary!(Xor, XorExpression, infix),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::ast::parse_str;

	fn compile(rql: &str) -> crate::Result<Expression> {
		let mut statements = parse_str(rql)?;
		let Ast::Map(map) = statements.remove(0).nodes.remove(0) else {
			panic!("expected map");
		};
		compile_expression(map.nodes.into_iter().next().unwrap())
	}

	#[test]
	fn test_constant() {
		let expr = compile("map 42").unwrap();
		assert!(matches!(expr, Expression::Constant(ConstantExpression::Number { .. })));
		assert_eq!(expr.column_name(), "42");
	}

	#[test]
	fn test_binary_keeps_source_text() {
		let expr = compile("map 1  +  4").unwrap();
		assert!(matches!(expr, Expression::Add(_)));
		assert_eq!(expr.column_name(), "1  +  4");
		assert_eq!(expr.to_string(), "(1 + 4)");
	}

	#[test]
	fn test_alias() {
		let expr = compile("map a * 2 as double").unwrap();
		let Expression::Alias(alias) = &expr else {
			panic!("expected alias");
		};
		assert_eq!(alias.alias.name(), "double");
		assert!(matches!(*alias.expression, Expression::Mul(_)));
		assert_eq!(expr.column_name(), "double");
	}

	#[test]
	fn test_parenthesized() {
		let expr = compile("map (1 + 2) * 3").unwrap();
		let Expression::Mul(mul) = expr else {
			panic!("expected mul");
		};
		assert!(matches!(*mul.left, Expression::Add(_)));
	}

	#[test]
	fn test_multi_element_tuple_is_rejected() {
		let err = compile("map (1, 2)").unwrap_err();
		assert_eq!(err.code(), "AST_004");
	}

	#[test]
	fn test_positional_parameter() {
		let expr = compile("map $2").unwrap();
		assert!(matches!(
			expr,
			Expression::Parameter(ParameterExpression::Positional {
				position: 2,
				..
			})
		));
	}

	#[test]
	fn test_named_parameter() {
		let expr = compile("map $name").unwrap();
		let Expression::Parameter(ParameterExpression::Named {
			name,
			..
		}) = expr
		else {
			panic!("expected named parameter");
		};
		assert_eq!(name, "name");
	}

	#[test]
	fn test_parameter_zero() {
		let err = compile("map $0").unwrap_err();
		assert_eq!(err.code(), "PARAMS_002");
	}

	#[test]
	fn test_not() {
		let expr = compile("map not true").unwrap();
		assert_eq!(expr.to_string(), "(not true)");
	}
}
