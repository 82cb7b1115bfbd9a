// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use reifydb_type::{diagnostic::ast, return_error};

use crate::ast::{
	Ast, AstInfix, InfixOperator,
	parse::{Parser, Precedence},
	tokenize::{Operator, TokenKind},
};

impl Parser<'_> {
	pub(crate) fn parse_infix(&mut self, left: Ast) -> crate::Result<AstInfix> {
		let precedence = self.current_precedence()?;
		let operator = self.parse_infix_operator()?;

		let right = if let InfixOperator::As(_) = operator {
			Ast::Identifier(self.parse_identifier()?)
		} else {
			self.parse_node(precedence)?
		};

		let fragment = left.fragment().merge(&right.fragment(), self.source);

		Ok(AstInfix {
			token: left.token().clone(),
			left: Box::new(left),
			operator,
			right: Box::new(right),
			fragment,
		})
	}

	fn parse_infix_operator(&mut self) -> crate::Result<InfixOperator> {
		let token = self.advance()?;

		let operator = match &token.kind {
			TokenKind::Operator(operator) => *operator,
			_ => return_error!(ast::unsupported_token_error(token.fragment)),
		};

		Ok(match operator {
			Operator::Plus => InfixOperator::Add(token),
			Operator::Minus => InfixOperator::Subtract(token),
			Operator::Asterisk => InfixOperator::Multiply(token),
			Operator::Slash => InfixOperator::Divide(token),
			Operator::Percent => InfixOperator::Rem(token),
			Operator::DoubleEqual => InfixOperator::Equal(token),
			Operator::BangEqual => InfixOperator::NotEqual(token),
			Operator::LeftAngle => InfixOperator::LessThan(token),
			Operator::LeftAngleEqual => InfixOperator::LessThanEqual(token),
			Operator::RightAngle => InfixOperator::GreaterThan(token),
			Operator::RightAngleEqual => InfixOperator::GreaterThanEqual(token),
			Operator::And => InfixOperator::And(token),
			Operator::Or => InfixOperator::Or(token),
			Operator::Xor => InfixOperator::Xor(token),
			Operator::As => InfixOperator::As(token),
			_ => return_error!(ast::unsupported_token_error(token.fragment)),
		})
	}
}

#[cfg(test)]
mod tests {
	use crate::ast::{InfixOperator, parse_str};

	fn infix_operator(rql: &str) -> InfixOperator {
		let result = parse_str(rql).unwrap();
		result[0].first_unchecked().as_filter().node.as_infix().operator.clone()
	}

	#[test]
	fn test_comparison_operators() {
		assert!(matches!(infix_operator("filter a == 1"), InfixOperator::Equal(_)));
		assert!(matches!(infix_operator("filter a != 1"), InfixOperator::NotEqual(_)));
		assert!(matches!(infix_operator("filter a < 1"), InfixOperator::LessThan(_)));
		assert!(matches!(infix_operator("filter a <= 1"), InfixOperator::LessThanEqual(_)));
		assert!(matches!(infix_operator("filter a > 1"), InfixOperator::GreaterThan(_)));
		assert!(matches!(infix_operator("filter a >= 1"), InfixOperator::GreaterThanEqual(_)));
	}

	#[test]
	fn test_logic_operators() {
		assert!(matches!(infix_operator("filter a and b"), InfixOperator::And(_)));
		assert!(matches!(infix_operator("filter a OR b"), InfixOperator::Or(_)));
		assert!(matches!(infix_operator("filter a xor b"), InfixOperator::Xor(_)));
	}

	#[test]
	fn test_alias_requires_identifier() {
		let err = parse_str("map 1 as 2").unwrap_err();
		assert_eq!(err.code(), "AST_005");
	}

	#[test]
	fn test_infix_fragment_spans_lines() {
		let result = parse_str("map 1 +\n 2").unwrap();
		let add = result[0].first_unchecked().as_map().nodes[0].as_infix();
		assert_eq!(add.fragment.text(), "1 +\n 2");
		assert_eq!(add.fragment.line, 1);
		assert_eq!(add.fragment.column, 5);
	}
}
