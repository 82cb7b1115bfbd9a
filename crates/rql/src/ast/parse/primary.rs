// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use reifydb_type::{diagnostic::ast, return_error};

use crate::ast::{
	Ast, AstLiteral, AstLiteralBoolean, AstLiteralNumber, AstLiteralText, AstLiteralUndefined,
	AstParameter, AstTuple,
	parse::{Parser, Precedence, prefix::fold_negation},
	tokenize::{Keyword, Literal, Operator, Separator, TokenKind},
};

impl Parser<'_> {
	pub(crate) fn parse_primary(&mut self) -> crate::Result<Ast> {
		let current = self.current()?;

		match current.kind {
			TokenKind::Operator(Operator::Plus | Operator::Minus | Operator::Bang | Operator::Not) => {
				Ok(fold_negation(self.parse_prefix()?))
			}
			TokenKind::Operator(Operator::OpenParen) => Ok(Ast::Tuple(self.parse_tuple()?)),
			TokenKind::Keyword(Keyword::Map | Keyword::Select) => Ok(Ast::Map(self.parse_map()?)),
			TokenKind::Keyword(Keyword::Extend) => Ok(Ast::Extend(self.parse_extend()?)),
			TokenKind::Keyword(Keyword::Filter) => Ok(Ast::Filter(self.parse_filter()?)),
			TokenKind::Keyword(Keyword::From) => Ok(Ast::From(self.parse_from()?)),
			TokenKind::Keyword(Keyword::Take) => Ok(Ast::Take(self.parse_take()?)),
			TokenKind::Keyword(Keyword::Sort) => Ok(Ast::Sort(self.parse_sort()?)),
			TokenKind::Literal(_) => Ok(Ast::Literal(self.parse_literal()?)),
			TokenKind::Identifier => Ok(Ast::Identifier(self.parse_identifier()?)),
			TokenKind::Parameter => Ok(Ast::Parameter(AstParameter(self.advance()?))),
			_ => return_error!(ast::unsupported_token_error(current.fragment.clone())),
		}
	}

	fn parse_literal(&mut self) -> crate::Result<AstLiteral> {
		let token = self.advance()?;
		Ok(match token.kind {
			TokenKind::Literal(Literal::Number) => AstLiteral::Number(AstLiteralNumber(token)),
			TokenKind::Literal(Literal::Text) => AstLiteral::Text(AstLiteralText(token)),
			TokenKind::Literal(Literal::True | Literal::False) => AstLiteral::Boolean(AstLiteralBoolean(token)),
			TokenKind::Literal(Literal::Undefined) => AstLiteral::Undefined(AstLiteralUndefined(token)),
			_ => return_error!(ast::unsupported_token_error(token.fragment)),
		})
	}

	pub(crate) fn parse_tuple(&mut self) -> crate::Result<AstTuple> {
		let token = self.consume_operator(Operator::OpenParen)?;

		let mut nodes = Vec::with_capacity(2);
		loop {
			if self.current()?.is_operator(Operator::CloseParen) {
				break;
			}
			nodes.push(self.parse_node(Precedence::None)?);
			if self.consume_if(TokenKind::Separator(Separator::Comma))?.is_none() {
				break;
			}
		}

		let close = self.consume_operator(Operator::CloseParen)?;
		let fragment = token.fragment.merge(&close.fragment, self.source);

		Ok(AstTuple {
			token,
			nodes,
			fragment,
		})
	}
}

#[cfg(test)]
mod tests {
	use crate::ast::{Ast, AstLiteral, parse_str};

	#[test]
	fn test_literals() {
		let result = parse_str("map 1, 'two', true, undefined").unwrap();
		let map = result[0].first_unchecked().as_map();
		assert!(matches!(map.nodes[0].as_literal(), AstLiteral::Number(_)));
		assert!(matches!(map.nodes[1].as_literal(), AstLiteral::Text(_)));
		assert!(matches!(map.nodes[2].as_literal(), AstLiteral::Boolean(_)));
		assert!(matches!(map.nodes[3].as_literal(), AstLiteral::Undefined(_)));
	}

	#[test]
	fn test_parameter() {
		let result = parse_str("map $1").unwrap();
		let map = result[0].first_unchecked().as_map();
		assert!(matches!(map.nodes[0], Ast::Parameter(_)));
	}

	#[test]
	fn test_tuple() {
		let result = parse_str("map (1 + 2) * 3").unwrap();
		let mul = result[0].first_unchecked().as_map().nodes[0].as_infix();
		let tuple = mul.left.as_tuple();
		assert_eq!(tuple.len(), 1);
		assert_eq!(tuple.fragment.text(), "(1 + 2)");
		assert_eq!(mul.fragment.text(), "(1 + 2) * 3");
	}
}
