// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

mod extend;
mod filter;
mod from;
mod infix;
mod map;
mod prefix;
mod primary;
mod sort;
mod take;

use reifydb_type::{Error, diagnostic::ast, return_error};

use crate::ast::{
	Ast, AstIdentifier, AstInfix, AstStatement, InfixOperator,
	tokenize::{Keyword, Operator, Separator, Token, TokenKind},
};

#[derive(Clone, Debug, PartialEq, PartialOrd)]
pub(crate) enum Precedence {
	None,
	Assignment,
	LogicOr,
	LogicAnd,
	Comparison,
	Term,
	Factor,
	Prefix,
	Primary,
}

const fn get_precedence_for_operator(op: Operator) -> Precedence {
	use Operator::*;
	use Precedence::*;

	match op {
		As => Assignment,
		Or | Xor => LogicOr,
		And => LogicAnd,
		DoubleEqual | BangEqual | LeftAngle | LeftAngleEqual | RightAngle | RightAngleEqual => Comparison,
		Plus | Minus => Term,
		Asterisk | Slash | Percent => Factor,
		_ => None,
	}
}

/// Parses `tokens` taken from `source`; the source is used to recover the text of composite fragments.
pub fn parse(source: &str, tokens: Vec<Token>) -> crate::Result<Vec<AstStatement>> {
	let mut parser = Parser::new(source, tokens);
	parser.parse()
}

pub(crate) struct Parser<'a> {
	source: &'a str,
	tokens: Vec<Token>,
	position: usize,
}

impl<'a> Parser<'a> {
	fn new(source: &'a str, tokens: Vec<Token>) -> Self {
		Self {
			source,
			tokens,
			position: 0,
		}
	}

	fn parse(&mut self) -> crate::Result<Vec<AstStatement>> {
		let mut result = Vec::with_capacity(4);
		loop {
			if self.is_eof() {
				break;
			}

			let statement = self.parse_statement()?;
			if !statement.is_empty() {
				result.push(statement);
			}
		}
		Ok(result)
	}

	/// A pipeline of nodes up to the next `;` or the end of input.
	pub(crate) fn parse_statement(&mut self) -> crate::Result<AstStatement> {
		let mut nodes = Vec::with_capacity(8);
		loop {
			if self.is_eof() || self.consume_if(TokenKind::Separator(Separator::Semicolon))?.is_some() {
				break;
			}
			nodes.push(self.parse_node(Precedence::None)?);
			if !self.is_eof() && self.current()?.is_operator(Operator::Pipe) {
				self.advance()?;
			}
		}

		Ok(AstStatement {
			nodes,
		})
	}

	pub(crate) fn parse_node(&mut self, precedence: Precedence) -> crate::Result<Ast> {
		let mut left = self.parse_primary()?;

		while !self.is_eof() {
			if precedence >= self.current_precedence()? {
				break;
			}
			left = Ast::Infix(self.parse_infix(left)?);
		}
		Ok(left)
	}

	pub(crate) fn advance(&mut self) -> crate::Result<Token> {
		if self.position >= self.tokens.len() {
			return Err(Error(ast::unexpected_eof_error()));
		}
		let token = self.tokens[self.position].clone();
		self.position += 1;
		Ok(token)
	}

	pub(crate) fn consume(&mut self, expected: TokenKind) -> crate::Result<Token> {
		self.current_expect(expected)?;
		self.advance()
	}

	pub(crate) fn consume_if(&mut self, expected: TokenKind) -> crate::Result<Option<Token>> {
		if self.is_eof() || self.current()?.kind != expected {
			return Ok(None);
		}

		Ok(Some(self.consume(expected)?))
	}

	pub(crate) fn consume_operator(&mut self, expected: Operator) -> crate::Result<Token> {
		self.consume(TokenKind::Operator(expected))
	}

	pub(crate) fn consume_keyword(&mut self, expected: Keyword) -> crate::Result<Token> {
		self.consume(TokenKind::Keyword(expected))
	}

	pub(crate) fn current(&self) -> crate::Result<&Token> {
		if self.position >= self.tokens.len() {
			return Err(Error(ast::unexpected_eof_error()));
		}
		Ok(&self.tokens[self.position])
	}

	pub(crate) fn current_expect(&self, expected: TokenKind) -> crate::Result<()> {
		let got = self.current()?;
		if got.kind == expected {
			return Ok(());
		}

		if let TokenKind::Identifier = expected {
			return_error!(ast::expected_identifier_error(got.fragment.clone()))
		}
		return_error!(ast::unexpected_token_error(&expected.describe(), got.fragment.clone()))
	}

	pub(crate) fn current_precedence(&self) -> crate::Result<Precedence> {
		if self.is_eof() {
			return Ok(Precedence::None);
		};

		match self.current()?.kind {
			TokenKind::Operator(operator) => Ok(get_precedence_for_operator(operator)),
			_ => Ok(Precedence::None),
		}
	}

	pub(crate) fn is_eof(&self) -> bool {
		self.position >= self.tokens.len()
	}

	pub(crate) fn is_next_operator(&self, operator: Operator) -> bool {
		self.tokens.get(self.position + 1).map(|t| t.is_operator(operator)).unwrap_or(false)
	}

	pub(crate) fn parse_identifier(&mut self) -> crate::Result<AstIdentifier> {
		let token = self.consume(TokenKind::Identifier)?;
		Ok(AstIdentifier {
			token,
		})
	}

	/// Comma separated projections, optionally wrapped in `{ }`.
	/// `name: expr` is rewritten to `expr as name`.
	pub(crate) fn parse_projections(&mut self) -> crate::Result<Vec<Ast>> {
		let has_braces = self.consume_if(TokenKind::Operator(Operator::OpenCurly))?.is_some();

		let mut nodes = Vec::with_capacity(4);
		loop {
			if self.current()?.is_identifier() && self.is_next_operator(Operator::Colon) {
				nodes.push(self.parse_colon_alias()?);
			} else {
				nodes.push(self.parse_node(Precedence::None)?);
			}

			if self.consume_if(TokenKind::Separator(Separator::Comma))?.is_none() {
				break;
			}
		}

		if has_braces {
			self.consume_operator(Operator::CloseCurly)?;
		}

		Ok(nodes)
	}

	fn parse_colon_alias(&mut self) -> crate::Result<Ast> {
		let identifier = self.parse_identifier()?;
		let colon = self.consume_operator(Operator::Colon)?;
		let expression = self.parse_node(Precedence::Assignment)?;

		let fragment = identifier.token.fragment.merge(&expression.fragment(), self.source);

		Ok(Ast::Infix(AstInfix {
			token: expression.token().clone(),
			left: Box::new(expression),
			operator: InfixOperator::As(colon),
			right: Box::new(Ast::Identifier(identifier)),
			fragment,
		}))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::ast::{parse_str, tokenize::tokenize};

	#[test]
	fn test_empty_input() {
		assert!(parse_str("").unwrap().is_empty());
		assert!(parse_str(";;").unwrap().is_empty());
	}

	#[test]
	fn test_multiple_statements() {
		let result = parse_str("map 1; map 2;").unwrap();
		assert_eq!(result.len(), 2);
		assert_eq!(result[0].len(), 1);
		assert_eq!(result[1].len(), 1);
	}

	#[test]
	fn test_pipeline_with_pipes() {
		let result = parse_str("from [{a: 1}] | filter a > 0 | take 1").unwrap();
		assert_eq!(result.len(), 1);
		let statement = &result[0];
		assert_eq!(statement.len(), 3);
		statement[0].as_from();
		statement[1].as_filter();
		statement[2].as_take();
	}

	#[test]
	fn test_pipeline_without_pipes() {
		let result = parse_str("from [{a: 1}]\nmap a").unwrap();
		assert_eq!(result[0].len(), 2);
	}

	#[test]
	fn test_precedence() {
		let result = parse_str("map 1 + 2 * 3").unwrap();
		let map = result[0].first_unchecked().as_map();
		let add = map.nodes[0].as_infix();
		assert!(matches!(add.operator, InfixOperator::Add(_)));
		let mul = add.right.as_infix();
		assert!(matches!(mul.operator, InfixOperator::Multiply(_)));
		assert_eq!(add.fragment.text(), "1 + 2 * 3");
	}

	#[test]
	fn test_left_associative() {
		let result = parse_str("map 10 - 4 - 3").unwrap();
		let outer = result[0].first_unchecked().as_map().nodes[0].as_infix();
		assert!(matches!(outer.operator, InfixOperator::Subtract(_)));
		assert_eq!(outer.left.fragment().text(), "10 - 4");
		assert_eq!(outer.right.value(), "3");
	}

	#[test]
	fn test_logic_precedence() {
		let result = parse_str("filter a or b and c").unwrap();
		let filter = result[0].first_unchecked().as_filter();
		let or = filter.node.as_infix();
		assert!(matches!(or.operator, InfixOperator::Or(_)));
		assert!(matches!(or.right.as_infix().operator, InfixOperator::And(_)));
	}

	#[test]
	fn test_colon_alias() {
		let result = parse_str("map { total: 1 + 2 }").unwrap();
		let map = result[0].first_unchecked().as_map();
		let alias = map.nodes[0].as_infix();
		assert!(matches!(alias.operator, InfixOperator::As(_)));
		assert_eq!(alias.right.as_identifier().name(), "total");
		assert_eq!(alias.left.fragment().text(), "1 + 2");
	}

	#[test]
	fn test_as_alias() {
		let result = parse_str("map 1 + 2 as total").unwrap();
		let alias = result[0].first_unchecked().as_map().nodes[0].as_infix();
		assert!(matches!(alias.operator, InfixOperator::As(_)));
		assert_eq!(alias.fragment.text(), "1 + 2 as total");
	}

	#[test]
	fn test_unclosed_paren() {
		let err = parse_str("map (1 + 2").unwrap_err();
		assert_eq!(err.code(), "AST_002");
	}

	#[test]
	fn test_unexpected_token() {
		let err = parse_str("map 1 )").unwrap_err();
		assert_eq!(err.code(), "AST_004");
	}

	#[test]
	fn test_parse_direct() {
		let source = "map 1";
		let tokens = tokenize(source).unwrap();
		let result = parse(source, tokens).unwrap();
		assert_eq!(result[0].first_unchecked().as_map().nodes.len(), 1);
	}
}
