// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use reifydb_type::{diagnostic::ast, return_error};

use crate::ast::{
	AstFrom, AstIdentifier, AstInline, AstInlineKeyedValue,
	parse::{Parser, Precedence},
	tokenize::{Keyword, Literal, Operator, Separator, TokenKind},
};

impl Parser<'_> {
	/// `from [ { key: value, ... }, ... ]`
	pub(crate) fn parse_from(&mut self) -> crate::Result<AstFrom> {
		let token = self.consume_keyword(Keyword::From)?;
		self.consume_operator(Operator::OpenBracket)?;

		let mut rows = Vec::with_capacity(4);
		loop {
			if self.current()?.is_operator(Operator::CloseBracket) {
				break;
			}
			rows.push(self.parse_inline()?);
			if self.consume_if(TokenKind::Separator(Separator::Comma))?.is_none() {
				break;
			}
		}

		self.consume_operator(Operator::CloseBracket)?;

		Ok(AstFrom {
			token,
			rows,
		})
	}

	fn parse_inline(&mut self) -> crate::Result<AstInline> {
		let token = self.consume_operator(Operator::OpenCurly)?;

		let mut keyed_values = Vec::with_capacity(4);
		loop {
			if self.current()?.is_operator(Operator::CloseCurly) {
				break;
			}

			let key = self.parse_inline_key()?;
			self.consume_operator(Operator::Colon)?;
			let value = Box::new(self.parse_node(Precedence::None)?);
			keyed_values.push(AstInlineKeyedValue {
				key,
				value,
			});

			if self.consume_if(TokenKind::Separator(Separator::Comma))?.is_none() {
				break;
			}
		}

		self.consume_operator(Operator::CloseCurly)?;

		Ok(AstInline {
			token,
			keyed_values,
		})
	}

	/// Keys are identifiers or quoted text, `{ "first name": 'x' }`.
	fn parse_inline_key(&mut self) -> crate::Result<AstIdentifier> {
		let current = self.current()?;
		if current.is_literal(Literal::Text) {
			let mut token = self.advance()?;
			token.kind = TokenKind::Identifier;
			return Ok(AstIdentifier {
				token,
			});
		}
		if !current.is_identifier() {
			return_error!(ast::expected_identifier_error(current.fragment.clone()));
		}
		self.parse_identifier()
	}
}
