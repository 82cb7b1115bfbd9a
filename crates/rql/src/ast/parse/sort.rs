// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use crate::ast::{
	AstSort,
	parse::Parser,
	tokenize::{Keyword, Operator, Separator, TokenKind},
};

impl Parser<'_> {
	pub(crate) fn parse_sort(&mut self) -> crate::Result<AstSort> {
		let token = self.consume_keyword(Keyword::Sort)?;
		let has_braces = self.consume_if(TokenKind::Operator(Operator::OpenCurly))?.is_some();

		let mut columns = Vec::with_capacity(2);
		let mut directions = Vec::with_capacity(2);

		loop {
			columns.push(self.parse_identifier()?);

			let direction = match self.consume_if(TokenKind::Keyword(Keyword::Asc))? {
				Some(token) => Some(token),
				None => self.consume_if(TokenKind::Keyword(Keyword::Desc))?,
			};
			directions.push(direction);

			if self.consume_if(TokenKind::Separator(Separator::Comma))?.is_none() {
				break;
			}
		}

		if has_braces {
			self.consume_operator(Operator::CloseCurly)?;
		}

		Ok(AstSort {
			token,
			columns,
			directions,
		})
	}
}
