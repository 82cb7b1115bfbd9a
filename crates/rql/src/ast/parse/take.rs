// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use reifydb_type::{diagnostic::ast, return_error};

use crate::ast::{
	AstTake,
	parse::Parser,
	tokenize::{Keyword, Literal},
};

impl Parser<'_> {
	pub(crate) fn parse_take(&mut self) -> crate::Result<AstTake> {
		let token = self.consume_keyword(Keyword::Take)?;
		let count = self.advance()?;

		if !count.is_literal(Literal::Number) {
			return_error!(ast::invalid_take_count(count.fragment));
		}

		let take = match count.value().replace('_', "").parse::<usize>() {
			Ok(take) => take,
			Err(_) => return_error!(ast::invalid_take_count(count.fragment)),
		};

		Ok(AstTake {
			token,
			take,
		})
	}
}
