// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use crate::ast::{
	AstFilter,
	parse::{Parser, Precedence},
	tokenize::Keyword,
};

impl Parser<'_> {
	pub(crate) fn parse_filter(&mut self) -> crate::Result<AstFilter> {
		let token = self.consume_keyword(Keyword::Filter)?;
		let node = Box::new(self.parse_node(Precedence::None)?);
		Ok(AstFilter {
			token,
			node,
		})
	}
}
