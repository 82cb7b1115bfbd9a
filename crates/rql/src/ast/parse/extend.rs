// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use crate::ast::{AstExtend, parse::Parser, tokenize::Keyword};

impl Parser<'_> {
	pub(crate) fn parse_extend(&mut self) -> crate::Result<AstExtend> {
		let token = self.consume_keyword(Keyword::Extend)?;
		let nodes = self.parse_projections()?;
		Ok(AstExtend {
			token,
			nodes,
		})
	}
}
