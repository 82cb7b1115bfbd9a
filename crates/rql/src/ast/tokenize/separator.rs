// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use nom::{IResult, Input, Parser, branch::alt, bytes::complete::tag, combinator::value};

use crate::ast::tokenize::{Span, Token, TokenKind, as_fragment};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Separator {
	Comma,
	Semicolon,
}

impl Separator {
	pub fn as_str(&self) -> &'static str {
		match self {
			Separator::Comma => ",",
			Separator::Semicolon => ";",
		}
	}
}

pub(crate) fn parse_separator(input: Span) -> IResult<Span, Token> {
	let start = input;
	alt((value(Separator::Comma, tag(",")), value(Separator::Semicolon, tag(";"))))
		.map(|separator| Token {
			kind: TokenKind::Separator(separator),
			fragment: as_fragment(start.take(1)),
		})
		.parse(input)
}
