// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use nom::{
	IResult, Parser,
	bytes::complete::{take_while, take_while1},
	combinator::recognize,
};

use crate::ast::tokenize::{Span, Token, TokenKind, as_fragment, is_identifier_char, is_identifier_start};

pub(crate) fn parse_identifier(input: Span) -> IResult<Span, Token> {
	let (rest, span) = recognize((take_while1(is_identifier_start), take_while(is_identifier_char))).parse(input)?;
	Ok((
		rest,
		Token {
			kind: TokenKind::Identifier,
			fragment: as_fragment(span),
		},
	))
}
