// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use nom::{
	IResult, Input, Parser,
	branch::alt,
	bytes::complete::{tag, take_while},
	character::complete::{char, digit1, one_of},
	combinator::{opt, recognize, value},
};
use reifydb_type::Fragment;

use crate::ast::tokenize::{Literal, Span, Token, TokenKind, as_fragment, word};

pub(crate) fn parse_literal(input: Span) -> IResult<Span, Token> {
	alt((parse_text, parse_number, parse_word_literal)).parse(input)
}

/// Single or double quoted text. The fragment text excludes the quotes, its range includes them.
fn parse_text(input: Span) -> IResult<Span, Token> {
	let (rest, (open, content, _)) = alt((
		(tag("'"), take_while(|c: char| c != '\''), tag("'")),
		(tag("\""), take_while(|c: char| c != '"'), tag("\"")),
	))
	.parse(input)?;

	let fragment = Fragment::new(
		content.fragment().to_string(),
		open.location_line(),
		open.get_utf8_column() as u32,
		open.location_offset(),
		content.fragment().len() + 2,
	);

	Ok((
		rest,
		Token {
			kind: TokenKind::Literal(Literal::Text),
			fragment,
		},
	))
}

fn digits(input: Span) -> IResult<Span, Span> {
	recognize((digit1, take_while(|c: char| c.is_ascii_digit() || c == '_'))).parse(input)
}

fn parse_number(input: Span) -> IResult<Span, Token> {
	let (rest, span) = recognize((
		digits,
		opt((char('.'), digits)),
		opt((one_of("eE"), opt(one_of("+-")), digit1)),
	))
	.parse(input)?;

	Ok((
		rest,
		Token {
			kind: TokenKind::Literal(Literal::Number),
			fragment: as_fragment(span),
		},
	))
}

fn parse_word_literal(input: Span) -> IResult<Span, Token> {
	let start = input;
	alt((
		value((Literal::True, 4), word("true")),
		value((Literal::False, 5), word("false")),
		value((Literal::Undefined, 9), word("undefined")),
	))
	.map(|(literal, len)| Token {
		kind: TokenKind::Literal(literal),
		fragment: as_fragment(start.take(len)),
	})
	.parse(input)
}
