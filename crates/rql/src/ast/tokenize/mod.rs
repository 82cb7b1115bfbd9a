// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use nom::{
	IResult, Parser,
	branch::alt,
	bytes::complete::tag_no_case,
	character::complete::{char, multispace1, not_line_ending, satisfy},
	combinator::{not, peek, recognize},
	multi::many0,
	sequence::terminated,
};
use nom_locate::LocatedSpan;
use reifydb_type::{Fragment, diagnostic::ast, return_error};

pub use keyword::Keyword;
pub use operator::Operator;
pub use separator::Separator;

use crate::ast::tokenize::{
	identifier::parse_identifier, keyword::parse_keyword, literal::parse_literal, operator::parse_operator,
	parameter::parse_parameter, separator::parse_separator,
};

mod identifier;
mod keyword;
mod literal;
mod operator;
mod parameter;
mod separator;

pub(crate) type Span<'a> = LocatedSpan<&'a str>;

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
	pub kind: TokenKind,
	pub fragment: Fragment,
}

impl Token {
	pub fn is_identifier(&self) -> bool {
		self.kind == TokenKind::Identifier
	}

	pub fn is_literal(&self, literal: Literal) -> bool {
		self.kind == TokenKind::Literal(literal)
	}

	pub fn is_separator(&self, separator: Separator) -> bool {
		self.kind == TokenKind::Separator(separator)
	}

	pub fn is_keyword(&self, keyword: Keyword) -> bool {
		self.kind == TokenKind::Keyword(keyword)
	}

	pub fn is_operator(&self, operator: Operator) -> bool {
		self.kind == TokenKind::Operator(operator)
	}

	pub fn value(&self) -> &str {
		self.fragment.text()
	}
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TokenKind {
	Keyword(Keyword),
	Identifier,
	Literal(Literal),
	Operator(Operator),
	Parameter,
	Separator(Separator),
}

impl TokenKind {
	/// Human readable form used in parser diagnostics.
	pub fn describe(&self) -> String {
		match self {
			TokenKind::Keyword(keyword) => format!("keyword '{}'", keyword.as_str().to_lowercase()),
			TokenKind::Identifier => "identifier".to_string(),
			TokenKind::Literal(literal) => format!("{:?} literal", literal).to_lowercase(),
			TokenKind::Operator(operator) => format!("'{}'", operator.as_str()),
			TokenKind::Parameter => "parameter".to_string(),
			TokenKind::Separator(separator) => format!("'{}'", separator.as_str()),
		}
	}
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Literal {
	False,
	Number,
	Text,
	True,
	Undefined,
}

pub fn tokenize(input: &str) -> crate::Result<Vec<Token>> {
	let mut tokens = Vec::with_capacity(input.len() / 2);
	let mut rest = skip_trivia(Span::new(input));

	while !rest.fragment().is_empty() {
		match token(rest) {
			Ok((next, token)) => {
				tokens.push(token);
				rest = skip_trivia(next);
			}
			Err(_) => {
				let ch = rest.fragment().chars().next().unwrap_or(' ');
				let fragment = Fragment::new(
					ch.to_string(),
					rest.location_line(),
					rest.get_utf8_column() as u32,
					rest.location_offset(),
					ch.len_utf8(),
				);
				if ch == '\'' || ch == '"' {
					return_error!(ast::lex_error(fragment, "unterminated text literal"));
				}
				return_error!(ast::lex_error(fragment, format!("unexpected character '{}'", ch)));
			}
		}
	}

	Ok(tokens)
}

fn token(input: Span) -> IResult<Span, Token> {
	alt((parse_keyword, parse_literal, parse_operator, parse_parameter, parse_identifier, parse_separator))
		.parse(input)
}

/// Skips whitespace, newlines and `#` comments.
fn skip_trivia(input: Span) -> Span {
	let comment = recognize((char('#'), not_line_ending));
	let result: IResult<Span, Vec<Span>> = many0(alt((multispace1, comment))).parse(input);
	match result {
		Ok((rest, _)) => rest,
		Err(_) => input,
	}
}

/// Matches `word` case-insensitively unless it continues as an identifier.
pub(crate) fn word<'a>(word: &'static str) -> impl FnMut(Span<'a>) -> IResult<Span<'a>, Span<'a>> {
	move |input| terminated(tag_no_case(word), not(peek(satisfy(is_identifier_char)))).parse(input)
}

pub(crate) fn is_identifier_start(c: char) -> bool {
	c.is_ascii_alphabetic() || c == '_'
}

pub(crate) fn is_identifier_char(c: char) -> bool {
	c.is_ascii_alphanumeric() || c == '_'
}

pub(crate) fn as_fragment(span: Span) -> Fragment {
	Fragment::new(
		span.fragment().to_string(),
		span.location_line(),
		span.get_utf8_column() as u32,
		span.location_offset(),
		span.fragment().len(),
	)
}
