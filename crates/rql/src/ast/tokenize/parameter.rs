// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use nom::{
	IResult, Parser,
	branch::alt,
	bytes::complete::{take_while, take_while1},
	character::complete::{char, digit1},
	combinator::recognize,
};

use crate::ast::tokenize::{Span, Token, TokenKind, as_fragment, is_identifier_char, is_identifier_start};

/// `$1`, `$2`, ... refer to positional parameters, `$name` to named ones.
pub(crate) fn parse_parameter(input: Span) -> IResult<Span, Token> {
	let name = recognize((take_while1(is_identifier_start), take_while(is_identifier_char)));
	let (rest, span) = recognize((char('$'), alt((digit1, name)))).parse(input)?;
	Ok((
		rest,
		Token {
			kind: TokenKind::Parameter,
			fragment: as_fragment(span),
		},
	))
}

#[cfg(test)]
mod tests {
	use nom_locate::LocatedSpan;

	use super::*;

	#[test]
	fn test_positional() {
		let (rest, token) = parse_parameter(LocatedSpan::new("$12 + 1")).unwrap();
		assert_eq!(token.value(), "$12");
		assert_eq!(*rest.fragment(), " + 1");
	}

	#[test]
	fn test_named() {
		let (_, token) = parse_parameter(LocatedSpan::new("$user_id")).unwrap();
		assert_eq!(token.value(), "$user_id");
	}

	#[test]
	fn test_bare_dollar() {
		assert!(parse_parameter(LocatedSpan::new("$ 1")).is_err());
	}
}
