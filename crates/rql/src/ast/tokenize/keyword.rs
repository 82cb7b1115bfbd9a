// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use nom::{IResult, Input, Parser, branch::alt, combinator::value};

use crate::ast::tokenize::{Span, Token, TokenKind, as_fragment, word};

macro_rules! keyword {
	(
		$( $value:ident => $tag:literal ),*
	) => {
		#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
		pub enum Keyword { $( $value ),* }

		impl Keyword {
			pub fn as_str(&self) -> &'static str {
				match self {
					$( Keyword::$value => $tag ),*
				}
			}
		}
	};
}

keyword! {
	Map => "MAP",
	Select => "SELECT",
	Extend => "EXTEND",
	From => "FROM",
	Filter => "FILTER",
	Take => "TAKE",
	Sort => "SORT",
	Asc => "ASC",
	Desc => "DESC"
}

pub(crate) fn parse_keyword(input: Span) -> IResult<Span, Token> {
	let start = input;

	alt((
		value(Keyword::Map, word("map")),
		value(Keyword::Select, word("select")),
		value(Keyword::Extend, word("extend")),
		value(Keyword::From, word("from")),
		value(Keyword::Filter, word("filter")),
		value(Keyword::Take, word("take")),
		value(Keyword::Sort, word("sort")),
		value(Keyword::Asc, word("asc")),
		value(Keyword::Desc, word("desc")),
	))
	.map(|keyword| Token {
		kind: TokenKind::Keyword(keyword),
		fragment: as_fragment(start.take(keyword.as_str().len())),
	})
	.parse(input)
}

#[cfg(test)]
mod tests {
	use nom_locate::LocatedSpan;

	use super::*;

	fn check_keyword(keyword: Keyword, text: &str) {
		let input = format!("{text} rest");
		let (rest, token) = parse_keyword(LocatedSpan::new(input.as_str())).unwrap();
		assert_eq!(token.kind, TokenKind::Keyword(keyword));
		assert_eq!(token.value(), text);
		assert_eq!(*rest.fragment(), " rest");
	}

	macro_rules! generate_test {
		($($name:ident => ($variant:ident, $text:literal)),*) => {
			$(
				#[test]
				fn $name() {
					check_keyword(Keyword::$variant, $text);
				}
			)*
		};
	}

	generate_test! {
		test_keyword_map => (Map, "map"),
		test_keyword_select => (Select, "SELECT"),
		test_keyword_extend => (Extend, "Extend"),
		test_keyword_from => (From, "from"),
		test_keyword_filter => (Filter, "filter"),
		test_keyword_take => (Take, "take"),
		test_keyword_sort => (Sort, "sort"),
		test_keyword_asc => (Asc, "asc"),
		test_keyword_desc => (Desc, "DESC")
	}

	#[test]
	fn test_not_a_keyword() {
		assert!(parse_keyword(LocatedSpan::new("maps")).is_err());
		assert!(parse_keyword(LocatedSpan::new("from_date")).is_err());
	}
}
