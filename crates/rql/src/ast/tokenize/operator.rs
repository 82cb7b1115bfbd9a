// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use nom::{IResult, Input, Parser, branch::alt, bytes::complete::tag, combinator::value};

use crate::ast::tokenize::{Span, Token, TokenKind, as_fragment, word};

macro_rules! operator {
	(
		$( $value:ident => $tag:literal ),*
	) => {
		#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
		pub enum Operator { $( $value ),* }

		impl Operator {
			pub fn as_str(&self) -> &'static str {
				match self {
					$( Operator::$value => $tag ),*
				}
			}
		}
	};
}

operator! {
	OpenParen => "(",
	CloseParen => ")",
	OpenBracket => "[",
	CloseBracket => "]",
	OpenCurly => "{",
	CloseCurly => "}",
	LeftAngle => "<",
	LeftAngleEqual => "<=",
	RightAngle => ">",
	RightAngleEqual => ">=",
	Dot => ".",
	Colon => ":",
	Plus => "+",
	Minus => "-",
	Asterisk => "*",
	Slash => "/",
	Pipe => "|",
	Percent => "%",
	DoubleEqual => "==",
	Bang => "!",
	BangEqual => "!=",
	As => "as",
	And => "and",
	Or => "or",
	Xor => "xor",
	Not => "not"
}

pub(crate) fn parse_operator(input: Span) -> IResult<Span, Token> {
	let start = input;

	let parser = alt((
		alt((
			value(Operator::LeftAngleEqual, tag("<=")),
			value(Operator::RightAngleEqual, tag(">=")),
			value(Operator::DoubleEqual, tag("==")),
			value(Operator::BangEqual, tag("!=")),
			value(Operator::As, word("as")),
			value(Operator::And, word("and")),
			value(Operator::Or, word("or")),
			value(Operator::Xor, word("xor")),
			value(Operator::Not, word("not")),
		)),
		alt((
			value(Operator::OpenParen, tag("(")),
			value(Operator::CloseParen, tag(")")),
			value(Operator::OpenBracket, tag("[")),
			value(Operator::CloseBracket, tag("]")),
			value(Operator::OpenCurly, tag("{")),
			value(Operator::CloseCurly, tag("}")),
			value(Operator::LeftAngle, tag("<")),
			value(Operator::RightAngle, tag(">")),
			value(Operator::Dot, tag(".")),
			value(Operator::Colon, tag(":")),
			value(Operator::Plus, tag("+")),
			value(Operator::Minus, tag("-")),
			value(Operator::Asterisk, tag("*")),
			value(Operator::Slash, tag("/")),
			value(Operator::Pipe, tag("|")),
			value(Operator::Percent, tag("%")),
			value(Operator::Bang, tag("!")),
		)),
	));

	parser.map(|op| Token {
		kind: TokenKind::Operator(op),
		fragment: as_fragment(start.take(op.as_str().len())),
	})
	.parse(input)
}
