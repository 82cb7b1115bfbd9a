// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use nom::{
	Finish, IResult, Input, Parser,
	branch::alt,
	bytes::complete::{tag, take_while, take_while1},
	character::complete::{char, line_ending, not_line_ending, satisfy, space0, space1},
	combinator::{consumed, eof, not, opt, peek, recognize},
	error::{Error, ErrorKind},
	multi::{many0, many1},
	sequence::{preceded, terminated},
};
use nom_locate::LocatedSpan;

use crate::testscript::{Argument, Block, Command, ParseError};

type Span<'a> = LocatedSpan<&'a str>;

/// Parses a golden script into its blocks. Trailing comments without commands form a block of
/// their own with no commands.
pub fn parse(input: &str) -> Result<Vec<Block>, ParseError> {
	match blocks(Span::new(input)).finish() {
		Ok((_, blocks)) => Ok(blocks),
		Err(e) => Err(syntax_error(e)),
	}
}

fn syntax_error(error: Error<Span>) -> ParseError {
	let column = error.input.get_utf8_column();
	ParseError::Syntax {
		line: error.input.location_line(),
		column,
		message: format!("{:?}", error.code),
		source_line: String::from_utf8_lossy(error.input.get_line_beginning()).to_string(),
		caret: " ".repeat(column.saturating_sub(1)),
	}
}

fn blocks(input: Span) -> IResult<Span, Vec<Block>> {
	let (input, mut blocks) = many0(block).parse(input)?;

	let line_number = input.location_line();
	let (input, tail) = recognize(many0(alt((empty_line, comment_line)))).parse(input)?;
	if !tail.fragment().is_empty() {
		blocks.push(Block {
			literal: tail.fragment().to_string(),
			commands: vec![],
			line_number,
		});
	}

	let (input, _) = eof(input)?;
	Ok((input, blocks))
}

fn block(input: Span) -> IResult<Span, Block> {
	let line_number = input.location_line();

	let (input, (literal, commands)) =
		consumed(preceded(many0(alt((empty_line, comment_line))), many1(command))).parse(input)?;

	let (input, _) = terminated(tag("---"), alt((line_ending, eof))).parse(input)?;

	// expected output, up to the next empty line
	let (input, _) = many0(output_line).parse(input)?;
	let (input, _) = opt(line_ending).parse(input)?;

	Ok((
		input,
		Block {
			literal: literal.fragment().to_string(),
			commands,
			line_number,
		},
	))
}

fn output_line(input: Span) -> IResult<Span, Span> {
	terminated(take_while1(|c: char| c != '\n' && c != '\r'), opt(line_ending)).parse(input)
}

fn empty_line(input: Span) -> IResult<Span, Span> {
	recognize((space0, line_ending)).parse(input)
}

fn comment_line(input: Span) -> IResult<Span, Span> {
	recognize((space0, alt((tag("#"), tag("//"))), not_line_ending, alt((line_ending, eof)))).parse(input)
}

fn command(input: Span) -> IResult<Span, Command> {
	let (input, _) = space0(input)?;
	let line_number = input.location_line();

	let (input, prefix) = opt(terminated(identifier, (char(':'), space0))).parse(input)?;
	let (input, fail) = opt(char('!')).parse(input)?;
	let (input, name) = identifier(input)?;
	let (input, args) = many0(preceded(space1, argument)).parse(input)?;
	let (input, _) = space0(input)?;
	let (input, _) = opt((tag("#"), not_line_ending)).parse(input)?;
	let (input, _) = alt((line_ending, eof)).parse(input)?;

	Ok((
		input,
		Command {
			name: name.fragment().to_string(),
			args,
			prefix: prefix.map(|p| p.fragment().to_string()),
			fail: fail.is_some(),
			line_number,
		},
	))
}

fn identifier(input: Span) -> IResult<Span, Span> {
	recognize((
		satisfy(|c: char| c.is_alphabetic() || c == '_'),
		take_while(|c: char| c.is_alphanumeric() || c == '_' || c == '-' || c == '.'),
	))
	.parse(input)
}

fn argument(input: Span) -> IResult<Span, Argument> {
	alt((keyed_argument, value.map(|value| Argument {
		key: None,
		value,
	})))
	.parse(input)
}

fn keyed_argument(input: Span) -> IResult<Span, Argument> {
	let (input, key) = identifier(input)?;
	let (input, _) = (char('='), not(peek(char('=')))).parse(input)?;
	let (input, value) = value(input)?;
	Ok((
		input,
		Argument {
			key: Some(key.fragment().to_string()),
			value,
		},
	))
}

fn value(input: Span) -> IResult<Span, String> {
	alt((quoted, bare)).parse(input)
}

fn bare(input: Span) -> IResult<Span, String> {
	let (input, _) = not(peek(alt((char('#'), char('\''), char('"'))))).parse(input)?;
	let (input, value) = take_while1(|c: char| !c.is_whitespace()).parse(input)?;
	Ok((input, value.fragment().to_string()))
}

/// A single or double quoted string with `\\`, `\'`, `\"`, `\n` and `\t` escapes.
fn quoted(input: Span) -> IResult<Span, String> {
	let fragment = *input.fragment();
	let mut chars = fragment.char_indices();

	let quote = match chars.next() {
		Some((_, c)) if c == '\'' || c == '"' => c,
		_ => return Err(nom::Err::Error(Error::new(input, ErrorKind::Char))),
	};

	let mut result = String::new();
	while let Some((idx, c)) = chars.next() {
		match c {
			'\\' => match chars.next() {
				Some((_, 'n')) => result.push('\n'),
				Some((_, 't')) => result.push('\t'),
				Some((_, escaped)) if escaped == '\\' || escaped == '\'' || escaped == '"' => {
					result.push(escaped)
				}
				_ => return Err(nom::Err::Failure(Error::new(input.take_from(idx), ErrorKind::Escaped))),
			},
			'\n' | '\r' => break,
			c if c == quote => {
				let (rest, _) = input.take_split(idx + c.len_utf8());
				return Ok((rest, result));
			}
			c => result.push(c),
		}
	}

	Err(nom::Err::Failure(Error::new(input, ErrorKind::Char)))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_single_block() {
		let blocks = parse("tx map 1\n---\nok\n").unwrap();
		assert_eq!(blocks.len(), 1);
		assert_eq!(blocks[0].literal, "tx map 1\n");
		let command = &blocks[0].commands[0];
		assert_eq!(command.name, "tx");
		let values: Vec<&str> = command.args.iter().map(|a| a.value.as_str()).collect();
		assert_eq!(values, vec!["map", "1"]);
	}

	#[test]
	fn test_comments_belong_to_block() {
		let blocks = parse("# first\n\ntx map 1\n---\nok\n\n# second\nrx map 2\n---\nok\n").unwrap();
		assert_eq!(blocks.len(), 2);
		assert_eq!(blocks[0].literal, "# first\n\ntx map 1\n");
		assert_eq!(blocks[1].literal, "# second\nrx map 2\n");
		assert_eq!(blocks[1].line_number, 7);
		assert_eq!(blocks[1].commands[0].line_number, 8);
	}

	#[test]
	fn test_trailing_comment_block() {
		let blocks = parse("tx map 1\n---\nok\n\n# the end\n").unwrap();
		assert_eq!(blocks.len(), 2);
		assert!(blocks[1].commands.is_empty());
		assert_eq!(blocks[1].literal, "# the end\n");
	}

	#[test]
	fn test_fail_and_prefix() {
		let blocks = parse("a: !tx map x\n---\nerror\n").unwrap();
		let command = &blocks[0].commands[0];
		assert!(command.fail);
		assert_eq!(command.prefix.as_deref(), Some("a"));
		assert_eq!(command.name, "tx");
	}

	#[test]
	fn test_quoted_and_keyed_arguments() {
		let blocks = parse("tx 'map \"hi\"' arithmetic=undefined a==1\n---\nok\n").unwrap();
		let args = &blocks[0].commands[0].args;
		assert_eq!(args[0].key, None);
		assert_eq!(args[0].value, "map \"hi\"");
		assert_eq!(args[1].key.as_deref(), Some("arithmetic"));
		assert_eq!(args[1].value, "undefined");
		assert_eq!(args[2].key, None);
		assert_eq!(args[2].value, "a==1");
	}

	#[test]
	fn test_symbols_are_bare_arguments() {
		let blocks = parse("tx from [{a: 1}] | filter a != 1\n---\nok\n").unwrap();
		let values: Vec<&str> = blocks[0].commands[0].args.iter().map(|a| a.value.as_str()).collect();
		assert_eq!(values.join(" "), "from [{a: 1}] | filter a != 1");
	}

	#[test]
	fn test_multiple_commands() {
		let blocks = parse("tx map 1\nrx map 2\n---\nok\n").unwrap();
		assert_eq!(blocks[0].commands.len(), 2);
	}

	#[test]
	fn test_missing_separator() {
		let err = parse("tx map 1\n").unwrap_err();
		assert!(matches!(err, ParseError::Syntax { line: 1, .. }));
	}

	#[test]
	fn test_unterminated_quote() {
		assert!(parse("tx 'map 1\n---\nok\n").is_err());
	}
}
