// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use std::{collections::VecDeque, error::Error, str::FromStr};

use crate::testscript::ParseError;

/// A group of commands sharing one `---` output section.
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
	/// The raw script text of the block up to the `---` separator, including comments.
	pub literal: String,
	pub commands: Vec<Command>,
	pub line_number: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Command {
	pub name: String,
	pub args: Vec<Argument>,
	pub prefix: Option<String>,
	/// The command is expected to fail.
	pub fail: bool,
	pub line_number: u32,
}

impl Command {
	pub fn consume_args(&self) -> ArgumentConsumer<'_> {
		ArgumentConsumer::new(&self.args)
	}
}

/// `key=value` or a positional `value`.
#[derive(Debug, Clone, PartialEq)]
pub struct Argument {
	pub key: Option<String>,
	pub value: String,
}

impl Argument {
	pub fn name(&self) -> &str {
		match &self.key {
			Some(key) => key,
			None => &self.value,
		}
	}

	pub fn parse<T>(&self) -> Result<T, Box<dyn Error>>
	where
		T: FromStr,
		T::Err: std::fmt::Display,
	{
		self.value.parse().map_err(|e: T::Err| {
			Box::new(ParseError::InvalidValue {
				key: self.key.clone().unwrap_or_default(),
				value: self.value.clone(),
				reason: e.to_string(),
			}) as Box<dyn Error>
		})
	}
}

/// Hands out a command's arguments one at a time and rejects whatever is left.
pub struct ArgumentConsumer<'a> {
	args: VecDeque<&'a Argument>,
}

impl<'a> ArgumentConsumer<'a> {
	fn new(args: &'a [Argument]) -> Self {
		Self {
			args: args.iter().collect(),
		}
	}

	/// Removes and returns the last argument with the given key.
	pub fn lookup(&mut self, key: &str) -> Option<&'a Argument> {
		let position = self.args.iter().rposition(|a| a.key.as_deref() == Some(key))?;
		let argument = self.args.remove(position);
		self.args.retain(|a| a.key.as_deref() != Some(key));
		argument
	}

	pub fn lookup_parse<T>(&mut self, key: &str) -> Result<Option<T>, Box<dyn Error>>
	where
		T: FromStr,
		T::Err: std::fmt::Display,
	{
		self.lookup(key).map(|a| a.parse()).transpose()
	}

	pub fn next_pos(&mut self) -> Option<&'a Argument> {
		let position = self.args.iter().position(|a| a.key.is_none())?;
		self.args.remove(position)
	}

	pub fn rest_pos(&mut self) -> Vec<&'a Argument> {
		let (positional, keyed): (Vec<_>, Vec<_>) = self.args.drain(..).partition(|a| a.key.is_none());
		self.args.extend(keyed);
		positional
	}

	pub fn reject_rest(&self) -> Result<(), Box<dyn Error>> {
		match self.args.front() {
			Some(argument) => Err(Box::new(ParseError::UnexpectedArgument(argument.name().to_string()))),
			None => Ok(()),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn command(args: Vec<Argument>) -> Command {
		Command {
			name: "test".to_string(),
			args,
			prefix: None,
			fail: false,
			line_number: 1,
		}
	}

	fn pos(value: &str) -> Argument {
		Argument {
			key: None,
			value: value.to_string(),
		}
	}

	fn kv(key: &str, value: &str) -> Argument {
		Argument {
			key: Some(key.to_string()),
			value: value.to_string(),
		}
	}

	#[test]
	fn test_consume_positional_and_keyed() {
		let command = command(vec![pos("a"), kv("n", "1"), pos("b"), kv("n", "2")]);
		let mut args = command.consume_args();

		assert_eq!(args.lookup_parse::<u32>("n").unwrap(), Some(2));
		assert_eq!(args.next_pos().unwrap().value, "a");
		assert_eq!(args.next_pos().unwrap().value, "b");
		assert!(args.next_pos().is_none());
		args.reject_rest().unwrap();
	}

	#[test]
	fn test_reject_rest() {
		let command = command(vec![pos("a"), kv("extra", "x")]);
		let mut args = command.consume_args();
		args.next_pos();
		let err = args.reject_rest().unwrap_err();
		assert_eq!(err.to_string(), "unexpected argument 'extra'");
	}

	#[test]
	fn test_rest_pos() {
		let command = command(vec![pos("a"), kv("k", "v"), pos("b")]);
		let mut args = command.consume_args();
		let rest: Vec<&str> = args.rest_pos().iter().map(|a| a.value.as_str()).collect();
		assert_eq!(rest, vec!["a", "b"]);
		assert!(args.lookup("k").is_some());
	}

	#[test]
	fn test_invalid_value() {
		let command = command(vec![kv("n", "abc")]);
		let mut args = command.consume_args();
		assert!(args.lookup_parse::<u32>("n").is_err());
	}
}
