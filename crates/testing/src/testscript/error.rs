// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

#[derive(Debug, thiserror::Error)]
pub enum ParseError {
	#[error("parse error at line {line} column {column}: {message}\n{source_line}\n{caret}^")]
	Syntax {
		line: u32,
		column: usize,
		message: String,
		source_line: String,
		caret: String,
	},

	#[error("unexpected argument '{0}'")]
	UnexpectedArgument(String),

	#[error("invalid value '{value}' for argument '{key}': {reason}")]
	InvalidValue {
		key: String,
		value: String,
		reason: String,
	},
}
