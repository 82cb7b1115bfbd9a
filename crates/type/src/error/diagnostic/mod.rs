// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::Fragment;

pub mod ast;
pub mod number;
pub mod params;
pub mod query;
mod render;
pub mod transaction;

pub use render::{DefaultRenderer, DiagnosticRenderer};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagnostic {
	pub code: String,
	pub statement: Option<String>,
	pub message: String,
	pub fragment: Option<Fragment>,
	pub label: Option<String>,
	pub help: Option<String>,
	pub notes: Vec<String>,
	pub cause: Option<Box<Diagnostic>>,
}

impl Diagnostic {
	/// Sets the statement on this diagnostic and every diagnostic in its cause chain.
	pub fn with_statement(&mut self, statement: String) {
		if let Some(cause) = &mut self.cause {
			cause.with_statement(statement.clone());
		}
		self.statement = Some(statement);
	}

	pub fn with_cause(mut self, cause: Diagnostic) -> Self {
		self.cause = Some(Box::new(cause));
		self
	}
}

impl Display for Diagnostic {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_fmt(format_args!("{}", self.code))
	}
}
