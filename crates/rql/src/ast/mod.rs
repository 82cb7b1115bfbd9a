// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

#[allow(clippy::module_inception)]
mod ast;
pub mod parse;
pub mod tokenize;

pub use ast::*;

/// Tokenizes and parses `rql` into one statement per `;` separated query.
pub fn parse_str(rql: &str) -> crate::Result<Vec<AstStatement>> {
	let tokens = tokenize::tokenize(rql)?;
	parse::parse(rql, tokens)
}
