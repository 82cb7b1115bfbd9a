// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use clap::ValueEnum;
use reifydb::{
	Error,
	rql::explain::{explain_ast, explain_plan, explain_tokenize},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Stage {
	/// The token stream
	Tokenize,
	/// The syntax tree
	Ast,
	/// The operator pipeline of every statement
	Plan,
}

pub fn explain(stage: Stage, query: &str) -> Result<String, Error> {
	let text = match stage {
		Stage::Tokenize => explain_tokenize(query),
		Stage::Ast => explain_ast(query),
		Stage::Plan => explain_plan(query),
	};
	text.map_err(|err| err.with_statement(query))
}
