// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

pub use ast::explain_ast;
pub use plan::explain_plan;
pub use tokenize::explain_tokenize;

mod ast;
mod plan;
mod tokenize;

fn branch(is_last: bool) -> &'static str {
	if is_last { "└──" } else { "├──" }
}

fn child_prefix(prefix: &str, is_last: bool) -> String {
	format!("{}{}", prefix, if is_last { "    " } else { "│   " })
}
