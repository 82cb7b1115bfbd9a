// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use std::collections::BTreeMap;

use crate::ast::tokenize::{Token, TokenKind, tokenize};

pub fn explain_tokenize(query: &str) -> crate::Result<String> {
	let tokens = tokenize(query)?;

	let mut lines: BTreeMap<u32, Vec<(usize, &Token)>> = BTreeMap::new();
	for (i, token) in tokens.iter().enumerate() {
		lines.entry(token.fragment.line).or_default().push((i, token));
	}

	let mut result = String::new();

	for (line, tokens) in lines {
		result.push_str(&format!("Line {}:\n", line));
		for (i, token) in tokens {
			let label = match &token.kind {
				TokenKind::Identifier => format!("Identifier(\"{}\")", token.value()),
				TokenKind::Keyword(kw) => format!("Keyword({:?})", kw),
				TokenKind::Literal(lit) => format!("Literal({:?}, \"{}\")", lit, token.value()),
				TokenKind::Operator(op) => format!("Operator({:?})", op),
				TokenKind::Parameter => format!("Parameter(\"{}\")", token.value()),
				TokenKind::Separator(sep) => format!("Separator({:?})", sep),
			};

			result.push_str(&format!("  [{:>3}] {}\n", i, label));
		}
	}

	Ok(result)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_explain_tokenize() {
		let result = explain_tokenize("map 1,\n  'a' + $1").unwrap();
		let expected = "\
Line 1:
  [  0] Keyword(Map)
  [  1] Literal(Number, \"1\")
  [  2] Separator(Comma)
Line 2:
  [  3] Literal(Text, \"a\")
  [  4] Operator(Plus)
  [  5] Parameter(\"$1\")
";
		assert_eq!(result, expected);
	}
}
