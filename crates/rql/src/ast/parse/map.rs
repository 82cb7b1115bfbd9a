// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use crate::ast::{AstMap, parse::Parser};

impl Parser<'_> {
	/// `map` and `select` are interchangeable.
	pub(crate) fn parse_map(&mut self) -> crate::Result<AstMap> {
		let token = self.advance()?;
		let nodes = self.parse_projections()?;
		Ok(AstMap {
			token,
			nodes,
		})
	}
}

#[cfg(test)]
mod tests {
	use crate::ast::{Ast, parse_str};

	#[test]
	fn test_constant_number() {
		let result = parse_str("map 1").unwrap();
		assert_eq!(result.len(), 1);

		let map = result[0].first_unchecked().as_map();
		assert_eq!(map.nodes.len(), 1);
		assert_eq!(map.nodes[0].value(), "1");
	}

	#[test]
	fn test_select_is_map() {
		let result = parse_str("SELECT 1, 2").unwrap();
		let map = result[0].first_unchecked().as_map();
		assert_eq!(map.token.value(), "SELECT");
		assert_eq!(map.nodes.len(), 2);
	}

	#[test]
	fn test_multiple_columns() {
		let result = parse_str("map name, age").unwrap();
		let map = result[0].first_unchecked().as_map();
		assert_eq!(map.nodes[0].as_identifier().name(), "name");
		assert_eq!(map.nodes[1].as_identifier().name(), "age");
	}

	#[test]
	fn test_braces() {
		let result = parse_str("map { 1, a + 2 }").unwrap();
		let map = result[0].first_unchecked().as_map();
		assert_eq!(map.nodes.len(), 2);
		assert!(matches!(map.nodes[1], Ast::Infix(_)));
	}

	#[test]
	fn test_unclosed_braces() {
		let err = parse_str("map { 1, 2").unwrap_err();
		assert_eq!(err.code(), "AST_002");
	}

	#[test]
	fn test_empty_map() {
		let err = parse_str("map").unwrap_err();
		assert_eq!(err.code(), "AST_002");
	}
}
