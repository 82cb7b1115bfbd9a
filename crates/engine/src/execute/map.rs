// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use reifydb_rql::expression::Expression;

use crate::{
	columnar::{Column, Columns},
	evaluate::evaluate,
	execute::Executor,
};

impl Executor<'_> {
	pub(crate) fn map(&mut self, input: Columns, expressions: &[Expression]) -> crate::Result<Columns> {
		let columns = self.project(&input, expressions)?;
		Ok(Columns::with_row_count(columns, input.row_count()))
	}

	pub(crate) fn extend(&mut self, input: Columns, expressions: &[Expression]) -> crate::Result<Columns> {
		let projected = self.project(&input, expressions)?;
		let row_count = input.row_count();

		let mut columns = input.columns;
		columns.extend(projected);
		Ok(Columns::with_row_count(columns, row_count))
	}

	fn project(&self, input: &Columns, expressions: &[Expression]) -> crate::Result<Vec<Column>> {
		let ctx = self.context(input);
		expressions.iter().map(|expr| evaluate(expr, &ctx)).collect()
	}
}

#[cfg(test)]
mod tests {
	use reifydb_type::Value;

	use crate::execute::tests::run;

	#[test]
	fn test_map_replaces_columns() {
		let frame = run("from [{a: 1, b: 2}] map a + b as sum").unwrap();
		assert_eq!(frame.headers(), vec!["sum".to_string()]);
		assert_eq!(frame.rows(), vec![vec![Value::Int1(3)]]);
	}

	#[test]
	fn test_select_is_map() {
		assert_eq!(run("select 1, 1 + 4").unwrap(), run("map 1, 1 + 4").unwrap());
	}

	#[test]
	fn test_map_over_rows() {
		let frame = run("from [{a: 1}, {a: 2}, {a: 3}] map a * 2").unwrap();
		assert_eq!(frame.column("a * 2").unwrap().data, vec![Value::Int1(2), Value::Int1(4), Value::Int1(6)]);
	}

	#[test]
	fn test_map_constant_broadcasts() {
		let frame = run("from [{a: 1}, {a: 2}] map a, 'x'").unwrap();
		assert_eq!(frame.column("x").unwrap().data, vec![Value::utf8("x"), Value::utf8("x")]);
	}

	#[test]
	fn test_extend_keeps_input() {
		let frame = run("from [{a: 1}] extend a + 1 as b").unwrap();
		assert_eq!(frame.headers(), vec!["a".to_string(), "b".to_string()]);
		assert_eq!(frame.rows(), vec![vec![Value::Int1(1), Value::Int1(2)]]);
	}

	#[test]
	fn test_map_unknown_column() {
		let err = run("from [{a: 1}] map b").unwrap_err();
		assert_eq!(err.code(), "QUERY_001");
	}

	#[test]
	fn test_negation_named_by_source_text() {
		let frame = run("map - 5, - -1, -(2), -128").unwrap();
		assert_eq!(
			frame.headers(),
			vec!["- 5".to_string(), "- -1".to_string(), "-(2)".to_string(), "-128".to_string()]
		);
		assert_eq!(frame.rows(), vec![vec![Value::Int1(-5), Value::Int1(1), Value::Int1(-2), Value::Int1(-128)]]);
	}
}
