// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use indexmap::IndexMap;
use reifydb_rql::expression::AliasExpression;
use reifydb_type::{Type, Value, diagnostic::query::incompatible_inline_values, return_error};

use crate::{
	columnar::{Column, Columns},
	evaluate::evaluate,
	execute::Executor,
};

impl Executor<'_> {
	/// Turns `from [ {...}, ... ]` rows into columns, ordered by the first appearance of each key.
	pub(crate) fn inline_data(&mut self, rows: Vec<Vec<AliasExpression>>) -> crate::Result<Columns> {
		let row_count = rows.len();
		let single = Columns::single_row();
		let ctx = self.context(&single);

		let mut values: IndexMap<String, Vec<Value>> = IndexMap::new();
		for (row, fields) in rows.iter().enumerate() {
			for field in fields {
				let column = evaluate(&field.expression, &ctx)?;
				let value = column.data.into_iter().next().unwrap_or(Value::Undefined);

				let entry = values.entry(field.alias.name().to_string()).or_default();
				// a key repeated within one row overwrites its earlier value
				entry.resize(row, Value::Undefined);
				entry.push(value);
			}
		}

		let mut columns = Vec::with_capacity(values.len());
		for (name, mut data) in values {
			data.resize(row_count, Value::Undefined);
			columns.push(typed_column(name, data)?);
		}

		Ok(Columns::with_row_count(columns, row_count))
	}
}

fn typed_column(name: String, data: Vec<Value>) -> crate::Result<Column> {
	let mut ty = Type::Undefined;
	for value in &data {
		ty = match (ty, value.get_type()) {
			(Type::Undefined, t) | (t, Type::Undefined) => t,
			(l, r) if l == r => l,
			(l, r) if l.is_number() && r.is_number() => Type::promote(l, r),
			(l, r) => return_error!(incompatible_inline_values(&name, l, r)),
		};
	}

	let mut promoted = Vec::with_capacity(data.len());
	for value in data {
		match value.promote_to(ty) {
			Some(value) => promoted.push(value),
			None => return_error!(incompatible_inline_values(&name, ty, value.get_type())),
		}
	}

	Ok(Column::new(name, ty, promoted))
}

#[cfg(test)]
mod tests {
	use reifydb_type::{Type, Value};

	use crate::execute::tests::run;

	#[test]
	fn test_columns_in_first_seen_order() {
		let frame = run("from [{name: 'Alice', age: 30}, {age: 25, name: 'Bob', city: 'Berlin'}]").unwrap();
		assert_eq!(frame.headers(), vec!["name".to_string(), "age".to_string(), "city".to_string()]);
		assert_eq!(frame.row_count(), 2);
		assert_eq!(frame.column("city").unwrap().data, vec![Value::Undefined, Value::utf8("Berlin")]);
	}

	#[test]
	fn test_missing_key_is_undefined() {
		let frame = run("from [{a: 1}, {b: 2}]").unwrap();
		assert_eq!(frame.column("a").unwrap().data, vec![Value::Int1(1), Value::Undefined]);
		assert_eq!(frame.column("b").unwrap().data, vec![Value::Undefined, Value::Int1(2)]);
	}

	#[test]
	fn test_numeric_promotion() {
		let frame = run("from [{a: 1}, {a: 1000}, {a: 1.5}]").unwrap();
		let column = frame.column("a").unwrap();
		assert_eq!(column.ty, Type::Float8);
		assert_eq!(column.data, vec![Value::float8(1.0), Value::float8(1000.0), Value::float8(1.5)]);

		let frame = run("from [{a: 1}, {a: 1000}]").unwrap();
		assert_eq!(frame.column("a").unwrap().data, vec![Value::Int2(1), Value::Int2(1000)]);
	}

	#[test]
	fn test_mixed_types() {
		let err = run("from [{a: 1}, {a: 'one'}]").unwrap_err();
		assert_eq!(err.code(), "QUERY_004");
		assert_eq!(err.0.message, "column `a` mixes values of type Int1 and Utf8");
	}

	#[test]
	fn test_repeated_key_overwrites() {
		let frame = run("from [{a: 1, a: 2}]").unwrap();
		assert_eq!(frame.row_count(), 1);
		assert_eq!(frame.column("a").unwrap().data, vec![Value::Int1(2)]);
	}

	#[test]
	fn test_empty() {
		let frame = run("from []").unwrap();
		assert!(frame.columns.is_empty());
	}

	#[test]
	fn test_expression_values() {
		let frame = run("from [{a: 1 + 2, b: -4}]").unwrap();
		assert_eq!(frame.column("a").unwrap().data, vec![Value::Int1(3)]);
		assert_eq!(frame.column("b").unwrap().data, vec![Value::Int1(-4)]);
	}
}
