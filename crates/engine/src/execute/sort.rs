// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use std::cmp::Ordering;

use reifydb_rql::plan::{SortDirection, SortKey};
use reifydb_type::{Value, diagnostic::query::column_not_found, number, return_error};

use crate::{
	columnar::{Column, Columns},
	execute::Executor,
};

impl Executor<'_> {
	/// Stable multi-key sort. Undefined values go last regardless of direction.
	pub(crate) fn sort(&mut self, input: Columns, keys: &[SortKey]) -> crate::Result<Columns> {
		let mut resolved: Vec<(&Column, SortDirection)> = Vec::with_capacity(keys.len());
		for key in keys {
			let Some(column) = input.column(key.column.text()) else {
				return_error!(column_not_found(key.column.clone()));
			};
			resolved.push((column, key.direction));
		}

		let mut indices: Vec<usize> = (0..input.row_count()).collect();
		indices.sort_by(|&a, &b| {
			for (column, direction) in &resolved {
				let ordering = compare(&column.data[a], &column.data[b], *direction);
				if ordering != Ordering::Equal {
					return ordering;
				}
			}
			Ordering::Equal
		});

		Ok(input.reorder(&indices))
	}
}

fn compare(l: &Value, r: &Value, direction: SortDirection) -> Ordering {
	match (l.is_undefined(), r.is_undefined()) {
		(true, true) => Ordering::Equal,
		(true, false) => Ordering::Greater,
		(false, true) => Ordering::Less,
		(false, false) => {
			let ordering = number::compare(l, r).unwrap_or(Ordering::Equal);
			match direction {
				SortDirection::Asc => ordering,
				SortDirection::Desc => ordering.reverse(),
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use reifydb_type::Value;

	use crate::execute::tests::run;

	const DATA: &str = "from [{n: 'a', v: 2}, {n: 'b', v: 1}, {n: 'c'}, {n: 'd', v: 2}, {n: 'e', v: 3}]";

	fn names(rql: &str) -> Vec<Value> {
		run(rql).unwrap().column("n").unwrap().data.clone()
	}

	#[test]
	fn test_ascending_by_default() {
		assert_eq!(
			names(&format!("{DATA} sort v")),
			vec![Value::utf8("b"), Value::utf8("a"), Value::utf8("d"), Value::utf8("e"), Value::utf8("c")]
		);
	}

	#[test]
	fn test_descending_keeps_undefined_last() {
		assert_eq!(
			names(&format!("{DATA} sort v desc")),
			vec![Value::utf8("e"), Value::utf8("a"), Value::utf8("d"), Value::utf8("b"), Value::utf8("c")]
		);
	}

	#[test]
	fn test_multiple_keys() {
		assert_eq!(
			names(&format!("{DATA} sort {{v desc, n desc}}")),
			vec![Value::utf8("e"), Value::utf8("d"), Value::utf8("a"), Value::utf8("b"), Value::utf8("c")]
		);
	}

	#[test]
	fn test_unknown_column() {
		let err = run(&format!("{DATA} sort missing")).unwrap_err();
		assert_eq!(err.code(), "QUERY_001");
	}
}
