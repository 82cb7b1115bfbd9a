// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use reifydb_core::FrameColumn;
use reifydb_type::{Type, Value};

/// A named, typed vector of values. `ty` is the type of the defined values, `Undefined` when nothing types them.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
	pub name: String,
	pub ty: Type,
	pub data: Vec<Value>,
}

impl Column {
	pub fn new(name: impl Into<String>, ty: Type, data: Vec<Value>) -> Self {
		Self {
			name: name.into(),
			ty,
			data,
		}
	}

	/// Repeats `value` `row_count` times.
	pub fn broadcast(name: impl Into<String>, value: Value, row_count: usize) -> Self {
		let ty = value.get_type();
		Self::new(name, ty, vec![value; row_count])
	}

	pub fn undefined(name: impl Into<String>, row_count: usize) -> Self {
		Self::new(name, Type::Undefined, vec![Value::Undefined; row_count])
	}

	pub fn len(&self) -> usize {
		self.data.len()
	}

	pub fn is_empty(&self) -> bool {
		self.data.is_empty()
	}

	pub fn with_name(mut self, name: impl Into<String>) -> Self {
		self.name = name.into();
		self
	}

	/// Keeps the values whose position in `mask` is `true`.
	pub fn filter(&self, mask: &[bool]) -> Self {
		let data = self.data.iter().zip(mask).filter(|(_, keep)| **keep).map(|(v, _)| v.clone()).collect();
		Self::new(self.name.clone(), self.ty, data)
	}

	pub fn take(&self, n: usize) -> Self {
		Self::new(self.name.clone(), self.ty, self.data.iter().take(n).cloned().collect())
	}

	/// Rearranges the values so that row `i` of the result is row `indices[i]` of `self`.
	pub fn reorder(&self, indices: &[usize]) -> Self {
		let data = indices.iter().map(|&i| self.data.get(i).cloned().unwrap_or(Value::Undefined)).collect();
		Self::new(self.name.clone(), self.ty, data)
	}
}

impl From<Column> for FrameColumn {
	fn from(column: Column) -> Self {
		FrameColumn::new(column.name, column.ty, column.data)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_broadcast() {
		let column = Column::broadcast("x", Value::Int1(3), 2);
		assert_eq!(column.ty, Type::Int1);
		assert_eq!(column.data, vec![Value::Int1(3), Value::Int1(3)]);
	}

	#[test]
	fn test_filter() {
		let column = Column::new("x", Type::Int1, vec![Value::Int1(1), Value::Int1(2), Value::Int1(3)]);
		let filtered = column.filter(&[true, false, true]);
		assert_eq!(filtered.data, vec![Value::Int1(1), Value::Int1(3)]);
	}

	#[test]
	fn test_reorder() {
		let column = Column::new("x", Type::Utf8, vec![Value::utf8("a"), Value::utf8("b")]);
		assert_eq!(column.reorder(&[1, 0]).data, vec![Value::utf8("b"), Value::utf8("a")]);
	}

	#[test]
	fn test_take_more_than_len() {
		let column = Column::new("x", Type::Int1, vec![Value::Int1(1)]);
		assert_eq!(column.take(5).len(), 1);
	}
}
