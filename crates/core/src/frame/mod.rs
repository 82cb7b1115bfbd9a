// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use std::ops::{Deref, Index};

use reifydb_type::Value;
use serde::{Serialize, Serializer, ser::SerializeStruct};

pub use column::FrameColumn;

mod column;
mod display;

/// The result of one statement: named, typed columns of equal length.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Frame {
	pub columns: Vec<FrameColumn>,
}

impl Frame {
	pub fn new(columns: Vec<FrameColumn>) -> Self {
		Self {
			columns,
		}
	}

	pub fn row_count(&self) -> usize {
		self.columns.first().map_or(0, |c| c.data.len())
	}

	pub fn headers(&self) -> Vec<String> {
		self.columns.iter().map(|c| c.name.clone()).collect()
	}

	pub fn rows(&self) -> Vec<Vec<Value>> {
		(0..self.row_count()).filter_map(|i| self.get_row(i)).collect()
	}

	pub fn get_row(&self, index: usize) -> Option<Vec<Value>> {
		if index >= self.row_count() {
			return None;
		}
		Some(self.columns.iter().map(|c| c.data.get(index).cloned().unwrap_or(Value::Undefined)).collect())
	}

	pub fn column(&self, name: &str) -> Option<&FrameColumn> {
		self.columns.iter().find(|c| c.name == name)
	}
}

impl Deref for Frame {
	type Target = [FrameColumn];

	fn deref(&self) -> &Self::Target {
		&self.columns
	}
}

impl Index<usize> for Frame {
	type Output = FrameColumn;

	fn index(&self, index: usize) -> &Self::Output {
		self.columns.index(index)
	}
}

impl Serialize for Frame {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		let rows: Vec<Vec<String>> =
			(0..self.row_count()).map(|i| self.columns.iter().map(|c| c.as_string(i)).collect()).collect();

		let mut state = serializer.serialize_struct("Frame", 2)?;
		state.serialize_field("headers", &self.headers())?;
		state.serialize_field("rows", &rows)?;
		state.end()
	}
}

#[cfg(test)]
mod tests {
	use reifydb_type::Type;

	use super::*;

	fn frame() -> Frame {
		Frame::new(vec![
			FrameColumn::new("1", Type::Int1, vec![Value::Int1(1)]),
			FrameColumn::new("1 + 4", Type::Int1, vec![Value::Int1(5)]),
		])
	}

	#[test]
	fn test_headers_and_rows() {
		let frame = frame();
		assert_eq!(frame.headers(), vec!["1".to_string(), "1 + 4".to_string()]);
		assert_eq!(frame.rows(), vec![vec![Value::Int1(1), Value::Int1(5)]]);
		assert_eq!(frame.row_count(), 1);
	}

	#[test]
	fn test_get_row_out_of_range() {
		assert_eq!(frame().get_row(1), None);
	}

	#[test]
	fn test_column_by_name() {
		let frame = frame();
		assert_eq!(frame.column("1 + 4").map(|c| c.ty), Some(Type::Int1));
		assert!(frame.column("missing").is_none());
	}

	#[test]
	fn test_empty_frame() {
		let frame = Frame::default();
		assert_eq!(frame.row_count(), 0);
		assert!(frame.headers().is_empty());
		assert!(frame.rows().is_empty());
	}

	#[test]
	fn test_serialize_json() {
		let json = serde_json::to_string(&frame()).unwrap();
		assert_eq!(json, r#"{"headers":["1","1 + 4"],"rows":[["1","5"]]}"#);
	}

	#[test]
	fn test_serialize_undefined() {
		let frame = Frame::new(vec![FrameColumn::new("a", Type::Undefined, vec![Value::Undefined])]);
		let json = serde_json::to_string(&frame).unwrap();
		assert_eq!(json, r#"{"headers":["a"],"rows":[["Undefined"]]}"#);
	}
}
