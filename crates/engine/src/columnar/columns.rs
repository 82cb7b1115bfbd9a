// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use reifydb_core::Frame;

use crate::columnar::Column;

/// The intermediate result flowing between operators.
///
/// The row count is tracked separately so that an input without columns can still have rows,
/// which is what a pipeline without a source starts from.
#[derive(Debug, Clone, PartialEq)]
pub struct Columns {
	pub columns: Vec<Column>,
	row_count: usize,
}

impl Columns {
	pub fn new(columns: Vec<Column>) -> Self {
		let row_count = columns.first().map_or(0, Column::len);
		Self {
			columns,
			row_count,
		}
	}

	/// For inputs whose rows are known even without columns, like `from [{}]`.
	pub fn with_row_count(columns: Vec<Column>, row_count: usize) -> Self {
		Self {
			columns,
			row_count,
		}
	}

	/// One row and no columns.
	pub fn single_row() -> Self {
		Self {
			columns: vec![],
			row_count: 1,
		}
	}

	pub fn empty() -> Self {
		Self {
			columns: vec![],
			row_count: 0,
		}
	}

	pub fn row_count(&self) -> usize {
		self.row_count
	}

	/// Looks a column up by name; with duplicates the most recently added one wins.
	pub fn column(&self, name: &str) -> Option<&Column> {
		self.columns.iter().rev().find(|c| c.name == name)
	}

	pub fn filter(&self, mask: &[bool]) -> Self {
		Self {
			columns: self.columns.iter().map(|c| c.filter(mask)).collect(),
			row_count: mask.iter().filter(|keep| **keep).count(),
		}
	}

	pub fn take(&self, n: usize) -> Self {
		Self {
			columns: self.columns.iter().map(|c| c.take(n)).collect(),
			row_count: self.row_count.min(n),
		}
	}

	pub fn reorder(&self, indices: &[usize]) -> Self {
		Self {
			columns: self.columns.iter().map(|c| c.reorder(indices)).collect(),
			row_count: indices.len(),
		}
	}

	pub fn into_frame(self) -> Frame {
		Frame::new(self.columns.into_iter().map(Into::into).collect())
	}
}
