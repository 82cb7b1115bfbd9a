// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// A piece of RQL source text together with the position it was taken from.
///
/// `text` is the meaningful content (for a quoted literal the quotes are not part of it),
/// while `offset` and `length` describe the raw byte range in the statement.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Fragment {
	pub text: String,
	pub line: u32,
	pub column: u32,
	pub offset: usize,
	pub length: usize,
}

impl Fragment {
	pub fn new(text: impl Into<String>, line: u32, column: u32, offset: usize, length: usize) -> Self {
		Self {
			text: text.into(),
			line,
			column,
			offset,
			length,
		}
	}

	/// A fragment that does not originate from user input.
	pub fn internal(text: impl Into<String>) -> Self {
		let text = text.into();
		let length = text.len();
		Self {
			text,
			line: 0,
			column: 0,
			offset: 0,
			length,
		}
	}

	pub fn text(&self) -> &str {
		self.text.as_str()
	}

	pub fn is_internal(&self) -> bool {
		self.line == 0
	}

	pub fn end(&self) -> usize {
		self.offset + self.length
	}

	/// Spans from the start of the earlier fragment to the end of the later one.
	pub fn merge(&self, other: &Fragment, source: &str) -> Fragment {
		let (first, last) = if self.offset <= other.offset {
			(self, other)
		} else {
			(other, self)
		};

		let start = first.offset;
		let end = first.end().max(last.end());

		let text = match source.get(start..end) {
			Some(text) => text.to_string(),
			None => format!("{} {}", first.text, last.text),
		};

		Fragment {
			text,
			line: first.line,
			column: first.column,
			offset: start,
			length: end - start,
		}
	}
}

impl Display for Fragment {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_str(&self.text)
	}
}

impl From<&str> for Fragment {
	fn from(value: &str) -> Self {
		Fragment::internal(value)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_merge_spans_source_text() {
		let source = "map 1 + 4";
		let left = Fragment::new("1", 1, 5, 4, 1);
		let right = Fragment::new("4", 1, 9, 8, 1);

		let merged = left.merge(&right, source);
		assert_eq!(merged.text(), "1 + 4");
		assert_eq!(merged.column, 5);
		assert_eq!(merged.offset, 4);
		assert_eq!(merged.length, 5);
	}

	#[test]
	fn test_merge_is_order_independent() {
		let source = "map 1 + 4";
		let left = Fragment::new("1", 1, 5, 4, 1);
		let right = Fragment::new("4", 1, 9, 8, 1);

		assert_eq!(right.merge(&left, source), left.merge(&right, source));
	}

	#[test]
	fn test_merge_keeps_quotes_of_text_literal() {
		let source = "map 'a' + 'b'";
		let left = Fragment::new("a", 1, 5, 4, 3);
		let right = Fragment::new("b", 1, 11, 10, 3);

		assert_eq!(left.merge(&right, source).text(), "'a' + 'b'");
	}

	#[test]
	fn test_merge_out_of_source() {
		let left = Fragment::new("a", 1, 1, 100, 1);
		let right = Fragment::new("b", 1, 3, 102, 1);
		assert_eq!(left.merge(&right, "").text(), "a b");
	}
}
