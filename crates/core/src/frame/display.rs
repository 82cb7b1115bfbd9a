// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use std::fmt::{self, Display, Formatter};

use unicode_width::UnicodeWidthStr;

use crate::Frame;

fn escape_control_chars(s: &str) -> String {
	s.replace('\n', "\\n").replace('\t', "\\t")
}

fn centered(value: &str, width: usize) -> String {
	let pad = width.saturating_sub(value.width());
	let l = pad / 2;
	let r = pad - l;
	format!(" {:l$}{}{:r$} ", "", value, "")
}

impl Display for Frame {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		if self.columns.is_empty() {
			return Ok(());
		}

		let row_count = self.row_count();

		let mut col_widths: Vec<usize> = Vec::with_capacity(self.columns.len());
		for col in &self.columns {
			let header_width = escape_control_chars(&col.name).width();
			let mut max_val_width = 0;
			for i in 0..row_count {
				max_val_width = max_val_width.max(escape_control_chars(&col.as_string(i)).width());
			}
			col_widths.push(header_width.max(max_val_width) + 2);
		}

		let sep: String = col_widths.iter().map(|w| format!("+{}", "-".repeat(*w + 2))).collect::<String>() + "+";

		writeln!(f, "{}", sep)?;

		let header_parts: Vec<String> = self
			.columns
			.iter()
			.zip(&col_widths)
			.map(|(col, w)| centered(&escape_control_chars(&col.name), *w))
			.collect();
		writeln!(f, "|{}|", header_parts.join("|"))?;
		writeln!(f, "{}", sep)?;

		for row_idx in 0..row_count {
			let row_parts: Vec<String> = self
				.columns
				.iter()
				.zip(&col_widths)
				.map(|(col, w)| centered(&escape_control_chars(&col.as_string(row_idx)), *w))
				.collect();
			writeln!(f, "|{}|", row_parts.join("|"))?;
		}

		writeln!(f, "{}", sep)
	}
}

#[cfg(test)]
mod tests {
	use reifydb_type::{Type, Value};

	use crate::{Frame, FrameColumn};

	#[test]
	fn test_map_literals() {
		let frame = Frame::new(vec![
			FrameColumn::new("1", Type::Int1, vec![Value::Int1(1)]),
			FrameColumn::new("1 + 4", Type::Int1, vec![Value::Int1(5)]),
		]);

		let expected = "\
+-----+---------+
|  1  |  1 + 4  |
+-----+---------+
|  1  |    5    |
+-----+---------+
";
		assert_eq!(frame.to_string(), expected);
	}

	#[test]
	fn test_undefined_and_text() {
		let frame = Frame::new(vec![
			FrameColumn::new("name", Type::Utf8, vec![Value::utf8("Alice"), Value::utf8("Bo")]),
			FrameColumn::new("age", Type::Int1, vec![Value::Int1(30), Value::Undefined]),
		]);

		let expected = "\
+---------+-------------+
|  name   |     age     |
+---------+-------------+
|  Alice  |     30      |
|   Bo    |  Undefined  |
+---------+-------------+
";
		assert_eq!(frame.to_string(), expected);
	}

	#[test]
	fn test_escapes_control_chars() {
		let frame = Frame::new(vec![FrameColumn::new("t", Type::Utf8, vec![Value::utf8("a\nb")])]);

		let expected = "\
+--------+
|   t    |
+--------+
|  a\\nb  |
+--------+
";
		assert_eq!(frame.to_string(), expected);
	}

	#[test]
	fn test_header_only() {
		let frame = Frame::new(vec![FrameColumn::new("a", Type::Int4, vec![])]);
		assert_eq!(frame.to_string(), "+-----+\n|  a  |\n+-----+\n+-----+\n");
	}

	#[test]
	fn test_no_columns_renders_nothing() {
		assert_eq!(Frame::default().to_string(), "");
	}

	#[test]
	fn test_wide_characters() {
		let frame = Frame::new(vec![FrameColumn::new("x", Type::Utf8, vec![Value::utf8("日本")])]);
		assert!(frame.to_string().starts_with("+--------+\n|   x    |\n"));
	}
}
