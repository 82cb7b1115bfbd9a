// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use crate::{OrderedF64, Value};

pub fn parse_float(text: &str) -> Option<f64> {
	let text = text.replace('_', "");
	let value = text.parse::<f64>().ok()?;
	value.is_finite().then_some(value)
}

/// Types a numeric literal by its text.
///
/// Text containing `.`, `e` or `E` is a `Float8`, anything else becomes the smallest signed integer type that
/// holds the value, falling back to `Uint16`. Returns `None` when the literal does not fit any type.
pub fn parse_number_literal(text: &str) -> Option<Value> {
	let text = text.replace('_', "");

	if text.contains(['.', 'e', 'E']) {
		let value = parse_float(&text)?;
		return OrderedF64::try_from(value).ok().map(Value::Float8);
	}

	if let Ok(v) = text.parse::<i8>() {
		Some(Value::Int1(v))
	} else if let Ok(v) = text.parse::<i16>() {
		Some(Value::Int2(v))
	} else if let Ok(v) = text.parse::<i32>() {
		Some(Value::Int4(v))
	} else if let Ok(v) = text.parse::<i64>() {
		Some(Value::Int8(v))
	} else if let Ok(v) = text.parse::<i128>() {
		Some(Value::Int16(v))
	} else if let Ok(v) = text.parse::<u128>() {
		Some(Value::Uint16(v))
	} else {
		None
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_smallest_signed_type() {
		assert_eq!(parse_number_literal("1"), Some(Value::Int1(1)));
		assert_eq!(parse_number_literal("127"), Some(Value::Int1(127)));
		assert_eq!(parse_number_literal("128"), Some(Value::Int2(128)));
		assert_eq!(parse_number_literal("-128"), Some(Value::Int1(-128)));
		assert_eq!(parse_number_literal("40000"), Some(Value::Int4(40000)));
		assert_eq!(parse_number_literal("3000000000"), Some(Value::Int8(3000000000)));
	}

	#[test]
	fn test_falls_back_to_uint16() {
		let max = u128::MAX.to_string();
		assert_eq!(parse_number_literal(&max), Some(Value::Uint16(u128::MAX)));
	}

	#[test]
	fn test_out_of_range() {
		assert_eq!(parse_number_literal("340282366920938463463374607431768211456"), None);
	}

	#[test]
	fn test_underscores() {
		assert_eq!(parse_number_literal("1_000"), Some(Value::Int2(1000)));
	}

	#[test]
	fn test_float() {
		assert_eq!(parse_number_literal("1.5"), Some(Value::float8(1.5)));
		assert_eq!(parse_number_literal("2e3"), Some(Value::float8(2000.0)));
		assert_eq!(parse_number_literal("1e400"), None);
	}
}
