// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use std::cmp::Ordering;

use crate::Value;

/// Orders two numbers of any numeric type.
///
/// Integers compare exactly; as soon as one side is a float both sides compare as `f64`.
pub fn partial_cmp(l: &Value, r: &Value) -> Option<Ordering> {
	let (lt, rt) = (l.get_type(), r.get_type());
	if !lt.is_number() || !rt.is_number() {
		return None;
	}

	if lt.is_floating_point() || rt.is_floating_point() {
		return l.to_f64()?.partial_cmp(&r.to_f64()?);
	}

	match (l.to_i128(), r.to_i128()) {
		(Some(l), Some(r)) => Some(l.cmp(&r)),
		// at least one side is a Uint16 above i128::MAX
		(Some(_), None) => Some(Ordering::Less),
		(None, Some(_)) => Some(Ordering::Greater),
		(None, None) => Some(l.to_u128()?.cmp(&r.to_u128()?)),
	}
}

/// Orders two values of compatible types: numbers across numeric types, text and booleans among themselves.
pub fn compare(l: &Value, r: &Value) -> Option<Ordering> {
	match (l, r) {
		(Value::Utf8(l), Value::Utf8(r)) => Some(l.cmp(r)),
		(Value::Boolean(l), Value::Boolean(r)) => Some(l.cmp(r)),
		(l, r) => partial_cmp(l, r),
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_across_integer_types() {
		assert_eq!(compare(&Value::Int1(5), &Value::Uint8(5)), Some(Ordering::Equal));
		assert_eq!(compare(&Value::Int1(-1), &Value::Uint1(0)), Some(Ordering::Less));
	}

	#[test]
	fn test_large_unsigned() {
		assert_eq!(compare(&Value::Uint16(u128::MAX), &Value::Int16(i128::MAX)), Some(Ordering::Greater));
		assert_eq!(compare(&Value::Int1(-1), &Value::Uint16(u128::MAX)), Some(Ordering::Less));
		assert_eq!(compare(&Value::Uint16(u128::MAX), &Value::Uint16(u128::MAX)), Some(Ordering::Equal));
	}

	#[test]
	fn test_float_with_integer() {
		assert_eq!(compare(&Value::float8(1.5), &Value::Int1(1)), Some(Ordering::Greater));
	}

	#[test]
	fn test_text_and_bool() {
		assert_eq!(compare(&Value::utf8("a"), &Value::utf8("b")), Some(Ordering::Less));
		assert_eq!(compare(&Value::bool(false), &Value::bool(true)), Some(Ordering::Less));
	}

	#[test]
	fn test_incompatible() {
		assert_eq!(compare(&Value::utf8("1"), &Value::Int1(1)), None);
		assert_eq!(compare(&Value::Undefined, &Value::Int1(1)), None);
	}
}
