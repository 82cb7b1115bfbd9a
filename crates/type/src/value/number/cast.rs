// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use crate::{OrderedF32, OrderedF64, Type, Value};

/// Converts a numeric value into `target` without losing information.
///
/// Floats never convert into integers here, that would not be a widening.
pub fn cast(value: &Value, target: Type) -> Option<Value> {
	match target {
		Type::Float4 => {
			let v = value.to_f64()? as f32;
			OrderedF32::try_from(v).ok().filter(|v| v.is_finite()).map(Value::Float4)
		}
		Type::Float8 => {
			let v = value.to_f64()?;
			OrderedF64::try_from(v).ok().map(Value::Float8)
		}
		t if t.is_signed_integer() => from_i128(value.to_i128()?, t),
		t if t.is_unsigned_integer() => from_u128(value.to_u128()?, t),
		_ => None,
	}
}

pub(crate) fn from_i128(value: i128, target: Type) -> Option<Value> {
	match target {
		Type::Int1 => i8::try_from(value).ok().map(Value::Int1),
		Type::Int2 => i16::try_from(value).ok().map(Value::Int2),
		Type::Int4 => i32::try_from(value).ok().map(Value::Int4),
		Type::Int8 => i64::try_from(value).ok().map(Value::Int8),
		Type::Int16 => Some(Value::Int16(value)),
		Type::Uint1 | Type::Uint2 | Type::Uint4 | Type::Uint8 | Type::Uint16 => {
			from_u128(u128::try_from(value).ok()?, target)
		}
		_ => None,
	}
}

pub(crate) fn from_u128(value: u128, target: Type) -> Option<Value> {
	match target {
		Type::Uint1 => u8::try_from(value).ok().map(Value::Uint1),
		Type::Uint2 => u16::try_from(value).ok().map(Value::Uint2),
		Type::Uint4 => u32::try_from(value).ok().map(Value::Uint4),
		Type::Uint8 => u64::try_from(value).ok().map(Value::Uint8),
		Type::Uint16 => Some(Value::Uint16(value)),
		Type::Int1 | Type::Int2 | Type::Int4 | Type::Int8 | Type::Int16 => {
			from_i128(i128::try_from(value).ok()?, target)
		}
		_ => None,
	}
}
