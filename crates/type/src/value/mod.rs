// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

mod get;
mod into;
pub mod number;
mod ordered_float;
mod r#type;

pub use get::GetType;
pub use into::IntoValue;
pub use ordered_float::{OrderedF32, OrderedF64, OrderedFloatError};
pub use r#type::Type;

/// A RQL value, represented as a native Rust type.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Value {
	/// Value is not defined (think null in common programming languages)
	Undefined,
	/// A boolean: true or false.
	Boolean(bool),
	/// A 4-byte floating point
	Float4(OrderedF32),
	/// An 8-byte floating point
	Float8(OrderedF64),
	/// A 1-byte signed integer
	Int1(i8),
	/// A 2-byte signed integer
	Int2(i16),
	/// A 4-byte signed integer
	Int4(i32),
	/// An 8-byte signed integer
	Int8(i64),
	/// A 16-byte signed integer
	Int16(i128),
	/// A UTF-8 encoded text.
	Utf8(String),
	/// A 1-byte unsigned integer
	Uint1(u8),
	/// A 2-byte unsigned integer
	Uint2(u16),
	/// A 4-byte unsigned integer
	Uint4(u32),
	/// A 8-byte unsigned integer
	Uint8(u64),
	/// A 16-byte unsigned integer
	Uint16(u128),
}

impl Value {
	pub fn undefined() -> Self {
		Value::Undefined
	}

	pub fn bool(v: impl Into<bool>) -> Self {
		Value::Boolean(v.into())
	}

	pub fn float4(v: impl Into<f32>) -> Self {
		OrderedF32::try_from(v.into()).map(Value::Float4).unwrap_or(Value::Undefined)
	}

	pub fn float8(v: impl Into<f64>) -> Self {
		OrderedF64::try_from(v.into()).map(Value::Float8).unwrap_or(Value::Undefined)
	}

	pub fn int1(v: impl Into<i8>) -> Self {
		Value::Int1(v.into())
	}

	pub fn int2(v: impl Into<i16>) -> Self {
		Value::Int2(v.into())
	}

	pub fn int4(v: impl Into<i32>) -> Self {
		Value::Int4(v.into())
	}

	pub fn int8(v: impl Into<i64>) -> Self {
		Value::Int8(v.into())
	}

	pub fn int16(v: impl Into<i128>) -> Self {
		Value::Int16(v.into())
	}

	pub fn utf8(v: impl Into<String>) -> Self {
		Value::Utf8(v.into())
	}

	pub fn uint1(v: impl Into<u8>) -> Self {
		Value::Uint1(v.into())
	}

	pub fn uint2(v: impl Into<u16>) -> Self {
		Value::Uint2(v.into())
	}

	pub fn uint4(v: impl Into<u32>) -> Self {
		Value::Uint4(v.into())
	}

	pub fn uint8(v: impl Into<u64>) -> Self {
		Value::Uint8(v.into())
	}

	pub fn uint16(v: impl Into<u128>) -> Self {
		Value::Uint16(v.into())
	}

	pub fn is_undefined(&self) -> bool {
		matches!(self, Value::Undefined)
	}

	pub fn get_type(&self) -> Type {
		match self {
			Value::Undefined => Type::Undefined,
			Value::Boolean(_) => Type::Boolean,
			Value::Float4(_) => Type::Float4,
			Value::Float8(_) => Type::Float8,
			Value::Int1(_) => Type::Int1,
			Value::Int2(_) => Type::Int2,
			Value::Int4(_) => Type::Int4,
			Value::Int8(_) => Type::Int8,
			Value::Int16(_) => Type::Int16,
			Value::Utf8(_) => Type::Utf8,
			Value::Uint1(_) => Type::Uint1,
			Value::Uint2(_) => Type::Uint2,
			Value::Uint4(_) => Type::Uint4,
			Value::Uint8(_) => Type::Uint8,
			Value::Uint16(_) => Type::Uint16,
		}
	}

	pub fn as_bool(&self) -> Option<bool> {
		match self {
			Value::Boolean(v) => Some(*v),
			_ => None,
		}
	}

	pub fn as_str(&self) -> Option<&str> {
		match self {
			Value::Utf8(v) => Some(v.as_str()),
			_ => None,
		}
	}

	/// Exact integer view, `None` for non-integers and for `Uint16` values above `i128::MAX`.
	pub fn to_i128(&self) -> Option<i128> {
		match self {
			Value::Int1(v) => Some(*v as i128),
			Value::Int2(v) => Some(*v as i128),
			Value::Int4(v) => Some(*v as i128),
			Value::Int8(v) => Some(*v as i128),
			Value::Int16(v) => Some(*v),
			Value::Uint1(v) => Some(*v as i128),
			Value::Uint2(v) => Some(*v as i128),
			Value::Uint4(v) => Some(*v as i128),
			Value::Uint8(v) => Some(*v as i128),
			Value::Uint16(v) => i128::try_from(*v).ok(),
			_ => None,
		}
	}

	/// Exact unsigned view, `None` for non-integers and negative values.
	pub fn to_u128(&self) -> Option<u128> {
		match self {
			Value::Uint16(v) => Some(*v),
			other => other.to_i128().and_then(|v| u128::try_from(v).ok()),
		}
	}

	pub fn to_f64(&self) -> Option<f64> {
		match self {
			Value::Float4(v) => Some(v.value() as f64),
			Value::Float8(v) => Some(v.value()),
			Value::Uint16(v) => Some(*v as f64),
			other => other.to_i128().map(|v| v as f64),
		}
	}

	/// Widens a numeric value to `target`, `None` when the value does not fit.
	///
	/// Undefined stays undefined and a value already of type `target` is returned as is.
	pub fn promote_to(&self, target: Type) -> Option<Value> {
		if self.is_undefined() || self.get_type() == target {
			return Some(self.clone());
		}

		if !self.get_type().is_number() {
			return None;
		}

		number::cast(self, target)
	}
}

impl Display for Value {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			Value::Boolean(true) => f.write_str("true"),
			Value::Boolean(false) => f.write_str("false"),
			Value::Float4(value) => Display::fmt(value, f),
			Value::Float8(value) => Display::fmt(value, f),
			Value::Int1(value) => Display::fmt(value, f),
			Value::Int2(value) => Display::fmt(value, f),
			Value::Int4(value) => Display::fmt(value, f),
			Value::Int8(value) => Display::fmt(value, f),
			Value::Int16(value) => Display::fmt(value, f),
			Value::Utf8(value) => Display::fmt(value, f),
			Value::Uint1(value) => Display::fmt(value, f),
			Value::Uint2(value) => Display::fmt(value, f),
			Value::Uint4(value) => Display::fmt(value, f),
			Value::Uint8(value) => Display::fmt(value, f),
			Value::Uint16(value) => Display::fmt(value, f),
			Value::Undefined => f.write_str("Undefined"),
		}
	}
}
