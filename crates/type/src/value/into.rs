// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use crate::Value;

pub trait IntoValue {
	fn into_value(self) -> Value;
}

impl IntoValue for Value {
	fn into_value(self) -> Value {
		self
	}
}

impl IntoValue for bool {
	fn into_value(self) -> Value {
		Value::Boolean(self)
	}
}

impl IntoValue for f32 {
	fn into_value(self) -> Value {
		Value::float4(self)
	}
}

impl IntoValue for f64 {
	fn into_value(self) -> Value {
		Value::float8(self)
	}
}

impl IntoValue for i8 {
	fn into_value(self) -> Value {
		Value::Int1(self)
	}
}

impl IntoValue for i16 {
	fn into_value(self) -> Value {
		Value::Int2(self)
	}
}

impl IntoValue for i32 {
	fn into_value(self) -> Value {
		Value::Int4(self)
	}
}

impl IntoValue for i64 {
	fn into_value(self) -> Value {
		Value::Int8(self)
	}
}

impl IntoValue for i128 {
	fn into_value(self) -> Value {
		Value::Int16(self)
	}
}

impl IntoValue for u8 {
	fn into_value(self) -> Value {
		Value::Uint1(self)
	}
}

impl IntoValue for u16 {
	fn into_value(self) -> Value {
		Value::Uint2(self)
	}
}

impl IntoValue for u32 {
	fn into_value(self) -> Value {
		Value::Uint4(self)
	}
}

impl IntoValue for u64 {
	fn into_value(self) -> Value {
		Value::Uint8(self)
	}
}

impl IntoValue for u128 {
	fn into_value(self) -> Value {
		Value::Uint16(self)
	}
}

impl IntoValue for String {
	fn into_value(self) -> Value {
		Value::Utf8(self)
	}
}

impl IntoValue for &str {
	fn into_value(self) -> Value {
		Value::Utf8(self.to_string())
	}
}

impl<T: IntoValue> IntoValue for Option<T> {
	fn into_value(self) -> Value {
		match self {
			Some(value) => value.into_value(),
			None => Value::Undefined,
		}
	}
}
