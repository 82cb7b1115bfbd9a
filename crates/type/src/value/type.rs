// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// All possible RQL data types
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Type {
	/// A boolean: true or false.
	Boolean,
	/// A 4-byte floating point
	Float4,
	/// An 8-byte floating point
	Float8,
	/// A 1-byte signed integer
	Int1,
	/// A 2-byte signed integer
	Int2,
	/// A 4-byte signed integer
	Int4,
	/// An 8-byte signed integer
	Int8,
	/// A 16-byte signed integer
	Int16,
	/// A 1-byte unsigned integer
	Uint1,
	/// A 2-byte unsigned integer
	Uint2,
	/// A 4-byte unsigned integer
	Uint4,
	/// An 8-byte unsigned integer
	Uint8,
	/// A 16-byte unsigned integer
	Uint16,
	/// A UTF-8 encoded text
	Utf8,
	/// Value is not defined (think null in common programming languages)
	Undefined,
}

impl Type {
	pub fn is_number(&self) -> bool {
		self.is_integer() || self.is_floating_point()
	}

	pub fn is_integer(&self) -> bool {
		self.is_signed_integer() || self.is_unsigned_integer()
	}

	pub fn is_signed_integer(&self) -> bool {
		matches!(self, Type::Int1 | Type::Int2 | Type::Int4 | Type::Int8 | Type::Int16)
	}

	pub fn is_unsigned_integer(&self) -> bool {
		matches!(self, Type::Uint1 | Type::Uint2 | Type::Uint4 | Type::Uint8 | Type::Uint16)
	}

	pub fn is_floating_point(&self) -> bool {
		matches!(self, Type::Float4 | Type::Float8)
	}

	pub fn is_bool(&self) -> bool {
		*self == Type::Boolean
	}

	pub fn is_utf8(&self) -> bool {
		*self == Type::Utf8
	}

	/// Width in bytes of an integer type.
	pub fn size(&self) -> usize {
		match self {
			Type::Boolean | Type::Int1 | Type::Uint1 => 1,
			Type::Int2 | Type::Uint2 => 2,
			Type::Float4 | Type::Int4 | Type::Uint4 => 4,
			Type::Float8 | Type::Int8 | Type::Uint8 => 8,
			Type::Int16 | Type::Uint16 => 16,
			Type::Utf8 | Type::Undefined => 0,
		}
	}

	fn signed_of_size(size: usize) -> Type {
		match size {
			0 | 1 => Type::Int1,
			2 => Type::Int2,
			3 | 4 => Type::Int4,
			5..=8 => Type::Int8,
			_ => Type::Int16,
		}
	}

	/// The type both operands of an arithmetic operation are widened to.
	///
	/// Returns `Type::Undefined` when the operands cannot be combined numerically.
	pub fn promote(left: Type, right: Type) -> Type {
		use Type::*;

		match (left, right) {
			(Undefined, other) | (other, Undefined) => other,
			(l, r) if !l.is_number() || !r.is_number() => Undefined,
			(Float4, Float4) => Float4,
			(l, r) if l.is_floating_point() || r.is_floating_point() => Float8,
			(l, r) if l.is_signed_integer() && r.is_signed_integer() => {
				Self::signed_of_size(l.size().max(r.size()))
			}
			(l, r) if l.is_unsigned_integer() && r.is_unsigned_integer() => {
				if l.size() >= r.size() {
					l
				} else {
					r
				}
			}
			(l, r) => {
				let (signed, unsigned) = if l.is_signed_integer() {
					(l, r)
				} else {
					(r, l)
				};
				Self::signed_of_size(signed.size().max(unsigned.size() * 2))
			}
		}
	}
}

impl Display for Type {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			Type::Boolean => f.write_str("Boolean"),
			Type::Float4 => f.write_str("Float4"),
			Type::Float8 => f.write_str("Float8"),
			Type::Int1 => f.write_str("Int1"),
			Type::Int2 => f.write_str("Int2"),
			Type::Int4 => f.write_str("Int4"),
			Type::Int8 => f.write_str("Int8"),
			Type::Int16 => f.write_str("Int16"),
			Type::Uint1 => f.write_str("Uint1"),
			Type::Uint2 => f.write_str("Uint2"),
			Type::Uint4 => f.write_str("Uint4"),
			Type::Uint8 => f.write_str("Uint8"),
			Type::Uint16 => f.write_str("Uint16"),
			Type::Utf8 => f.write_str("Utf8"),
			Type::Undefined => f.write_str("Undefined"),
		}
	}
}
