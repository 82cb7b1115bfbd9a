// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use crate::Type;

pub trait GetType {
	fn get_type() -> Type;
}

macro_rules! impl_get_type {
	($($t:ty => $variant:ident),* $(,)?) => {
		$(
			impl GetType for $t {
				fn get_type() -> Type {
					Type::$variant
				}
			}
		)*
	};
}

impl_get_type! {
	bool => Boolean,
	f32 => Float4,
	f64 => Float8,
	i8 => Int1,
	i16 => Int2,
	i32 => Int4,
	i64 => Int8,
	i128 => Int16,
	u8 => Uint1,
	u16 => Uint2,
	u32 => Uint4,
	u64 => Uint8,
	u128 => Uint16,
	String => Utf8,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_get_type() {
		assert_eq!(<i8 as GetType>::get_type(), Type::Int1);
		assert_eq!(<u128 as GetType>::get_type(), Type::Uint16);
		assert_eq!(<String as GetType>::get_type(), Type::Utf8);
	}
}
