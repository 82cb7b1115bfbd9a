// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use std::{
	cmp::Ordering,
	fmt::{self, Display, Formatter},
	hash::{Hash, Hasher},
	ops::Deref,
};

use serde::{Deserialize, Serialize};

use crate::value::ordered_float::OrderedFloatError;

#[repr(transparent)]
#[derive(Debug, Copy, Clone, Default, Serialize, Deserialize)]
pub struct OrderedF32(f32);

impl OrderedF32 {
	pub fn value(&self) -> f32 {
		self.0
	}
}

impl Deref for OrderedF32 {
	type Target = f32;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

impl Display for OrderedF32 {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		Display::fmt(&self.0, f)
	}
}

impl PartialEq for OrderedF32 {
	fn eq(&self, other: &Self) -> bool {
		self.0.to_bits() == other.0.to_bits()
	}
}

impl Eq for OrderedF32 {}

impl PartialOrd for OrderedF32 {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

impl Ord for OrderedF32 {
	fn cmp(&self, other: &Self) -> Ordering {
		self.0.total_cmp(&other.0)
	}
}

impl Hash for OrderedF32 {
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.0.to_bits().hash(state);
	}
}

impl From<OrderedF32> for f32 {
	fn from(v: OrderedF32) -> Self {
		v.0
	}
}

impl TryFrom<f32> for OrderedF32 {
	type Error = OrderedFloatError;

	fn try_from(f: f32) -> Result<Self, Self::Error> {
		let normalized = if f == 0.0 {
			0.0
		} else {
			f
		};
		if f.is_nan() {
			Err(OrderedFloatError)
		} else {
			Ok(OrderedF32(normalized))
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_normalizes_zero() {
		assert_eq!(OrderedF32::try_from(0.0).unwrap(), OrderedF32::try_from(-0.0).unwrap());
	}

	#[test]
	fn test_nan_rejected() {
		assert!(OrderedF32::try_from(f32::NAN).is_err());
	}
}
