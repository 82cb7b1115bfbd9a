// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use std::fmt::{Display, Formatter};

pub use f32::OrderedF32;
pub use f64::OrderedF64;

mod f32;
mod f64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderedFloatError;

impl Display for OrderedFloatError {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_str("NaN is not a valid ordered float")
	}
}

impl std::error::Error for OrderedFloatError {}
