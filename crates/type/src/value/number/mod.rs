// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

mod arith;
mod cast;
mod compare;
mod parse;
mod safe;

pub use arith::{add, div, is_zero, mul, negate, rem, sub};
pub use cast::cast;
pub use compare::{compare, partial_cmp};
pub use parse::{parse_float, parse_number_literal};
pub use safe::{SafeAdd, SafeDiv, SafeMul, SafeNeg, SafeRemainder, SafeSub};
