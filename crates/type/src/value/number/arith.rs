// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

use crate::{
	OrderedF32, OrderedF64, Type, Value,
	value::number::{
		SafeAdd, SafeDiv, SafeMul, SafeNeg, SafeRemainder, SafeSub,
		cast::{from_i128, from_u128},
	},
};

/// Computes `l + r` in the `target` type, `None` on overflow.
pub fn add(l: &Value, r: &Value, target: Type) -> Option<Value> {
	apply(l, r, target, SafeAdd::checked_add, SafeAdd::checked_add, SafeAdd::checked_add)
}

pub fn sub(l: &Value, r: &Value, target: Type) -> Option<Value> {
	apply(l, r, target, SafeSub::checked_sub, SafeSub::checked_sub, SafeSub::checked_sub)
}

pub fn mul(l: &Value, r: &Value, target: Type) -> Option<Value> {
	apply(l, r, target, SafeMul::checked_mul, SafeMul::checked_mul, SafeMul::checked_mul)
}

/// Integer division truncates toward zero, `None` on division by zero.
pub fn div(l: &Value, r: &Value, target: Type) -> Option<Value> {
	apply(l, r, target, SafeDiv::checked_div, SafeDiv::checked_div, SafeDiv::checked_div)
}

pub fn rem(l: &Value, r: &Value, target: Type) -> Option<Value> {
	apply(l, r, target, SafeRemainder::checked_rem, SafeRemainder::checked_rem, SafeRemainder::checked_rem)
}

/// Negates a number. Unsigned values move to the signed type wide enough to hold the result.
pub fn negate(value: &Value) -> Option<Value> {
	let ty = value.get_type();
	match ty {
		t if t.is_floating_point() => {
			let v = SafeNeg::checked_neg(&value.to_f64()?)?;
			float_value(v, t)
		}
		t if t.is_signed_integer() => from_i128(SafeNeg::checked_neg(&value.to_i128()?)?, t),
		t if t.is_unsigned_integer() => {
			let target = Type::promote(Type::Int1, t);
			from_i128(SafeNeg::checked_neg(&value.to_i128()?)?, target)
		}
		_ => None,
	}
}

pub fn is_zero(value: &Value) -> bool {
	match value {
		Value::Float4(v) => v.value() == 0.0,
		Value::Float8(v) => v.value() == 0.0,
		other => other.to_u128() == Some(0),
	}
}

fn apply(
	l: &Value,
	r: &Value,
	target: Type,
	signed: fn(&i128, &i128) -> Option<i128>,
	unsigned: fn(&u128, &u128) -> Option<u128>,
	float: fn(&f64, &f64) -> Option<f64>,
) -> Option<Value> {
	match target {
		t if t.is_floating_point() => {
			let result = float(&l.to_f64()?, &r.to_f64()?)?;
			float_value(result, t)
		}
		t if t.is_signed_integer() => from_i128(signed(&l.to_i128()?, &r.to_i128()?)?, t),
		t if t.is_unsigned_integer() => from_u128(unsigned(&l.to_u128()?, &r.to_u128()?)?, t),
		_ => None,
	}
}

fn float_value(value: f64, target: Type) -> Option<Value> {
	match target {
		Type::Float4 => {
			let v = value as f32;
			if !v.is_finite() {
				return None;
			}
			OrderedF32::try_from(v).ok().map(Value::Float4)
		}
		_ => OrderedF64::try_from(value).ok().map(Value::Float8),
	}
}
