// Copyright (c) reifydb.com 2025
// This file is licensed under the AGPL-3.0-or-later, see license.md file

pub trait SafeAdd: Sized {
	fn checked_add(&self, r: &Self) -> Option<Self>;
}

pub trait SafeSub: Sized {
	fn checked_sub(&self, r: &Self) -> Option<Self>;
}

pub trait SafeMul: Sized {
	fn checked_mul(&self, r: &Self) -> Option<Self>;
}

pub trait SafeDiv: Sized {
	fn checked_div(&self, r: &Self) -> Option<Self>;
}

pub trait SafeRemainder: Sized {
	fn checked_rem(&self, r: &Self) -> Option<Self>;
}

pub trait SafeNeg: Sized {
	fn checked_neg(&self) -> Option<Self>;
}

macro_rules! impl_safe_integer {
    ($($t:ty),*) => {
        $(
            impl SafeAdd for $t {
                fn checked_add(&self, r: &Self) -> Option<Self> {
                    <$t>::checked_add(*self, *r)
                }
            }

            impl SafeSub for $t {
                fn checked_sub(&self, r: &Self) -> Option<Self> {
                    <$t>::checked_sub(*self, *r)
                }
            }

            impl SafeMul for $t {
                fn checked_mul(&self, r: &Self) -> Option<Self> {
                    <$t>::checked_mul(*self, *r)
                }
            }

            impl SafeDiv for $t {
                fn checked_div(&self, r: &Self) -> Option<Self> {
                    <$t>::checked_div(*self, *r)
                }
            }

            impl SafeRemainder for $t {
                fn checked_rem(&self, r: &Self) -> Option<Self> {
                    <$t>::checked_rem(*self, *r)
                }
            }

            impl SafeNeg for $t {
                fn checked_neg(&self) -> Option<Self> {
                    <$t>::checked_neg(*self)
                }
            }
        )*
    };
}

impl_safe_integer!(i8, i16, i32, i64, i128, u8, u16, u32, u64, u128);

macro_rules! impl_safe_float {
    ($($t:ty),*) => {
        $(
            impl SafeAdd for $t {
                fn checked_add(&self, r: &Self) -> Option<Self> {
                    let result = *self + *r;
                    result.is_finite().then_some(result)
                }
            }

            impl SafeSub for $t {
                fn checked_sub(&self, r: &Self) -> Option<Self> {
                    let result = *self - *r;
                    result.is_finite().then_some(result)
                }
            }

            impl SafeMul for $t {
                fn checked_mul(&self, r: &Self) -> Option<Self> {
                    let result = *self * *r;
                    result.is_finite().then_some(result)
                }
            }

            impl SafeDiv for $t {
                fn checked_div(&self, r: &Self) -> Option<Self> {
                    if *r == 0.0 {
                        return None;
                    }
                    let result = *self / *r;
                    result.is_finite().then_some(result)
                }
            }

            impl SafeRemainder for $t {
                fn checked_rem(&self, r: &Self) -> Option<Self> {
                    if *r == 0.0 {
                        return None;
                    }
                    let result = *self % *r;
                    result.is_finite().then_some(result)
                }
            }

            impl SafeNeg for $t {
                fn checked_neg(&self) -> Option<Self> {
                    Some(-*self)
                }
            }
        )*
    };
}

impl_safe_float!(f32, f64);
