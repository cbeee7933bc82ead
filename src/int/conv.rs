//! Conversions between `BigInt` and native integer types.
//!
//! Mirrors the fixed-width primitives' `conv` submodules: one `From` impl per
//! native width, plus the reverse `TryFrom` where the magnitude might not fit.

use std::convert::TryFrom;

use super::BigInt;
use crate::limb::B;

macro_rules! from_unsigned {
    ($($t:ty),+) => {
        $(
            impl From<$t> for BigInt {
                fn from(value: $t) -> Self {
                    BigInt::from_u64(value as u64)
                }
            }
        )+
    };
}

macro_rules! from_signed {
    ($($t:ty),+) => {
        $(
            impl From<$t> for BigInt {
                fn from(value: $t) -> Self {
                    let sign = value >= 0;
                    let mag = (value as i128).unsigned_abs() as u64;
                    BigInt::from_parts(sign, BigInt::limbs_from_u64(mag))
                }
            }
        )+
    };
}

from_unsigned!(u8, u16, u32, u64, usize);
from_signed!(i8, i16, i32, i64, isize);

impl BigInt {
    fn limbs_from_u64(mut v: u64) -> Vec<u64> {
        let mut limbs = Vec::new();
        loop {
            limbs.push(v % B);
            v /= B;
            if v == 0 {
                break;
            }
        }
        limbs
    }

    /// Builds a non-negative `BigInt` from a `u64` magnitude.
    pub fn from_u64(value: u64) -> Self {
        BigInt::from_parts(true, Self::limbs_from_u64(value))
    }

    /// Builds a `BigInt` from an `i64`.
    pub fn from_i64(value: i64) -> Self {
        BigInt::from(value)
    }
}

impl From<u128> for BigInt {
    fn from(mut value: u128) -> Self {
        let mut limbs = Vec::new();
        loop {
            limbs.push((value % B as u128) as u64);
            value /= B as u128;
            if value == 0 {
                break;
            }
        }
        BigInt::from_parts(true, limbs)
    }
}

impl From<i128> for BigInt {
    fn from(value: i128) -> Self {
        let sign = value >= 0;
        let BigInt { limbs, .. } = BigInt::from(value.unsigned_abs());
        BigInt::from_parts(sign, limbs)
    }
}

/// Fails if `|value|` does not fit in a `u64`.
impl TryFrom<BigInt> for u64 {
    type Error = ();

    fn try_from(value: BigInt) -> Result<Self, Self::Error> {
        if value.is_negative() || value.limbs.len() > 2 {
            return Err(());
        }
        let mut acc: u128 = 0;
        for &limb in value.limbs.iter().rev() {
            acc = acc * B as u128 + limb as u128;
        }
        u64::try_from(acc).map_err(|_| ())
    }
}

/// Fails if `value` is negative or does not fit in a `u64`.
impl TryFrom<BigInt> for i64 {
    type Error = ();

    fn try_from(value: BigInt) -> Result<Self, Self::Error> {
        let negative = value.is_negative();
        let mag = u64::try_from(value.abs())?;
        if negative {
            if mag > (i64::MAX as u64) + 1 {
                return Err(());
            }
            Ok(if mag == (i64::MAX as u64) + 1 {
                i64::MIN
            } else {
                -(mag as i64)
            })
        } else {
            i64::try_from(mag).map_err(|_| ())
        }
    }
}
