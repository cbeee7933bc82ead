//! Operator trait implementations for [`BigInt`].
//!
//! Every arithmetic operator here takes its operands by value, producing a
//! new `BigInt` rather than mutating in place — see the crate-level note on
//! ownership in `lib.rs`. `pow` is the one operation that can fail (the
//! exponent must be a non-negative `i64`), so it returns
//! [`Result<BigInt>`](crate::error::Result) instead of implementing a
//! `std::ops` trait.

use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::error::{Error, Result};
use crate::limb::{self, add_signed};

use super::dispatch;
use super::BigInt;

impl Add for BigInt {
    type Output = BigInt;
    fn add(self, rhs: BigInt) -> BigInt {
        let (sign, limbs) = add_signed(self.sign, &self.limbs, rhs.sign, &rhs.limbs);
        BigInt::from_parts(sign, limbs)
    }
}

impl Sub for BigInt {
    type Output = BigInt;
    fn sub(self, rhs: BigInt) -> BigInt {
        self + (-rhs)
    }
}

impl Neg for BigInt {
    type Output = BigInt;
    fn neg(self) -> BigInt {
        let sign = if self.is_zero() { true } else { !self.sign };
        BigInt { sign, limbs: self.limbs }
    }
}

impl Mul for BigInt {
    type Output = BigInt;
    fn mul(self, rhs: BigInt) -> BigInt {
        let mag = if self.limbs == rhs.limbs && self.sign == rhs.sign {
            dispatch::sqr_mag(&self.limbs)
        } else {
            dispatch::mul_mag(&self.limbs, &rhs.limbs)
        };
        let sign = if limb::is_zero(&mag) { true } else { self.sign == rhs.sign };
        BigInt::from_parts(sign, mag)
    }
}

impl AddAssign for BigInt {
    fn add_assign(&mut self, rhs: BigInt) {
        *self = std::mem::replace(self, BigInt::zero()) + rhs;
    }
}

impl SubAssign for BigInt {
    fn sub_assign(&mut self, rhs: BigInt) {
        *self = std::mem::replace(self, BigInt::zero()) - rhs;
    }
}

impl MulAssign for BigInt {
    fn mul_assign(&mut self, rhs: BigInt) {
        *self = std::mem::replace(self, BigInt::zero()) * rhs;
    }
}

impl BigInt {
    /// Squares `self`, via the dedicated squaring path of the multiplication
    /// dispatcher rather than `self.clone() * self`.
    pub fn squared(&self) -> BigInt {
        BigInt::from_parts(true, dispatch::sqr_mag(&self.limbs))
    }

    /// Raises `self` to a non-negative integer power by repeated squaring.
    ///
    /// Returns [`Error::Domain`] for a negative exponent (not representable
    /// — `BigInt` has no reciprocal) and [`Error::Overflow`] if `exp` would
    /// make a `usize` bit-length computation overflow on the host platform.
    pub fn pow(&self, exp: i64) -> Result<BigInt> {
        if exp < 0 {
            return Err(Error::Domain("BigInt::pow does not accept a negative exponent"));
        }
        let exp: u64 = exp
            .try_into()
            .map_err(|_| Error::Overflow("exponent does not fit a non-negative i64"))?;

        let mut result = BigInt::one();
        let mut base = self.clone();
        let mut e = exp;
        while e > 0 {
            if e & 1 == 1 {
                result = result * base.clone();
            }
            base = base.squared();
            e >>= 1;
        }
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn n(s: &str) -> BigInt {
        BigInt::parse(s).unwrap()
    }

    #[test]
    fn add_handles_sign_cancellation() {
        assert_eq!(n("5") + n("-5"), BigInt::zero());
        assert_eq!(n("-5") + n("3"), n("-2"));
    }

    #[test]
    fn sub_is_add_of_negation() {
        assert_eq!(n("10") - n("3"), n("7"));
        assert_eq!(n("3") - n("10"), n("-7"));
    }

    #[test]
    fn mul_tracks_sign_of_operands() {
        assert_eq!(n("-6") * n("7"), n("-42"));
        assert_eq!(n("-6") * n("-7"), n("42"));
        assert_eq!(n("0") * n("-7"), BigInt::zero());
    }

    #[test]
    fn squared_matches_self_times_self() {
        let x = n("123456789012345678901234567890");
        assert_eq!(x.squared(), x.clone() * x);
    }

    #[test]
    fn pow_rejects_negative_exponent() {
        assert!(n("2").pow(-1).is_err());
    }

    #[test]
    fn pow_computes_repeated_squares() {
        assert_eq!(n("2").pow(10).unwrap(), n("1024"));
        assert_eq!(n("-3").pow(3).unwrap(), n("-27"));
        assert_eq!(n("5").pow(0).unwrap(), BigInt::one());
    }

    #[test]
    fn assign_operators_match_their_binary_counterparts() {
        let mut a = n("10");
        a += n("5");
        assert_eq!(a, n("15"));

        let mut b = n("10");
        b -= n("15");
        assert_eq!(b, n("-5"));

        let mut c = n("10");
        c *= n("-3");
        assert_eq!(c, n("-30"));
    }
}
