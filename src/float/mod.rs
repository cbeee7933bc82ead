//! Arbitrary-precision, variable-precision decimal floating point.
//!
//! A [`BigFloat`] is a signed [`BigInt`] mantissa plus a decimal exponent:
//! `int_part * 10^(exp - D + 1)`, where `D` is the number of decimal digits
//! in `|int_part|`. Equivalently, `exp` names the decimal exponent of the
//! most significant digit — shifting `int_part` by dropping or appending
//! low-order digits never changes `exp`, since the most significant digit
//! stays where it was.
//!
//! Every arithmetic step truncates its result to the process-wide
//! [`precision`] context (see [`precision`] module): `BigFloat` does not
//! track error bounds, it just bounds mantissa growth. Two unrelated
//! `BigFloat`s that happen to agree to the current precision compare equal;
//! this is a property of the representation, not a defect.

pub mod precision;
mod recip;
mod sqrt;

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::error::{Error, Result};
use crate::int::BigInt;
use crate::limb;

pub use precision::{precision, set_precision, PrecisionGuard};

/// An arbitrary-precision decimal float: `int_part * 10^(exp - D + 1)`.
#[derive(Clone, Debug)]
pub struct BigFloat {
    pub(crate) int_part: BigInt,
    pub(crate) exp: i64,
}

impl BigFloat {
    /// The value zero, canonically `(int_part = 0, exp = 0)`.
    pub fn zero() -> Self {
        BigFloat { int_part: BigInt::zero(), exp: 0 }
    }

    /// The value one.
    pub fn one() -> Self {
        BigFloat { int_part: BigInt::one(), exp: 0 }
    }

    /// `true` if the value is exactly zero.
    pub fn is_zero(&self) -> bool {
        self.int_part.is_zero()
    }

    /// `true` if the value is strictly negative.
    pub fn is_negative(&self) -> bool {
        self.int_part.is_negative()
    }

    /// The absolute value.
    pub fn abs(&self) -> Self {
        BigFloat { int_part: self.int_part.abs(), exp: self.exp }
    }

    /// The decimal exponent of the least-significant digit of `int_part`,
    /// i.e. `exp - (digit_count(int_part) - 1)`.
    fn lsd_exp(&self) -> i64 {
        self.exp - (self.int_part.digit_count() as i64 - 1)
    }

    /// Parses a decimal string: an optional leading sign, decimal digits,
    /// and at most one `.`. Scientific notation (`e`/`E`) is rejected on
    /// input even though [`BigFloat`]'s own [`Display`](fmt::Display)
    /// impl emits it for out-of-range exponents — this asymmetry is
    /// deliberate (see `DESIGN.md`, Open Question (c)).
    pub fn parse(s: &str) -> Result<Self> {
        if s.is_empty() {
            return Err(Error::invalid_input(s, "empty string"));
        }

        let bytes = s.as_bytes();
        let (sign, body) = match bytes[0] {
            b'+' => (true, &s[1..]),
            b'-' => (false, &s[1..]),
            _ => (true, s),
        };

        let mut parts = body.splitn(3, '.');
        let int_str = parts.next().unwrap_or("");
        let frac_str = parts.next();
        if parts.next().is_some() {
            return Err(Error::invalid_input(s, "multiple decimal points"));
        }
        let frac_str = frac_str.unwrap_or("");

        if int_str.is_empty() && frac_str.is_empty() {
            return Err(Error::invalid_input(s, "missing digits"));
        }
        if !int_str.bytes().all(|b| b.is_ascii_digit()) || !frac_str.bytes().all(|b| b.is_ascii_digit()) {
            return Err(Error::invalid_input(s, "non-digit character in body"));
        }

        let digits: String = format!("{int_str}{frac_str}");
        let Some(first_nonzero) = digits.bytes().position(|b| b != b'0') else {
            return Ok(BigFloat::zero());
        };

        let exp = (int_str.len() as i64 - 1) - first_nonzero as i64;
        let int_part = BigInt::from_decimal_digits(sign, &digits[first_nonzero..]);
        Ok(BigFloat { int_part, exp })
    }

    /// Truncates the mantissa to the precision `prec` needs, keeping
    /// `keep_limbs` most-significant limbs; `exp` is untouched since
    /// dropping low-order limbs never moves the most significant digit.
    fn truncate_to_limbs(&self, keep_limbs: usize) -> Self {
        if self.int_part.limb_len() <= keep_limbs {
            return self.clone();
        }
        let start = self.int_part.limb_len() - keep_limbs;
        let limbs = self.int_part.limbs[start..].to_vec();
        BigFloat {
            int_part: BigInt::from_parts(self.int_part.sign, limbs),
            exp: self.exp,
        }
    }

    /// Truncates to the current process-wide [`precision`], retaining
    /// `ceil(P/16) + 2` mantissa limbs. Mandatory after every arithmetic
    /// step; rounding is truncation toward zero of the dropped digits, not
    /// banker's rounding (`DESIGN.md`, Open Question (b)).
    pub fn truncate(&self) -> Self {
        self.truncate_to_limbs(precision::arithmetic_limbs(precision()))
    }

    /// The smaller of two values, by [`Ord`].
    pub fn min(self, other: Self) -> Self {
        if self <= other { self } else { other }
    }

    /// The larger of two values, by [`Ord`].
    pub fn max(self, other: Self) -> Self {
        if self >= other { self } else { other }
    }

    /// `self + other`, non-consuming. Aligns the two mantissas to a common
    /// least-significant-digit position (the lower of the two operands'),
    /// adds them as `BigInt`s, and truncates.
    fn add_ref(&self, other: &Self) -> Self {
        if self.is_zero() {
            return other.truncate();
        }
        if other.is_zero() {
            return self.truncate();
        }

        let (a, b) = if self.exp >= other.exp { (self, other) } else { (other, self) };
        let prec = precision::precision();
        if a.exp - b.exp > prec {
            // b's contribution falls entirely below the precision floor.
            return a.truncate();
        }

        let lsd_a = a.lsd_exp();
        let lsd_b = b.lsd_exp();
        let target_lsd = lsd_a.min(lsd_b);

        let a_mant = shift_mantissa(&a.int_part, (lsd_a - target_lsd) as u64);
        let b_mant = shift_mantissa(&b.int_part, (lsd_b - target_lsd) as u64);
        let sum = a_mant + b_mant;

        if sum.is_zero() {
            return BigFloat::zero();
        }
        let exp = target_lsd + sum.digit_count() as i64 - 1;
        BigFloat { int_part: sum, exp }.truncate()
    }

    /// `-self`, non-consuming.
    fn neg_ref(&self) -> Self {
        BigFloat { int_part: -self.int_part.clone(), exp: self.exp }
    }

    /// `self - other`, non-consuming.
    fn sub_ref(&self, other: &Self) -> Self {
        self.add_ref(&other.neg_ref())
    }

    /// `self * other`, non-consuming. Mantissas multiply as `BigInt`s;
    /// `exp` advances by the other operand's exponent plus however many
    /// extra digits (0 or 1) the product mantissa picked up beyond the
    /// `D_x + D_y - 1` digits a product "usually" has.
    fn mul_ref(&self, other: &Self) -> Self {
        if self.is_zero() || other.is_zero() {
            return BigFloat::zero();
        }
        let dx = self.int_part.digit_count() as i64;
        let dy = other.int_part.digit_count() as i64;
        let product = self.int_part.clone() * other.int_part.clone();
        let dp = product.digit_count() as i64;
        let exp = self.exp + other.exp + (dp - (dx + dy - 1));
        BigFloat { int_part: product, exp }.truncate()
    }

    /// `self / other`, via `self * other.reciprocal()`. Fails exactly when
    /// [`BigFloat::reciprocal`] fails (division by zero).
    pub fn div(&self, other: &Self) -> Result<Self> {
        Ok(self.mul_ref(&other.reciprocal()?))
    }

    /// `1 / self` at the current process-wide [`precision`], by
    /// Newton-Raphson iteration; see [`recip`].
    ///
    /// Returns [`Error::Domain`] if `self` is zero.
    pub fn reciprocal(&self) -> Result<Self> {
        recip::reciprocal(self, precision::precision())
    }

    /// `sqrt(self)` at the current process-wide [`precision`], by a
    /// division-free Newton-Raphson variant; see [`sqrt`].
    ///
    /// Returns [`Error::Domain`] if `self` is negative.
    pub fn sqrt(&self) -> Result<Self> {
        sqrt::sqrt(self, precision::precision())
    }

    /// Raises `self` to an integer power by repeated squaring. A negative
    /// exponent inverts first; `0^0` and `0^negative` are domain errors, as
    /// for [`BigInt::pow`].
    pub fn pow(&self, exp: i64) -> Result<Self> {
        if exp == 0 {
            if self.is_zero() {
                return Err(Error::Domain("0^0 is undefined"));
            }
            return Ok(BigFloat::one());
        }
        if exp < 0 {
            if self.is_zero() {
                return Err(Error::Domain("zero has no reciprocal"));
            }
            let inv = self.reciprocal()?;
            let magnitude = (exp as i128).unsigned_abs();
            return inv.pow_unsigned(magnitude);
        }
        Ok(self.pow_unsigned(exp as u128))
    }

    fn pow_unsigned(&self, mut e: u128) -> Self {
        let mut result = BigFloat::one();
        let mut base = self.clone();
        while e > 0 {
            if e & 1 == 1 {
                result = result.mul_ref(&base);
            }
            base = base.mul_ref(&base);
            e >>= 1;
        }
        result
    }

    /// Formats `self` at the current process-wide [`precision`]; see the
    /// [`Display`](fmt::Display) impl for the exact rule.
    fn to_decimal_string(&self) -> String {
        if self.is_zero() {
            return "0".to_string();
        }

        let keep = precision::stringify_limbs(precision::precision());
        let t = self.truncate_to_limbs(keep);
        let digits = t.int_part.abs().to_string();
        let d = digits.len() as i64;
        let e = t.exp;
        let sign = if t.int_part.is_negative() { "-" } else { "" };

        if (-10..=d - 1).contains(&e) {
            let int_digits = e + 1;
            if int_digits <= 0 {
                let zeros = "0".repeat((-int_digits) as usize);
                format!("{sign}0.{zeros}{digits}")
            } else if int_digits as usize >= digits.len() {
                let pad = "0".repeat(int_digits as usize - digits.len());
                format!("{sign}{digits}{pad}.0")
            } else {
                let (ip, fp) = digits.split_at(int_digits as usize);
                format!("{sign}{ip}.{fp}")
            }
        } else {
            let (first, rest) = digits.split_at(1);
            let rest = if rest.is_empty() { "0" } else { rest };
            format!("{sign}{first}.{rest}e{e:+}")
        }
    }
}

/// Multiplies `n` by `10^k`, i.e. shifts its least-significant digit `k`
/// places further from the decimal point. `BigFloat::add_ref`'s alignment
/// step, expressed directly on the mantissa's limb vector.
fn shift_mantissa(n: &BigInt, k: u64) -> BigInt {
    if k == 0 {
        return n.clone();
    }
    BigInt::from_parts(n.sign, limb::shift_decimal(&n.limbs, k))
}

impl Add for BigFloat {
    type Output = BigFloat;
    fn add(self, rhs: BigFloat) -> BigFloat {
        self.add_ref(&rhs)
    }
}

impl Sub for BigFloat {
    type Output = BigFloat;
    fn sub(self, rhs: BigFloat) -> BigFloat {
        self.sub_ref(&rhs)
    }
}

impl Neg for BigFloat {
    type Output = BigFloat;
    fn neg(self) -> BigFloat {
        self.neg_ref()
    }
}

impl Mul for BigFloat {
    type Output = BigFloat;
    fn mul(self, rhs: BigFloat) -> BigFloat {
        self.mul_ref(&rhs)
    }
}

impl AddAssign for BigFloat {
    fn add_assign(&mut self, rhs: BigFloat) {
        *self = self.add_ref(&rhs);
    }
}

impl SubAssign for BigFloat {
    fn sub_assign(&mut self, rhs: BigFloat) {
        *self = self.sub_ref(&rhs);
    }
}

impl MulAssign for BigFloat {
    fn mul_assign(&mut self, rhs: BigFloat) {
        *self = self.mul_ref(&rhs);
    }
}

/// Equality and ordering are both defined as the sign of the difference's
/// mantissa (§4.8): two values compare equal exactly when their difference
/// truncates to zero at the current precision.
impl PartialEq for BigFloat {
    fn eq(&self, other: &Self) -> bool {
        self.sub_ref(other).is_zero()
    }
}
impl Eq for BigFloat {}

impl PartialOrd for BigFloat {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BigFloat {
    fn cmp(&self, other: &Self) -> Ordering {
        let diff = self.sub_ref(other);
        if diff.is_zero() {
            Ordering::Equal
        } else if diff.is_negative() {
            Ordering::Less
        } else {
            Ordering::Greater
        }
    }
}

impl fmt::Display for BigFloat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_decimal_string())
    }
}

impl std::str::FromStr for BigFloat {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self> {
        BigFloat::parse(s)
    }
}

impl From<BigInt> for BigFloat {
    fn from(n: BigInt) -> Self {
        if n.is_zero() {
            return BigFloat::zero();
        }
        let exp = n.digit_count() as i64 - 1;
        BigFloat { int_part: n, exp }
    }
}

macro_rules! from_int {
    ($($t:ty),+) => {
        $(
            impl From<$t> for BigFloat {
                fn from(value: $t) -> Self {
                    BigFloat::from(BigInt::from(value))
                }
            }
        )+
    };
}

from_int!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
