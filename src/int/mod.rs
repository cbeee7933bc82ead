//! Arbitrary-precision signed integers.
//!
//! A [`BigInt`] is a sign flag plus a least-significant-limb-first vector of
//! base-[`crate::limb::B`] digits. The canonical form — no trailing zero
//! limb unless the value is the single-limb zero, whose sign is always
//! positive — holds after every public operation; see [`crate::limb::normalize`].

mod conv;
pub mod dispatch;
pub mod div;
pub mod karatsuba;
pub mod ops;
mod rational;
pub mod schoolbook;
mod signed;
pub mod toom3;
pub mod toom4;
pub mod toom6h;
mod vandermonde;

use std::cmp::Ordering;
use std::fmt;

use crate::error::{Error, Result};
use crate::limb::{self, normalize, ucmp};

/// An arbitrary-precision signed integer.
///
/// `sign` is `true` for values `>= 0`. The canonical zero is `(sign: true,
/// limbs: [0])` — there is no negative zero.
#[derive(Clone, Debug)]
pub struct BigInt {
    pub(crate) sign: bool,
    pub(crate) limbs: Vec<u64>,
}

impl BigInt {
    /// The value zero.
    pub fn zero() -> Self {
        BigInt {
            sign: true,
            limbs: vec![0],
        }
    }

    /// The value one.
    pub fn one() -> Self {
        BigInt {
            sign: true,
            limbs: vec![1],
        }
    }

    /// Builds a `BigInt` directly from a sign and limb vector, normalizing
    /// it first. Intended for internal use by the multiplication backends,
    /// where intermediate buffers may carry redundant leading zero limbs.
    pub(crate) fn from_parts(sign: bool, mut limbs: Vec<u64>) -> Self {
        normalize(&mut limbs);
        let sign = if limb::is_zero(&limbs) { true } else { sign };
        BigInt { sign, limbs }
    }

    /// Parses a decimal string into a `BigInt`.
    ///
    /// Accepts an optional leading `+` or `-`, followed by one or more
    /// decimal digits. Scientific notation, internal signs, multiple signs,
    /// and the empty string are all rejected.
    pub fn parse(s: &str) -> Result<Self> {
        if s.is_empty() {
            return Err(Error::invalid_input(s, "empty string"));
        }

        let bytes = s.as_bytes();
        let (sign, digits) = match bytes[0] {
            b'+' => (true, &s[1..]),
            b'-' => (false, &s[1..]),
            _ => (true, s),
        };

        if digits.is_empty() {
            return Err(Error::invalid_input(s, "missing digits after sign"));
        }
        if !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(Error::invalid_input(s, "non-digit character in body"));
        }

        Ok(Self::from_decimal_digits(sign, digits))
    }

    /// Parses a decimal string without validating it first, for callers that
    /// already know `s` is a well-formed optionally-signed decimal integer
    /// (e.g. a string this crate itself generated). Behavior on malformed
    /// input is unspecified — it may panic or return a nonsensical value;
    /// use [`BigInt::parse`] for anything that isn't already trusted.
    pub fn from_str_unchecked(s: &str) -> Self {
        let bytes = s.as_bytes();
        let (sign, digits) = match bytes[0] {
            b'+' => (true, &s[1..]),
            b'-' => (false, &s[1..]),
            _ => (true, s),
        };
        Self::from_decimal_digits(sign, digits)
    }

    /// Builds a `BigInt` from a validated run of ASCII decimal digits,
    /// skipping the checks [`BigInt::parse`] performs. Used internally by
    /// callers (e.g. [`crate::float::BigFloat`] stringification) that
    /// generated the digit string themselves.
    pub(crate) fn from_decimal_digits(sign: bool, digits: &str) -> Self {
        let bytes = digits.as_bytes();
        let mut limbs = Vec::with_capacity(bytes.len() / limb::LOG_B + 1);

        let mut end = bytes.len();
        while end > 0 {
            let start = end.saturating_sub(limb::LOG_B);
            let chunk = std::str::from_utf8(&bytes[start..end]).unwrap();
            limbs.push(chunk.parse::<u64>().unwrap());
            end = start;
        }

        Self::from_parts(sign, limbs)
    }

    /// The number of limbs in the canonical representation.
    pub fn limb_len(&self) -> usize {
        self.limbs.len()
    }

    /// `true` if the value is exactly zero.
    pub fn is_zero(&self) -> bool {
        limb::is_zero(&self.limbs)
    }

    /// `true` if the value is strictly negative.
    pub fn is_negative(&self) -> bool {
        !self.sign && !self.is_zero()
    }

    /// The absolute value.
    pub fn abs(&self) -> Self {
        BigInt {
            sign: true,
            limbs: self.limbs.clone(),
        }
    }

    /// The total number of decimal digits in `|self|` (no leading zeros,
    /// except that zero itself has digit count 1).
    pub fn digit_count(&self) -> usize {
        let top = *self.limbs.last().unwrap();
        let top_digits = if top == 0 { 1 } else { decimal_digits(top) };
        top_digits + (self.limbs.len() - 1) * limb::LOG_B
    }

    /// Compares magnitudes, ignoring sign.
    pub(crate) fn ucmp(&self, other: &Self) -> Ordering {
        ucmp(&self.limbs, &other.limbs)
    }

    /// The smaller of two values.
    pub fn min(self, other: Self) -> Self {
        if self <= other { self } else { other }
    }

    /// The larger of two values.
    pub fn max(self, other: Self) -> Self {
        if self >= other { self } else { other }
    }
}

/// Number of decimal digits in a positive `u64` (`0` itself is not a valid
/// input: callers special-case the all-zero limb).
pub(crate) fn decimal_digits(mut v: u64) -> usize {
    let mut n = 0;
    while v > 0 {
        n += 1;
        v /= 10;
    }
    n.max(1)
}

impl PartialEq for BigInt {
    fn eq(&self, other: &Self) -> bool {
        self.sign == other.sign && self.limbs == other.limbs
    }
}
impl Eq for BigInt {}

impl PartialOrd for BigInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BigInt {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.sign, other.sign) {
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            (true, true) => self.ucmp(other),
            (false, false) => other.ucmp(self),
        }
    }
}

impl fmt::Display for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_negative() {
            f.write_str("-")?;
        }

        let mut iter = self.limbs.iter().rev();
        if let Some(top) = iter.next() {
            write!(f, "{top}")?;
        }
        for limb in iter {
            write!(f, "{:0width$}", limb, width = limb::LOG_B)?;
        }

        Ok(())
    }
}

impl std::str::FromStr for BigInt {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        BigInt::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_canonical() {
        let z = BigInt::zero();
        assert!(z.is_zero());
        assert!(!z.is_negative());
        assert_eq!(z.to_string(), "0");
    }

    #[test]
    fn parse_rejects_malformed_input() {
        assert!(BigInt::parse("").is_err());
        assert!(BigInt::parse("+").is_err());
        assert!(BigInt::parse("+-1").is_err());
        assert!(BigInt::parse("1-2").is_err());
        assert!(BigInt::parse("12a").is_err());
    }

    #[test]
    fn parse_round_trips_through_display() {
        for s in ["0", "7", "-7", "12345678901234567890", "-98765432109876543210"] {
            let n = BigInt::parse(s).unwrap();
            assert_eq!(n.to_string(), s);
        }
    }

    #[test]
    fn negative_zero_normalizes_to_positive() {
        let n = BigInt::from_parts(false, vec![0]);
        assert!(!n.is_negative());
        assert_eq!(n.to_string(), "0");
    }

    #[test]
    fn ordering_respects_sign_and_magnitude() {
        let a = BigInt::parse("-5").unwrap();
        let b = BigInt::parse("3").unwrap();
        assert!(a < b);
        assert!(BigInt::parse("10").unwrap() > BigInt::parse("9").unwrap());
        assert!(BigInt::parse("-10").unwrap() < BigInt::parse("-9").unwrap());
    }

    #[test]
    fn from_str_unchecked_matches_parse_on_well_formed_input() {
        for s in ["0", "7", "-7", "12345678901234567890", "+42"] {
            assert_eq!(BigInt::from_str_unchecked(s), BigInt::parse(s).unwrap());
        }
    }

    #[test]
    fn digit_count_matches_display_length() {
        for s in ["0", "9", "10", "99999999999999999999"] {
            let n = BigInt::parse(s).unwrap();
            assert_eq!(n.digit_count(), s.len());
        }
    }
}
