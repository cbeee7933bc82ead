//! Integer division.
//!
//! Two algorithms share the work: classical schoolbook long division, used
//! directly when the divisor is small (see
//! [`crate::config::LONG_DIV_LIMB_THRESHOLD`]), and a Newton-Raphson
//! reciprocal-based division for everything larger. The reciprocal path
//! still bottoms out in classical long division — just on a two-limb seed,
//! never on the full-size divisor — so there is exactly one place in this
//! crate that performs digit-by-digit division.

use log::trace;

use crate::config;
use crate::error::{Error, Result};
use crate::limb::{self, add_signed, mul_small, normalize, uadd, ucmp, usub};

use super::dispatch;
use super::BigInt;

/// Classical long division: `x = q*y + r`, `0 <= r < y`. `y` must be
/// non-zero. Each output limb is found by binary-searching `[0, B)` for the
/// largest `d` with `d*y <= remainder` — more comparisons per limb than a
/// digit estimate from the top limb alone, but simple and exact regardless
/// of how `y`'s leading limb is distributed.
fn classical_divmod(x: &[u64], y: &[u64]) -> (Vec<u64>, Vec<u64>) {
    debug_assert!(!limb::is_zero(y), "classical_divmod precondition: y != 0");

    if ucmp(x, y) == std::cmp::Ordering::Less {
        return (vec![0], x.to_vec());
    }

    let mut quotient = vec![0u64; x.len()];
    let mut remainder: Vec<u64> = vec![0];

    for i in (0..x.len()).rev() {
        remainder = limb::shift_limbs(&remainder, 1);
        remainder[0] = x[i];
        normalize(&mut remainder);

        let mut lo: u64 = 0;
        let mut hi: u64 = limb::B - 1;
        while lo < hi {
            let mid = lo + (hi - lo + 1) / 2;
            let (_, trial) = mul_small(y, mid as i64);
            if ucmp(&trial, &remainder) != std::cmp::Ordering::Greater {
                lo = mid;
            } else {
                hi = mid - 1;
            }
        }
        quotient[i] = lo;
        if lo > 0 {
            let (_, used) = mul_small(y, lo as i64);
            remainder = usub(&remainder, &used);
        }
    }

    normalize(&mut quotient);
    (quotient, remainder)
}

/// Truncating division by `B^k`: drops the low `k` limbs.
fn drop_low(x: &[u64], k: usize) -> Vec<u64> {
    if x.len() <= k {
        vec![0]
    } else {
        let mut v = x[k..].to_vec();
        normalize(&mut v);
        v
    }
}

/// `B^k` as a magnitude.
fn b_pow(k: usize) -> Vec<u64> {
    let mut v = vec![0u64; k];
    v.push(1);
    v
}

/// The top `s` limbs of `y`, as their own magnitude (`y` shifted right by
/// `y.len() - s` limbs).
fn top_limbs(y: &[u64], s: usize) -> Vec<u64> {
    let start = y.len().saturating_sub(s);
    let mut v = y[start..].to_vec();
    normalize(&mut v);
    v
}

/// Computes `floor(B^(2p) / y)` via Newton-Raphson, seeded from an exact
/// two-limb division and refined by fixed-point iteration
/// `R := R + R*(B^(2p) - y*R) / B^(2p)` until the precision doubles past `p`.
///
/// `y*R` is computed at full width every iteration rather than truncated to
/// the current working precision — simpler to verify correct, at the cost of
/// some wasted work on digits the seed hasn't earned accuracy for yet. A
/// production-tuned implementation would truncate `y` to the working
/// precision at each doubling step; this one does not.
fn reciprocal(y: &[u64], p: usize) -> Vec<u64> {
    let seed_limbs = p.min(2);
    let y_seed = top_limbs(y, seed_limbs);
    let (mut rec, _) = classical_divmod(&b_pow(2 * seed_limbs), &y_seed);

    let mut correct_limbs = seed_limbs;
    let target = b_pow(2 * p);

    while correct_limbs < p {
        correct_limbs = (correct_limbs * 2).min(p);

        let y_rec = dispatch::mul_mag(y, &rec);
        let (sign, diff) = add_signed(true, &target, false, &y_rec);
        debug_assert!(sign, "newton reciprocal: divisor estimate exceeded B^(2p)");
        let correction = dispatch::mul_mag(&rec, &diff);
        let correction = drop_low(&correction, 2 * p);

        rec = uadd(&rec, &correction);
    }

    rec
}

/// `|x| / |y|` and `|x| % |y|`, via the Newton-Raphson reciprocal path:
/// approximate the quotient from a reciprocal of `y`, then correct by at
/// most a few units.
fn newton_divmod(x: &[u64], y: &[u64]) -> (Vec<u64>, Vec<u64>) {
    let p = y.len() + 2;
    let rec = reciprocal(y, p);

    let scaled = dispatch::mul_mag(x, &rec);
    let mut q = drop_low(&scaled, 2 * p);

    let mut product = dispatch::mul_mag(&q, y);
    loop {
        match ucmp(&product, x) {
            std::cmp::Ordering::Greater => {
                q = usub(&q, &[1]);
                product = usub(&product, y);
            }
            std::cmp::Ordering::Less => {
                let next_product = uadd(&product, y);
                if ucmp(&next_product, x) == std::cmp::Ordering::Greater {
                    break;
                }
                q = uadd(&q, &[1]);
                product = next_product;
            }
            std::cmp::Ordering::Equal => break,
        }
    }

    let r = usub(x, &product);
    (q, r)
}

fn divmod_mag(x: &[u64], y: &[u64]) -> (Vec<u64>, Vec<u64>) {
    if y.len() <= config::LONG_DIV_LIMB_THRESHOLD {
        trace!("div: classical long division ({} limbs)", y.len());
        classical_divmod(x, y)
    } else {
        trace!("div: newton-raphson reciprocal division ({} limbs)", y.len());
        newton_divmod(x, y)
    }
}

impl BigInt {
    /// Truncating division and remainder: `self == quotient * other +
    /// remainder`, with `remainder` having the same sign as `self` (or
    /// zero) and `|remainder| < |other|`. This is truncation toward zero,
    /// matching Rust's own integer division rather than Euclidean or
    /// floored division.
    ///
    /// Returns [`Error::Domain`] if `other` is zero.
    pub fn div_rem(&self, other: &BigInt) -> Result<(BigInt, BigInt)> {
        if other.is_zero() {
            return Err(Error::Domain("division by zero"));
        }
        if self.is_zero() {
            return Ok((BigInt::zero(), BigInt::zero()));
        }

        let (q_mag, r_mag) = divmod_mag(&self.limbs, &other.limbs);
        let q_sign = if limb::is_zero(&q_mag) { true } else { self.sign == other.sign };
        let r_sign = if limb::is_zero(&r_mag) { true } else { self.sign };

        Ok((BigInt::from_parts(q_sign, q_mag), BigInt::from_parts(r_sign, r_mag)))
    }

    /// Truncating division; see [`BigInt::div_rem`].
    pub fn div(&self, other: &BigInt) -> Result<BigInt> {
        self.div_rem(other).map(|(q, _)| q)
    }

    /// Truncating remainder; see [`BigInt::div_rem`].
    pub fn rem(&self, other: &BigInt) -> Result<BigInt> {
        self.div_rem(other).map(|(_, r)| r)
    }
}
