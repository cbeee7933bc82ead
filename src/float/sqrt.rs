//! Square root by a division-free Newton-Raphson variant.
//!
//! Classic Newton iteration for `sqrt(x)` is `y <- (y + x/y)/2`, but that
//! needs a division every step — exactly the operation [`super::recip`] is
//! built to avoid paying for repeatedly. Instead this computes the
//! *reciprocal* square root `z ~= 1/sqrt(x)` by the self-correcting update
//! `z <- z + z*(1 - x*z^2)/2`, which only ever multiplies, then recovers
//! `sqrt(x) = x*z` in one final multiplication. The low-precision seed phase
//! (twelve ordinary Newton iterations at precision 16, including one
//! honest division through [`super::recip::reciprocal`]) is cheap enough
//! that paying for a division there doesn't matter; it's the high-precision
//! rungs above it where avoiding division pays off.

use crate::error::{Error, Result};

use super::precision::PrecisionGuard;
use super::BigFloat;

fn half() -> BigFloat {
    BigFloat::parse("0.5").expect("0.5 is a well-formed decimal literal")
}

/// One division-free correction step: `z <- z + z*(1 - x*z^2)/2`.
fn rsqrt_step(x: &BigFloat, z: &BigFloat) -> BigFloat {
    let xz2 = x.mul_ref(z).mul_ref(z);
    let residual = BigFloat::one().sub_ref(&xz2).mul_ref(&half());
    z.add_ref(&z.mul_ref(&residual))
}

/// Seeds a `sqrt(x)` estimate (`x > 0`) from an `f64` approximation, mapping
/// the mantissa into `[1, 10)` and handling the exponent's parity explicitly
/// — halving an odd decimal exponent isn't an integer, so an odd exponent
/// borrows one power of ten into the mantissa first.
fn seed(x: &BigFloat) -> BigFloat {
    let digits = x.int_part.abs().to_string();
    let lead = &digits[..digits.len().min(10)];
    let mantissa: f64 = lead.parse().expect("digit run parses as f64");
    let normalized = mantissa / 10f64.powi(lead.len() as i32 - 1); // in [1, 10)

    let odd = x.exp.rem_euclid(2);
    let (scaled, half_exp) = if odd == 0 {
        (normalized, x.exp / 2)
    } else {
        (normalized * 10.0, (x.exp - 1) / 2)
    };

    let sqrt_str = format!("{:.17}", scaled.sqrt());
    let seed0 = BigFloat::parse(&sqrt_str).expect("f64-derived seed string is well-formed decimal");
    BigFloat { int_part: seed0.int_part, exp: seed0.exp + half_exp }
}

/// Rungs of the doubling schedule strictly between the base precision (16)
/// and `target`; mirrors `recip`'s own schedule exactly (both walk the same
/// doubling sequence over the same kind of self-correcting step).
fn doubling_rungs(target: i64) -> Vec<i64> {
    let mut rungs = Vec::new();
    let mut r = 16i64;
    while r < target {
        r = r.saturating_mul(2);
        if r < target {
            rungs.push(r);
        }
    }
    rungs
}

/// `sqrt(x)` at precision `target`. Returns [`Error::Domain`] for negative
/// `x`; `sqrt(0) == 0` with no iteration needed.
pub(super) fn sqrt(x: &BigFloat, target: i64) -> Result<BigFloat> {
    if x.is_negative() {
        return Err(Error::Domain("sqrt of a negative BigFloat"));
    }
    if x.is_zero() {
        return Ok(BigFloat::zero());
    }

    let guard = PrecisionGuard::enter(16);
    let half_const = half();

    let mut y = seed(x);
    let x16 = x.truncate();
    for _ in 0..12 {
        let recip_y = super::recip::reciprocal(&y, 16)?;
        y = y.mul_ref(&half_const).add_ref(&x16.mul_ref(&half_const).mul_ref(&recip_y));
    }

    let mut z = super::recip::reciprocal(&y, 16)?;
    for rung in doubling_rungs(target) {
        guard.set(rung + 16);
        let xw = x.truncate();
        z = rsqrt_step(&xw, &z);
    }

    guard.set(target + 16);
    let xw = x.truncate();
    z = rsqrt_step(&xw, &z);
    guard.set(target);
    let result = x.mul_ref(&z).truncate();
    drop(guard);

    Ok(result)
}
