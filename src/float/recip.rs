//! Reciprocal by Newton-Raphson, with a doubling precision schedule.
//!
//! Newton's method for `1/x` is `y_{n+1} = y_n * (2 - x*y_n)`, which doubles
//! the number of correct digits every iteration once `y_n` is close enough.
//! Running the full iteration straight at the target precision `P` would
//! waste almost all of that work recomputing digits the previous rung
//! already nailed down, so this walks a doubling schedule instead: four
//! quick correction passes at precision 16 off a `f64`-derived seed, then
//! one pass per doubling rung up to `P`, each only as precise as it needs
//! to be.

use crate::error::{Error, Result};

use super::precision::PrecisionGuard;
use super::BigFloat;

/// `y_{n+1} = y_n + y_n*(1 - x*y_n)`, algebraically `y_n*(2 - x*y_n)` — the
/// source's update rule, written to share a factor with its own error term
/// rather than compute `2 - x*y_n` directly.
fn newton_step(x: &BigFloat, y: &BigFloat) -> BigFloat {
    let residual = BigFloat::one().sub_ref(&x.mul_ref(y));
    y.add_ref(&y.mul_ref(&residual))
}

/// Seeds a reciprocal estimate from an `f64` approximation of `1/x`, for
/// `x > 0`. Takes up to the top 10 digits of `x`'s mantissa (a `u64`
/// comfortably holds that many digits, and `f64` has nowhere near that much
/// precision to offer anyway), inverts as a native float, and re-attaches
/// `x`'s own exponent so the seed tracks `x`'s scale instead of landing
/// wherever the `f64` string happens to parse.
fn seed(x: &BigFloat) -> BigFloat {
    let digits = x.int_part.abs().to_string();
    let lead = &digits[..digits.len().min(10)];
    let mantissa: f64 = lead.parse().expect("digit run parses as f64");
    let normalized = mantissa / 10f64.powi(lead.len() as i32 - 1); // in [1, 10)
    let y_float = 1.0 / normalized;

    let seed_str = format!("{y_float:.17}");
    let seed0 = BigFloat::parse(&seed_str).expect("f64-derived seed string is well-formed decimal");
    BigFloat { int_part: seed0.int_part, exp: seed0.exp - x.exp }
}

/// Rungs of the doubling schedule strictly between the base precision (16)
/// and `target`, ascending. The walk below runs one Newton step at
/// `rung + 16` for each of these, then one final step at `target + 16`
/// (never repeating that last rung's work twice).
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

/// `1 / x` at precision `target`. Returns [`Error::Domain`] if `x` is zero.
pub(super) fn reciprocal(x: &BigFloat, target: i64) -> Result<BigFloat> {
    if x.is_zero() {
        return Err(Error::Domain("reciprocal of zero"));
    }

    let negative = x.is_negative();
    let ax = x.abs();

    let guard = PrecisionGuard::enter(16);
    let mut y = seed(&ax);
    let x16 = ax.truncate();
    for _ in 0..4 {
        y = newton_step(&x16, &y);
    }

    for rung in doubling_rungs(target) {
        guard.set(rung + 16);
        let xw = ax.truncate();
        y = newton_step(&xw, &y);
    }

    guard.set(target + 16);
    let xw = ax.truncate();
    y = newton_step(&xw, &y);
    guard.set(target);
    let result = y.truncate();
    drop(guard);

    Ok(if negative { -result } else { result })
}
