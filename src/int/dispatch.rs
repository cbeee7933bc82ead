//! The multiplication dispatcher: picks schoolbook, Karatsuba, Toom-3,
//! Toom-4(.5), or Toom-6.5h based on operand size, and handles the unequal-
//! length case every algorithm above assumes away.
//!
//! Squaring gets its own entry point ([`sqr_mag`]) rather than being folded
//! into [`mul_mag`] under `x == y`: equal *value* doesn't imply equal
//! *identity| here (these are bare `&[u64]` magnitudes, not interned), so a
//! caller that happens to multiply a value by an equal-but-distinct copy of
//! itself would silently miss the cheaper squaring path if detection relied
//! on pointer equality. Callers that know they're squaring call
//! [`sqr_mag`] directly instead.

use log::trace;

use crate::config;
use crate::limb::{self, shift_limbs};

use super::{karatsuba, schoolbook, toom3, toom4, toom6h};

/// `|x| * |y|` for arbitrary-length magnitudes.
pub fn mul_mag(x: &[u64], y: &[u64]) -> Vec<u64> {
    if limb::is_zero(x) || limb::is_zero(y) {
        return vec![0];
    }

    let (x, y, m, n) = if x.len() >= y.len() { (x, y, x.len(), y.len()) } else { (y, x, y.len(), x.len()) };

    if m != n {
        // Pad the shorter operand by shifting it up `m - n` limbs (i.e.
        // multiplying by B^(m-n)), run the balanced algorithm, then strip
        // the same number of guaranteed-zero limbs off the low end of the
        // product — equivalent to zero-extending at the high end, but
        // expressed as a same-length call every balanced backend expects.
        let padded_y = shift_limbs(y, m - n);
        let mut product = mul_same_len(x, &padded_y);
        product.drain(0..(m - n));
        limb::normalize(&mut product);
        return product;
    }

    mul_same_len(x, y)
}

/// `|x| ^ 2` for an arbitrary-length magnitude.
pub fn sqr_mag(x: &[u64]) -> Vec<u64> {
    if limb::is_zero(x) {
        return vec![0];
    }
    sqr_same_len(x)
}

fn mul_same_len(x: &[u64], y: &[u64]) -> Vec<u64> {
    let n = x.len();
    if n < config::KARATSUBA_THRESHOLD {
        trace!("dispatch: schoolbook multiply ({n} limbs)");
        schoolbook::mul_mag(x, y)
    } else if n < config::TOOM3_THRESHOLD {
        trace!("dispatch: karatsuba multiply ({n} limbs)");
        karatsuba::mul_same_len(x, y)
    } else if n < config::TOOM4_THRESHOLD {
        trace!("dispatch: toom-3 multiply ({n} limbs)");
        toom3::mul_same_len(x, y)
    } else if n < config::TOOM6H_THRESHOLD {
        trace!("dispatch: toom-4.5 multiply ({n} limbs)");
        toom4::mul_same_len(x, y)
    } else {
        trace!("dispatch: toom-6.5h multiply ({n} limbs)");
        toom6h::mul_same_len(x, y)
    }
}

fn sqr_same_len(x: &[u64]) -> Vec<u64> {
    let n = x.len();
    if n < config::KARATSUBA_THRESHOLD {
        trace!("dispatch: schoolbook square ({n} limbs)");
        schoolbook::sqr_mag(x)
    } else if n < config::TOOM3_THRESHOLD {
        trace!("dispatch: karatsuba square ({n} limbs)");
        karatsuba::sqr_same_len(x)
    } else if n < config::TOOM4_THRESHOLD {
        trace!("dispatch: toom-3 square ({n} limbs)");
        toom3::sqr_same_len(x)
    } else if n < config::TOOM6H_SQR_THRESHOLD {
        trace!("dispatch: toom-4 square ({n} limbs)");
        toom4::sqr_same_len(x)
    } else {
        trace!("dispatch: toom-6.5h square ({n} limbs)");
        toom6h::sqr_same_len(x)
    }
}
