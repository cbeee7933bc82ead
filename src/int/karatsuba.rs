//! Karatsuba multiplication and squaring.
//!
//! One-split divide and conquer: splitting `x = x1*B^a + x0` and
//! `y = y1*B^a + y0` turns one `n`-limb multiplication into three
//! `(n/2)`-limb multiplications instead of four, at the cost of an extra
//! addition/subtraction pass to recombine them. Both operands are required
//! to have equal length — [`crate::int::dispatch`] pads the shorter operand
//! before calling in.

use crate::limb::{self, add_signed, shift_limbs, ucmp};

/// `|x| * |y|` for `x.len() == y.len()`, via one level of Karatsuba splitting
/// plus recursive dispatch for the three sub-products.
pub fn mul_same_len(x: &[u64], y: &[u64]) -> Vec<u64> {
    debug_assert_eq!(x.len(), y.len());

    let n = x.len();
    let a = n / 2;
    if a == 0 {
        return super::schoolbook::mul_mag(x, y);
    }

    let (x0, x1) = x.split_at(a);
    let (y0, y1) = y.split_at(a);

    // P0 = x0*y0, P2 = x1*y1
    let p0 = super::dispatch::mul_mag(x0, y0);
    let p2 = super::dispatch::mul_mag(x1, y1);

    // P1 = (x1 - x0) * (y1 - y0), tracked with an explicit sign since either
    // factor may be negative.
    let (dx_neg, dx) = if ucmp(x1, x0) == std::cmp::Ordering::Less {
        (true, limb::usub(x0, x1))
    } else {
        (false, limb::usub(x1, x0))
    };
    let (dy_neg, dy) = if ucmp(y1, y0) == std::cmp::Ordering::Less {
        (true, limb::usub(y0, y1))
    } else {
        (false, limb::usub(y1, y0))
    };
    let p1_mag = super::dispatch::mul_mag(&dx, &dy);
    let p1_sign = dx_neg == dy_neg; // true * true or false * false => positive

    // mid = P0 + P2 - P1
    let (mid_sign, mid_mag) = add_signed(true, &p0, true, &p2);
    let (mid_sign, mid_mag) = add_signed(mid_sign, &mid_mag, !p1_sign, &p1_mag);

    // result = P2 * B^2a + mid * B^a + P0
    let hi = shift_limbs(&p2, 2 * a);
    let mid_shifted = shift_limbs(&mid_mag, a);

    let (s1, r1) = add_signed(true, &hi, mid_sign, &mid_shifted);
    let (s2, r2) = add_signed(s1, &r1, true, &p0);
    debug_assert!(s2, "karatsuba: assembled product went negative");

    r2
}

/// `|x| ^ 2`, via the symmetric specialisation of [`mul_same_len`] with
/// `x == y`: the cross term needs computing only once (`x0*x1`) and is
/// doubled, so there is no subtraction-with-sign step at all.
pub fn sqr_same_len(x: &[u64]) -> Vec<u64> {
    let n = x.len();
    let a = n / 2;
    if a == 0 {
        return super::schoolbook::sqr_mag(x);
    }

    let (x0, x1) = x.split_at(a);

    let z0 = super::dispatch::sqr_mag(x0);
    let z2 = super::dispatch::sqr_mag(x1);
    let z1 = super::dispatch::mul_mag(x0, x1);
    let two_z1 = limb::uadd(&z1, &z1);

    let hi = shift_limbs(&z2, 2 * a);
    let mid = shift_limbs(&two_z1, a);

    let r1 = limb::uadd(&hi, &mid);
    limb::uadd(&r1, &z0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::int::BigInt;

    fn mag(s: &str) -> Vec<u64> {
        BigInt::parse(s).unwrap().limbs
    }

    #[test]
    fn karatsuba_matches_schoolbook() {
        let x = mag("1234567890123456789012345678901234567890123456789012345678901234567890");
        let y = mag("9876543210987654321098765432109876543210987654321098765432109876543210");
        let want = super::super::schoolbook::mul_mag(&x, &y);
        assert_eq!(mul_same_len(&x, &y), want);
    }

    #[test]
    fn karatsuba_sqr_matches_mul_with_equal_operands() {
        let x = mag("1234567890123456789012345678901234567890123456789012345678901234567890");
        assert_eq!(sqr_same_len(&x), mul_same_len(&x, &x));
    }

    #[test]
    fn karatsuba_handles_odd_limb_counts() {
        let x = mag("123456789012345678901234567890123");
        let y = mag("987654321098765432109876543210987");
        let want = super::super::schoolbook::mul_mag(&x, &y);
        assert_eq!(mul_same_len(&x, &y), want);
    }
}
