//! Toom-Cook-6.5h: six-way split, degree-10 product polynomial, eleven
//! evaluation points (ten non-trivial pointwise products plus the free
//! point at infinity).
//!
//! The point set `{0, ±1, ±2, ±1/2, ±3, 1/3, inf}` is the asymmetric
//! half-even set used by production multiprecision libraries for this split
//! count — it drops `-1/3` in favour of reusing `1/3` alone, which keeps the
//! interpolation matrix invertible while avoiding an extra distinct
//! denominator. Multiplication and squaring share the same point set here:
//! unlike Toom-4(.5), a six-way split has no parity asymmetry forcing a
//! different set for the two cases.
//!
//! The interpolation itself is solved generically by [`super::vandermonde`];
//! see that module's doc comment for why evaluating at a fractional point
//! never needs a `BigInt` division.

use super::signed::{self, Signed};
use super::vandermonde::{Interpolator, Point};

const PARTS: usize = 6;

static POINTS: [Point; 11] = [
    Point::int(0),
    Point::int(1),
    Point::int(-1),
    Point::int(2),
    Point::int(-2),
    Point::half(1),
    Point::half(-1),
    Point::int(3),
    Point::int(-3),
    Point::third(1),
    Point::Infinity,
];

static INTERP: Interpolator = Interpolator::new(&POINTS);

fn split(x: &[u64], a: usize) -> Vec<Vec<u64>> {
    signed::split_chunks(x, a, PARTS)
}

fn compose(z: Vec<Signed>, a: usize) -> Vec<u64> {
    let mut acc = signed::zero();
    for (k, zk) in z.into_iter().enumerate() {
        acc = signed::add(&acc, &signed::shift(&zk, k * a));
    }
    debug_assert!(acc.0, "toom6h: assembled product went negative");
    acc.1
}

/// `|x| * |y|` for `x.len() == y.len()`.
pub fn mul_same_len(x: &[u64], y: &[u64]) -> Vec<u64> {
    debug_assert_eq!(x.len(), y.len());
    let a = x.len().div_ceil(PARTS);

    let ex = INTERP.evaluate(&split(x, a));
    let ey = INTERP.evaluate(&split(y, a));
    let v: Vec<Signed> = ex.iter().zip(&ey).map(|(p, q)| signed::mul(p, q)).collect();

    compose(INTERP.interpolate(&v), a)
}

/// `|x| ^ 2`. Squaring recurses into the squaring dispatcher for each
/// evaluated point rather than evaluating the same operand twice.
pub fn sqr_same_len(x: &[u64]) -> Vec<u64> {
    let a = x.len().div_ceil(PARTS);

    let ex = INTERP.evaluate(&split(x, a));
    let v: Vec<Signed> = ex.iter().map(signed::sqr).collect();

    compose(INTERP.interpolate(&v), a)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::int::BigInt;

    fn mag(s: &str) -> Vec<u64> {
        BigInt::parse(s).unwrap().limbs
    }

    #[test]
    fn toom6h_mul_matches_schoolbook() {
        let x = mag(&"1234567890".repeat(200));
        let y = mag(&"9876543210".repeat(200));
        let want = crate::int::schoolbook::mul_mag(&x, &y);
        assert_eq!(mul_same_len(&x, &y), want);
    }

    #[test]
    fn toom6h_sqr_matches_mul_with_equal_operands() {
        let x = mag(&"1234567890".repeat(200));
        assert_eq!(sqr_same_len(&x), mul_same_len(&x, &x));
    }

    #[test]
    fn toom6h_handles_lengths_not_divisible_by_six() {
        let x = mag(&"13".repeat(211));
        let y = mag(&"7".repeat(211));
        let want = crate::int::schoolbook::mul_mag(&x, &y);
        assert_eq!(mul_same_len(&x, &y), want);
    }
}
