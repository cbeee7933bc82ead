//! Toom-Cook-4 (squaring) and Toom-Cook-4.5 (multiplication): four-way
//! split, degree-6 product polynomial, seven pointwise products.
//!
//! The two variants share a split but use different point sets: squaring
//! includes the point at infinity (the product's leading coefficient is
//! just `x3^2`, free to read off), while the general multiply variant swaps
//! infinity for the extra finite point `0` it didn't already have, since
//! `x3*y3` isn't free to read off when `x != y`. Both point sets, and the
//! interpolation they imply, are solved generically by
//! [`super::vandermonde`].

use super::signed::{self, Signed};
use super::vandermonde::{Interpolator, Point};

const PARTS: usize = 4;

static SQR_POINTS: [Point; 7] = [
    Point::int(0),
    Point::int(1),
    Point::int(-1),
    Point::int(2),
    Point::int(-2),
    Point::half(-1),
    Point::Infinity,
];

static MUL_POINTS: [Point; 7] = [
    Point::int(1),
    Point::int(-1),
    Point::int(2),
    Point::int(-2),
    Point::half(1),
    Point::half(-1),
    Point::int(0),
];

static SQR_INTERP: Interpolator = Interpolator::new(&SQR_POINTS);
static MUL_INTERP: Interpolator = Interpolator::new(&MUL_POINTS);

fn split(x: &[u64], a: usize) -> Vec<Vec<u64>> {
    signed::split_chunks(x, a, PARTS)
}

fn compose(z: Vec<Signed>, a: usize) -> Vec<u64> {
    let mut acc = signed::zero();
    for (k, zk) in z.into_iter().enumerate() {
        acc = signed::add(&acc, &signed::shift(&zk, k * a));
    }
    debug_assert!(acc.0, "toom4: assembled product went negative");
    acc.1
}

/// `|x| * |y|` for `x.len() == y.len()`.
pub fn mul_same_len(x: &[u64], y: &[u64]) -> Vec<u64> {
    debug_assert_eq!(x.len(), y.len());
    let a = x.len().div_ceil(PARTS);

    let ex = MUL_INTERP.evaluate(&split(x, a));
    let ey = MUL_INTERP.evaluate(&split(y, a));
    let v: Vec<Signed> = ex.iter().zip(&ey).map(|(p, q)| signed::mul(p, q)).collect();

    compose(MUL_INTERP.interpolate(&v), a)
}

/// `|x| ^ 2`.
pub fn sqr_same_len(x: &[u64]) -> Vec<u64> {
    let a = x.len().div_ceil(PARTS);

    let ex = SQR_INTERP.evaluate(&split(x, a));
    let v: Vec<Signed> = ex.iter().map(signed::sqr).collect();

    compose(SQR_INTERP.interpolate(&v), a)
}
