//! Toom-Cook-3: three-way split, evaluated at `{0, 1, -1, -2, inf}`.
//!
//! Splitting `x = x2*B^2a + x1*B^a + x0` (and `y` likewise) turns the
//! product into a degree-4 polynomial `z0 + z1*t + z2*t^2 + z3*t^3 + z4*t^4`
//! evaluated at `t = B^a`. Evaluating both operands at five points, taking
//! five pointwise products (recursively, through the dispatcher), and
//! solving the resulting linear system for `z0..z4` costs five
//! `(n/3)`-limb multiplications instead of nine.
//!
//! The interpolation below is a closed-form solution of that linear system;
//! every division it performs (`/2`, `/3`) is exact for true polynomial
//! coefficients, and is asserted so in [`signed::div_small_exact`].

use super::signed::{self, Signed};

fn split(x: &[u64], a: usize) -> (Vec<u64>, Vec<u64>, Vec<u64>) {
    let chunks = signed::split_chunks(x, a, 3);
    let mut it = chunks.into_iter();
    (it.next().unwrap(), it.next().unwrap(), it.next().unwrap())
}

/// Evaluates the three chunks of one operand at the five fixed points.
fn evaluate(x0: &[u64], x1: &[u64], x2: &[u64]) -> [Signed; 5] {
    let x0 = signed::from_mag(x0.to_vec());
    let x1 = signed::from_mag(x1.to_vec());
    let x2 = signed::from_mag(x2.to_vec());

    let p0 = x0.clone();
    let p1 = signed::add(&signed::add(&x0, &x1), &x2);
    let pm1 = signed::add(&signed::sub(&x0, &x1), &x2);
    let pm2 = signed::add(
        &signed::sub(&x0, &signed::mul_small_signed(&x1, 2)),
        &signed::mul_small_signed(&x2, 4),
    );
    let pinf = x2;

    [p0, p1, pm1, pm2, pinf]
}

/// Solves for `z0..z4` given the five pointwise products at
/// `{0, 1, -1, -2, inf}`. See the module doc for the derivation.
fn interpolate(v: [Signed; 5]) -> [Signed; 5] {
    let [v0, v1, vm1, vm2, vinf] = v;

    let z0 = v0.clone();
    let z4 = vinf.clone();

    let a = signed::sub(&signed::sub(&v1, &v0), &vinf);
    let b = signed::sub(&signed::sub(&vm1, &v0), &vinf);
    let z2 = signed::div_small_exact(&signed::add(&a, &b), 2);

    let d = signed::div_small_exact(&signed::sub(&v1, &vm1), 2);

    let c = signed::sub(&signed::sub(&vm2, &v0), &signed::mul_small_signed(&vinf, 16));
    let f = signed::sub(&signed::mul_small_signed(&z2, 2), &signed::div_small_exact(&c, 2));

    let z3 = signed::div_small_exact(&signed::sub(&f, &d), 3);
    let z1 = signed::sub(&d, &z3);

    [z0, z1, z2, z3, z4]
}

fn compose(z: [Signed; 5], a: usize) -> Vec<u64> {
    let mut acc = signed::zero();
    for (k, zk) in z.into_iter().enumerate() {
        acc = signed::add(&acc, &signed::shift(&zk, k * a));
    }
    debug_assert!(acc.0, "toom3: assembled product went negative");
    acc.1
}

/// `|x| * |y|` for `x.len() == y.len()`.
pub fn mul_same_len(x: &[u64], y: &[u64]) -> Vec<u64> {
    debug_assert_eq!(x.len(), y.len());
    let a = x.len().div_ceil(3);

    let (x0, x1, x2) = split(x, a);
    let (y0, y1, y2) = split(y, a);

    let ex = evaluate(&x0, &x1, &x2);
    let ey = evaluate(&y0, &y1, &y2);

    let v: [Signed; 5] = std::array::from_fn(|i| signed::mul(&ex[i], &ey[i]));

    compose(interpolate(v), a)
}

/// `|x| ^ 2` for a single operand, squaring each evaluated point directly
/// instead of evaluating `y` a second time.
pub fn sqr_same_len(x: &[u64]) -> Vec<u64> {
    let a = x.len().div_ceil(3);
    let (x0, x1, x2) = split(x, a);
    let ex = evaluate(&x0, &x1, &x2);

    let v: [Signed; 5] = std::array::from_fn(|i| signed::sqr(&ex[i]));

    compose(interpolate(v), a)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::int::BigInt;

    fn mag(s: &str) -> Vec<u64> {
        BigInt::parse(s).unwrap().limbs
    }

    #[test]
    fn toom3_matches_schoolbook_on_balanced_operands() {
        let x = mag(&"1234567890".repeat(40));
        let y = mag(&"9876543210".repeat(40));
        let want = crate::int::schoolbook::mul_mag(&x, &y);
        assert_eq!(mul_same_len(&x, &y), want);
    }

    #[test]
    fn toom3_sqr_matches_mul_with_equal_operands() {
        let x = mag(&"1234567890".repeat(40));
        assert_eq!(sqr_same_len(&x), mul_same_len(&x, &x));
    }

    #[test]
    fn toom3_handles_lengths_not_divisible_by_three() {
        let x = mag(&"13".repeat(61));
        let y = mag(&"7".repeat(61));
        let want = crate::int::schoolbook::mul_mag(&x, &y);
        assert_eq!(mul_same_len(&x, &y), want);
    }
}
