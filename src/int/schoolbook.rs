//! Schoolbook multiplication and squaring.
//!
//! Limbs are base-[`B`](crate::limb::B) = 10^16, too wide to multiply
//! pairwise into a `u64` accumulator without overflow. Each limb is first
//! split into two base-[`B2`](crate::limb::B2) = 10^8 "half-limbs"; the
//! convolution of half-limbs fits a `u128` accumulator comfortably even
//! after summing `min(m,n)` partial products, so carries can be deferred
//! until a single reduction pass at the end. Operates on bare magnitudes;
//! callers attach sign.

use crate::limb::{self, normalize, B2};

fn split_half(x: &[u64]) -> Vec<u64> {
    let mut out = Vec::with_capacity(x.len() * 2);
    for &limb in x {
        out.push(limb % B2);
        out.push(limb / B2);
    }
    out
}

fn fuse_half(h: &[u64]) -> Vec<u64> {
    let mut out = Vec::with_capacity(h.len().div_ceil(2));
    let mut i = 0;
    while i < h.len() {
        let lo = h[i];
        let hi = if i + 1 < h.len() { h[i + 1] } else { 0 };
        out.push(lo + hi * B2);
        i += 2;
    }
    out
}

/// Propagates carries through a convolution of half-limbs in place.
///
/// Precondition: `acc` has exactly enough slots to hold the represented
/// value without truncation (see callers), so the final carry is zero.
fn reduce_half(acc: &mut [u128]) {
    let mut carry: u128 = 0;
    for slot in acc.iter_mut() {
        let v = *slot + carry;
        let q = v / B2 as u128;
        *slot = v - q * B2 as u128;
        carry = q;
    }
    debug_assert_eq!(carry, 0, "schoolbook: half-limb buffer undersized for carry");
}

/// `|x| * |y|` via schoolbook multiplication.
pub fn mul_mag(x: &[u64], y: &[u64]) -> Vec<u64> {
    if limb::is_zero(x) || limb::is_zero(y) {
        return vec![0];
    }

    let hx = split_half(x);
    let hy = split_half(y);
    let mut acc = vec![0u128; hx.len() + hy.len()];

    for (i, &a) in hx.iter().enumerate() {
        if a == 0 {
            continue;
        }
        for (j, &b) in hy.iter().enumerate() {
            acc[i + j] += a as u128 * b as u128;
        }
    }

    reduce_half(&mut acc);
    let half_limbs: Vec<u64> = acc.iter().map(|&v| v as u64).collect();
    let mut result = fuse_half(&half_limbs);
    normalize(&mut result);
    result
}

/// `|x| ^ 2` via schoolbook squaring.
///
/// Exploits `x*x`'s symmetry: the cross term `x[i]*x[k]` (`i < k`) is added
/// once, doubled, to slot `i+k`, and each diagonal term `x[i]^2` is added
/// once to slot `2i`. This halves the number of half-limb multiplications
/// relative to calling [`mul_mag`] with both arguments equal.
pub fn sqr_mag(x: &[u64]) -> Vec<u64> {
    if limb::is_zero(x) {
        return vec![0];
    }

    let h = split_half(x);
    let n = h.len();
    let mut acc = vec![0u128; 2 * n];

    for i in 0..n {
        if h[i] == 0 {
            continue;
        }
        acc[2 * i] += h[i] as u128 * h[i] as u128;

        for k in (i + 1)..n {
            if h[k] == 0 {
                continue;
            }
            acc[i + k] += 2 * (h[i] as u128) * (h[k] as u128);
        }
    }

    reduce_half(&mut acc);
    let half_limbs: Vec<u64> = acc.iter().map(|&v| v as u64).collect();
    let mut result = fuse_half(&half_limbs);
    normalize(&mut result);
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::int::BigInt;

    fn mag(s: &str) -> Vec<u64> {
        BigInt::parse(s).unwrap().limbs
    }

    #[test]
    fn schoolbook_matches_known_product() {
        let x = mag("12345678901234567890");
        let y = mag("98765432109876543210");
        let got = mul_mag(&x, &y);
        let want = mag("1219326311370217952237463801111263526900");
        assert_eq!(got, want);
    }

    #[test]
    fn schoolbook_sqr_matches_mul_with_equal_operands() {
        let x = mag("123456789012345678901234567890");
        assert_eq!(sqr_mag(&x), mul_mag(&x, &x));
    }

    #[test]
    fn schoolbook_handles_single_limb() {
        assert_eq!(mul_mag(&[7], &[6]), vec![42]);
        assert_eq!(sqr_mag(&[9]), vec![81]);
    }

    #[test]
    fn schoolbook_zero_is_absorbing() {
        let x = mag("123456789012345678901234567890");
        assert_eq!(mul_mag(&x, &[0]), vec![0]);
        assert_eq!(mul_mag(&[0], &x), vec![0]);
    }
}
