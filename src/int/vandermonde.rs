//! Generic Toom-Cook interpolation: given pointwise products at a fixed set
//! of evaluation points, recover the polynomial's coefficients.
//!
//! Toom-3 above has a short enough point set that its interpolation formulas
//! were worth deriving and writing out by hand. Toom-4(.5) and Toom-6.5h
//! don't: their formulas are exactly the solution of a 6-to-9 unknown linear
//! system, and transcribing a hand derivation for that many unknowns is far
//! more error-prone than solving the system itself. This module inverts the
//! (small, rational, operand-size-independent) matrix for a given point set
//! once, then applies the resulting fixed linear combination to the
//! (operand-size-dependent) `BigInt` pointwise products.
//!
//! Evaluating at a fractional point like `1/2` never divides a `BigInt`: a
//! `k`-chunk operand is evaluated as `w = sum_j chunk_j * a^j * b^(k-1-j)`,
//! i.e. the numerator/denominator of the point are folded into the integer
//! weights instead of introduced as a division. The pointwise product of two
//! such "cleared" evaluations lands on exactly the right scale to plug
//! straight into the interpolation matrix with no further scaling — see the
//! worked relation in [`Interpolator::interpolate`].

use std::sync::OnceLock;

use super::rational::Rat;
use super::signed::{self, Signed};

/// One evaluation point: either a finite rational `a / b` (`b > 0`), or the
/// point at infinity, shorthand for "the leading coefficient of the
/// product", i.e. the pointwise product of the two operands' top chunks.
#[derive(Clone, Copy)]
pub enum Point {
    Finite(i64, i64),
    Infinity,
}

impl Point {
    pub const fn int(n: i64) -> Self {
        Point::Finite(n, 1)
    }

    pub const fn half(n: i64) -> Self {
        Point::Finite(n, 2)
    }

    pub const fn third(n: i64) -> Self {
        Point::Finite(n, 3)
    }
}

/// Builds row `i` of the basis matrix for a degree-`(n-1)` polynomial at
/// point `(a, b)`: `[a^0*b^(n-1), a^1*b^(n-2), ..., a^(n-1)*b^0]`.
fn basis_row(a: i64, b: i64, n: usize) -> Vec<Rat> {
    (0..n)
        .map(|j| Rat::int(a).pow(j as u32).mul(Rat::int(b).pow((n - 1 - j) as u32)))
        .collect()
}

/// Inverts the `n x n` matrix whose row `i` is `basis_row(points[i].0,
/// points[i].1, n)`, via Gauss-Jordan elimination over exact rationals.
/// Panics on a singular matrix, which can only arise from a duplicate point
/// in a fixed, hand-written point set — never from caller input.
fn invert(points: &[(i64, i64)]) -> Vec<Vec<Rat>> {
    let n = points.len();
    let mut a: Vec<Vec<Rat>> = points
        .iter()
        .map(|&(pa, pb)| {
            let mut row = basis_row(pa, pb, n);
            row.extend((0..n).map(|_| Rat::zero()));
            row
        })
        .collect();
    for (i, row) in a.iter_mut().enumerate() {
        row[n + i] = Rat::one();
    }

    for col in 0..n {
        let pivot_row = (col..n)
            .find(|&r| !a[r][col].is_zero())
            .expect("singular interpolation matrix: duplicate evaluation points");
        a.swap(col, pivot_row);

        let pivot = a[col][col];
        for j in 0..2 * n {
            a[col][j] = a[col][j].div(pivot);
        }
        for r in 0..n {
            if r != col && !a[r][col].is_zero() {
                let factor = a[r][col];
                for j in 0..2 * n {
                    let sub = a[col][j].mul(factor);
                    a[r][j] = a[r][j].sub(sub);
                }
            }
        }
    }

    (0..n).map(|i| a[i][n..2 * n].to_vec()).collect()
}

/// A cached, point-set-specific interpolator. The matrix inversion runs once
/// (lazily, via [`OnceLock`]) and is reused for every multiplication that
/// picks this algorithm.
pub struct Interpolator {
    points: &'static [Point],
    inverse: OnceLock<Vec<Vec<Rat>>>,
}

impl Interpolator {
    pub const fn new(points: &'static [Point]) -> Self {
        Interpolator {
            points,
            inverse: OnceLock::new(),
        }
    }

    fn finite_points(&self) -> Vec<(i64, i64)> {
        self.points
            .iter()
            .filter_map(|p| match p {
                Point::Finite(a, b) => Some((*a, *b)),
                Point::Infinity => None,
            })
            .collect()
    }

    fn inf_index(&self) -> Option<usize> {
        self.points.iter().position(|p| matches!(p, Point::Infinity))
    }

    fn inverse(&self) -> &Vec<Vec<Rat>> {
        self.inverse.get_or_init(|| invert(&self.finite_points()))
    }

    /// Evaluates a `k`-chunk operand (degree `k - 1`) at every point in this
    /// interpolator's point set, in the same order as `self.points`.
    pub fn evaluate(&self, chunks: &[Vec<u64>]) -> Vec<Signed> {
        let k = chunks.len();
        self.points
            .iter()
            .map(|p| match p {
                Point::Infinity => signed::from_mag(chunks[k - 1].clone()),
                Point::Finite(a, b) => {
                    let mut acc = signed::zero();
                    for (j, chunk) in chunks.iter().enumerate() {
                        let weight = (*a as i128).pow(j as u32) * (*b as i128).pow((k - 1 - j) as u32);
                        let weight: i64 = weight.try_into().expect("evaluation weight too large for i64");
                        acc = signed::add(&acc, &signed::mul_small_signed(&signed::from_mag(chunk.clone()), weight));
                    }
                    acc
                }
            })
            .collect()
    }

    /// Recovers the `degree_z = points.len() - 1` polynomial coefficients
    /// from the pointwise products `v` (same order as `self.points`).
    ///
    /// For a finite point `(a, b)`, evaluating `k`-chunk operands `x`, `y`
    /// produces cleared values `w_x = b^(k-1) x(a/b)`, `w_y = b^(k-1) y(a/b)`.
    /// Their product is `w_x w_y = b^(2k-2) x(a/b) y(a/b) = b^(degree_z)
    /// z(a/b)`, which expands to exactly `sum_m z_m a^m b^(degree_z - m)` —
    /// the basis row this module inverts. No scaling step is needed before
    /// handing pointwise products straight to the matrix.
    pub fn interpolate(&self, v: &[Signed]) -> Vec<Signed> {
        let degree_z = self.points.len() - 1;

        match self.inf_index() {
            None => apply(self.inverse(), v),
            Some(idx) => {
                let top = v[idx].clone();
                let finite_v: Vec<Signed> = v
                    .iter()
                    .enumerate()
                    .filter(|(i, _)| *i != idx)
                    .map(|(_, val)| val.clone())
                    .collect();
                let finite_points = self.finite_points();

                // Subtract the top coefficient's contribution, then divide
                // out one factor of b: both steps are exact integer
                // operations (see the module doc and the doc comment above).
                let reduced: Vec<Signed> = finite_v
                    .iter()
                    .zip(finite_points.iter())
                    .map(|(val, &(a, b))| {
                        let weight: i64 = (a as i128)
                            .pow(degree_z as u32)
                            .try_into()
                            .expect("interpolation weight too large for i64");
                        let top_term = signed::mul_small_signed(&top, weight);
                        let adjusted = signed::sub(val, &top_term);
                        signed::div_small_exact(&adjusted, b as u64)
                    })
                    .collect();

                let mut z = apply(self.inverse(), &reduced);
                z.push(top);
                z
            }
        }
    }
}

/// Applies an inverse matrix to a pointwise-product vector, one row per
/// output coefficient.
fn apply(inverse: &[Vec<Rat>], v: &[Signed]) -> Vec<Signed> {
    inverse.iter().map(|row| apply_row(row, v)).collect()
}

/// Applies one row of rational coefficients to `v`, clearing denominators
/// with a single common-denominator division at the end rather than one
/// division per term (an individual term need not divide evenly even though
/// the row's full weighted sum does).
fn apply_row(row: &[Rat], v: &[Signed]) -> Signed {
    let den = row.iter().fold(1i128, |acc, r| lcm(acc, r.den));

    let mut acc = signed::zero();
    for (coeff, val) in row.iter().zip(v) {
        if coeff.is_zero() {
            continue;
        }
        let scaled_num: i64 = (coeff.num * (den / coeff.den))
            .try_into()
            .expect("interpolation coefficient too large for i64");
        acc = signed::add(&acc, &signed::mul_small_signed(val, scaled_num));
    }

    signed::div_small_exact(&acc, den.try_into().expect("interpolation denominator too large for u64"))
}

fn gcd(a: i128, b: i128) -> i128 {
    if b == 0 { a.abs() } else { gcd(b, a % b) }
}

fn lcm(a: i128, b: i128) -> i128 {
    a / gcd(a, b) * b
}
