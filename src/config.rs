//! Tunable constants consulted by the multiplication dispatcher and by
//! integer division.
//!
//! The source this crate generalizes explored `KARATSUBA_THRESHOLD` in
//! `{43, 50, 65}`, `TOOM3_THRESHOLD` around 250-350, `TOOM4_THRESHOLD`
//! around 600-900, and `TOOM6H_THRESHOLD` around 800-900. The values below
//! are implementation-chosen midpoints of those ranges (see DESIGN.md).

/// Below this many limbs (the smaller operand), use schoolbook
/// multiplication/squaring.
pub const KARATSUBA_THRESHOLD: usize = 64;

/// Below this many limbs, use Karatsuba.
pub const TOOM3_THRESHOLD: usize = 300;

/// Below this many limbs, use Toom-Cook-3.
pub const TOOM4_THRESHOLD: usize = 700;

/// Below this many limbs, use Toom-Cook-4 (squaring) / Toom-Cook-4.5
/// (multiplication).
pub const TOOM6H_THRESHOLD: usize = 850;

/// Squaring only switches from Toom-4 to Toom-6.5h beyond this much larger
/// threshold; below it Toom-4 squaring remains faster in practice.
pub const TOOM6H_SQR_THRESHOLD: usize = TOOM6H_THRESHOLD * 50;

/// Below this many limbs, `BigInt` division uses classical schoolbook long
/// division directly; above it, it uses the Newton-Raphson reciprocal path
/// (see [`crate::int::div`]). Resolves Open Question (a) of DESIGN.md: the
/// long-division path is exact and simple but quadratic, so it is kept only
/// for operands small enough that quadratic cost is negligible.
pub const LONG_DIV_LIMB_THRESHOLD: usize = 4;

/// A snapshot of the dispatcher/division thresholds, for introspection and
/// for tests that want to exercise a specific algorithm directly regardless
/// of operand size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Thresholds {
    pub karatsuba: usize,
    pub toom3: usize,
    pub toom4: usize,
    pub toom6h: usize,
    pub toom6h_sqr: usize,
    pub long_div_limbs: usize,
}

impl Default for Thresholds {
    fn default() -> Self {
        Thresholds {
            karatsuba: KARATSUBA_THRESHOLD,
            toom3: TOOM3_THRESHOLD,
            toom4: TOOM4_THRESHOLD,
            toom6h: TOOM6H_THRESHOLD,
            toom6h_sqr: TOOM6H_SQR_THRESHOLD,
            long_div_limbs: LONG_DIV_LIMB_THRESHOLD,
        }
    }
}
