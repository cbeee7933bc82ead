//! Property-based tests for the public `BigInt`/`BigFloat` API.
//!
//! These exercise the universal laws `DESIGN.md`/`SPEC_FULL.md` call out as
//! testable: canonicalisation, round-tripping through decimal strings, ring
//! laws, the div/mod identity, and reciprocal/sqrt accuracy. Internal
//! per-backend agreement (schoolbook vs. Karatsuba vs. Toom-3/4.5/6.5h) is
//! already covered by `proptest!` blocks inside `src/int/dispatch.rs`; this
//! file stays at the public-API surface a downstream crate would actually use.

use std::sync::Mutex;

use numerus::{BigFloat, BigInt};
use proptest::prelude::*;

/// `BigFloat`'s precision context is process-wide (`DESIGN.md`,
/// `src/float/precision.rs`). `cargo test` runs this file's tests in
/// parallel by default, so every test that calls `set_precision` takes this
/// lock first to avoid interleaving with another precision-sensitive test.
fn precision_lock() -> std::sync::MutexGuard<'static, ()> {
    static LOCK: Mutex<()> = Mutex::new(());
    LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn bigint(v: i64) -> BigInt {
    BigInt::from(v)
}

proptest! {
    /// Property 2 (round-trip): `parse(toString(x)) == x`.
    #[test]
    fn bigint_round_trips_through_display(v in any::<i64>()) {
        let n = bigint(v);
        let back = BigInt::parse(&n.to_string()).unwrap();
        prop_assert_eq!(back, n);
    }

    /// Property 1 (canonicalisation), indirectly: a value built from a random
    /// i64 always displays without a leading zero (except the value 0 itself).
    #[test]
    fn bigint_display_has_no_redundant_leading_zero(v in any::<i64>()) {
        let s = bigint(v).to_string();
        let digits = s.strip_prefix('-').unwrap_or(&s);
        prop_assert!(digits == "0" || !digits.starts_with('0'));
    }

    /// Property 3 (ring laws): + is commutative and associative.
    #[test]
    fn addition_is_commutative_and_associative(a in any::<i32>(), b in any::<i32>(), c in any::<i32>()) {
        let (x, y, z) = (bigint(a as i64), bigint(b as i64), bigint(c as i64));
        prop_assert_eq!(x.clone() + y.clone(), y.clone() + x.clone());
        prop_assert_eq!((x.clone() + y.clone()) + z.clone(), x + (y + z));
    }

    /// Property 3: * is commutative and associative.
    #[test]
    fn multiplication_is_commutative_and_associative(a in any::<i32>(), b in any::<i32>(), c in any::<i32>()) {
        let (x, y, z) = (bigint(a as i64), bigint(b as i64), bigint(c as i64));
        prop_assert_eq!(x.clone() * y.clone(), y.clone() * x.clone());
        prop_assert_eq!((x.clone() * y.clone()) * z.clone(), x * (y * z));
    }

    /// Property 3: * distributes over +.
    #[test]
    fn multiplication_distributes_over_addition(a in any::<i32>(), b in any::<i32>(), c in any::<i32>()) {
        let (x, y, z) = (bigint(a as i64), bigint(b as i64), bigint(c as i64));
        let lhs = x.clone() * (y.clone() + z.clone());
        let rhs = (x.clone() * y) + (x * z);
        prop_assert_eq!(lhs, rhs);
    }

    /// Property 3: x*(-y) == -(x*y); x - x == 0; x*0 == 0; x*1 == x.
    #[test]
    fn multiplication_sign_and_identity_laws(a in any::<i32>(), b in any::<i32>()) {
        let (x, y) = (bigint(a as i64), bigint(b as i64));
        prop_assert_eq!(x.clone() * (-y.clone()), -(x.clone() * y));
        prop_assert_eq!(x.clone() - x.clone(), BigInt::zero());
        prop_assert_eq!(x.clone() * BigInt::zero(), BigInt::zero());
        prop_assert_eq!(x.clone() * BigInt::one(), x);
    }

    /// Property 4 (dispatcher agreement), at the public-API level: `x * x`
    /// (which routes through squaring) agrees with `x.clone() * x.clone()`
    /// computed as two distinct equal-valued operands (which does not take
    /// the squaring shortcut unless the dispatcher detects value equality).
    #[test]
    fn squaring_agrees_with_multiplying_two_equal_values(a in any::<i64>()) {
        let x = bigint(a);
        prop_assert_eq!(x.squared(), x.clone() * x);
    }

    /// Property 6 (div/mod identity): `x == (x div y)*y + (x mod y)` and
    /// `|x mod y| < |y|`, for nonzero y.
    #[test]
    fn div_rem_identity_holds(a in any::<i64>(), b in any::<i64>()) {
        prop_assume!(b != 0);
        let (x, y) = (bigint(a), bigint(b));
        let (q, r) = x.div_rem(&y).unwrap();
        prop_assert_eq!(q * y.clone() + r.clone(), x);
        prop_assert!(r.abs() < y.abs());
    }

    /// Property 6: quotient sign follows `x.sign == y.sign` (truncation
    /// toward zero), matching Rust's own integer division.
    #[test]
    fn div_rem_quotient_sign_matches_operand_signs(a in any::<i64>(), b in any::<i64>()) {
        prop_assume!(b != 0 && a != 0);
        let (x, y) = (bigint(a), bigint(b));
        let (q, _) = x.div_rem(&y).unwrap();
        if !q.is_zero() {
            prop_assert_eq!(q.is_negative(), x.is_negative() != y.is_negative());
        }
    }

    /// Property 2 for `BigFloat`: parsing back a value's own `Display` output
    /// at a fixed precision recovers the same value (equality is itself
    /// defined at that precision, per `BigFloat`'s `PartialEq`).
    #[test]
    fn bigfloat_round_trips_through_display(a in any::<i32>()) {
        let _lock = precision_lock();
        numerus::set_precision(40);
        let x = BigFloat::from(BigInt::from(a as i64));
        let back = BigFloat::parse(&x.to_string()).unwrap();
        prop_assert_eq!(back, x);
    }
}

#[test]
fn pow_matches_repeated_multiplication() {
    let base = BigInt::from(7i64);
    let mut want = BigInt::one();
    for _ in 0..13 {
        want = want * base.clone();
    }
    assert_eq!(base.pow(13).unwrap(), want);
}

#[test]
fn min_max_agree_with_ordering() {
    let a = BigInt::parse("123456789012345678901234567890").unwrap();
    let b = BigInt::parse("-99999999999999999999").unwrap();
    assert_eq!(a.clone().min(b.clone()), b.clone());
    assert_eq!(a.clone().max(b), a);
}

#[test]
fn reciprocal_correctness_leading_zero_count() {
    // Property 7: |x * inv(x) - 1| has leading decimal zero count >= P - 4.
    let _lock = precision_lock();
    numerus::set_precision(60);
    let x = BigFloat::parse("3.14159265358979").unwrap();
    let inv = x.reciprocal().unwrap();
    let diff = (x * inv - BigFloat::one()).abs();
    assert!(diff.is_zero() || diff_leading_zero_count(&diff) >= 56);
}

#[test]
fn sqrt_correctness_leading_zero_count() {
    // Property 8: |sqrt(x)^2 - x| has leading decimal zero count >= P - 4,
    // measured relative to x's own scale.
    let _lock = precision_lock();
    numerus::set_precision(60);
    let x = BigFloat::parse("2").unwrap();
    let root = x.sqrt().unwrap();
    let squared = root.clone() * root;
    let diff = (squared - x.clone()).abs();
    assert!(diff.is_zero() || diff_exponent(&diff) <= exponent_of(&x) - 56);
}

#[test]
fn sqrt_rejects_negative_input() {
    let _lock = precision_lock();
    numerus::set_precision(30);
    assert!(BigFloat::parse("-4").unwrap().sqrt().is_err());
}

#[test]
fn monotonic_precision_never_loses_matching_leading_digits() {
    // Property 9: increasing P never reduces the number of matching leading
    // digits of sqrt against a higher-precision oracle.
    let _lock = precision_lock();
    let x = BigFloat::parse("2").unwrap();

    numerus::set_precision(200);
    let oracle = x.sqrt().unwrap().to_string();

    let mut prev_match = 0usize;
    for p in [10, 20, 40, 80, 150] {
        numerus::set_precision(p);
        let approx = x.sqrt().unwrap().to_string();
        let matched = oracle
            .bytes()
            .zip(approx.bytes())
            .take_while(|(a, b)| a == b)
            .count();
        assert!(matched >= prev_match, "precision {p} matched fewer leading digits than a lower precision");
        prev_match = matched;
    }
}

/// Counts the number of leading-zero decimal digits after the point in a
/// `BigFloat`'s `Display` form, for a value known to be `< 1` in magnitude
/// (used by [`reciprocal_correctness_leading_zero_count`] to read off how
/// many digits of `x * inv(x)` agree with `1`).
fn diff_leading_zero_count(diff: &BigFloat) -> i64 {
    -diff_exponent(diff)
}

fn diff_exponent(diff: &BigFloat) -> i64 {
    exponent_of(diff)
}

fn exponent_of(v: &BigFloat) -> i64 {
    // `BigFloat`'s decimal exponent is private; recover it from `Display`
    // instead, which is the only externally observable view of scale.
    let s = v.to_string();
    let s = s.trim_start_matches('-');
    if let Some(idx) = s.find('e') {
        s[idx + 1..].parse().unwrap()
    } else if let Some(dot) = s.find('.') {
        let int_part = &s[..dot];
        if int_part == "0" {
            let frac = &s[dot + 1..];
            let leading_zeros = frac.bytes().take_while(|&b| b == b'0').count();
            -(leading_zeros as i64) - 1
        } else {
            int_part.len() as i64 - 1
        }
    } else {
        s.len() as i64 - 1
    }
}
