//! Literal end-to-end scenarios, mirroring the concrete input/output
//! examples (S1, S2, S3, S4, S6 in `SPEC_FULL.md`/`spec.md` §8). S5
//! (Chudnovsky pi) belongs to the binary-splitting demo program, which is
//! explicitly out of scope for this crate (§1 "external collaborators") —
//! only the kernel operations those demos would call on are exercised here.

use std::sync::Mutex;

use numerus::{BigFloat, BigInt};

fn precision_lock() -> std::sync::MutexGuard<'static, ()> {
    static LOCK: Mutex<()> = Mutex::new(());
    LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn n(s: &str) -> BigInt {
    BigInt::parse(s).unwrap()
}

/// Enables `log`/`env_logger` output (dispatcher trace lines, division path
/// choice) when these tests run under `RUST_LOG=trace`; a no-op otherwise.
fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// S1: a known 20x20-digit product.
#[test]
fn s1_known_product() {
    init_logging();
    let x = n("12345678901234567890");
    let y = n("98765432109876543210");
    assert_eq!(x * y, n("1219326311370217952237463801111263526900"));
}

/// S2: `5^100`.
#[test]
fn s2_power_of_five() {
    let got = n("5").pow(100).unwrap();
    let want = n("7888609052210118054117285652827862296732064351090230047702789306640625");
    assert_eq!(got, want);
}

/// S3: factorial(20) and factorial(50), computed by straightforward
/// sequential `BigInt` multiplication. Binary splitting (the technique the
/// spec's out-of-scope demo programs use to balance operand sizes across a
/// large product) is a property of how a *caller* structures a big multi-term
/// product; it is not part of this crate's own operation set, so this test
/// exercises the kernel operation the demo would actually call: big-integer
/// multiplication chained across many factors.
fn factorial(k: u64) -> BigInt {
    let mut acc = BigInt::one();
    for i in 2..=k {
        acc = acc * BigInt::from(i);
    }
    acc
}

#[test]
fn s3_factorial_twenty() {
    assert_eq!(factorial(20), n("2432902008176640000"));
}

#[test]
fn s3_factorial_fifty_digit_count_and_trailing_zeros() {
    let f50 = factorial(50);
    let s = f50.to_string();
    assert_eq!(s.len(), 65);
    assert!(s.ends_with("00000000000"), "expected 11+ trailing zeros, got {s}");
    assert_eq!(&s[s.len() - 12..], "000000000000");
}

/// S4: `sqrt(2)` at precision 50 matches the first 50 known digits.
#[test]
fn s4_sqrt_two_first_fifty_digits() {
    let _lock = precision_lock();
    numerus::set_precision(50);
    let root = BigFloat::parse("2").unwrap().sqrt().unwrap();
    let s = root.to_string();
    let want = "1.41421356237309504880168872420969807856967187537694";
    assert_eq!(&s[..want.len().min(s.len())], want);
}

/// S6: `1000000000000000000000 div 7 == 142857142857142857142 rem 6`.
#[test]
fn s6_known_quotient_and_remainder() {
    let (q, r) = n("1000000000000000000000").div_rem(&n("7")).unwrap();
    assert_eq!(q, n("142857142857142857142"));
    assert_eq!(r, n("6"));
}

/// Division by zero and negative `sqrt` both fail eagerly with a domain
/// error rather than panicking or returning a partial result (§7).
#[test]
fn division_by_zero_and_negative_sqrt_are_domain_errors() {
    let _lock = precision_lock();
    numerus::set_precision(30);
    assert!(n("1").div_rem(&BigInt::zero()).is_err());
    assert!(BigFloat::parse("-1").unwrap().sqrt().is_err());
}

/// Exponents that overflow `i64`, or that are negative, are rejected for
/// `BigInt::pow` rather than silently wrapping.
#[test]
fn pow_rejects_negative_bigint_exponent() {
    assert!(n("2").pow(-1).is_err());
}
