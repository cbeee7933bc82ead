//! Arbitrary-precision arithmetic for Numerus.
//!
//! This crate provides signed integers of unbounded size ([`BigInt`]) and
//! radix-10^16 variable-precision decimal floats ([`BigFloat`]), together
//! with a multiplication dispatcher that selects among schoolbook,
//! Karatsuba, Toom-Cook-3, Toom-Cook-4/4.5, and Toom-Cook-6.5-half
//! algorithms according to operand size. It targets workloads like
//! multi-million-digit computations of transcendental constants (pi via
//! Chudnovsky, e via binary splitting) on a single machine.
//!
//! The focus is on a **correct, size-adaptive arithmetic kernel** rather
//! than a large numeric API surface: no modular arithmetic, no GCD or
//! primality testing, no bitwise operations, no FFT-based multiplication.
//! Those are explicitly out of scope (see `SPEC_FULL.md`) and may be added
//! later without disturbing the core contracts below.
//!
//! # Module overview
//!
//! - `int`
//!   [`BigInt`]: sign-and-magnitude arbitrary-precision integers, the
//!   multiplication dispatcher (schoolbook/Karatsuba/Toom-Cook), and
//!   division/remainder.
//!
//! - `float`
//!   [`BigFloat`]: a `BigInt` mantissa plus a decimal exponent, the
//!   process-wide precision context, and Newton-Raphson reciprocal and
//!   square root.
//!
//! - `limb`
//!   Base-10^16 limb-level primitives (`uadd`, `usub`, `ucmp`, small-integer
//!   scale/divide) shared by every multiplication backend. Internal; not
//!   part of the public API.
//!
//! - `config`
//!   Named tunable constants (`KARATSUBA_THRESHOLD`, `TOOM3_THRESHOLD`, ...)
//!   consulted by the multiplication dispatcher and by division.
//!
//! - `error`
//!   The crate-wide [`Error`] enum and [`Result`] alias.
//!
//! # Design goals
//!
//! - No partial-result reporting: every fallible operation either succeeds
//!   completely or returns an error eagerly, with no retry contract.
//! - Every public operation returns a freshly owned value — limb storage is
//!   never shared between distinct `BigInt`/`BigFloat` values.
//! - Single-threaded by design: no internal concurrency, no cancellation,
//!   no I/O from the core. The only shared resource is the process-wide
//!   `BigFloat` precision context, and it is read and written through an
//!   explicit, restorable API (see [`float::precision`]).

pub mod config;
pub mod error;
pub mod float;
pub mod int;
mod limb;

pub use error::{Error, Result};
pub use float::{precision, set_precision, BigFloat, PrecisionGuard};
pub use int::BigInt;
