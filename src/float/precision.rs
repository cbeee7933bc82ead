//! The process-wide `BigFloat` precision context.
//!
//! Every [`BigFloat`](super::BigFloat) operation truncates its result to the
//! current precision `P`: the number of decimal digits the caller wants kept.
//! `P` lives in a single [`AtomicI64`], mutated by [`set_precision`] and read
//! by [`precision`] — matching the source's process-wide mutable `prec`.
//!
//! Internally, [`reciprocal`](super::recip) and [`sqrt`](super::sqrt) raise
//! `P` for their intermediate Newton-Raphson rungs and must restore the
//! caller's value on every exit path, including an early `?` return on a
//! domain error. [`PrecisionGuard`] is the RAII realization of that
//! requirement: it restores the prior value in its `Drop` impl, so a
//! raised working precision cannot leak regardless of how its scope ends.

use std::sync::atomic::{AtomicI64, Ordering};

/// The default precision, in decimal digits, before any caller has called
/// [`set_precision`]. One limb's worth of digits — enough to be useful
/// without surprising a caller who never thought about precision at all.
const DEFAULT_PRECISION: i64 = 16;

static PRECISION: AtomicI64 = AtomicI64::new(DEFAULT_PRECISION);

/// Sets the process-wide `BigFloat` precision, in decimal digits. Values
/// below 1 are clamped to 1 — every `BigFloat` operation needs at least one
/// significant digit of headroom to do arithmetic at all.
pub fn set_precision(prec: i64) {
    PRECISION.store(prec.max(1), Ordering::SeqCst);
}

/// Reads the process-wide `BigFloat` precision.
pub fn precision() -> i64 {
    PRECISION.load(Ordering::SeqCst)
}

/// Number of mantissa limbs an arithmetic step must retain at precision `P`:
/// `ceil(P/16) + 2` per the truncation rule of `BigFloat::truncate`.
pub(super) fn arithmetic_limbs(prec: i64) -> usize {
    limbs_for(prec, 2)
}

/// Number of mantissa limbs stringification retains: `ceil(P/16) + 1`, one
/// fewer guard limb than a full arithmetic step since there is no further
/// operation afterward to compound rounding error.
pub(super) fn stringify_limbs(prec: i64) -> usize {
    limbs_for(prec, 1)
}

fn limbs_for(prec: i64, guard: usize) -> usize {
    let prec = prec.max(1) as u64;
    (prec.div_ceil(crate::limb::LOG_B as u64) as usize) + guard
}

/// A scope guard that raises the process-wide precision to `working` for its
/// lifetime and restores the prior value when dropped. Used by
/// [`crate::float::recip`] and [`crate::float::sqrt`] so a temporarily-raised
/// working precision never survives past the call that raised it — even if
/// that call returns early via `?`.
pub struct PrecisionGuard {
    previous: i64,
}

impl PrecisionGuard {
    /// Raises the precision to `working` and returns a guard that restores
    /// the previous value on drop.
    pub fn enter(working: i64) -> Self {
        let previous = PRECISION.swap(working.max(1), Ordering::SeqCst);
        PrecisionGuard { previous }
    }

    /// Changes the working precision without altering what will be restored
    /// when this guard drops.
    pub fn set(&self, working: i64) {
        PRECISION.store(working.max(1), Ordering::SeqCst);
    }
}

impl Drop for PrecisionGuard {
    fn drop(&mut self) {
        PRECISION.store(self.previous, Ordering::SeqCst);
    }
}

/// Serializes tests that mutate the process-wide precision context. The
/// context is genuinely global (that's the point — see the module doc), so
/// tests across this module and its siblings (`recip`, `sqrt`, and
/// `BigFloat`'s own arithmetic tests) that call [`set_precision`] or enter a
/// [`PrecisionGuard`] take this lock first to avoid interleaving with each
/// other under the test harness's default parallel execution.
#[cfg(test)]
pub(crate) fn test_lock() -> std::sync::MutexGuard<'static, ()> {
    static LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());
    LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}
