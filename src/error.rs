//! Error types surfaced by the arithmetic kernel.
//!
//! Every fallible entry point in this crate returns [`Result<T>`], aliasing
//! `std::result::Result<T, Error>`. Errors are raised eagerly at the first
//! checkable condition; there is no partial-result reporting and no retry
//! contract anywhere in this crate.

use thiserror::Error;

/// The crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced by [`BigInt`](crate::int::BigInt) and
/// [`BigFloat`](crate::float::BigFloat) operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// A numeric string failed to parse.
    #[error("invalid numeric literal {literal:?}: {reason}")]
    InvalidInput {
        /// The offending literal, as given by the caller.
        literal: String,
        /// Human-readable description of what made it invalid.
        reason: &'static str,
    },

    /// An operation was applied outside its mathematical domain.
    #[error("domain error: {0}")]
    Domain(&'static str),

    /// An exponent or other quantity did not fit the representation limit.
    #[error("overflow: {0}")]
    Overflow(&'static str),
}

impl Error {
    pub(crate) fn invalid_input(literal: impl Into<String>, reason: &'static str) -> Self {
        Error::InvalidInput {
            literal: literal.into(),
            reason,
        }
    }
}
