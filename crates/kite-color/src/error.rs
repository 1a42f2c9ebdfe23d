//! Error type for the kite-color pipeline.
//!
//! Every fallible operation in the crate returns [`ColorError`]. The numeric
//! procedures themselves (fifths search, Halley refinement, gamma encoding)
//! cannot fail; errors only come from degenerate input.

use thiserror::Error;

/// Unified error type for the kite-color public API.
///
/// # Example
///
/// ```
/// use kite_color::{primes::nth_prime, ColorError};
///
/// assert!(matches!(nth_prime(0), Err(ColorError::InvalidInput(_))));
/// ```
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ColorError {
    /// Caller supplied something the pipeline cannot interpret
    /// (prime index below 1, exponent overflow, invalid tuning constants).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A logarithm or octave reduction was asked to work on a value that is
    /// not a positive finite number.
    #[error("numeric degenerate {what}: {value}")]
    NumericDegenerate {
        /// Which quantity was degenerate
        what: &'static str,
        /// The offending value
        value: f64,
    },
}

impl ColorError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        ColorError::InvalidInput(msg.into())
    }
}
