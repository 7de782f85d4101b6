//! Crate-level error type
//!
//! The core fails loudly and immediately: both error kinds are
//! deterministic numeric failures, so there are no retries and no local
//! recovery. Lenient correction of malformed input belongs to the
//! [`input`](crate::input) collector, never to the core.

use thiserror::Error;

/// Errors surfaced by the projection core.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A vector length does not match the matrix size.
    ///
    /// Raised when survival rates are not exactly one entry shorter than
    /// fecundity rates, or when an initial population vector does not
    /// match the matrix dimension. The core never pads or truncates.
    #[error("invalid dimension for {what}: expected {expected}, got {actual}")]
    InvalidDimension {
        /// What was being checked (e.g. "survival rates").
        what: &'static str,
        expected: usize,
        actual: usize,
    },

    /// The eigen-decomposition did not converge.
    ///
    /// The underlying Schur or SVD routine gave up on a pathological
    /// matrix. Callers must handle this explicitly; downstream
    /// interpretation cannot assume a valid dominant eigenvalue.
    #[error("eigen-decomposition failed: {reason}")]
    DecompositionFailed { reason: &'static str },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_dimension_message() {
        let err = Error::InvalidDimension {
            what: "survival rates",
            expected: 2,
            actual: 3,
        };
        assert_eq!(
            err.to_string(),
            "invalid dimension for survival rates: expected 2, got 3"
        );
    }

    #[test]
    fn test_decomposition_failed_message() {
        let err = Error::DecompositionFailed {
            reason: "Schur iteration did not converge",
        };
        assert!(err.to_string().contains("did not converge"));
    }
}
