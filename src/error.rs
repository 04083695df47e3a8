//! Errors reported by the solvers.

use thiserror::Error;

/// Result type alias using [`CgError`].
pub type Result<T> = std::result::Result<T, CgError>;

/// Errors detected before the conjugate gradient iteration starts.
///
/// Numerical trouble during the iteration (a degenerate search direction or
/// running out of iterations) is not an error: it is reported through
/// [`crate::CgSolution::termination`] so the partial iterate stays available.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CgError {
    /// A vector or matrix does not have the length expected by the problem dimensions.
    #[error("Dimension mismatch for {what}: expected {expected}, got {got}")]
    DimensionMismatch {
        /// The offending input.
        what: &'static str,
        /// Expected length.
        expected: usize,
        /// Actual length.
        got: usize,
    },

    /// The normal-equation matrix is not square.
    #[error("Normal-equation matrix must be square, got {rows}x{cols}")]
    NotSquare {
        /// Number of rows.
        rows: usize,
        /// Number of columns.
        cols: usize,
    },

    /// A configuration parameter is out of range.
    #[error("Invalid configuration '{field}': {reason}")]
    InvalidConfig {
        /// The parameter name.
        field: &'static str,
        /// Why it was rejected.
        reason: &'static str,
    },
}

impl CgError {
    pub(crate) fn check_len(what: &'static str, expected: usize, got: usize) -> Result<()> {
        if expected == got {
            Ok(())
        } else {
            Err(CgError::DimensionMismatch {
                what,
                expected,
                got,
            })
        }
    }
}
