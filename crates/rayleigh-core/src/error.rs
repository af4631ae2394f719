//! Error types for Rayleigh operations.

use thiserror::Error;

/// Errors that can occur when validating inputs to a solver or factorization.
#[derive(Debug, Error)]
pub enum Error {
    /// A matrix or vector dimension did not match its counterpart.
    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// A factorization input had fewer rows than columns.
    #[error("Matrix must have at least as many rows as columns, got {rows}x{cols}")]
    Underdetermined { rows: usize, cols: usize },

    /// The matrix is singular and cannot be solved directly.
    #[error("Matrix is singular")]
    SingularMatrix,
}

/// Result type for Rayleigh operations.
pub type Result<T> = std::result::Result<T, Error>;
