//! Reduced QR factorization of dense rectangular matrices.
//!
//! Four interchangeable algorithms with different stability properties:
//!
//! - [`qr_reference`] - delegates to nalgebra's Householder QR; the
//!   stability and accuracy baseline
//! - [`qr_classical`] - classical Gram-Schmidt; loses orthogonality under
//!   rounding on ill-conditioned columns
//! - [`qr_modified`] - modified Gram-Schmidt; projects against the
//!   progressively orthogonalized working vectors and is markedly more
//!   stable than the classical variant
//! - [`qr_householder`] - successive orthogonal reflections; backward-stable
//!
//! All take an `m x n` matrix with `m >= n` and return the reduced factors:
//! `Q` is `m x n` with orthonormal columns, `R` is `n x n` upper triangular,
//! and `Q * R` reconstructs the input within floating-point tolerance.

pub mod gram_schmidt;
pub mod householder;

pub use gram_schmidt::{qr_classical, qr_modified};
pub use householder::{householder_reflection, qr_householder};

use nalgebra::DMatrix;
use rayleigh_core::{Error, Result};

/// Reduced QR factors of a dense matrix.
#[derive(Debug, Clone, PartialEq)]
pub struct QrFactors {
    /// Orthonormal-column factor, `m x n`.
    pub q: DMatrix<f64>,
    /// Upper-triangular factor, `n x n`.
    pub r: DMatrix<f64>,
}

impl QrFactors {
    /// Multiply the factors back together.
    pub fn reconstruct(&self) -> DMatrix<f64> {
        &self.q * &self.r
    }
}

/// Validate that `a` has at least as many rows as columns.
///
/// Returns the shape `(m, n)`. Full column rank is not checked; a
/// rank-deficient column yields a zero `Q` column and a zero `R` diagonal
/// entry rather than an error.
pub(crate) fn check_shape(a: &DMatrix<f64>) -> Result<(usize, usize)> {
    let (m, n) = a.shape();
    if m < n {
        return Err(Error::Underdetermined { rows: m, cols: n });
    }
    Ok((m, n))
}

/// Reduced QR factorization delegated to nalgebra's Householder QR.
///
/// Serves as the baseline the hand-written variants are validated against.
pub fn qr_reference(a: &DMatrix<f64>) -> Result<QrFactors> {
    check_shape(a)?;
    let (q, r) = a.clone().qr().unpack();
    Ok(QrFactors { q, r })
}
