//! Gram-Schmidt orthogonalization, classical and modified.

use nalgebra::{DMatrix, DVector};
use rayleigh_core::{Result, ops};

use crate::{QrFactors, check_shape};

/// Reduced QR factorization by classical Gram-Schmidt.
///
/// Projection coefficients for column `j` are inner products against the
/// *original* column, not the partially reduced residual. Under rounding
/// this loses orthogonality on ill-conditioned columns; prefer
/// [`qr_modified`] or [`crate::qr_householder`] when that matters.
pub fn qr_classical(a: &DMatrix<f64>) -> Result<QrFactors> {
    let (m, n) = check_shape(a)?;

    let mut q = DMatrix::zeros(m, n);
    let mut r = DMatrix::zeros(n, n);

    for j in 0..n {
        let mut v = a.column(j).clone_owned();
        for i in 0..j {
            let rij = q.column(i).dot(&a.column(j));
            r[(i, j)] = rij;
            v -= q.column(i) * rij;
        }
        let rjj = ops::norm2(v.as_slice());
        r[(j, j)] = rjj;
        // Rank-deficient column: leave Q[:,j] zero rather than divide by zero.
        if rjj != 0.0 {
            q.set_column(j, &(v / rjj));
        }
    }

    Ok(QrFactors { q, r })
}

/// Reduced QR factorization by modified Gram-Schmidt.
///
/// Each normalized column is immediately projected out of all remaining
/// working vectors, so later coefficients are computed against
/// progressively orthogonalized vectors instead of the original columns.
/// This is what makes the modified variant numerically stable where the
/// classical one is not.
pub fn qr_modified(a: &DMatrix<f64>) -> Result<QrFactors> {
    let (m, n) = check_shape(a)?;

    let mut q = DMatrix::zeros(m, n);
    let mut r = DMatrix::zeros(n, n);
    let mut work: Vec<DVector<f64>> = (0..n).map(|j| a.column(j).clone_owned()).collect();

    for i in 0..n {
        let rii = ops::norm2(work[i].as_slice());
        r[(i, i)] = rii;
        if rii != 0.0 {
            q.set_column(i, &(&work[i] / rii));
        }
        for j in (i + 1)..n {
            let rij = q.column(i).dot(&work[j]);
            r[(i, j)] = rij;
            let update = q.column(i) * rij;
            work[j] -= update;
        }
    }

    Ok(QrFactors { q, r })
}
