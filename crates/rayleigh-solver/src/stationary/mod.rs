//! Stationary iterative methods for dense linear systems.
//!
//! Both methods split `A = D + L + U` and iterate a fixed-point update from
//! the zero initial guess. They differ only in when updated values become
//! visible within a sweep:
//!
//! - [`jacobi`] - synchronous update, iteration matrix `D^-1 * (L + U)`
//! - [`gauss_seidel`] - in-place ordered update, iteration matrix `(D + L)^-1 * U`
//!
//! # Usage
//!
//! ```ignore
//! use rayleigh_solver::{solve_jacobi, solve_gauss_seidel, StationaryConfig};
//!
//! let result = solve_jacobi(&a, &b, &StationaryConfig::default())?;
//! if !result.converged {
//!     // inspect result.residual_trace
//! }
//! ```

pub mod gauss_seidel;
pub mod jacobi;

pub use gauss_seidel::solve_gauss_seidel;
pub use jacobi::solve_jacobi;

use nalgebra::{DMatrix, DVector};
use rayleigh_core::{Error, Result};

/// Stationary solver configuration.
#[derive(Debug, Clone)]
pub struct StationaryConfig {
    /// Maximum number of full sweeps.
    pub max_iter: usize,
    /// Convergence tolerance on the residual norm `||A*x - b||`.
    pub tol: f64,
}

impl Default for StationaryConfig {
    fn default() -> Self {
        Self {
            max_iter: 10,
            tol: 1e-8,
        }
    }
}

/// Result of a stationary iterative solve.
///
/// Non-convergence is not an error: the solver returns its last iterate with
/// `converged == false` and the full residual trace.
#[derive(Debug, Clone, PartialEq)]
pub struct StationaryResult {
    /// Approximate solution vector.
    pub x: DVector<f64>,
    /// Residual norm `||A*x - b||` after each completed sweep.
    pub residual_trace: Vec<f64>,
    /// Whether the residual dropped below the tolerance.
    pub converged: bool,
}

impl StationaryResult {
    /// Number of completed sweeps.
    pub fn iterations(&self) -> usize {
        self.residual_trace.len()
    }

    /// Residual norm after the last completed sweep, if any sweep ran.
    pub fn final_residual(&self) -> Option<f64> {
        self.residual_trace.last().copied()
    }
}

/// Validate that `a` is square and `b` matches its row count.
///
/// Returns the system size. Zero diagonal entries are not checked; dividing
/// by one produces `Inf`/`NaN` per IEEE semantics and propagates into the
/// trace.
pub(crate) fn check_system(a: &DMatrix<f64>, b: &DVector<f64>) -> Result<usize> {
    if a.nrows() != a.ncols() {
        return Err(Error::DimensionMismatch {
            expected: a.nrows(),
            actual: a.ncols(),
        });
    }
    if a.nrows() != b.len() {
        return Err(Error::DimensionMismatch {
            expected: a.nrows(),
            actual: b.len(),
        });
    }
    Ok(a.nrows())
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::{dmatrix, dvector};

    #[test]
    fn stationary_config_default() {
        let config = StationaryConfig::default();
        assert_eq!(config.max_iter, 10);
        assert!((config.tol - 1e-8).abs() < 1e-15);
    }

    #[test]
    fn check_system_rejects_non_square() {
        let a = DMatrix::<f64>::zeros(2, 3);
        let b = DVector::<f64>::zeros(2);

        let result = check_system(&a, &b);
        assert!(matches!(result, Err(Error::DimensionMismatch { .. })));
    }

    #[test]
    fn check_system_rejects_rhs_mismatch() {
        let a = DMatrix::<f64>::identity(3, 3);
        let b = DVector::<f64>::zeros(2);

        let result = check_system(&a, &b);
        assert!(matches!(result, Err(Error::DimensionMismatch { .. })));
    }

    #[test]
    fn jacobi_and_gauss_seidel_differ_after_one_sweep() {
        // Asymmetric system where the update rules visibly diverge. From the
        // zero guess, one Jacobi sweep yields b[i]/a[i][i] for every row,
        // while Gauss-Seidel already feeds the updated x[0] into row 1.
        let a = dmatrix![4.0, 1.0; 2.0, 3.0];
        let b = dvector![1.0, 2.0];
        let config = StationaryConfig {
            max_iter: 1,
            tol: 1e-30,
        };

        let jac = solve_jacobi(&a, &b, &config).unwrap();
        let gs = solve_gauss_seidel(&a, &b, &config).unwrap();

        // Jacobi: [1/4, 2/3]
        assert!((jac.x[0] - 0.25).abs() < 1e-15);
        assert!((jac.x[1] - 2.0 / 3.0).abs() < 1e-15);

        // Gauss-Seidel: x0 = 1/4, x1 = (2 - 2*0.25)/3 = 0.5
        assert!((gs.x[0] - 0.25).abs() < 1e-15);
        assert!((gs.x[1] - 0.5).abs() < 1e-15);

        assert!((jac.x[1] - gs.x[1]).abs() > 0.1);
    }
}
