//! Jacobi method for dense linear systems.

use nalgebra::{DMatrix, DVector};
use rayleigh_core::{Result, ops};

use super::{StationaryConfig, StationaryResult, check_system};

/// Solve `A*x = b` with the Jacobi method.
///
/// Every entry of the new iterate is computed from the previous sweep's
/// values only; no value written during a sweep is visible until the sweep
/// completes. This synchronous update is what distinguishes Jacobi from
/// Gauss-Seidel.
///
/// The caller is responsible for nonzero diagonal entries; a zero diagonal
/// produces `Inf`/`NaN` rather than an error.
pub fn solve_jacobi(
    a: &DMatrix<f64>,
    b: &DVector<f64>,
    config: &StationaryConfig,
) -> Result<StationaryResult> {
    let n = check_system(a, b)?;

    let mut x = DVector::zeros(n);
    let mut x_next = DVector::zeros(n);
    let mut trace = Vec::with_capacity(config.max_iter);

    for sweep in 0..config.max_iter {
        // Full sweep against the previous iterate only.
        for i in 0..n {
            let mut s = 0.0;
            for j in 0..n {
                if j != i {
                    s += a[(i, j)] * x[j];
                }
            }
            x_next[i] = (b[i] - s) / a[(i, i)];
        }
        std::mem::swap(&mut x, &mut x_next);

        let r = ops::residual_norm(a, &x, b);
        trace.push(r);

        if r < config.tol {
            log::debug!("jacobi converged in {} sweeps (residual {:.3e})", sweep + 1, r);
            return Ok(StationaryResult {
                x,
                residual_trace: trace,
                converged: true,
            });
        }
    }

    if let Some(&r) = trace.last() {
        log::warn!(
            "jacobi did not converge in {} sweeps (residual {:.3e}, tol {:.3e})",
            config.max_iter,
            r,
            config.tol
        );
    }

    Ok(StationaryResult {
        x,
        residual_trace: trace,
        converged: false,
    })
}
