//! Rayleigh: reference implementations of two classical dense
//! numerical-linear-algebra building blocks.
//!
//! - Stationary iterative solvers (Jacobi, Gauss-Seidel) producing an
//!   approximate solution, a per-sweep residual trace, and an explicit
//!   convergence flag.
//! - Reduced QR factorization by four interchangeable algorithms (classical
//!   Gram-Schmidt, modified Gram-Schmidt, Householder reflections, and a
//!   library-delegated baseline) with documented stability tradeoffs.
//!
//! Everything is dense, sequential, and `f64`; matrix storage and the basic
//! primitives come from [`nalgebra`](https://nalgebra.org).
//!
//! # Example
//!
//! ```
//! use nalgebra::{dmatrix, dvector};
//! use rayleigh::{StationaryConfig, solve_gauss_seidel};
//!
//! let a = dmatrix![4.0, 1.0; 2.0, 3.0];
//! let b = dvector![1.0, 2.0];
//! let config = StationaryConfig { max_iter: 50, tol: 1e-8 };
//!
//! let result = solve_gauss_seidel(&a, &b, &config).unwrap();
//! assert!(result.converged);
//! ```

pub use rayleigh_core::{Error, Result, ops};
pub use rayleigh_qr::{
    QrFactors, householder_reflection, qr_classical, qr_householder, qr_modified, qr_reference,
};
pub use rayleigh_solver::{
    StationaryConfig, StationaryResult, solve_dense, solve_gauss_seidel, solve_jacobi,
};
