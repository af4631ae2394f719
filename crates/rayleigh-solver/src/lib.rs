//! Iterative and direct solvers for dense linear systems.
//!
//! The stationary methods (Jacobi and Gauss-Seidel) produce an approximate
//! solution together with a per-sweep residual trace and an explicit
//! convergence flag. The direct LU solve serves as the accuracy baseline
//! the iterative methods are validated against.

pub mod direct;
pub mod stationary;

pub use direct::solve_dense;
pub use stationary::{StationaryConfig, StationaryResult, solve_gauss_seidel, solve_jacobi};

pub use rayleigh_core::{Error, Result};
