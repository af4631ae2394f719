//! Dense linear-algebra primitives shared by the solver and QR crates.
//!
//! These are the scalar building blocks the higher-level algorithms are
//! written against: dot product, Euclidean norm, outer product, and the
//! residual norm used for convergence checks. Keeping them behind one small
//! interface isolates the sequential algorithm logic from the primitive
//! implementation.

use nalgebra::{DMatrix, DVector};

/// Compute the dot product of two equal-length vectors.
pub fn dot(a: &[f64], b: &[f64]) -> f64 {
    assert_eq!(a.len(), b.len(), "dot product dimension mismatch");
    a.iter().zip(b.iter()).map(|(&ai, &bi)| ai * bi).sum()
}

/// Compute the Euclidean (2-)norm of a vector.
pub fn norm2(v: &[f64]) -> f64 {
    dot(v, v).sqrt()
}

/// Compute the outer product `u * v^T` as a dense matrix.
pub fn outer(u: &[f64], v: &[f64]) -> DMatrix<f64> {
    DMatrix::from_fn(u.len(), v.len(), |i, j| u[i] * v[j])
}

/// Compute the residual norm `||A*x - b||_2`.
pub fn residual_norm(a: &DMatrix<f64>, x: &DVector<f64>, b: &DVector<f64>) -> f64 {
    norm2((a * x - b).as_slice())
}
