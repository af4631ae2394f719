//! Shared foundation for the Rayleigh numerical crates.
//!
//! Provides the error types used across the workspace and a minimal set of
//! dense linear-algebra primitives (dot product, Euclidean norm, outer
//! product, residual norm) that the solver and factorization crates consume.
//! Matrix storage, matrix multiplication, and identity construction come
//! from [`nalgebra`] directly.

pub mod error;
pub mod ops;

pub use error::{Error, Result};
