//! QR factorization by Householder reflections.

use nalgebra::{DMatrix, DVector};
use rayleigh_core::{Result, ops};

use crate::{QrFactors, check_shape};

/// Build the Householder reflector that annihilates every entry of `a`
/// below the first.
///
/// The reflection vector is `v = a + sign(a[0]) * ||a|| * e1`, with the sign
/// chosen to avoid cancellation (`sign(0)` counts as `+1`), giving
/// `P = I - 2*v*v^T / (v^T*v)` and `P*a = -sign(a[0]) * ||a|| * e1`.
///
/// A zero input has nothing to annihilate and returns the identity.
pub fn householder_reflection(a: &DVector<f64>) -> DMatrix<f64> {
    let k = a.len();
    let mut v = a.clone();
    let sign = if a[0] < 0.0 { -1.0 } else { 1.0 };
    v[0] += sign * ops::norm2(a.as_slice());

    let vtv = ops::dot(v.as_slice(), v.as_slice());
    if vtv == 0.0 {
        return DMatrix::identity(k, k);
    }

    DMatrix::identity(k, k) - ops::outer(v.as_slice(), v.as_slice()) * (2.0 / vtv)
}

/// Reduced QR factorization by Householder reflections.
///
/// Column `i` of the working matrix is reduced by a reflector built from its
/// trailing subcolumn, embedded into a full-size identity acting on rows and
/// columns `i..`. After `n` reflections `Q` is truncated to its first `n`
/// columns and `R` to its first `n` rows.
///
/// This variant is backward-stable, unlike both Gram-Schmidt variants. Note
/// that the reflection sign convention can make diagonal entries of `R`
/// negative; their magnitudes carry the column norms.
pub fn qr_householder(a: &DMatrix<f64>) -> Result<QrFactors> {
    let (m, n) = check_shape(a)?;

    let mut r = a.clone();
    let mut q = DMatrix::<f64>::identity(m, m);

    for i in 0..n {
        let sub = DVector::from_fn(m - i, |k, _| r[(i + k, i)]);
        let p = householder_reflection(&sub);

        let mut h = DMatrix::<f64>::identity(m, m);
        h.view_mut((i, i), (m - i, m - i)).copy_from(&p);

        r = &h * &r;
        q = &q * &h;
    }

    let q_red = q.columns(0, n).into_owned();
    let mut r_red = r.rows(0, n).into_owned();

    // The reflections leave rounding residue below the diagonal; R is upper
    // triangular by construction, so clear it.
    for j in 0..n {
        for i in (j + 1)..n {
            r_red[(i, j)] = 0.0;
        }
    }

    Ok(QrFactors { q: q_red, r: r_red })
}
