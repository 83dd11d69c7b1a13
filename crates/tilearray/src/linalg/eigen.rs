//! Symmetric eigensolvers.

use faer::linalg::triangular_solve::{solve_lower_triangular_in_place, solve_upper_triangular_in_place};
use faer::{Mat, MatRef, Par, Side};

use super::cholesky::lower_factor;
use super::{failure, square_extent, to_tile};
use crate::backend::AsFaerMat;
use crate::coordinate::CoordinateSystem;
use crate::error::{Result, TileError};
use crate::range::Range;
use crate::scalar::RealScalar;
use crate::tensor::DenseTensor;

/// Eigenvalues as a rank-1 tile in the rank-1 analogue of `cs`.
fn eigenvalue_tile<T: RealScalar>(values: Vec<T>, cs: CoordinateSystem) -> Result<DenseTensor<T>> {
    let cs1 = CoordinateSystem::new(1, cs.base(), cs.order());
    DenseTensor::from_vec(Range::from_extents(cs1, &[values.len()])?, values)
}

/// Eigendecomposition of the symmetric matrix `mat` (lower triangle read).
fn symmetric_eigen<T: RealScalar>(op: &'static str, mat: MatRef<'_, T>) -> Result<(Vec<T>, Mat<T>)> {
    let evd = mat
        .self_adjoint_eigen(Side::Lower)
        .map_err(|e| failure(op, format!("eigendecomposition did not converge: {e:?}")))?;
    let s = evd.S();
    let values = (0..mat.nrows()).map(|i| s[i]).collect();
    Ok((values, evd.U().to_owned()))
}

/// Eigenvalues (ascending) and eigenvectors (columns) of a symmetric `A`.
///
/// Only the lower triangle of `A` is read.
///
/// # Example
///
/// ```
/// use approx::assert_relative_eq;
/// use tilearray::linalg::heig;
/// use tilearray::nested::tensor_from_nested;
///
/// let a = tensor_from_nested(&[[2.0, 1.0], [1.0, 2.0]]).unwrap();
/// let (w, v) = heig(&a).unwrap();
/// assert_eq!(w.range().size(), &[2]);
/// assert_relative_eq!(w[0], 1.0, epsilon = 1e-12);
/// assert_relative_eq!(w[1], 3.0, epsilon = 1e-12);
/// assert_eq!(v.range().size(), &[2, 2]);
/// ```
pub fn heig<T: RealScalar>(a: &DenseTensor<T>) -> Result<(DenseTensor<T>, DenseTensor<T>)> {
    square_extent(a)?;
    let (values, vectors) = symmetric_eigen("heig", a.as_faer_mat()?)?;
    let cs = a.range().coordinate_system();
    Ok((eigenvalue_tile(values, cs)?, to_tile(vectors.as_ref(), cs)))
}

/// Solve the generalized problem `A x = λ B x` for symmetric `A` and
/// symmetric positive definite `B`.
///
/// Eigenvectors are `B`-orthonormal: `Xᵀ B X = I`.
///
/// # Errors
///
/// - `TileError::ShapeMismatch` if `B` is not the same size as `A`.
/// - `TileError::LinalgError` if `B` is not positive definite.
pub fn heig_generalized<T: RealScalar>(
    a: &DenseTensor<T>,
    b: &DenseTensor<T>,
) -> Result<(DenseTensor<T>, DenseTensor<T>)> {
    let n = square_extent(a)?;
    let m = square_extent(b)?;
    if m != n {
        return Err(TileError::ShapeMismatch {
            expected: n,
            actual: m,
        });
    }
    let l = lower_factor("heig_generalized", b)?;
    // C = L⁻¹ A L⁻ᵀ = L⁻¹ (L⁻¹ A)ᵀ for symmetric A
    let mut left = a.as_faer_mat()?.to_owned();
    solve_lower_triangular_in_place(l.as_ref(), left.as_mut(), Par::Seq);
    let mut c = left.transpose().to_owned();
    solve_lower_triangular_in_place(l.as_ref(), c.as_mut(), Par::Seq);
    let (values, mut x) = symmetric_eigen("heig_generalized", c.as_ref())?;
    solve_upper_triangular_in_place(l.as_ref().transpose(), x.as_mut(), Par::Seq);
    let cs = a.range().coordinate_system();
    Ok((eigenvalue_tile(values, cs)?, to_tile(x.as_ref(), cs)))
}
