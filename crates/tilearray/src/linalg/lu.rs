//! LU (partial pivoting) solves.

use faer::Mat;
use faer::linalg::solvers::Solve;

use super::{ensure_finite, rhs_view, square_extent, to_tile};
use crate::backend::AsFaerMat;
use crate::error::Result;
use crate::scalar::RealScalar;
use crate::tensor::DenseTensor;

/// Solve `A X = B` for general square `A`.
///
/// # Errors
///
/// - `TileError::NotSquareMatrix` / `TileError::RankMismatch` for a bad `A`.
/// - `TileError::ShapeMismatch` if `B` does not have as many rows as `A`.
/// - `TileError::LinalgError` if `A` is singular.
pub fn lu_solve<T: RealScalar>(a: &DenseTensor<T>, b: &DenseTensor<T>) -> Result<DenseTensor<T>> {
    let n = square_extent(a)?;
    let rhs = rhs_view(b, n)?;
    let lu = a.as_faer_mat()?.partial_piv_lu();
    let mut x = rhs.to_owned();
    lu.solve_in_place(x.as_mut());
    ensure_finite("lu_solve", x.as_ref())?;
    Ok(to_tile(x.as_ref(), a.range().coordinate_system()))
}

/// Inverse of a general square matrix.
///
/// # Example
///
/// ```
/// use tilearray::linalg::lu_inv;
/// use tilearray::nested::tensor_from_nested;
///
/// let a = tensor_from_nested(&[[2.0, 0.0], [0.0, 4.0]]).unwrap();
/// assert_eq!(lu_inv(&a).unwrap().data(), &[0.5, 0.0, 0.0, 0.25]);
/// ```
pub fn lu_inv<T: RealScalar>(a: &DenseTensor<T>) -> Result<DenseTensor<T>> {
    let n = square_extent(a)?;
    let lu = a.as_faer_mat()?.partial_piv_lu();
    let mut x = Mat::<T>::identity(n, n);
    lu.solve_in_place(x.as_mut());
    ensure_finite("lu_inv", x.as_ref())?;
    Ok(to_tile(x.as_ref(), a.range().coordinate_system()))
}
