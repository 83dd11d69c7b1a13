//! Cholesky factorization and the solves built on it.

use faer::linalg::solvers::{Llt, Solve};
use faer::linalg::triangular_solve::{solve_lower_triangular_in_place, solve_upper_triangular_in_place};
use faer::{Mat, Par, Side};

use super::{Transpose, failure, rhs_view, square_extent, to_tile};
use crate::backend::AsFaerMat;
use crate::error::Result;
use crate::scalar::{RealScalar, Scalar};
use crate::tensor::DenseTensor;

fn factor<T: RealScalar>(op: &'static str, a: &DenseTensor<T>) -> Result<Llt<T>> {
    square_extent(a)?;
    a.as_faer_mat()?
        .llt(Side::Lower)
        .map_err(|e| failure(op, format!("matrix is not positive definite: {e:?}")))
}

/// Lower Cholesky factor with the strict upper triangle cleared.
pub(super) fn lower_factor<T: RealScalar>(op: &'static str, a: &DenseTensor<T>) -> Result<Mat<T>> {
    let llt = factor(op, a)?;
    let l = llt.L();
    let n = l.nrows();
    Ok(Mat::from_fn(n, n, |i, j| if j <= i { l[(i, j)] } else { <T as Scalar>::zero() }))
}

/// Lower-triangular `L` with `A = L Lᵀ`.
///
/// # Errors
///
/// - `TileError::RankMismatch` / `TileError::NotSquareMatrix` for a
///   non-square input.
/// - `TileError::LinalgError` if `A` is not positive definite.
///
/// # Example
///
/// ```
/// use tilearray::linalg::cholesky;
/// use tilearray::nested::tensor_from_nested;
/// use tilearray::Index;
///
/// let a = tensor_from_nested(&[[4.0, 2.0], [2.0, 5.0]]).unwrap();
/// let l = cholesky(&a).unwrap();
/// assert_eq!(l.get(&Index::from([0, 0])), Some(&2.0));
/// assert_eq!(l.get(&Index::from([0, 1])), Some(&0.0));
/// ```
pub fn cholesky<T: RealScalar>(a: &DenseTensor<T>) -> Result<DenseTensor<T>> {
    let l = lower_factor("cholesky", a)?;
    Ok(to_tile(l.as_ref(), a.range().coordinate_system()))
}

/// Inverse of the lower Cholesky factor of `A`.
pub fn cholesky_linv<T: RealScalar>(a: &DenseTensor<T>) -> Result<DenseTensor<T>> {
    let l = lower_factor("cholesky_linv", a)?;
    let n = l.nrows();
    let mut linv = Mat::<T>::identity(n, n);
    solve_lower_triangular_in_place(l.as_ref(), linv.as_mut(), Par::Seq);
    Ok(to_tile(linv.as_ref(), a.range().coordinate_system()))
}

/// Solve `A X = B` for symmetric positive definite `A`.
///
/// # Errors
///
/// Additionally returns `TileError::ShapeMismatch` if `B` does not have as
/// many rows as `A`.
pub fn cholesky_solve<T: RealScalar>(
    a: &DenseTensor<T>,
    b: &DenseTensor<T>,
) -> Result<DenseTensor<T>> {
    let llt = factor("cholesky_solve", a)?;
    let mut x = rhs_view(b, llt.L().nrows())?.to_owned();
    llt.solve_in_place(x.as_mut());
    Ok(to_tile(x.as_ref(), a.range().coordinate_system()))
}

/// Factor `A = L Lᵀ` and solve `op(L) X = B`.
///
/// Returns `(L, X)`.
pub fn cholesky_lsolve<T: RealScalar>(
    op: Transpose,
    a: &DenseTensor<T>,
    b: &DenseTensor<T>,
) -> Result<(DenseTensor<T>, DenseTensor<T>)> {
    let l = lower_factor("cholesky_lsolve", a)?;
    let rhs = rhs_view(b, l.nrows())?;
    let mut x = rhs.to_owned();
    match op {
        Transpose::NoTrans => solve_lower_triangular_in_place(l.as_ref(), x.as_mut(), Par::Seq),
        Transpose::Trans => {
            solve_upper_triangular_in_place(l.as_ref().transpose(), x.as_mut(), Par::Seq)
        }
    }
    let cs = a.range().coordinate_system();
    Ok((to_tile(l.as_ref(), cs), to_tile(x.as_ref(), cs)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::Index;
    use crate::nested::tensor_from_nested;
    use approx::assert_relative_eq;

    #[test]
    fn test_factor_clears_upper_triangle_f32() {
        let a = tensor_from_nested(&[[4.0f32, 2.0, 2.0], [2.0, 5.0, 3.0], [2.0, 3.0, 6.0]]).unwrap();
        let l = cholesky(&a).unwrap();
        for (i, j) in [(0, 1), (0, 2), (1, 2)] {
            assert_eq!(l.get(&Index::from([i, j])), Some(&0.0f32));
        }
        assert_relative_eq!(*l.get(&Index::from([0, 0])).unwrap(), 2.0f32, epsilon = 1e-6);
    }

    #[test]
    fn test_lsolve_transposed_factor() {
        // L = [[2, 0], [1, 3]], so A = L Lᵀ = [[4, 2], [2, 10]]
        let a = tensor_from_nested(&[[4.0, 2.0], [2.0, 10.0]]).unwrap();
        let b = tensor_from_nested(&[[4.0], [6.0]]).unwrap();
        // Lᵀ x = b: x1 = 2, 2 x0 + x1 = 4
        let (_, x) = cholesky_lsolve(Transpose::Trans, &a, &b).unwrap();
        assert_relative_eq!(x[0], 1.0, epsilon = 1e-12);
        assert_relative_eq!(x[1], 2.0, epsilon = 1e-12);
        // L x = b: x0 = 2, x0 + 3 x1 = 6
        let (_, y) = cholesky_lsolve(Transpose::NoTrans, &a, &b).unwrap();
        assert_relative_eq!(y[0], 2.0, epsilon = 1e-12);
        assert_relative_eq!(y[1], 4.0 / 3.0, epsilon = 1e-12);
    }

    #[test]
    fn test_linv_times_factor_is_identity() {
        let a = tensor_from_nested(&[[4.0, 2.0], [2.0, 10.0]]).unwrap();
        let linv = cholesky_linv(&a).unwrap();
        assert_relative_eq!(linv[0], 0.5, epsilon = 1e-12);
        assert_relative_eq!(linv[1], 0.0, epsilon = 1e-12);
        assert_relative_eq!(linv[2], -1.0 / 6.0, epsilon = 1e-12);
        assert_relative_eq!(linv[3], 1.0 / 3.0, epsilon = 1e-12);
    }
}
