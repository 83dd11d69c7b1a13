//! Thin singular value decomposition.

use faer::linalg::solvers::Svd;

use super::{failure, to_tile};
use crate::backend::AsFaerMat;
use crate::coordinate::CoordinateSystem;
use crate::error::Result;
use crate::range::Range;
use crate::scalar::RealScalar;
use crate::tensor::DenseTensor;

/// Result of [`svd`]: `A = U diag(s) Vᵀ`.
#[derive(Debug, Clone, PartialEq)]
pub struct SvdResult<T: RealScalar> {
    /// Singular values in descending order, rank 1, length `min(m, n)`.
    pub s: DenseTensor<T>,
    /// Left singular vectors, `m × min(m, n)`.
    pub u: Option<DenseTensor<T>>,
    /// Right singular vectors transposed, `min(m, n) × n`.
    pub vt: Option<DenseTensor<T>>,
}

/// Thin SVD of a rank-2 tile.
///
/// With `vectors == false` only the singular values are returned.
///
/// # Errors
///
/// - `TileError::RankMismatch` if `a` is not rank 2.
/// - `TileError::LinalgError` if the decomposition does not converge.
///
/// # Example
///
/// ```
/// use approx::assert_relative_eq;
/// use tilearray::linalg::svd;
/// use tilearray::nested::tensor_from_nested;
///
/// let a = tensor_from_nested(&[[3.0, 0.0], [0.0, -2.0], [0.0, 0.0]]).unwrap();
/// let r = svd(&a, true).unwrap();
/// assert_relative_eq!(r.s[0], 3.0, epsilon = 1e-12);
/// assert_relative_eq!(r.s[1], 2.0, epsilon = 1e-12);
/// assert_eq!(r.u.unwrap().range().size(), &[3, 2]);
/// assert_eq!(r.vt.unwrap().range().size(), &[2, 2]);
/// ```
pub fn svd<T: RealScalar>(a: &DenseTensor<T>, vectors: bool) -> Result<SvdResult<T>> {
    let mat = a.as_faer_mat()?;
    let k = mat.nrows().min(mat.ncols());
    let decomp: Svd<T> = Svd::new_thin(mat).map_err(|e| failure("svd", format!("{e:?}")))?;

    let cs = a.range().coordinate_system();
    let diag = decomp.S();
    let values: Vec<T> = (0..k).map(|i| diag[i]).collect();
    let cs1 = CoordinateSystem::new(1, cs.base(), cs.order());
    let s = DenseTensor::from_vec(Range::from_extents(cs1, &[k])?, values)?;

    if !vectors {
        return Ok(SvdResult { s, u: None, vt: None });
    }
    let u = to_tile(decomp.U(), cs);
    let vt = to_tile(decomp.V().transpose(), cs);
    Ok(SvdResult {
        s,
        u: Some(u),
        vt: Some(vt),
    })
}
