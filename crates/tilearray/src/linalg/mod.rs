//! Rank-local dense linear algebra on rank-2 tiles.
//!
//! Every routine views its operands through [`AsFaerMat`], runs the faer
//! kernel, and returns zero-based rank-2 tiles in the coordinate system of
//! the first operand.
//!
//! | Routine | Computes |
//! |---------|----------|
//! | [`cholesky`] | `L` with `A = L Lᵀ` |
//! | [`cholesky_linv`] | `L⁻¹` |
//! | [`cholesky_solve`] | `X` with `A X = B` |
//! | [`cholesky_lsolve`] | `L` and `X` with `op(L) X = B` |
//! | [`heig`] | `A V = V Λ` |
//! | [`heig_generalized`] | `A V = B V Λ` |
//! | [`svd`] | `A = U Σ Vᵀ` |
//! | [`lu_solve`] | `X` with `A X = B` |
//! | [`lu_inv`] | `A⁻¹` |

mod cholesky;
mod eigen;
mod lu;
mod svd;

use faer::MatRef;
use tracing::warn;

use crate::backend::{AsFaerMat, matrix_extents};
use crate::coordinate::CoordinateSystem;
use crate::error::{Result, TileError};
use crate::scalar::RealScalar;
use crate::tensor::DenseTensor;

pub use cholesky::{cholesky, cholesky_linv, cholesky_lsolve, cholesky_solve};
pub use eigen::{heig, heig_generalized};
pub use lu::{lu_inv, lu_solve};
pub use svd::{SvdResult, svd};

/// Which form of a triangular factor to apply.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Transpose {
    #[default]
    NoTrans,
    Trans,
}

/// Side length of a square rank-2 tile.
fn square_extent<T: RealScalar>(a: &DenseTensor<T>) -> Result<usize> {
    let (rows, cols) = matrix_extents(a.range())?;
    if rows != cols {
        return Err(TileError::NotSquareMatrix { rows, cols });
    }
    Ok(rows)
}

/// View `b` as the right-hand side of an `n`-row system.
fn rhs_view<T: RealScalar>(b: &DenseTensor<T>, n: usize) -> Result<MatRef<'_, T>> {
    let mat = b.as_faer_mat()?;
    if mat.nrows() != n {
        return Err(TileError::ShapeMismatch {
            expected: n,
            actual: mat.nrows(),
        });
    }
    Ok(mat)
}

fn failure(op: &'static str, message: impl Into<String>) -> TileError {
    let message = message.into();
    warn!(op, %message, "dense linear algebra kernel failed");
    TileError::LinalgError { op, message }
}

fn ensure_finite<T: RealScalar>(op: &'static str, mat: MatRef<'_, T>) -> Result<()> {
    for j in 0..mat.ncols() {
        for i in 0..mat.nrows() {
            if !RealScalar::is_finite(mat[(i, j)]) {
                return Err(failure(op, "matrix is singular"));
            }
        }
    }
    Ok(())
}

fn to_tile<T: RealScalar>(mat: MatRef<'_, T>, cs: CoordinateSystem) -> DenseTensor<T> {
    crate::backend::tensor_from_faer_mat(mat, cs).expect("linalg: rank-2 coordinate system")
}
