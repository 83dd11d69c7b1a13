//! Zero-copy conversion between rank-2 tiles and faer matrices.
//!
//! # Memory Layout
//!
//! A tile's storage order follows its coordinate system:
//!
//! ```text
//! DimensionOrder::Increasing  (Fortran)  -> column-major view
//! DimensionOrder::Decreasing  (C)        -> row-major view
//! ```
//!
//! Either way `mat[(r, c)]` is the element at `start + (r, c)`, so callers
//! never need to transpose by hand.

use faer::{Mat, MatMut, MatRef};

use crate::coordinate::{CoordinateSystem, DimensionOrder};
use crate::error::{Result, TileError};
use crate::range::Range;
use crate::scalar::Scalar;
use crate::tensor::{DenseTensor, Tensor};

/// Rows and columns of a rank-2 range.
///
/// # Errors
///
/// Returns `TileError::RankMismatch` if the range is not rank 2.
pub fn matrix_extents(range: &Range) -> Result<(usize, usize)> {
    if range.rank() != 2 {
        return Err(TileError::RankMismatch {
            expected: 2,
            actual: range.rank(),
        });
    }
    Ok((range.size()[0], range.size()[1]))
}

/// Extension trait viewing a rank-2 tile as a faer matrix.
pub trait AsFaerMat<T: Scalar> {
    /// View tile data as an immutable faer matrix (zero-copy).
    ///
    /// # Example
    ///
    /// ```
    /// use tilearray::backend::AsFaerMat;
    /// use tilearray::{DenseTensor, Range};
    ///
    /// let r = Range::from_bounds([0, 0], [2, 3]).unwrap();
    /// let t = DenseTensor::from_vec(r, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
    /// let mat = t.as_faer_mat().unwrap();
    /// assert_eq!((mat.nrows(), mat.ncols()), (2, 3));
    /// assert_eq!(mat[(1, 0)], 4.0);
    /// ```
    fn as_faer_mat(&self) -> Result<MatRef<'_, T>>;

    /// View tile data as a mutable faer matrix (zero-copy).
    fn as_faer_mat_mut(&mut self) -> Result<MatMut<'_, T>>;
}

impl<T: Scalar> AsFaerMat<T> for DenseTensor<T> {
    fn as_faer_mat(&self) -> Result<MatRef<'_, T>> {
        let (rows, cols) = matrix_extents(self.range())?;
        Ok(match self.range().coordinate_system().order() {
            DimensionOrder::Increasing => MatRef::from_column_major_slice(self.data(), rows, cols),
            DimensionOrder::Decreasing => MatRef::from_row_major_slice(self.data(), rows, cols),
        })
    }

    fn as_faer_mat_mut(&mut self) -> Result<MatMut<'_, T>> {
        let (rows, cols) = matrix_extents(self.range())?;
        let order = self.range().coordinate_system().order();
        Ok(match order {
            DimensionOrder::Increasing => {
                MatMut::from_column_major_slice_mut(self.data_mut(), rows, cols)
            }
            DimensionOrder::Decreasing => {
                MatMut::from_row_major_slice_mut(self.data_mut(), rows, cols)
            }
        })
    }
}

/// Copy a faer matrix into a new zero-based rank-2 tile laid out per `cs`.
///
/// # Errors
///
/// Returns `TileError::RankMismatch` if `cs.dim() != 2`.
///
/// # Example
///
/// ```
/// use faer::Mat;
/// use tilearray::backend::tensor_from_faer_mat;
/// use tilearray::{CoordinateSystem, Index};
///
/// let mat = Mat::from_fn(2, 3, |i, j| (i * 3 + j) as f64);
/// let t = tensor_from_faer_mat(mat.as_ref(), CoordinateSystem::fortran_style(2)).unwrap();
/// assert_eq!(t.range().size(), &[2, 3]);
/// assert_eq!(t.get(&Index::from([1, 2])), Some(&5.0));
/// ```
pub fn tensor_from_faer_mat<T: Scalar>(
    mat: MatRef<'_, T>,
    cs: CoordinateSystem,
) -> Result<DenseTensor<T>> {
    let range = Range::from_extents(cs, &[mat.nrows(), mat.ncols()])?;
    let base = cs.base();
    Ok(Tensor::from_fn(range, |i| {
        mat[((i[0] - base) as usize, (i[1] - base) as usize)]
    }))
}

/// Create an owned faer `Mat` from a rank-2 tile (copies data).
pub fn faer_mat_from_tensor<T: Scalar>(tensor: &DenseTensor<T>) -> Result<Mat<T>> {
    Ok(tensor.as_faer_mat()?.to_owned())
}
