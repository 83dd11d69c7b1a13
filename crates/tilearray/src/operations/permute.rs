//! Dimension permutation of dense tiles.

use tracing::trace;

use crate::backend::{GenericBackend, PermutationBackend};
use crate::error::{Result, TileError};
use crate::permutation::Permutation;
use crate::scalar::Scalar;
use crate::tensor::DenseTensor;

/// Permute the dimensions of a tile, returning a new tile over
/// `perm ^ tensor.range()`.
///
/// # Errors
///
/// Returns `TileError::RankMismatch` if `perm.dim() != tensor.rank()`.
///
/// # Examples
///
/// ```
/// use tilearray::operations::permute;
/// use tilearray::{DenseTensor, Permutation, Range};
///
/// let r = Range::from_bounds([0, 0], [2, 3]).unwrap();
/// let t = DenseTensor::from_vec(r, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
/// let tt = permute(&t, &Permutation::new(vec![1, 0]).unwrap()).unwrap();
/// assert_eq!(tt.data(), &[1.0, 4.0, 2.0, 5.0, 3.0, 6.0]);
/// ```
pub fn permute<T: Scalar>(tensor: &DenseTensor<T>, perm: &Permutation) -> Result<DenseTensor<T>> {
    let range = tensor.range().permute(perm)?;
    let mut result = DenseTensor::zeros(range);
    if perm.is_identity() {
        result.data_mut().copy_from_slice(tensor.data());
        return Ok(result);
    }
    trace!(%perm, volume = tensor.len(), "permuting tile");
    GenericBackend::permute_into(&mut result, tensor, perm);
    Ok(result)
}

/// Permute `src` into an existing tile.
///
/// # Errors
///
/// - `TileError::RankMismatch` if `perm.dim() != src.rank()`.
/// - `TileError::RangeMismatch` if `dest` does not cover `perm ^ src.range()`.
pub fn permute_into<T: Scalar>(
    dest: &mut DenseTensor<T>,
    src: &DenseTensor<T>,
    perm: &Permutation,
) -> Result<()> {
    let expected = src.range().permute(perm)?;
    if dest.range() != &expected {
        return Err(TileError::RangeMismatch {
            left: dest.range().to_string(),
            right: expected.to_string(),
        });
    }
    GenericBackend::permute_into(dest, src, perm);
    Ok(())
}
