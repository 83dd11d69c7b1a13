//! Permutation backend trait.

use crate::permutation::Permutation;
use crate::scalar::Scalar;
use crate::tensor::DenseTensor;

/// Backend trait for dense tile permutation.
///
/// Implementations may use any traversal as long as they satisfy
/// `dest[perm ^ i] == src[i]` for every index `i` of `src`.
pub trait PermutationBackend {
    /// Scatter `src` into `dest` with its dimensions reordered by `perm`.
    ///
    /// # Panics
    ///
    /// Panics if `dest.range()` is not `perm ^ src.range()`.
    fn permute_into<T: Scalar>(
        dest: &mut DenseTensor<T>,
        src: &DenseTensor<T>,
        perm: &Permutation,
    );
}
