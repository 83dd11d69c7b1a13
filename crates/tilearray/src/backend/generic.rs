//! Generic (index-loop) backend implementation.

use crate::backend::PermutationBackend;
use crate::permutation::Permutation;
use crate::scalar::Scalar;
use crate::tensor::DenseTensor;

/// Walks the source range in storage order and writes each element to its
/// permuted ordinal in the destination.
pub struct GenericBackend;

impl PermutationBackend for GenericBackend {
    fn permute_into<T: Scalar>(
        dest: &mut DenseTensor<T>,
        src: &DenseTensor<T>,
        perm: &Permutation,
    ) {
        assert_eq!(
            dest.range(),
            &(perm ^ src.range()),
            "destination range must be the permuted source range"
        );
        // Copy the range to avoid a borrow conflict with data_mut()
        let dest_range = dest.range().clone();
        let out = dest.data_mut();
        for (ord, index) in src.range().iter().enumerate() {
            out[dest_range.ordinal(&(perm ^ &index))] = src.data()[ord];
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CoordinateSystem, Index, Range, Tensor};

    #[test]
    fn test_generic_permute_transpose() {
        let src = DenseTensor::from_vec(
            Range::from_bounds([0, 0], [2, 3]).unwrap(),
            vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0],
        )
        .unwrap();
        let perm = Permutation::new(vec![1, 0]).unwrap();
        let mut dest: DenseTensor<f64> = Tensor::zeros(&perm ^ src.range());

        GenericBackend::permute_into(&mut dest, &src, &perm);

        assert_eq!(dest.data(), &[1.0, 4.0, 2.0, 5.0, 3.0, 6.0]);
    }

    #[test]
    fn test_generic_permute_fortran_offset() {
        let cs = CoordinateSystem::fortran_style(3);
        let r = Range::new(cs, Index::from([1, 2, 3]), Index::from([3, 5, 7])).unwrap();
        let src: DenseTensor<f64> = Tensor::from_fn(r, |i| (i[0] * 100 + i[1] * 10 + i[2]) as f64);
        let perm = Permutation::new(vec![2, 0, 1]).unwrap();
        let mut dest: DenseTensor<f64> = Tensor::zeros(&perm ^ src.range());

        GenericBackend::permute_into(&mut dest, &src, &perm);

        for i in src.range() {
            assert_eq!(dest.get(&(&perm ^ &i)), src.get(&i));
        }
    }

    #[test]
    #[should_panic(expected = "destination range")]
    fn test_generic_permute_wrong_destination() {
        let src: DenseTensor<f64> = Tensor::zeros(Range::from_bounds([0, 0], [2, 3]).unwrap());
        let mut dest: DenseTensor<f64> = Tensor::zeros(Range::from_bounds([0, 0], [2, 3]).unwrap());
        GenericBackend::permute_into(&mut dest, &src, &Permutation::new(vec![1, 0]).unwrap());
    }
}
