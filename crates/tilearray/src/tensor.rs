//! Dense tiles: a [`Range`] plus element storage.
//!
//! ```text
//! Tensor<T, S: TensorStorage<T>>
//! ├── range    [start, finish) in some CoordinateSystem
//! └── storage  range.volume() elements, element i at range.ordinal(i)
//! ```

use std::fmt;
use std::marker::PhantomData;

use crate::error::{Result, TileError};
use crate::index::Index;
use crate::permutation::Permutation;
use crate::range::Range;
use crate::scalar::Scalar;
use crate::storage::{Dense, TensorStorage};

/// A tile of elements covering a [`Range`].
#[derive(Debug, Clone, PartialEq)]
pub struct Tensor<T: Scalar, S: TensorStorage<T> = Dense<T>> {
    range: Range,
    storage: S,
    _phantom: PhantomData<T>,
}

/// Tile with contiguous storage (the common case).
pub type DenseTensor<T> = Tensor<T, Dense<T>>;

impl<T: Scalar, S: TensorStorage<T>> Tensor<T, S> {
    /// A zero-filled tile over `range`.
    ///
    /// # Examples
    ///
    /// ```
    /// use tilearray::{Range, Tensor};
    ///
    /// let r = Range::from_bounds([1, 1], [3, 4]).unwrap();
    /// let t: Tensor<f64> = Tensor::zeros(r);
    /// assert_eq!(t.len(), 6);
    /// assert_eq!(t.range().start().as_slice(), &[1, 1]);
    /// ```
    pub fn zeros(range: Range) -> Self {
        Self {
            storage: S::zeros(range.volume()),
            range,
            _phantom: PhantomData,
        }
    }

    /// Wrap `data`, given in ordinal order of `range`.
    ///
    /// # Errors
    ///
    /// Returns `TileError::ShapeMismatch` if `data.len() != range.volume()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use tilearray::{DenseTensor, Index, Range};
    ///
    /// let r = Range::from_bounds([0, 0], [2, 3]).unwrap();
    /// let t = DenseTensor::from_vec(r, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
    /// // C-style: the last dimension varies fastest
    /// assert_eq!(t.get(&Index::from([0, 1])), Some(&2.0));
    /// assert_eq!(t.get(&Index::from([1, 0])), Some(&4.0));
    /// ```
    pub fn from_vec(range: Range, data: Vec<T>) -> Result<Self> {
        if data.len() != range.volume() {
            return Err(TileError::ShapeMismatch {
                expected: range.volume(),
                actual: data.len(),
            });
        }
        Ok(Self {
            range,
            storage: S::from_vec(data),
            _phantom: PhantomData,
        })
    }

    /// Build a tile by evaluating `f` at every index, in ordinal order.
    pub fn from_fn<F>(range: Range, mut f: F) -> Self
    where
        F: FnMut(&Index) -> T,
    {
        let data: Vec<T> = range.iter().map(|i| f(&i)).collect();
        Self {
            storage: S::from_vec(data),
            range,
            _phantom: PhantomData,
        }
    }

    /// A tile over `range` with every element equal to one.
    pub fn ones(range: Range) -> Self {
        let mut t = Self::zeros(range);
        t.fill(T::one());
        t
    }

    #[inline]
    pub fn range(&self) -> &Range {
        &self.range
    }

    #[inline]
    pub fn rank(&self) -> usize {
        self.range.rank()
    }

    /// Number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    #[inline]
    pub fn data(&self) -> &[T] {
        self.storage.as_slice()
    }

    #[inline]
    pub fn data_mut(&mut self) -> &mut [T] {
        self.storage.as_mut_slice()
    }

    /// Element at `index`, or `None` if the range does not include it.
    pub fn get(&self, index: &Index) -> Option<&T> {
        if !self.range.includes(index) {
            return None;
        }
        self.storage.as_slice().get(self.range.ordinal(index))
    }

    pub fn get_mut(&mut self, index: &Index) -> Option<&mut T> {
        if !self.range.includes(index) {
            return None;
        }
        let ord = self.range.ordinal(index);
        self.storage.as_mut_slice().get_mut(ord)
    }

    /// Overwrite the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns `TileError::OutOfRange` if the range does not include `index`.
    pub fn set(&mut self, index: &Index, value: T) -> Result<()> {
        let ord = self.range.try_ordinal(index)?;
        self.storage.as_mut_slice()[ord] = value;
        Ok(())
    }

    pub fn fill(&mut self, value: T) {
        for x in self.storage.as_mut_slice() {
            *x = value;
        }
    }
}

impl<T: Scalar> Tensor<T, Dense<T>> {
    /// The tile with its dimensions reordered by `perm`.
    ///
    /// The result covers `perm ^ range` and `result[perm ^ i] == self[i]`.
    ///
    /// # Errors
    ///
    /// Returns `TileError::RankMismatch` if `perm.dim() != self.rank()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use tilearray::{DenseTensor, Index, Permutation, Range};
    ///
    /// let r = Range::from_bounds([0, 0], [2, 3]).unwrap();
    /// let t = DenseTensor::from_vec(r, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
    /// let tt = t.permute(&Permutation::new(vec![1, 0]).unwrap()).unwrap();
    /// assert_eq!(tt.range().size(), &[3, 2]);
    /// assert_eq!(tt.get(&Index::from([2, 1])), t.get(&Index::from([1, 2])));
    /// ```
    pub fn permute(&self, perm: &Permutation) -> Result<Self> {
        crate::operations::permute(self, perm)
    }

    /// Consume the tile, returning its elements in ordinal order.
    pub fn into_vec(self) -> Vec<T> {
        self.storage.into_vec()
    }
}

impl<T: Scalar, S: TensorStorage<T>> std::ops::Index<usize> for Tensor<T, S> {
    type Output = T;

    /// Element by ordinal.
    #[inline]
    fn index(&self, ordinal: usize) -> &T {
        &self.storage.as_slice()[ordinal]
    }
}

impl<T: Scalar, S: TensorStorage<T>> std::ops::IndexMut<usize> for Tensor<T, S> {
    #[inline]
    fn index_mut(&mut self, ordinal: usize) -> &mut T {
        &mut self.storage.as_mut_slice()[ordinal]
    }
}

impl<T: Scalar, S: TensorStorage<T>> fmt::Display for Tensor<T, S> {
    /// `<range> { v0 v1 ... }` with elements in ordinal order.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {{", self.range)?;
        for x in self.data() {
            write!(f, " {x}")?;
        }
        write!(f, " }}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coordinate::CoordinateSystem;
    use crate::scalar::{c32, c64};

    fn range2x3() -> Range {
        Range::from_bounds([0, 0], [2, 3]).unwrap()
    }

    fn test_zeros_generic<T: Scalar>() {
        let t: Tensor<T> = Tensor::zeros(range2x3());
        assert_eq!(t.rank(), 2);
        assert_eq!(t.len(), 6);
        for i in 0..6 {
            assert_eq!(t[i], T::zero());
        }
    }

    #[test]
    fn test_zeros_f32() {
        test_zeros_generic::<f32>();
    }

    #[test]
    fn test_zeros_f64() {
        test_zeros_generic::<f64>();
    }

    #[test]
    fn test_zeros_c32() {
        test_zeros_generic::<c32>();
    }

    #[test]
    fn test_zeros_c64() {
        test_zeros_generic::<c64>();
    }

    #[test]
    fn test_from_vec_shape_mismatch() {
        let result = DenseTensor::<f64>::from_vec(range2x3(), vec![1.0, 2.0, 3.0]);
        assert_eq!(
            result,
            Err(TileError::ShapeMismatch {
                expected: 6,
                actual: 3
            })
        );
    }

    #[test]
    fn test_from_vec_fortran_order() {
        let r = Range::from_extents(CoordinateSystem::fortran_style(2), &[2, 3]).unwrap();
        let t = DenseTensor::from_vec(r, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
        assert_eq!(t.get(&Index::from([1, 0])), Some(&2.0));
        assert_eq!(t.get(&Index::from([0, 1])), Some(&3.0));
    }

    #[test]
    fn test_get_respects_range_offset() {
        let r = Range::from_bounds([10, 20], [12, 22]).unwrap();
        let t: DenseTensor<f64> = Tensor::from_fn(r, |i| (i[0] * 100 + i[1]) as f64);
        assert_eq!(t.get(&Index::from([11, 21])), Some(&1121.0));
        assert_eq!(t.get(&Index::from([0, 0])), None);
        assert_eq!(t.get(&Index::from([12, 20])), None);
        assert_eq!(t.get(&Index::from([10])), None);
    }

    #[test]
    fn test_set_and_get_mut() {
        let mut t: DenseTensor<f64> = Tensor::zeros(range2x3());
        t.set(&Index::from([1, 2]), 42.0).unwrap();
        assert_eq!(t[5], 42.0);
        *t.get_mut(&Index::from([0, 0])).unwrap() = 1.0;
        assert_eq!(t[0], 1.0);
        assert!(matches!(
            t.set(&Index::from([2, 0]), 1.0),
            Err(TileError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_ones_and_fill() {
        let mut t: DenseTensor<f64> = Tensor::ones(range2x3());
        assert!(t.data().iter().all(|&x| x == 1.0));
        t.fill(3.0);
        assert!(t.data().iter().all(|&x| x == 3.0));
    }

    #[test]
    fn test_empty_tile() {
        let t: DenseTensor<f64> = Tensor::zeros(Range::empty(CoordinateSystem::c_style(2)));
        assert!(t.is_empty());
        assert_eq!(t.to_string(), "[ (0, 0), (0, 0) ) { }");
    }

    #[test]
    fn test_display() {
        let r = Range::from_bounds([0], [3]).unwrap();
        let t = DenseTensor::from_vec(r, vec![1.0, 2.5, 3.0]).unwrap();
        assert_eq!(t.to_string(), "[ (0), (3) ) { 1 2.5 3 }");
    }

    #[test]
    fn test_permute_3d() {
        let r = Range::from_bounds([0, 0, 0], [2, 3, 4]).unwrap();
        let t: DenseTensor<f64> = Tensor::from_fn(r, |i| (i[0] * 100 + i[1] * 10 + i[2]) as f64);
        let p = Permutation::new(vec![2, 0, 1]).unwrap();
        let tp = t.permute(&p).unwrap();
        assert_eq!(tp.range().size(), &[3, 4, 2]);
        for i in t.range() {
            assert_eq!(tp.get(&(&p ^ &i)), t.get(&i));
        }
    }

    #[test]
    fn test_permute_identity() {
        let t = DenseTensor::from_vec(range2x3(), vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
        let tp = t.permute(&Permutation::identity(2)).unwrap();
        assert_eq!(tp, t);
    }

    #[test]
    fn test_permute_rank_mismatch() {
        let t: DenseTensor<f64> = Tensor::zeros(range2x3());
        assert!(t.permute(&Permutation::identity(3)).is_err());
    }
}
