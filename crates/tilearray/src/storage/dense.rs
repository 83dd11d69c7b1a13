//! Contiguous element storage.

use std::ops::{Deref, DerefMut};

use super::TensorStorage;
use crate::scalar::Scalar;

/// Contiguous elements in ordinal order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Dense<T: Scalar>(Vec<T>);

impl<T: Scalar> Dense<T> {
    pub fn into_vec(self) -> Vec<T> {
        self.0
    }
}

impl<T: Scalar> TensorStorage<T> for Dense<T> {
    fn filled(len: usize, value: T) -> Self {
        Self(vec![value; len])
    }
}

impl<T: Scalar> From<Vec<T>> for Dense<T> {
    fn from(data: Vec<T>) -> Self {
        Self(data)
    }
}

impl<T: Scalar> FromIterator<T> for Dense<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<T: Scalar> AsRef<[T]> for Dense<T> {
    fn as_ref(&self) -> &[T] {
        &self.0
    }
}

impl<T: Scalar> AsMut<[T]> for Dense<T> {
    fn as_mut(&mut self) -> &mut [T] {
        &mut self.0
    }
}

impl<T: Scalar> Deref for Dense<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        &self.0
    }
}

impl<T: Scalar> DerefMut for Dense<T> {
    fn deref_mut(&mut self) -> &mut [T] {
        &mut self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scalar::{c32, c64};

    #[test]
    fn test_zeros_and_filled() {
        let d: Dense<f32> = TensorStorage::zeros(4);
        assert_eq!(TensorStorage::len(&d), 4);
        assert!(d.iter().all(|&x| x == 0.0));

        let z: Dense<c64> = TensorStorage::filled(2, c64::new(1.0, -1.0));
        assert_eq!(z.as_slice(), &[c64::new(1.0, -1.0); 2]);
    }

    #[test]
    fn test_empty() {
        let d: Dense<c32> = TensorStorage::zeros(0);
        assert!(TensorStorage::is_empty(&d));
    }

    #[test]
    fn test_collect_and_mutate() {
        let mut d: Dense<f64> = (1..=3).map(|i| i as f64).collect();
        d[1] = 5.0;
        d.as_mut_slice()[2] += 1.0;
        assert_eq!(d.into_vec(), vec![1.0, 5.0, 4.0]);
    }
}
