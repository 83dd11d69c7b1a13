//! Element storage for tiles.
//!
//! Storage is a flat buffer of `range.volume()` elements addressed by
//! ordinal; the [`Range`](crate::Range) of the owning tile gives it shape.
//! A backend only has to provide the buffer itself plus `filled`; the
//! remaining operations are derived from the slice views.

mod dense;

use std::fmt::Debug;

use crate::scalar::Scalar;

pub use dense::Dense;

/// Flat element buffer behind a tile.
pub trait TensorStorage<T: Scalar>:
    Clone + Debug + PartialEq + AsRef<[T]> + AsMut<[T]> + From<Vec<T>>
{
    /// `len` copies of `value`.
    fn filled(len: usize, value: T) -> Self;

    fn zeros(len: usize) -> Self {
        Self::filled(len, T::zero())
    }

    /// Take ownership of `data` without copying.
    fn from_vec(data: Vec<T>) -> Self {
        Self::from(data)
    }

    fn len(&self) -> usize {
        self.as_ref().len()
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn as_slice(&self) -> &[T] {
        self.as_ref()
    }

    fn as_mut_slice(&mut self) -> &mut [T] {
        self.as_mut()
    }
}
