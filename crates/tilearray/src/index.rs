//! Coordinate tuples.

use std::fmt;
use std::ops::{Add, Deref, DerefMut, Sub};

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Inline capacity before an index spills to the heap.
const INLINE_RANK: usize = 6;

/// A fixed-rank tuple of signed coordinates.
///
/// `Index` is a plain value type: it carries no coordinate system, so its
/// derived `Ord` is ordinary lexicographic order. Use
/// [`CoordinateSystem::cmp_index`](crate::CoordinateSystem::cmp_index) for
/// the storage-order comparison.
///
/// # Example
///
/// ```
/// use tilearray::Index;
///
/// let i = Index::from([1, 2, 3]);
/// assert_eq!(i.rank(), 3);
/// assert_eq!(&i + 1, Index::from([2, 3, 4]));
/// assert_eq!(i.to_string(), "(1, 2, 3)");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Index(SmallVec<[i64; INLINE_RANK]>);

impl Index {
    /// An index of `rank` copies of `value`.
    pub fn filled(rank: usize, value: i64) -> Self {
        Self(SmallVec::from_elem(value, rank))
    }

    /// Number of coordinates.
    #[inline]
    pub fn rank(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn as_slice(&self) -> &[i64] {
        &self.0
    }

    pub fn to_vec(&self) -> Vec<i64> {
        self.0.to_vec()
    }
}

impl Deref for Index {
    type Target = [i64];

    fn deref(&self) -> &[i64] {
        &self.0
    }
}

impl DerefMut for Index {
    fn deref_mut(&mut self) -> &mut [i64] {
        &mut self.0
    }
}

impl From<Vec<i64>> for Index {
    fn from(v: Vec<i64>) -> Self {
        Self(SmallVec::from_vec(v))
    }
}

impl From<&[i64]> for Index {
    fn from(v: &[i64]) -> Self {
        Self(SmallVec::from_slice(v))
    }
}

impl<const N: usize> From<[i64; N]> for Index {
    fn from(v: [i64; N]) -> Self {
        Self(v.into_iter().collect())
    }
}

impl FromIterator<i64> for Index {
    fn from_iter<I: IntoIterator<Item = i64>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Index {
    type Item = &'a i64;
    type IntoIter = std::slice::Iter<'a, i64>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl Add<&Index> for &Index {
    type Output = Index;

    /// Element-wise sum. Panics if the ranks differ.
    fn add(self, rhs: &Index) -> Index {
        assert_eq!(self.rank(), rhs.rank(), "index rank mismatch");
        self.iter().zip(rhs.iter()).map(|(a, b)| a + b).collect()
    }
}

impl Sub<&Index> for &Index {
    type Output = Index;

    /// Element-wise difference. Panics if the ranks differ.
    fn sub(self, rhs: &Index) -> Index {
        assert_eq!(self.rank(), rhs.rank(), "index rank mismatch");
        self.iter().zip(rhs.iter()).map(|(a, b)| a - b).collect()
    }
}

impl Add<i64> for &Index {
    type Output = Index;

    fn add(self, rhs: i64) -> Index {
        self.iter().map(|a| a + rhs).collect()
    }
}

impl Sub<i64> for &Index {
    type Output = Index;

    fn sub(self, rhs: i64) -> Index {
        self.iter().map(|a| a - rhs).collect()
    }
}

impl Add<i64> for Index {
    type Output = Index;

    fn add(self, rhs: i64) -> Index {
        &self + rhs
    }
}

impl Sub<i64> for Index {
    type Output = Index;

    fn sub(self, rhs: i64) -> Index {
        &self - rhs
    }
}

impl fmt::Display for Index {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, x) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", x)?;
        }
        write!(f, ")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filled() {
        let i = Index::filled(3, 5);
        assert_eq!(i.as_slice(), &[5, 5, 5]);
        assert_eq!(i.rank(), 3);
    }

    #[test]
    fn test_arithmetic() {
        let a = Index::from([1, 2, 3]);
        let b = Index::from([4, 5, 6]);
        assert_eq!(&a + &b, Index::from([5, 7, 9]));
        assert_eq!(&b - &a, Index::from([3, 3, 3]));
        assert_eq!(b - 1, Index::from([3, 4, 5]));
    }

    #[test]
    #[should_panic(expected = "index rank mismatch")]
    fn test_add_rank_mismatch() {
        let _ = &Index::from([1, 2]) + &Index::from([1, 2, 3]);
    }

    #[test]
    fn test_lexicographic_order() {
        assert!(Index::from([0, 5]) < Index::from([1, 0]));
        assert!(Index::from([1, 0]) < Index::from([1, 1]));
    }

    #[test]
    fn test_display() {
        assert_eq!(Index::from([0, -1, 2]).to_string(), "(0, -1, 2)");
        assert_eq!(Index::default().to_string(), "()");
    }
}
