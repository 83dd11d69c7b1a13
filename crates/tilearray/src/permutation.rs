//! Dimension permutations.
//!
//! A [`Permutation`] stores, for every source dimension `d`, the destination
//! position `p[d]` that dimension moves to:
//!
//! ```text
//! p = [2, 0, 1]        (1, 2, 3)  --p-->  (2, 3, 1)
//! result[p[d]] = src[d]
//! ```

use std::fmt;
use std::ops::{BitXor, Mul};

use serde::{Deserialize, Serialize};

use crate::error::{Result, TileError};
use crate::index::Index;

/// A bijection on dimension positions.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<usize>", into = "Vec<usize>")]
pub struct Permutation {
    p: Vec<usize>,
}

impl Permutation {
    /// Create a permutation from its destination array.
    ///
    /// # Errors
    ///
    /// Returns `TileError::InvalidPermutation` if `p` is not a bijection
    /// over `0..p.len()`.
    ///
    /// # Example
    ///
    /// ```
    /// use tilearray::Permutation;
    ///
    /// assert!(Permutation::new(vec![2, 0, 1]).is_ok());
    /// assert!(Permutation::new(vec![0, 0, 1]).is_err());
    /// assert!(Permutation::new(vec![0, 3, 1]).is_err());
    /// ```
    pub fn new(p: Vec<usize>) -> Result<Self> {
        validate_permutation(&p)?;
        Ok(Self { p })
    }

    pub fn identity(dim: usize) -> Self {
        Self {
            p: (0..dim).collect(),
        }
    }

    /// The permutation that reverses the order of `dim` dimensions.
    pub fn reversal(dim: usize) -> Self {
        Self {
            p: (0..dim).rev().collect(),
        }
    }

    #[inline]
    pub fn dim(&self) -> usize {
        self.p.len()
    }

    #[inline]
    pub fn as_slice(&self) -> &[usize] {
        &self.p
    }

    pub fn is_identity(&self) -> bool {
        self.p.iter().enumerate().all(|(i, &d)| i == d)
    }

    /// The permutation undoing `self`.
    pub fn inverse(&self) -> Self {
        let mut inv = vec![0; self.p.len()];
        for (d, &dest) in self.p.iter().enumerate() {
            inv[dest] = d;
        }
        Self { p: inv }
    }

    /// `self.try_compose(other)` applies `other` first, then `self`.
    ///
    /// # Errors
    ///
    /// Returns `TileError::RankMismatch` if the dimensions differ.
    pub fn try_compose(&self, other: &Permutation) -> Result<Permutation> {
        if self.dim() != other.dim() {
            return Err(TileError::RankMismatch {
                expected: self.dim(),
                actual: other.dim(),
            });
        }
        Ok(Self {
            p: other.p.iter().map(|&d| self.p[d]).collect(),
        })
    }

    /// Panicking form of [`try_compose`](Self::try_compose).
    ///
    /// # Panics
    ///
    /// Panics if the dimensions differ.
    pub fn compose(&self, other: &Permutation) -> Permutation {
        match self.try_compose(other) {
            Ok(p) => p,
            Err(e) => panic!("{e}"),
        }
    }

    /// Reorder any per-dimension sequence: `result[p[d]] = values[d]`.
    ///
    /// # Errors
    ///
    /// Returns `TileError::RankMismatch` if `values.len() != self.dim()`.
    pub fn permute_slice<T: Clone>(&self, values: &[T]) -> Result<Vec<T>> {
        if values.len() != self.dim() {
            return Err(TileError::RankMismatch {
                expected: self.dim(),
                actual: values.len(),
            });
        }
        let mut out = values.to_vec();
        for (d, v) in values.iter().enumerate() {
            out[self.p[d]] = v.clone();
        }
        Ok(out)
    }

    /// Apply the permutation to an index.
    ///
    /// # Errors
    ///
    /// Returns `TileError::RankMismatch` if the index rank differs.
    pub fn apply(&self, index: &Index) -> Result<Index> {
        self.permute_slice(index.as_slice()).map(Index::from)
    }
}

impl TryFrom<Vec<usize>> for Permutation {
    type Error = TileError;

    fn try_from(p: Vec<usize>) -> Result<Self> {
        Self::new(p)
    }
}

impl From<Permutation> for Vec<usize> {
    fn from(p: Permutation) -> Self {
        p.p
    }
}

impl BitXor<&Index> for &Permutation {
    type Output = Index;

    /// # Panics
    ///
    /// Panics if the index rank differs from the permutation dimension.
    fn bitxor(self, index: &Index) -> Index {
        match self.apply(index) {
            Ok(permuted) => permuted,
            Err(e) => panic!("{e}"),
        }
    }
}

impl Mul<&Permutation> for &Permutation {
    type Output = Permutation;

    /// # Panics
    ///
    /// Panics if the dimensions differ.
    fn mul(self, rhs: &Permutation) -> Permutation {
        match self.try_compose(rhs) {
            Ok(p) => p,
            Err(e) => panic!("{e}"),
        }
    }
}

impl fmt::Display for Permutation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (d, dest) in self.p.iter().enumerate() {
            if d > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}->{}", d, dest)?;
        }
        write!(f, "}}")
    }
}

/// Validate that `p` is a bijection over `0..p.len()`.
fn validate_permutation(p: &[usize]) -> Result<()> {
    let dim = p.len();
    let mut seen = vec![false; dim];
    for &d in p {
        if d >= dim || seen[d] {
            return Err(TileError::InvalidPermutation {
                perm: p.to_vec(),
                dim,
            });
        }
        seen[d] = true;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_to_index() {
        let p = Permutation::new(vec![2, 0, 1]).unwrap();
        let i = Index::from([1, 2, 3]);
        assert_eq!(&p ^ &i, Index::from([2, 3, 1]));
    }

    #[test]
    fn test_identity_is_noop() {
        let p = Permutation::identity(4);
        assert!(p.is_identity());
        let i = Index::from([4, 3, 2, 1]);
        assert_eq!(&p ^ &i, i);
    }

    #[test]
    fn test_invalid() {
        assert!(Permutation::new(vec![1, 1]).is_err());
        assert!(Permutation::new(vec![0, 2]).is_err());
        assert!(matches!(
            Permutation::new(vec![3, 0, 1]),
            Err(TileError::InvalidPermutation { dim: 3, .. })
        ));
    }

    #[test]
    fn test_compose_matches_sequential_application() {
        let p = Permutation::new(vec![1, 2, 0]).unwrap();
        let q = Permutation::new(vec![2, 1, 0]).unwrap();
        let i = Index::from([7, 8, 9]);
        assert_eq!(&(&p * &q) ^ &i, &p ^ &(&q ^ &i));
    }

    #[test]
    fn test_compose_dimension_mismatch() {
        let p = Permutation::identity(3);
        let q = Permutation::reversal(2);
        assert_eq!(
            p.try_compose(&q),
            Err(TileError::RankMismatch {
                expected: 3,
                actual: 2
            })
        );
        assert_eq!(p.try_compose(&p), Ok(Permutation::identity(3)));
    }

    #[test]
    #[should_panic(expected = "expected rank 3, got rank 2")]
    fn test_mul_dimension_mismatch_panics() {
        let _ = &Permutation::identity(3) * &Permutation::reversal(2);
    }

    #[test]
    fn test_inverse() {
        let p = Permutation::new(vec![3, 0, 2, 1]).unwrap();
        assert!((&p * &p.inverse()).is_identity());
        assert!((&p.inverse() * &p).is_identity());
    }

    #[test]
    fn test_apply_rank_mismatch() {
        let p = Permutation::reversal(3);
        assert_eq!(
            p.apply(&Index::from([1, 2])),
            Err(TileError::RankMismatch {
                expected: 3,
                actual: 2
            })
        );
    }

    #[test]
    fn test_display() {
        let p = Permutation::reversal(3);
        assert_eq!(p.to_string(), "{0->2, 1->1, 2->0}");
    }

    #[test]
    fn test_serde_rejects_non_bijection() {
        assert!(serde_json::from_str::<Permutation>("[0, 0]").is_err());
        let p: Permutation = serde_json::from_str("[1, 0]").unwrap();
        assert_eq!(p.as_slice(), &[1, 0]);
    }
}
