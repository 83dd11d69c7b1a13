//! Half-open N-dimensional index boxes.
//!
//! A [`Range`] is the box `[start, finish)` in a [`CoordinateSystem`]. It
//! derives the per-dimension `size`, the strides (`weight`) and the element
//! count (`volume`), and maps indices to ordinals (linear storage offsets):
//!
//! ```text
//! ordinal(i) = sum_d weight[d] * (i[d] - start[d])
//! ```
//!
//! Every range with a zero-length dimension is stored in one canonical form,
//! `start == finish == [base; dim]`, so empty ranges compare equal no matter
//! how they were produced. A rank-0 range is always empty.

use std::fmt;
use std::iter::FusedIterator;
use std::ops::{BitAnd, BitXor, BitXorAssign};

use serde::{Deserialize, Serialize};

use crate::coordinate::CoordinateSystem;
use crate::error::{Result, TileError};
use crate::index::Index;
use crate::permutation::Permutation;

/// An axis-aligned half-open box of indices.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(try_from = "RangeBounds", into = "RangeBounds")]
pub struct Range {
    cs: CoordinateSystem,
    start: Index,
    finish: Index,
    size: Vec<usize>,
    weight: Vec<usize>,
    volume: usize,
}

/// A lookup key accepted by [`Range::includes_key`]: either a coordinate
/// index or an ordinal position.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Key {
    Index(Index),
    Ordinal(usize),
}

impl From<Index> for Key {
    fn from(i: Index) -> Self {
        Key::Index(i)
    }
}

impl From<usize> for Key {
    fn from(o: usize) -> Self {
        Key::Ordinal(o)
    }
}

impl Range {
    /// Create the range `[start, finish)`.
    ///
    /// # Errors
    ///
    /// - `TileError::RankMismatch` if either bound's rank differs from `cs.dim()`.
    /// - `TileError::InvalidRange` if `finish[d] < start[d]` for some `d`.
    /// - `TileError::RangeOverflow` if an extent or the volume does not fit
    ///   in `usize`.
    ///
    /// # Example
    ///
    /// ```
    /// use tilearray::{CoordinateSystem, Index, Range};
    ///
    /// let cs = CoordinateSystem::c_style(3);
    /// let r = Range::new(cs, Index::from([1, 1, 1]), Index::from([5, 3, 2])).unwrap();
    /// assert_eq!(r.size(), &[4, 2, 1]);
    /// assert_eq!(r.weight(), &[2, 1, 1]);
    /// assert_eq!(r.volume(), 8);
    ///
    /// assert!(Range::new(cs, Index::from([2, 2, 2]), Index::from([1, 2, 2])).is_err());
    /// ```
    pub fn new(cs: CoordinateSystem, start: Index, finish: Index) -> Result<Self> {
        for bound in [&start, &finish] {
            if bound.rank() != cs.dim() {
                return Err(TileError::RankMismatch {
                    expected: cs.dim(),
                    actual: bound.rank(),
                });
            }
        }
        if let Some(dim) = (0..cs.dim()).find(|&d| finish[d] < start[d]) {
            return Err(TileError::InvalidRange {
                start: start.to_vec(),
                finish: finish.to_vec(),
                dim,
            });
        }
        let overflow = || TileError::RangeOverflow {
            extent: format!("[{start}, {finish})"),
        };
        let size = (0..cs.dim())
            .map(|d| {
                finish[d]
                    .checked_sub(start[d])
                    .and_then(|n| usize::try_from(n).ok())
            })
            .collect::<Option<Vec<usize>>>()
            .ok_or_else(overflow)?;
        cs.checked_volume(&size).ok_or_else(overflow)?;
        Ok(Self::from_valid_bounds(cs, start, finish))
    }

    /// Create `[start, finish)` in the zero-based C-style coordinate system of
    /// the bounds' rank.
    pub fn from_bounds(start: impl Into<Index>, finish: impl Into<Index>) -> Result<Self> {
        let start = start.into();
        let cs = CoordinateSystem::c_style(start.rank());
        Self::new(cs, start, finish.into())
    }

    /// Create `[base, base + extents)` in `cs`.
    ///
    /// # Errors
    ///
    /// - `TileError::RankMismatch` if `extents.len() != cs.dim()`.
    /// - `TileError::RangeOverflow` if `base + extent` leaves `i64`.
    pub fn from_extents(cs: CoordinateSystem, extents: &[usize]) -> Result<Self> {
        let start = cs.base_index();
        let finish = extents
            .iter()
            .map(|&n| i64::try_from(n).ok().and_then(|n| cs.base().checked_add(n)))
            .collect::<Option<Index>>()
            .ok_or_else(|| TileError::RangeOverflow {
                extent: format!("{extents:?}"),
            })?;
        Self::new(cs, start, finish)
    }

    /// The canonical empty range: `start == finish == [base; dim]`.
    pub fn empty(cs: CoordinateSystem) -> Self {
        Self::from_valid_bounds(cs, cs.base_index(), cs.base_index())
    }

    /// Build from bounds already known to satisfy `finish >= start`.
    fn from_valid_bounds(cs: CoordinateSystem, start: Index, finish: Index) -> Self {
        let size: Vec<usize> = start
            .iter()
            .zip(finish.iter())
            .map(|(s, f)| (f - s) as usize)
            .collect();
        let volume = if cs.dim() == 0 {
            0
        } else {
            cs.calc_volume(&size)
        };
        if volume == 0 {
            let size = vec![0; cs.dim()];
            return Self {
                cs,
                start: cs.base_index(),
                finish: cs.base_index(),
                weight: cs.calc_weight(&size),
                size,
                volume: 0,
            };
        }
        Self {
            cs,
            weight: cs.calc_weight(&size),
            start,
            finish,
            size,
            volume,
        }
    }

    /// Replace the bounds and recompute every derived quantity.
    ///
    /// Returns `self` so calls can be chained. On error `self` is unchanged.
    ///
    /// # Example
    ///
    /// ```
    /// use tilearray::{CoordinateSystem, Index, Range};
    ///
    /// let mut r = Range::empty(CoordinateSystem::c_style(2));
    /// assert_eq!(r.resize(Index::from([0, 0]), Index::from([2, 3])).unwrap().volume(), 6);
    /// assert_eq!(r.weight(), &[3, 1]);
    /// ```
    pub fn resize(&mut self, start: Index, finish: Index) -> Result<&mut Self> {
        *self = Self::new(self.cs, start, finish)?;
        Ok(self)
    }

    #[inline]
    pub fn coordinate_system(&self) -> CoordinateSystem {
        self.cs
    }

    #[inline]
    pub fn rank(&self) -> usize {
        self.cs.dim()
    }

    #[inline]
    pub fn start(&self) -> &Index {
        &self.start
    }

    #[inline]
    pub fn finish(&self) -> &Index {
        &self.finish
    }

    #[inline]
    pub fn size(&self) -> &[usize] {
        &self.size
    }

    #[inline]
    pub fn weight(&self) -> &[usize] {
        &self.weight
    }

    #[inline]
    pub fn volume(&self) -> usize {
        self.volume
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.volume == 0
    }

    /// Whether `index` lies inside `[start, finish)`.
    pub fn includes(&self, index: &Index) -> bool {
        index.rank() == self.rank()
            && (0..self.rank()).all(|d| self.start[d] <= index[d] && index[d] < self.finish[d])
    }

    /// Whether `ordinal` addresses an element of this range.
    #[inline]
    pub fn includes_ordinal(&self, ordinal: usize) -> bool {
        ordinal < self.volume
    }

    pub fn includes_key(&self, key: &Key) -> bool {
        match key {
            Key::Index(i) => self.includes(i),
            Key::Ordinal(o) => self.includes_ordinal(*o),
        }
    }

    /// Linear storage offset of `index`.
    ///
    /// Only meaningful for included indices; use [`Range::try_ordinal`] when
    /// the index has not been checked.
    #[inline]
    pub fn ordinal(&self, index: &Index) -> usize {
        debug_assert!(self.includes(index), "{index} is not in {self}");
        self.weight
            .iter()
            .zip(index.iter().zip(self.start.iter()))
            .map(|(&w, (&i, &s))| w * (i - s) as usize)
            .sum()
    }

    /// Checked version of [`Range::ordinal`].
    ///
    /// # Errors
    ///
    /// Returns `TileError::OutOfRange` if `index` is not included.
    pub fn try_ordinal(&self, index: &Index) -> Result<usize> {
        if !self.includes(index) {
            return Err(TileError::OutOfRange {
                index: index.to_string(),
                bound: self.to_string(),
            });
        }
        Ok(self.ordinal(index))
    }

    /// Decode an ordinal back to its index.
    ///
    /// # Panics
    ///
    /// Panics in debug builds if `ordinal >= volume`.
    pub fn index_of(&self, ordinal: usize) -> Index {
        debug_assert!(ordinal < self.volume, "ordinal {ordinal} out of {self}");
        (0..self.rank())
            .map(|d| self.start[d] + ((ordinal / self.weight[d]) % self.size[d]) as i64)
            .collect()
    }

    /// Checked version of [`Range::index_of`].
    pub fn try_index_of(&self, ordinal: usize) -> Result<Index> {
        if !self.includes_ordinal(ordinal) {
            return Err(TileError::OutOfRange {
                index: ordinal.to_string(),
                bound: self.volume.to_string(),
            });
        }
        Ok(self.index_of(ordinal))
    }

    /// The overlap of two ranges; the canonical empty range if disjoint.
    ///
    /// # Errors
    ///
    /// Returns `TileError::CoordinateSystemMismatch` if the ranges do not
    /// share a coordinate system.
    pub fn intersect(&self, other: &Range) -> Result<Range> {
        if self.cs != other.cs {
            return Err(TileError::CoordinateSystemMismatch {
                left: self.cs.to_string(),
                right: other.cs.to_string(),
            });
        }
        if self.is_empty() || other.is_empty() {
            return Ok(Range::empty(self.cs));
        }
        let start: Index = (0..self.rank())
            .map(|d| self.start[d].max(other.start[d]))
            .collect();
        let finish: Index = (0..self.rank())
            .map(|d| self.finish[d].min(other.finish[d]))
            .collect();
        if (0..self.rank()).any(|d| finish[d] <= start[d]) {
            return Ok(Range::empty(self.cs));
        }
        Ok(Self::from_valid_bounds(self.cs, start, finish))
    }

    /// The range with its dimensions reordered by `perm`.
    ///
    /// Bounds and sizes move with their dimension; weights are recomputed
    /// for the new dimension order.
    ///
    /// # Errors
    ///
    /// Returns `TileError::RankMismatch` if `perm.dim() != self.rank()`.
    pub fn permute(&self, perm: &Permutation) -> Result<Range> {
        let start = perm.apply(&self.start)?;
        let finish = perm.apply(&self.finish)?;
        Ok(Self::from_valid_bounds(self.cs, start, finish))
    }

    /// Iterate over the contained indices in storage order.
    pub fn iter(&self) -> RangeIter<'_> {
        RangeIter {
            range: self,
            current: self.start.clone(),
            dims: self.cs.significance_order(),
            remaining: self.volume,
        }
    }
}

impl PartialEq for Range {
    fn eq(&self, other: &Self) -> bool {
        self.cs == other.cs && self.start == other.start && self.finish == other.finish
    }
}

impl Eq for Range {}

impl BitAnd for &Range {
    type Output = Range;

    /// # Panics
    ///
    /// Panics if the coordinate systems differ; see [`Range::intersect`].
    fn bitand(self, rhs: &Range) -> Range {
        match self.intersect(rhs) {
            Ok(r) => r,
            Err(e) => panic!("{e}"),
        }
    }
}

impl BitXor<&Range> for &Permutation {
    type Output = Range;

    /// # Panics
    ///
    /// Panics on a rank mismatch; see [`Range::permute`].
    fn bitxor(self, range: &Range) -> Range {
        match range.permute(self) {
            Ok(r) => r,
            Err(e) => panic!("{e}"),
        }
    }
}

impl BitXorAssign<&Permutation> for Range {
    fn bitxor_assign(&mut self, perm: &Permutation) {
        *self = perm ^ &*self;
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[ {}, {} )", self.start, self.finish)
    }
}

impl<'a> IntoIterator for &'a Range {
    type Item = Index;
    type IntoIter = RangeIter<'a>;

    fn into_iter(self) -> RangeIter<'a> {
        self.iter()
    }
}

/// Iterator over the indices of a [`Range`], least significant dimension
/// varying fastest.
#[derive(Clone, Debug)]
pub struct RangeIter<'a> {
    range: &'a Range,
    current: Index,
    dims: Vec<usize>,
    remaining: usize,
}

impl Iterator for RangeIter<'_> {
    type Item = Index;

    fn next(&mut self) -> Option<Index> {
        if self.remaining == 0 {
            return None;
        }
        let item = self.current.clone();
        self.remaining -= 1;
        if self.remaining > 0 {
            for &d in &self.dims {
                self.current[d] += 1;
                if self.current[d] < self.range.finish[d] {
                    break;
                }
                self.current[d] = self.range.start[d];
            }
        }
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for RangeIter<'_> {}

impl FusedIterator for RangeIter<'_> {}

/// Serialized form of a range: the derived fields are rebuilt on load.
#[derive(Serialize, Deserialize)]
struct RangeBounds {
    cs: CoordinateSystem,
    start: Index,
    finish: Index,
}

impl TryFrom<RangeBounds> for Range {
    type Error = TileError;

    fn try_from(b: RangeBounds) -> Result<Self> {
        Range::new(b.cs, b.start, b.finish)
    }
}

impl From<Range> for RangeBounds {
    fn from(r: Range) -> Self {
        RangeBounds {
            cs: r.cs,
            start: r.start,
            finish: r.finish,
        }
    }
}
