//! Coordinate systems: rank, base index and dimension ordering.
//!
//! A [`CoordinateSystem`] fixes how a range linearizes its indices. Under
//! [`DimensionOrder::Decreasing`] (C, row-major) the last dimension is the
//! least significant one and varies fastest; under
//! [`DimensionOrder::Increasing`] (Fortran, column-major) the first one does.
//!
//! ```text
//! size = [2, 3, 4]
//! Decreasing  weight = [12, 4, 1]
//! Increasing  weight = [1, 2, 6]
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TileError;
use crate::index::Index;

/// Significance convention of the dimensions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DimensionOrder {
    /// First dimension varies fastest (Fortran / column-major).
    Increasing,
    /// Last dimension varies fastest (C / row-major).
    #[default]
    Decreasing,
}

impl FromStr for DimensionOrder {
    type Err = TileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "increasing" | "fortran" | "column_major" | "col_major" => Ok(Self::Increasing),
            "decreasing" | "c" | "row_major" => Ok(Self::Decreasing),
            _ => Err(TileError::InvalidConfig {
                key: "dimension_order".to_string(),
                value: s.to_string(),
            }),
        }
    }
}

/// Rank, base coordinate and dimension ordering shared by a family of ranges.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CoordinateSystem {
    dim: usize,
    base: i64,
    order: DimensionOrder,
}

impl CoordinateSystem {
    pub const fn new(dim: usize, base: i64, order: DimensionOrder) -> Self {
        Self { dim, base, order }
    }

    /// Zero-based, last dimension fastest.
    pub const fn c_style(dim: usize) -> Self {
        Self::new(dim, 0, DimensionOrder::Decreasing)
    }

    /// Zero-based, first dimension fastest.
    pub const fn fortran_style(dim: usize) -> Self {
        Self::new(dim, 0, DimensionOrder::Increasing)
    }

    #[inline]
    pub fn dim(&self) -> usize {
        self.dim
    }

    #[inline]
    pub fn base(&self) -> i64 {
        self.base
    }

    #[inline]
    pub fn order(&self) -> DimensionOrder {
        self.order
    }

    /// The index with every coordinate equal to `base`.
    pub fn base_index(&self) -> Index {
        Index::filled(self.dim, self.base)
    }

    /// Dimensions listed from least to most significant.
    pub fn significance_order(&self) -> Vec<usize> {
        match self.order {
            DimensionOrder::Increasing => (0..self.dim).collect(),
            DimensionOrder::Decreasing => (0..self.dim).rev().collect(),
        }
    }

    /// Compute strides for `size`.
    ///
    /// The least significant dimension has weight 1; every other dimension's
    /// weight is the product of the sizes of all less significant dimensions.
    ///
    /// # Examples
    ///
    /// ```
    /// use tilearray::CoordinateSystem;
    ///
    /// assert_eq!(CoordinateSystem::c_style(3).calc_weight(&[2, 3, 4]), vec![12, 4, 1]);
    /// assert_eq!(CoordinateSystem::fortran_style(3).calc_weight(&[2, 3, 4]), vec![1, 2, 6]);
    /// ```
    pub fn calc_weight(&self, size: &[usize]) -> Vec<usize> {
        let mut weight = vec![0; size.len()];
        let mut stride = 1;
        let mut assign = |d: usize| {
            weight[d] = stride;
            stride *= size[d];
        };
        match self.order {
            DimensionOrder::Increasing => (0..size.len()).for_each(&mut assign),
            DimensionOrder::Decreasing => (0..size.len()).rev().for_each(&mut assign),
        }
        weight
    }

    /// Number of elements in a box of extents `size`; 0 if any extent is 0.
    #[inline]
    pub fn calc_volume(&self, size: &[usize]) -> usize {
        size.iter().product()
    }

    /// [`calc_volume`](Self::calc_volume), or `None` if the product
    /// overflows `usize`.
    pub fn checked_volume(&self, size: &[usize]) -> Option<usize> {
        if size.contains(&0) {
            return Some(0);
        }
        size.iter().try_fold(1usize, |acc, &n| acc.checked_mul(n))
    }

    /// Compare two indices in storage order: most significant dimension first.
    pub fn cmp_index(&self, a: &Index, b: &Index) -> Ordering {
        self.significance_order()
            .into_iter()
            .rev()
            .map(|d| a[d].cmp(&b[d]))
            .find(|o| *o != Ordering::Equal)
            .unwrap_or(Ordering::Equal)
    }
}

impl fmt::Display for CoordinateSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "CoordinateSystem<{}, {}, {:?}>",
            self.dim, self.base, self.order
        )
    }
}
