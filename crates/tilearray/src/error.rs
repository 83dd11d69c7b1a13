//! Error types for tilearray.

use thiserror::Error;

/// Errors that can occur in range, permutation, bitset and tile operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TileError {
    /// A range bound was inverted on some dimension.
    #[error("invalid range: finish {finish:?} is less than start {start:?} in dimension {dim}")]
    InvalidRange {
        start: Vec<i64>,
        finish: Vec<i64>,
        dim: usize,
    },

    /// Range extents or volume do not fit the addressable size.
    #[error("range {extent} overflows the addressable size")]
    RangeOverflow { extent: String },

    /// Invalid permutation.
    #[error("invalid permutation {perm:?}: not a bijection over 0..{dim}")]
    InvalidPermutation { perm: Vec<usize>, dim: usize },

    /// Operands of a size-checked operation differ in size.
    #[error("size mismatch: expected {expected}, got {actual}")]
    SizeMismatch { expected: usize, actual: usize },

    /// Bit, ordinal or coordinate access beyond bounds.
    #[error("index {index} is out of range for bound {bound}")]
    OutOfRange { index: String, bound: String },

    /// Wrong number of dimensions.
    #[error("expected rank {expected}, got rank {actual}")]
    RankMismatch { expected: usize, actual: usize },

    /// Ranges built from different coordinate systems were combined.
    #[error("coordinate system mismatch: {left} vs {right}")]
    CoordinateSystemMismatch { left: String, right: String },

    /// Tile operands do not cover the same range.
    #[error("range mismatch: {left} vs {right}")]
    RangeMismatch { left: String, right: String },

    /// Shape mismatch between data length and expected size.
    #[error("shape mismatch: expected {expected} elements, got {actual}")]
    ShapeMismatch { expected: usize, actual: usize },

    /// Matrix must be square.
    #[error("matrix must be square: got {rows}x{cols}")]
    NotSquareMatrix { rows: usize, cols: usize },

    /// A dense linear algebra kernel reported failure.
    #[error("linalg::{op} failed: {message}")]
    LinalgError { op: &'static str, message: String },

    /// A nested list had no elements at its outermost level.
    #[error("nested list is empty")]
    EmptyNestedList,

    /// Nested lists at the same depth had different lengths.
    #[error("jagged nested list at depth {depth}: expected length {expected}, got {actual}")]
    JaggedNestedList {
        depth: usize,
        expected: usize,
        actual: usize,
    },

    /// The runtime was initialized twice.
    #[error("runtime already initialized")]
    AlreadyInitialized,

    /// The runtime was used or re-initialized after finalization.
    #[error("runtime already finalized; it cannot be initialized again")]
    AlreadyFinalized,

    /// The runtime was finalized without having been initialized.
    #[error("runtime is not initialized")]
    NotInitialized,

    /// A configuration value could not be parsed.
    #[error("invalid configuration value {value:?} for {key}")]
    InvalidConfig { key: String, value: String },
}

/// Result alias used throughout the crate.
pub type Result<T, E = TileError> = std::result::Result<T, E>;
