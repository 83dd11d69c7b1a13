//! tilearray - ranges, permutations and tile combination for tiled tensor algebra
//!
//! This crate is the indexing and element-combination layer underneath a
//! tile-based tensor engine.
//!
//! # Architecture
//!
//! ```text
//! CoordinateSystem ── configures ──> Range <── permuted by ── Permutation
//!                                      │
//!                                      ├── ordinal / iteration ──> Tensor (tile)
//!                                      │                             │
//!                                      │          ┌──────────────────┼───────────────┐
//!                                      │          v                  v               v
//!                                      │   backend (permute,   tile_interface    linalg
//!                                      │   faer views)         (Add family)      (faer)
//!                                      v
//!                                    Bitset (tile occupancy)
//! ```
//!
//! # Example
//!
//! ```
//! use tilearray::{DenseTensor, Index, Permutation, Range, Tensor};
//!
//! // A 2x3 tile whose first coordinate starts at 10
//! let r = Range::from_bounds([10, 0], [12, 3]).unwrap();
//! assert_eq!(r.volume(), 6);
//! assert_eq!(r.ordinal(&Index::from([11, 0])), 3);
//!
//! let mut t: DenseTensor<f64> = Tensor::zeros(r);
//! t.set(&Index::from([11, 2]), 5.0).unwrap();
//!
//! // Swap the two dimensions
//! let p = Permutation::new(vec![1, 0]).unwrap();
//! let tt = t.permute(&p).unwrap();
//! assert_eq!(tt.get(&Index::from([2, 11])), Some(&5.0));
//! ```

pub mod backend;
pub mod bitset;
pub mod config;
pub mod coordinate;
pub mod error;
pub mod index;
pub mod linalg;
pub mod nested;
pub mod operations;
pub mod permutation;
pub mod random;
pub mod range;
pub mod runtime;
pub mod scalar;
pub mod storage;
pub mod tensor;
pub mod tile_interface;

pub use bitset::{Bitset, Block};
pub use config::RuntimeConfig;
pub use coordinate::{CoordinateSystem, DimensionOrder};
pub use error::{Result, TileError};
pub use index::Index;
pub use permutation::Permutation;
pub use range::{Key, Range, RangeIter};
pub use runtime::{LifecycleState, Runtime};
pub use scalar::{Numeric, RealScalar, Scalar, c32, c64};
pub use storage::{Dense, TensorStorage};
pub use tensor::{DenseTensor, Tensor};
