//! Computational backends for tile kernels.
//!
//! - `GenericBackend`: index-loop permutation driven by [`Range`](crate::Range)
//!   iteration (always available)
//! - `faer_interop`: zero-copy views of rank-2 tiles as faer matrices, used by
//!   [`linalg`](crate::linalg)

mod faer_interop;
mod generic;
mod permutation;

pub use faer_interop::{AsFaerMat, faer_mat_from_tensor, matrix_extents, tensor_from_faer_mat};
pub use generic::GenericBackend;
pub use permutation::PermutationBackend;
