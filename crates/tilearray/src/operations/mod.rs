//! Tile operations.
//!
//! ```text
//! permute(tile, perm)             # allocate output covering perm ^ range
//!     → permute_into(dest, tile, perm)
//!         → backend (GenericBackend)
//!
//! scale / apply / apply_binary    # element-wise, ordinal order
//! ```

mod elementwise;
mod permute;

pub use elementwise::{apply, apply_binary, apply_inplace, scale, scale_inplace};
pub use permute::{permute, permute_into};
