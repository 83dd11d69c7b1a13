//! Capability-polymorphic tile combination.
//!
//! A tile type opts into the dispatch layer by implementing the native
//! capability traits ([`TileAdd`], [`TileScalAdd`], [`TileAddTo`],
//! [`TileScalAddTo`]). The dispatch objects ([`Add`], [`ScalAdd`], [`AddTo`],
//! [`ScalAddTo`]) call the capability and, when the caller asks for a result
//! type other than the native one, finish with a [`Cast`]:
//!
//! ```text
//! AddOp<Result, Left, Right>
//!     Result: Reachable<Left::Output>
//!         Strategy = Direct     → left.add(right)
//!         Strategy = CastAfter  → left.add(right).cast()
//! ```
//!
//! The strategy is fixed when the alias is resolved. A result type that is
//! neither the native output nor a registered cast target does not compile.

mod add;
mod cast;
mod strategy;
mod tensor;

pub use add::{
    Add, AddOp, AddTo, AddToOp, ScalAdd, ScalAddOp, ScalAddTo, ScalAddToOp, TileAdd, TileAddTo,
    TileScalAdd, TileScalAddTo,
};
pub use cast::Cast;
pub use strategy::{CastAfter, Direct, Reachable, Strategy};
