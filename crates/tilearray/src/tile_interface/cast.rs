//! Explicit tile conversion.

/// Conversion of a tile into another tile type.
///
/// Unlike `From`, `Cast` borrows its source: `AddTo` casts the accumulated
/// left operand and the caller keeps it.
pub trait Cast<Target> {
    fn cast(&self) -> Target;
}
