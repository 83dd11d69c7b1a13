//! Direct / cast-after strategy selection.

/// Marker: the native operation already yields the requested type.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Direct;

/// Marker: run the native operation, then [`Cast`](super::Cast) its result.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CastAfter;

mod sealed {
    pub trait Sealed {}
    impl Sealed for super::Direct {}
    impl Sealed for super::CastAfter {}
}

/// The two dispatch strategies.
pub trait Strategy: sealed::Sealed + Copy + Default + 'static {
    const NAME: &'static str;
}

impl Strategy for Direct {
    const NAME: &'static str = "direct";
}

impl Strategy for CastAfter {
    const NAME: &'static str = "cast_after";
}

/// Implemented by a requested result type that a native result type
/// `Native` can produce.
///
/// Every type reaches itself directly. Cast pairs are registered next to the
/// tile type that provides the conversion.
pub trait Reachable<Native> {
    type Strategy: Strategy;
}

impl<T> Reachable<T> for T {
    type Strategy = Direct;
}
