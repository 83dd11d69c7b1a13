//! Element and scaling-factor traits.

use faer_traits::{ComplexField, RealField};
use std::fmt::{Debug, Display};
use std::ops::{Add, AddAssign, Div, Mul, MulAssign, Neg, Sub};

pub use faer::{c32, c64};

/// Element types a tile can hold.
///
/// This wraps faer's `ComplexField` with the std arithmetic operators used
/// by the element-wise kernels.
pub trait Scalar:
    ComplexField
    + Copy
    + Debug
    + Display
    + Default
    + PartialEq
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
    + AddAssign
    + MulAssign
    + Send
    + Sync
    + 'static
{
    /// The real type associated with this scalar.
    type Real: RealScalar;

    /// Returns the additive identity (zero).
    fn zero() -> Self {
        Self::default()
    }

    /// Returns the multiplicative identity (one).
    fn one() -> Self;

    fn from_real(re: <Self as Scalar>::Real) -> Self;
}

/// Real scalars, the element types accepted by the linear algebra routines.
pub trait RealScalar: Scalar<Real = Self> + RealField + PartialOrd {
    fn abs(self) -> Self;

    fn sqrt(self) -> Self;

    fn is_finite(self) -> bool;

    /// Machine epsilon.
    fn epsilon() -> Self;
}

/// Types usable as a scaling factor in `ScalAdd`/`ScalAddTo`.
///
/// Anything that is not a number (tiles, strings, indices) fails to satisfy
/// this bound, so a non-numeric factor is rejected at compile time.
pub trait Numeric: Copy + Debug + Send + Sync + 'static {}

macro_rules! impl_numeric {
    ($($t:ty),*) => {
        $(impl Numeric for $t {})*
    };
}

impl_numeric!(f32, f64, c32, c64, i32, i64, u32);

macro_rules! impl_real_scalar {
    ($t:ty) => {
        impl Scalar for $t {
            type Real = $t;

            fn one() -> Self {
                1.0
            }

            fn from_real(re: $t) -> Self {
                re
            }
        }

        impl RealScalar for $t {
            fn abs(self) -> Self {
                <$t>::abs(self)
            }

            fn sqrt(self) -> Self {
                <$t>::sqrt(self)
            }

            fn is_finite(self) -> bool {
                <$t>::is_finite(self)
            }

            fn epsilon() -> Self {
                <$t>::EPSILON
            }
        }
    };
}

impl_real_scalar!(f32);
impl_real_scalar!(f64);

impl Scalar for c32 {
    type Real = f32;

    fn one() -> Self {
        c32::new(1.0, 0.0)
    }

    fn from_real(re: f32) -> Self {
        c32::new(re, 0.0)
    }
}

impl Scalar for c64 {
    type Real = f64;

    fn one() -> Self {
        c64::new(1.0, 0.0)
    }

    fn from_real(re: f64) -> Self {
        c64::new(re, 0.0)
    }
}
