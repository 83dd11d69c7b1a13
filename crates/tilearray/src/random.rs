//! Random tiles, mostly for tests and benchmarks.

use rand::Rng;
use rand::distr::StandardUniform;
use rand_distr::StandardNormal;

use crate::range::Range;
use crate::scalar::{Scalar, c32, c64};
use crate::storage::Dense;
use crate::tensor::Tensor;

/// Element types with a uniform `[0, 1)` and a standard normal sampler.
///
/// Complex types sample both parts independently. The normal sampler
/// scales each part by `1/√2` so that `E|z|² = 1`.
pub trait RandomScalar: Scalar {
    fn sample_uniform<R: Rng>(rng: &mut R) -> Self;

    fn sample_normal<R: Rng>(rng: &mut R) -> Self;
}

macro_rules! impl_random_real {
    ($($t:ty),*) => {
        $(
            impl RandomScalar for $t {
                fn sample_uniform<R: Rng>(rng: &mut R) -> Self {
                    rng.sample(StandardUniform)
                }

                fn sample_normal<R: Rng>(rng: &mut R) -> Self {
                    rng.sample(StandardNormal)
                }
            }
        )*
    };
}

macro_rules! impl_random_complex {
    ($($t:ty => $re:ident),*) => {
        $(
            impl RandomScalar for $t {
                fn sample_uniform<R: Rng>(rng: &mut R) -> Self {
                    <$t>::new(rng.sample(StandardUniform), rng.sample(StandardUniform))
                }

                fn sample_normal<R: Rng>(rng: &mut R) -> Self {
                    let scale = std::$re::consts::FRAC_1_SQRT_2;
                    <$t>::new(
                        rng.sample::<$re, _>(StandardNormal) * scale,
                        rng.sample::<$re, _>(StandardNormal) * scale,
                    )
                }
            }
        )*
    };
}

impl_random_real!(f32, f64);
impl_random_complex!(c32 => f32, c64 => f64);

impl<T: RandomScalar> Tensor<T, Dense<T>> {
    /// A tile over `range` with uniform `[0, 1)` elements from the thread RNG.
    ///
    /// # Example
    ///
    /// ```
    /// use tilearray::{Range, Tensor};
    ///
    /// let t: Tensor<f64> = Tensor::random(Range::from_bounds([1, 1], [3, 4]).unwrap());
    /// assert_eq!(t.len(), 6);
    /// assert!(t.data().iter().all(|v| (0.0..1.0).contains(v)));
    /// ```
    pub fn random(range: Range) -> Self {
        Self::random_with_rng(range, &mut rand::rng())
    }

    /// Like [`random`](Self::random), drawing from `rng`.
    ///
    /// Elements are drawn in ordinal order, so a seeded RNG reproduces the
    /// same tile.
    pub fn random_with_rng<R: Rng>(range: Range, rng: &mut R) -> Self {
        Self::from_fn(range, |_| T::sample_uniform(rng))
    }

    /// A tile over `range` with standard normal elements from the thread RNG.
    pub fn randn(range: Range) -> Self {
        Self::randn_with_rng(range, &mut rand::rng())
    }

    /// Like [`randn`](Self::randn), drawing from `rng`.
    pub fn randn_with_rng<R: Rng>(range: Range, rng: &mut R) -> Self {
        Self::from_fn(range, |_| T::sample_normal(rng))
    }
}
