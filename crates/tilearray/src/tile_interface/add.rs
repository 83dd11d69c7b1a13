//! The Add family: `Add`, `ScalAdd`, `AddTo`, `ScalAddTo`.

use std::any::type_name;
use std::fmt;
use std::marker::PhantomData;

use tracing::trace;

use super::cast::Cast;
use super::strategy::{CastAfter, Direct, Reachable};
use crate::error::Result;
use crate::permutation::Permutation;
use crate::scalar::Numeric;

/// Native `left + right`, optionally permuting the result.
pub trait TileAdd<Right> {
    type Output;

    fn add(&self, right: &Right) -> Result<Self::Output>;

    /// `perm ^ (self + right)`.
    fn add_permuted(&self, right: &Right, perm: &Permutation) -> Result<Self::Output>;
}

/// Native `(left + right) * factor`, optionally permuting the result.
pub trait TileScalAdd<Right, S: Numeric> {
    type Output;

    fn add_scaled(&self, right: &Right, factor: S) -> Result<Self::Output>;

    /// `(perm ^ (self + right)) * factor`.
    fn add_scaled_permuted(
        &self,
        right: &Right,
        factor: S,
        perm: &Permutation,
    ) -> Result<Self::Output>;
}

/// Native in-place `left += right`.
pub trait TileAddTo<Right> {
    fn add_to(&mut self, right: &Right) -> Result<&mut Self>;
}

/// Native in-place `(left += right) *= factor`.
pub trait TileScalAddTo<Right, S: Numeric> {
    fn add_to_scaled(&mut self, right: &Right, factor: S) -> Result<&mut Self>;
}

macro_rules! dispatch_object {
    ($(#[$doc:meta])* $name:ident<$($p:ident),+>) => {
        $(#[$doc])*
        pub struct $name<$($p),+> {
            _marker: PhantomData<fn() -> ($($p,)+)>,
        }

        impl<$($p),+> $name<$($p),+> {
            pub const fn new() -> Self {
                Self { _marker: PhantomData }
            }
        }

        impl<$($p),+> Default for $name<$($p),+> {
            fn default() -> Self {
                Self::new()
            }
        }

        impl<$($p),+> Clone for $name<$($p),+> {
            fn clone(&self) -> Self {
                *self
            }
        }

        impl<$($p),+> Copy for $name<$($p),+> {}

        impl<$($p),+> fmt::Debug for $name<$($p),+> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(type_name::<Self>())
            }
        }
    };
}

dispatch_object! {
    /// Side-effect-free `left + right` producing `Res`.
    Add<Res, Left, Right, St>
}

dispatch_object! {
    /// Side-effect-free `(left + right) * factor` producing `Res`.
    ScalAdd<Res, Left, Right, S, St>
}

dispatch_object! {
    /// `left += right`, then hand back `left` (or a cast of it).
    AddTo<Res, Left, Right, St>
}

dispatch_object! {
    /// `(left += right) *= factor`, then hand back `left` (or a cast of it).
    ScalAddTo<Res, Left, Right, S, St>
}

/// [`Add`] with its strategy chosen from `Left`'s native output.
///
/// # Example
///
/// ```
/// use tilearray::tile_interface::AddOp;
/// use tilearray::{DenseTensor, Range, Tensor};
///
/// let r = Range::from_bounds([0], [2]).unwrap();
/// let a: DenseTensor<f32> = Tensor::ones(r.clone());
/// let b: DenseTensor<f32> = Tensor::ones(r);
///
/// // f32 + f32 is natively f32; asking for f64 casts afterwards.
/// let add = AddOp::<DenseTensor<f64>, DenseTensor<f32>, DenseTensor<f32>>::new();
/// let c: DenseTensor<f64> = add.call(&a, &b).unwrap();
/// assert_eq!(c.data(), &[2.0, 2.0]);
/// ```
pub type AddOp<Res, Left, Right> =
    Add<Res, Left, Right, <Res as Reachable<<Left as TileAdd<Right>>::Output>>::Strategy>;

/// [`ScalAdd`] with its strategy chosen from `Left`'s native output.
pub type ScalAddOp<Res, Left, Right, S> = ScalAdd<
    Res,
    Left,
    Right,
    S,
    <Res as Reachable<<Left as TileScalAdd<Right, S>>::Output>>::Strategy,
>;

/// [`AddTo`] with its strategy chosen from the left operand's type.
pub type AddToOp<Res, Left, Right> = AddTo<Res, Left, Right, <Res as Reachable<Left>>::Strategy>;

/// [`ScalAddTo`] with its strategy chosen from the left operand's type.
pub type ScalAddToOp<Res, Left, Right, S> =
    ScalAddTo<Res, Left, Right, S, <Res as Reachable<Left>>::Strategy>;

fn trace_cast<From, To>(op: &'static str) {
    trace!(op, from = type_name::<From>(), to = type_name::<To>(), "casting native tile result");
}

impl<Res, Left, Right> Add<Res, Left, Right, Direct>
where
    Left: TileAdd<Right, Output = Res>,
{
    pub fn call(&self, left: &Left, right: &Right) -> Result<Res> {
        left.add(right)
    }

    pub fn call_permuted(&self, left: &Left, right: &Right, perm: &Permutation) -> Result<Res> {
        left.add_permuted(right, perm)
    }
}

impl<Res, Left, Right> Add<Res, Left, Right, CastAfter>
where
    Left: TileAdd<Right>,
    Left::Output: Cast<Res>,
{
    pub fn call(&self, left: &Left, right: &Right) -> Result<Res> {
        let native = left.add(right)?;
        trace_cast::<Left::Output, Res>("add");
        Ok(native.cast())
    }

    pub fn call_permuted(&self, left: &Left, right: &Right, perm: &Permutation) -> Result<Res> {
        let native = left.add_permuted(right, perm)?;
        trace_cast::<Left::Output, Res>("add");
        Ok(native.cast())
    }
}

impl<Res, Left, Right, S> ScalAdd<Res, Left, Right, S, Direct>
where
    S: Numeric,
    Left: TileScalAdd<Right, S, Output = Res>,
{
    pub fn call(&self, left: &Left, right: &Right, factor: S) -> Result<Res> {
        left.add_scaled(right, factor)
    }

    pub fn call_permuted(
        &self,
        left: &Left,
        right: &Right,
        factor: S,
        perm: &Permutation,
    ) -> Result<Res> {
        left.add_scaled_permuted(right, factor, perm)
    }
}

impl<Res, Left, Right, S> ScalAdd<Res, Left, Right, S, CastAfter>
where
    S: Numeric,
    Left: TileScalAdd<Right, S>,
    Left::Output: Cast<Res>,
{
    pub fn call(&self, left: &Left, right: &Right, factor: S) -> Result<Res> {
        let native = left.add_scaled(right, factor)?;
        trace_cast::<Left::Output, Res>("scal_add");
        Ok(native.cast())
    }

    pub fn call_permuted(
        &self,
        left: &Left,
        right: &Right,
        factor: S,
        perm: &Permutation,
    ) -> Result<Res> {
        let native = left.add_scaled_permuted(right, factor, perm)?;
        trace_cast::<Left::Output, Res>("scal_add");
        Ok(native.cast())
    }
}

impl<Left, Right> AddTo<Left, Left, Right, Direct>
where
    Left: TileAddTo<Right>,
{
    /// Accumulate into `left` and return it.
    pub fn call<'a>(&self, left: &'a mut Left, right: &Right) -> Result<&'a mut Left> {
        left.add_to(right)
    }
}

impl<Res, Left, Right> AddTo<Res, Left, Right, CastAfter>
where
    Left: TileAddTo<Right> + Cast<Res>,
{
    /// Accumulate into `left`, then return a cast of the updated `left`.
    pub fn call(&self, left: &mut Left, right: &Right) -> Result<Res> {
        left.add_to(right)?;
        trace_cast::<Left, Res>("add_to");
        Ok(left.cast())
    }
}

impl<Left, Right, S> ScalAddTo<Left, Left, Right, S, Direct>
where
    S: Numeric,
    Left: TileScalAddTo<Right, S>,
{
    pub fn call<'a>(&self, left: &'a mut Left, right: &Right, factor: S) -> Result<&'a mut Left> {
        left.add_to_scaled(right, factor)
    }
}

impl<Res, Left, Right, S> ScalAddTo<Res, Left, Right, S, CastAfter>
where
    S: Numeric,
    Left: TileScalAddTo<Right, S> + Cast<Res>,
{
    pub fn call(&self, left: &mut Left, right: &Right, factor: S) -> Result<Res> {
        left.add_to_scaled(right, factor)?;
        trace_cast::<Left, Res>("scal_add_to");
        Ok(left.cast())
    }
}
