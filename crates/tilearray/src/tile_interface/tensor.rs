//! Native Add-family capabilities and casts for dense tiles.

use super::add::{TileAdd, TileAddTo, TileScalAdd, TileScalAddTo};
use super::cast::Cast;
use super::strategy::{CastAfter, Reachable};
use crate::error::{Result, TileError};
use crate::operations::{apply_binary, scale_inplace};
use crate::permutation::Permutation;
use crate::range::Range;
use crate::scalar::{Numeric, Scalar, c32, c64};
use crate::tensor::DenseTensor;

fn check_same_range(left: &Range, right: &Range) -> Result<()> {
    if left != right {
        return Err(TileError::RangeMismatch {
            left: left.to_string(),
            right: right.to_string(),
        });
    }
    Ok(())
}

impl<T, U> TileAdd<DenseTensor<U>> for DenseTensor<T>
where
    T: Scalar,
    U: Scalar + Into<T>,
{
    type Output = DenseTensor<T>;

    fn add(&self, right: &DenseTensor<U>) -> Result<DenseTensor<T>> {
        apply_binary(self, right, |x, y| x + Into::<T>::into(y))
    }

    fn add_permuted(&self, right: &DenseTensor<U>, perm: &Permutation) -> Result<DenseTensor<T>> {
        self.add(right)?.permute(perm)
    }
}

impl<T, U, S> TileScalAdd<DenseTensor<U>, S> for DenseTensor<T>
where
    T: Scalar,
    U: Scalar + Into<T>,
    S: Numeric + Into<T>,
{
    type Output = DenseTensor<T>;

    fn add_scaled(&self, right: &DenseTensor<U>, factor: S) -> Result<DenseTensor<T>> {
        let factor: T = factor.into();
        apply_binary(self, right, |x, y| (x + Into::<T>::into(y)) * factor)
    }

    fn add_scaled_permuted(
        &self,
        right: &DenseTensor<U>,
        factor: S,
        perm: &Permutation,
    ) -> Result<DenseTensor<T>> {
        self.add_scaled(right, factor)?.permute(perm)
    }
}

impl<T, U> TileAddTo<DenseTensor<U>> for DenseTensor<T>
where
    T: Scalar,
    U: Scalar + Into<T>,
{
    fn add_to(&mut self, right: &DenseTensor<U>) -> Result<&mut Self> {
        check_same_range(self.range(), right.range())?;
        for (x, &y) in self.data_mut().iter_mut().zip(right.data()) {
            *x += Into::<T>::into(y);
        }
        Ok(self)
    }
}

impl<T, U, S> TileScalAddTo<DenseTensor<U>, S> for DenseTensor<T>
where
    T: Scalar,
    U: Scalar + Into<T>,
    S: Numeric + Into<T>,
{
    fn add_to_scaled(&mut self, right: &DenseTensor<U>, factor: S) -> Result<&mut Self> {
        self.add_to(right)?;
        scale_inplace(self, factor.into());
        Ok(self)
    }
}

impl<T, U> Cast<DenseTensor<U>> for DenseTensor<T>
where
    T: Scalar + Into<U>,
    U: Scalar,
{
    fn cast(&self) -> DenseTensor<U> {
        let data: Vec<U> = self.data().iter().map(|&x| x.into()).collect();
        DenseTensor::from_vec(self.range().clone(), data).expect("cast: range unchanged")
    }
}

macro_rules! cast_after {
    ($($from:ty => $to:ty),* $(,)?) => {
        $(
            impl Reachable<DenseTensor<$from>> for DenseTensor<$to> {
                type Strategy = CastAfter;
            }
        )*
    };
}

cast_after! {
    f32 => f64,
    f64 => c64,
    f32 => c32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Tensor;

    fn tile(data: Vec<f64>) -> DenseTensor<f64> {
        let r = Range::from_bounds([0, 0], [2, 2]).unwrap();
        DenseTensor::from_vec(r, data).unwrap()
    }

    #[test]
    fn test_native_add() {
        let a = tile(vec![1.0, 2.0, 3.0, 4.0]);
        let b = tile(vec![10.0, 20.0, 30.0, 40.0]);
        let c = TileAdd::add(&a, &b).unwrap();
        assert_eq!(c.data(), &[11.0, 22.0, 33.0, 44.0]);
    }

    #[test]
    fn test_native_add_range_mismatch() {
        let a = tile(vec![0.0; 4]);
        let b: DenseTensor<f64> = Tensor::zeros(Range::from_bounds([0, 0], [2, 3]).unwrap());
        assert!(matches!(
            TileAdd::add(&a, &b),
            Err(TileError::RangeMismatch { .. })
        ));
    }

    #[test]
    fn test_native_add_to_widens_right() {
        let mut a = tile(vec![1.0, 1.0, 1.0, 1.0]);
        let r = Range::from_bounds([0, 0], [2, 2]).unwrap();
        let b: DenseTensor<f32> = Tensor::ones(r);
        a.add_to(&b).unwrap();
        assert_eq!(a.data(), &[2.0; 4]);
    }

    #[test]
    fn test_native_add_to_scaled_integer_factor() {
        let mut a = tile(vec![1.0, 2.0, 3.0, 4.0]);
        let b = tile(vec![1.0, 1.0, 1.0, 1.0]);
        a.add_to_scaled(&b, 2i32).unwrap();
        assert_eq!(a.data(), &[4.0, 6.0, 8.0, 10.0]);
    }

    #[test]
    fn test_cast() {
        let a = tile(vec![1.0, -2.0, 0.5, 4.0]);
        let c: DenseTensor<c64> = a.cast();
        assert_eq!(c.range(), a.range());
        assert_eq!(c[1], c64::new(-2.0, 0.0));
    }
}
