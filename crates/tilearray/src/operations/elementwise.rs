//! Element-wise tile operations.

use crate::error::{Result, TileError};
use crate::scalar::Scalar;
use crate::tensor::DenseTensor;

/// Multiply all elements by a scalar, returning a new tile.
///
/// # Example
///
/// ```
/// use tilearray::operations::scale;
/// use tilearray::{DenseTensor, Range};
///
/// let t = DenseTensor::from_vec(Range::from_bounds([0], [3]).unwrap(), vec![1.0, 2.0, 3.0]).unwrap();
/// assert_eq!(scale(&t, 2.0).data(), &[2.0, 4.0, 6.0]);
/// ```
pub fn scale<T: Scalar>(tensor: &DenseTensor<T>, alpha: T) -> DenseTensor<T> {
    apply(tensor, |x| x * alpha)
}

/// Scale a tile in-place.
pub fn scale_inplace<T: Scalar>(tensor: &mut DenseTensor<T>, alpha: T) {
    for x in tensor.data_mut() {
        *x *= alpha;
    }
}

/// Apply a function to each element, returning a new tile over the same range.
///
/// # Example
///
/// ```
/// use tilearray::operations::apply;
/// use tilearray::{DenseTensor, Range};
///
/// let t = DenseTensor::from_vec(Range::from_bounds([0], [3]).unwrap(), vec![1.0, 4.0, 9.0]).unwrap();
/// let ts = apply(&t, |x: f64| x.sqrt());
/// assert!((ts.data()[2] - 3.0).abs() < 1e-12);
/// ```
pub fn apply<T: Scalar, F>(tensor: &DenseTensor<T>, f: F) -> DenseTensor<T>
where
    F: Fn(T) -> T,
{
    let data: Vec<T> = tensor.data().iter().map(|&x| f(x)).collect();
    DenseTensor::from_vec(tensor.range().clone(), data).expect("apply: range unchanged")
}

/// Apply a function to each element in-place.
pub fn apply_inplace<T: Scalar, F>(tensor: &mut DenseTensor<T>, f: F)
where
    F: Fn(T) -> T,
{
    for x in tensor.data_mut() {
        *x = f(*x);
    }
}

/// Combine two tiles element-wise.
///
/// # Errors
///
/// Returns `TileError::RangeMismatch` unless both tiles cover the same range.
///
/// # Example
///
/// ```
/// use tilearray::operations::apply_binary;
/// use tilearray::{DenseTensor, Range};
///
/// let r = Range::from_bounds([0], [3]).unwrap();
/// let a = DenseTensor::from_vec(r.clone(), vec![1.0, 2.0, 3.0]).unwrap();
/// let b = DenseTensor::from_vec(r, vec![4.0, 5.0, 6.0]).unwrap();
/// let c = apply_binary(&a, &b, |x, y| x + y).unwrap();
/// assert_eq!(c.data(), &[5.0, 7.0, 9.0]);
/// ```
pub fn apply_binary<T: Scalar, U: Scalar, F>(
    a: &DenseTensor<T>,
    b: &DenseTensor<U>,
    f: F,
) -> Result<DenseTensor<T>>
where
    F: Fn(T, U) -> T,
{
    if a.range() != b.range() {
        return Err(TileError::RangeMismatch {
            left: a.range().to_string(),
            right: b.range().to_string(),
        });
    }
    let data: Vec<T> = a
        .data()
        .iter()
        .zip(b.data().iter())
        .map(|(&x, &y)| f(x, y))
        .collect();
    Ok(DenseTensor::from_vec(a.range().clone(), data).expect("apply_binary: range unchanged"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scalar::c64;
    use crate::{Range, Tensor};
    use approx::assert_relative_eq;

    fn vector(data: Vec<f64>) -> DenseTensor<f64> {
        let n = data.len() as i64;
        DenseTensor::from_vec(Range::from_bounds([0], [n]).unwrap(), data).unwrap()
    }

    #[test]
    fn test_scale_c64() {
        let r = Range::from_bounds([0], [2]).unwrap();
        let t = DenseTensor::from_vec(r, vec![c64::new(1.0, 2.0), c64::new(0.0, -1.0)]).unwrap();
        let ts = scale(&t, c64::new(0.0, 1.0));
        assert_eq!(ts.data(), &[c64::new(-2.0, 1.0), c64::new(1.0, 0.0)]);
    }

    #[test]
    fn test_scale_inplace() {
        let mut t = vector(vec![1.0, 2.0, 3.0]);
        scale_inplace(&mut t, 0.5);
        assert_eq!(t.data(), &[0.5, 1.0, 1.5]);
    }

    #[test]
    fn test_apply() {
        let t = vector(vec![1.0, 4.0, 9.0]);
        let ts = apply(&t, |x| x.sqrt());
        assert_relative_eq!(ts.data()[0], 1.0, epsilon = 1e-10);
        assert_relative_eq!(ts.data()[1], 2.0, epsilon = 1e-10);
        assert_relative_eq!(ts.data()[2], 3.0, epsilon = 1e-10);
        assert_eq!(ts.range(), t.range());
    }

    #[test]
    fn test_apply_inplace() {
        let mut t = vector(vec![1.0, 2.0, 3.0]);
        apply_inplace(&mut t, |x| x * x);
        assert_eq!(t.data(), &[1.0, 4.0, 9.0]);
    }

    #[test]
    fn test_apply_binary_mixed_types() {
        let a = vector(vec![1.0, 2.0]);
        let r = Range::from_bounds([0], [2]).unwrap();
        let b: DenseTensor<f32> = Tensor::ones(r);
        let c = apply_binary(&a, &b, |x, y| x + f64::from(y)).unwrap();
        assert_eq!(c.data(), &[2.0, 3.0]);
    }

    #[test]
    fn test_apply_binary_range_mismatch() {
        let a = vector(vec![1.0, 2.0, 3.0]);
        let b = vector(vec![4.0, 5.0]);
        assert!(matches!(
            apply_binary(&a, &b, |x, y| x + y),
            Err(TileError::RangeMismatch { .. })
        ));
    }
}
