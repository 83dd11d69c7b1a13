//! Tile construction from nested lists.
//!
//! A nested list of depth `N` describes a rank-`N` tile in row-major order:
//!
//! ```text
//! vec![vec![1.0, 2.0, 3.0],      range  [ (0, 0), (2, 3) )
//!      vec![4.0, 5.0, 6.0]]      data   1 2 3 4 5 6
//! ```

use crate::coordinate::CoordinateSystem;
use crate::error::{Result, TileError};
use crate::range::Range;
use crate::scalar::{Scalar, c32, c64};
use crate::tensor::DenseTensor;

/// A scalar (rank 0) or a list of equally-shaped nested lists.
pub trait NestedList {
    type Elem: Scalar;

    /// Nesting depth.
    const RANK: usize;

    /// Extent of each nesting level, outermost first.
    ///
    /// An empty list reports zero for itself and every level below it.
    ///
    /// # Errors
    ///
    /// Returns `TileError::JaggedNestedList` if siblings differ in shape.
    fn shape(&self) -> Result<Vec<usize>>;

    /// Append every element in row-major order.
    fn flatten_into(&self, out: &mut Vec<Self::Elem>);
}

macro_rules! impl_nested_scalar {
    ($($t:ty),*) => {
        $(
            impl NestedList for $t {
                type Elem = $t;
                const RANK: usize = 0;

                fn shape(&self) -> Result<Vec<usize>> {
                    Ok(Vec::new())
                }

                fn flatten_into(&self, out: &mut Vec<$t>) {
                    out.push(*self);
                }
            }
        )*
    };
}

impl_nested_scalar!(f32, f64, c32, c64);

/// Report a jagged level one nesting deeper than the caller saw it.
fn deepen(e: TileError) -> TileError {
    match e {
        TileError::JaggedNestedList {
            depth,
            expected,
            actual,
        } => TileError::JaggedNestedList {
            depth: depth + 1,
            expected,
            actual,
        },
        other => other,
    }
}

fn slice_shape<L: NestedList>(items: &[L]) -> Result<Vec<usize>> {
    let Some(first) = items.first() else {
        return Ok(vec![0; L::RANK + 1]);
    };
    let inner = first.shape().map_err(deepen)?;
    for item in &items[1..] {
        let other = item.shape().map_err(deepen)?;
        if let Some(d) = (0..inner.len()).find(|&d| inner[d] != other[d]) {
            return Err(TileError::JaggedNestedList {
                depth: d + 1,
                expected: inner[d],
                actual: other[d],
            });
        }
    }
    let mut shape = Vec::with_capacity(inner.len() + 1);
    shape.push(items.len());
    shape.extend(inner);
    Ok(shape)
}

impl<L: NestedList> NestedList for Vec<L> {
    type Elem = L::Elem;
    const RANK: usize = L::RANK + 1;

    fn shape(&self) -> Result<Vec<usize>> {
        slice_shape(self)
    }

    fn flatten_into(&self, out: &mut Vec<L::Elem>) {
        for item in self {
            item.flatten_into(out);
        }
    }
}

impl<L: NestedList, const N: usize> NestedList for [L; N] {
    type Elem = L::Elem;
    const RANK: usize = L::RANK + 1;

    fn shape(&self) -> Result<Vec<usize>> {
        slice_shape(self)
    }

    fn flatten_into(&self, out: &mut Vec<L::Elem>) {
        for item in self {
            item.flatten_into(out);
        }
    }
}

/// The zero-based C-style range a nested list describes.
///
/// # Errors
///
/// - `TileError::EmptyNestedList` if the outermost list is empty.
/// - `TileError::JaggedNestedList` if siblings differ in shape.
///
/// # Example
///
/// ```
/// use tilearray::nested::range_from_nested;
///
/// let r = range_from_nested(&vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]).unwrap();
/// assert_eq!(r.size(), &[2, 3]);
/// assert!(range_from_nested(&Vec::<f64>::new()).is_err());
/// ```
pub fn range_from_nested<L: NestedList>(list: &L) -> Result<Range> {
    let shape = list.shape()?;
    if L::RANK > 0 && shape[0] == 0 {
        return Err(TileError::EmptyNestedList);
    }
    Range::from_extents(CoordinateSystem::c_style(L::RANK), &shape)
}

/// All elements in row-major order.
///
/// # Errors
///
/// Returns `TileError::JaggedNestedList` if siblings differ in shape.
pub fn flatten_nested<L: NestedList>(list: &L) -> Result<Vec<L::Elem>> {
    let shape = list.shape()?;
    let mut out = Vec::with_capacity(shape.iter().product());
    list.flatten_into(&mut out);
    Ok(out)
}

/// A row-major tile holding the elements of a nested list.
///
/// # Errors
///
/// - `TileError::RankMismatch` for a bare scalar.
/// - `TileError::EmptyNestedList` / `TileError::JaggedNestedList` as for
///   [`range_from_nested`].
///
/// # Example
///
/// ```
/// use tilearray::Index;
/// use tilearray::nested::tensor_from_nested;
///
/// let t = tensor_from_nested(&[[1.0, 2.0], [3.0, 4.0], [5.0, 6.0]]).unwrap();
/// assert_eq!(t.range().size(), &[3, 2]);
/// assert_eq!(t.get(&Index::from([2, 0])), Some(&5.0));
/// ```
pub fn tensor_from_nested<L: NestedList>(list: &L) -> Result<DenseTensor<L::Elem>> {
    if L::RANK == 0 {
        return Err(TileError::RankMismatch {
            expected: 1,
            actual: 0,
        });
    }
    let range = range_from_nested(list)?;
    DenseTensor::from_vec(range, flatten_nested(list)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank() {
        assert_eq!(<f64 as NestedList>::RANK, 0);
        assert_eq!(<Vec<c32> as NestedList>::RANK, 1);
        assert_eq!(<Vec<Vec<f32>> as NestedList>::RANK, 2);
        assert_eq!(<[[[c64; 2]; 3]; 4] as NestedList>::RANK, 3);
    }

    #[test]
    fn test_scalar_shape() {
        assert_eq!(3.0f64.shape().unwrap(), Vec::<usize>::new());
        assert_eq!(flatten_nested(&3.0f64).unwrap(), vec![3.0]);
    }

    #[test]
    fn test_empty_shape() {
        let v: Vec<Vec<f64>> = Vec::new();
        assert_eq!(v.shape().unwrap(), vec![0, 0]);
        assert!(flatten_nested(&v).unwrap().is_empty());
        assert_eq!(range_from_nested(&v), Err(TileError::EmptyNestedList));
    }

    #[test]
    fn test_jagged_depth() {
        let v = vec![vec![1.0, 2.0], vec![3.0]];
        assert_eq!(
            v.shape(),
            Err(TileError::JaggedNestedList {
                depth: 1,
                expected: 2,
                actual: 1
            })
        );

        let w = vec![vec![vec![1.0, 2.0], vec![3.0, 4.0]], vec![vec![5.0, 6.0], vec![7.0]]];
        assert_eq!(
            w.shape(),
            Err(TileError::JaggedNestedList {
                depth: 2,
                expected: 2,
                actual: 1
            })
        );
    }

    #[test]
    fn test_tensor_from_scalar_is_rejected() {
        assert!(matches!(
            tensor_from_nested(&1.0f64),
            Err(TileError::RankMismatch { .. })
        ));
    }
}
