//! Add-family dispatch over dense tiles.

use approx::assert_relative_eq;
use tilearray::tile_interface::{
    AddOp, AddToOp, CastAfter, Direct, Reachable, ScalAddOp, ScalAddToOp, Strategy,
};
use tilearray::{DenseTensor, Index, Permutation, Range, Tensor, c64};

fn tile<T: tilearray::Scalar>(f: impl Fn(i64, i64) -> T) -> DenseTensor<T> {
    let r = Range::from_bounds([0, 0], [2, 3]).unwrap();
    Tensor::from_fn(r, |i| f(i[0], i[1]))
}

fn strategy_name<Res: Reachable<Native>, Native>() -> &'static str {
    <Res::Strategy as Strategy>::NAME
}

#[test]
fn test_strategy_selection() {
    assert_eq!(strategy_name::<DenseTensor<f64>, DenseTensor<f64>>(), Direct::NAME);
    assert_eq!(strategy_name::<DenseTensor<f64>, DenseTensor<f32>>(), CastAfter::NAME);
    assert_eq!(strategy_name::<DenseTensor<c64>, DenseTensor<f64>>(), CastAfter::NAME);
}

#[test]
fn test_direct_add_leaves_inputs() {
    let a = tile(|i, j| (i * 3 + j) as f64);
    let b = tile(|_, _| 10.0f64);
    let (a0, b0) = (a.clone(), b.clone());

    let add = AddOp::<DenseTensor<f64>, DenseTensor<f64>, DenseTensor<f64>>::new();
    let c = add.call(&a, &b).unwrap();
    assert_eq!(c.data(), &[10.0, 11.0, 12.0, 13.0, 14.0, 15.0]);
    assert_eq!(a, a0);
    assert_eq!(b, b0);
}

#[test]
fn test_cast_after_add_matches_direct() {
    let a = tile(|i, j| (i + j) as f32 * 0.5);
    let b = tile(|i, _| i as f32);

    let native = AddOp::<DenseTensor<f32>, DenseTensor<f32>, DenseTensor<f32>>::new()
        .call(&a, &b)
        .unwrap();
    let widened = AddOp::<DenseTensor<f64>, DenseTensor<f32>, DenseTensor<f32>>::new()
        .call(&a, &b)
        .unwrap();
    assert_eq!(widened.range(), native.range());
    for (w, n) in widened.data().iter().zip(native.data()) {
        assert_relative_eq!(*w, f64::from(*n));
    }
}

#[test]
fn test_add_mixed_operands() {
    let a = tile(|_, j| j as f64);
    let b = tile(|i, _| i as f32);
    let c = AddOp::<DenseTensor<f64>, DenseTensor<f64>, DenseTensor<f32>>::new()
        .call(&a, &b)
        .unwrap();
    assert_eq!(c.get(&Index::from([1, 2])), Some(&3.0));
}

#[test]
fn test_add_permuted() {
    let a = tile(|i, j| (i * 10 + j) as f64);
    let b = tile(|_, _| 1.0f64);
    let p = Permutation::new(vec![1, 0]).unwrap();
    let c = AddOp::<DenseTensor<c64>, DenseTensor<f64>, DenseTensor<f64>>::new()
        .call_permuted(&a, &b, &p)
        .unwrap();
    assert_eq!(c.range().size(), &[3, 2]);
    assert_eq!(c.get(&Index::from([2, 1])), Some(&c64::new(13.0, 0.0)));
}

#[test]
fn test_scal_add_with_integer_factor() {
    let a = tile(|i, j| (i + j) as f64);
    let b = tile(|_, _| 1.0f64);
    let op = ScalAddOp::<DenseTensor<f64>, DenseTensor<f64>, DenseTensor<f64>, i32>::new();
    let c = op.call(&a, &b, 3).unwrap();
    assert_eq!(c.data(), &[3.0, 6.0, 9.0, 6.0, 9.0, 12.0]);

    let p = Permutation::new(vec![1, 0]).unwrap();
    let cp = op.call_permuted(&a, &b, 3, &p).unwrap();
    for i in c.range() {
        assert_eq!(cp.get(&(&p ^ &i)), c.get(&i));
    }
}

#[test]
fn test_scal_add_cast_after() {
    let a = tile(|_, _| 1.0f32);
    let b = tile(|_, _| 2.0f32);
    let c = ScalAddOp::<DenseTensor<f64>, DenseTensor<f32>, DenseTensor<f32>, f32>::new()
        .call(&a, &b, 0.5)
        .unwrap();
    assert!(c.data().iter().all(|&x| x == 1.5));
}

#[test]
fn test_add_to_direct_mutates_left() {
    let mut a = tile(|i, j| (i * 3 + j) as f64);
    let before = a.clone();
    let b = tile(|_, _| 2.0f64);
    let op = AddToOp::<DenseTensor<f64>, DenseTensor<f64>, DenseTensor<f64>>::new();
    op.call(&mut a, &b).unwrap();
    for o in 0..a.len() {
        assert_eq!(a[o], before[o] + 2.0);
    }
}

#[test]
fn test_add_to_cast_after_mutates_left_and_returns_cast() {
    let mut a = tile(|_, j| j as f64);
    let b = tile(|_, _| 1.0f64);
    let op = AddToOp::<DenseTensor<c64>, DenseTensor<f64>, DenseTensor<f64>>::new();
    let c = op.call(&mut a, &b).unwrap();
    assert_eq!(a.data(), &[1.0, 2.0, 3.0, 1.0, 2.0, 3.0]);
    assert_eq!(c[2], c64::new(3.0, 0.0));
}

#[test]
fn test_scal_add_to() {
    let mut a = tile(|_, _| 1.0f64);
    let b = tile(|_, _| 3.0f64);
    let op = ScalAddToOp::<DenseTensor<f64>, DenseTensor<f64>, DenseTensor<f64>, f64>::new();
    op.call(&mut a, &b, 0.25).unwrap();
    assert!(a.data().iter().all(|&x| x == 1.0));
}

#[test]
fn test_range_mismatch_is_reported() {
    let a = tile(|_, _| 0.0f64);
    let b: DenseTensor<f64> = Tensor::zeros(Range::from_bounds([1, 0], [3, 3]).unwrap());
    let add = AddOp::<DenseTensor<f64>, DenseTensor<f64>, DenseTensor<f64>>::new();
    assert!(matches!(
        add.call(&a, &b),
        Err(tilearray::TileError::RangeMismatch { .. })
    ));
}
