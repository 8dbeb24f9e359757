//! Integration tests for whole-tensor and per-dimension reductions

use ndfold::error::Error;
use ndfold::tensor::Tensor;

// ============================================================================
// Whole-Tensor Reduce Tests
// ============================================================================

#[test]
fn test_reduce_sum_1d() {
    let t = Tensor::from_vec(vec![1.0f32, 2.0, 3.0], &[3]).unwrap();
    let total = t.reduce(|a, v| a + v);

    assert_eq!(total.shape(), &[1]);
    let data = total.to_vec();
    assert!((data[0] - 6.0).abs() < 1e-5);
}

#[test]
fn test_reduce_sum_2x2() {
    let t = Tensor::from_vec(vec![1.0f32, 2.0, 3.0, 4.0], &[2, 2]).unwrap();
    let total = t.reduce(|a, v| a + v);

    assert_eq!(total.shape(), &[1]);
    assert!((total.to_vec()[0] - 10.0).abs() < 1e-5);
}

#[test]
fn test_reduce_prod() {
    let t = Tensor::from_vec(vec![1.0f32, 2.0, 3.0, 4.0, 5.0], &[5]).unwrap();
    let prod = t.reduce(|a, v| a * v);
    assert!((prod.to_vec()[0] - 120.0).abs() < 1e-5);
}

#[test]
fn test_reduce_mean_via_finalize() {
    let t = Tensor::from_vec((1..=24).map(|v| v as f32).collect(), &[2, 3, 4]).unwrap();
    let mean = t.reduce_with(|a, v| a + v, |acc, n| acc / n as f32);
    assert!((mean.to_vec()[0] - 12.5).abs() < 1e-5);
}

#[test]
fn test_reduce_over_expanded_view() {
    let mut t = Tensor::from_vec(vec![1.0f32, 2.0, 3.0], &[1, 3]).unwrap();
    t.expand(&[4, 3]).unwrap();

    // Four logical rows of 1 + 2 + 3.
    let total = t.reduce(|a, v| a + v);
    assert!((total.to_vec()[0] - 24.0).abs() < 1e-5);
}

// ============================================================================
// Per-Dimension Reduce Tests
// ============================================================================

#[test]
fn test_reduce_dim0_2x2() {
    let t = Tensor::from_vec(vec![1.0f32, 2.0, 3.0, 4.0], &[2, 2]).unwrap();
    let sums = t.reduce_dim(0, false, |a, v| a + v).unwrap();

    assert_eq!(sums.shape(), &[2]);
    let data = sums.to_vec();
    assert!((data[0] - 4.0).abs() < 1e-5);
    assert!((data[1] - 6.0).abs() < 1e-5);
}

#[test]
fn test_reduce_dim1_2x4_prod() {
    let t = Tensor::from_vec(vec![1.0f32, 2.0, 3.0, 4.0, 2.0, 3.0, 4.0, 5.0], &[2, 4]).unwrap();
    let prods = t.reduce_dim(1, false, |a, v| a * v).unwrap();

    assert_eq!(prods.shape(), &[2]);
    let data = prods.to_vec();
    // Row 0: 1 * 2 * 3 * 4 = 24
    assert!((data[0] - 24.0).abs() < 1e-5);
    // Row 1: 2 * 3 * 4 * 5 = 120
    assert!((data[1] - 120.0).abs() < 1e-5);
}

#[test]
fn test_reduce_dim_keep_dim_shape() {
    let t = Tensor::from_vec((1..=24).map(|v| v as f64).collect(), &[2, 3, 4]).unwrap();
    let kept = t.reduce_dim(1, true, |a, v| a + v).unwrap();
    assert_eq!(kept.shape(), &[2, 1, 4]);

    let dropped = t.reduce_dim(1, false, |a, v| a + v).unwrap();
    assert_eq!(dropped.shape(), &[2, 4]);

    // Same data either way; keep_dim only affects the shape.
    assert_eq!(kept.to_vec(), dropped.to_vec());
}

#[test]
fn test_reduce_dim_to_scalar_keeps_rank() {
    let t = Tensor::from_vec(vec![1.0f32, 2.0, 3.0], &[3]).unwrap();
    let total = t.reduce_dim(0, false, |a, v| a + v).unwrap();
    assert_eq!(total.shape(), &[1]);
    assert_eq!(total.item(), Some(6.0));
}

#[test]
fn test_reduce_dim_max() {
    let t = Tensor::from_vec(vec![3.0f32, 1.0, 4.0, 1.0, 5.0, 9.0], &[2, 3]).unwrap();
    let maxes = t
        .reduce_dim(1, false, |a, v| if v > a { v } else { a })
        .unwrap();
    assert_eq!(maxes.to_vec(), vec![4.0, 9.0]);
}

#[test]
fn test_reduce_dim_mean_with_finalize() {
    let t = Tensor::from_vec((1..=6).map(|v| v as f32).collect(), &[2, 3]).unwrap();
    let means = t
        .reduce_dim_with(1, false, |a, v| a + v, |acc, n| acc / n as f32)
        .unwrap();
    assert_eq!(means.to_vec(), vec![2.0, 5.0]);
}

#[test]
fn test_reduce_dim_over_expanded_view() {
    let mut t = Tensor::from_vec(vec![1.0f32, 2.0, 3.0], &[1, 3]).unwrap();
    t.expand(&[4, 3]).unwrap();

    let sums = t.reduce_dim(0, false, |a, v| a + v).unwrap();
    assert_eq!(sums.shape(), &[3]);
    assert_eq!(sums.to_vec(), vec![4.0, 8.0, 12.0]);
}

#[test]
fn test_reduce_dim_output_is_plain() {
    let mut t = Tensor::from_vec(vec![1.0f32, 2.0], &[1, 2]).unwrap();
    t.expand(&[3, 2]).unwrap();

    let out = t.reduce_dim(0, true, |a, v| a + v).unwrap();
    assert!(!out.is_expanded());
    assert_eq!(out.shape(), &[1, 2]);
    assert_eq!(out.as_slice(), &[3.0, 6.0]);
}

// ============================================================================
// Validation Tests
// ============================================================================

#[test]
fn test_reduce_dim_rejects_negative() {
    let t = Tensor::from_vec(vec![1.0f32, 2.0], &[2]).unwrap();
    let err = t.reduce_dim(-1, false, |a, v| a + v).unwrap_err();
    assert!(matches!(err, Error::InvalidDimension { dim: -1 }));
}

#[test]
fn test_reduce_dim_rejects_out_of_range() {
    let t = Tensor::from_vec(vec![1.0f32, 2.0], &[2]).unwrap();
    let err = t.reduce_dim(3, false, |a, v| a + v).unwrap_err();
    assert!(matches!(err, Error::DimensionOutOfRange { dim: 3, ndim: 1 }));
}
