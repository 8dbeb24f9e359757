//! Integration tests for broadcast views (expand / unexpand)

use ndfold::error::Error;
use ndfold::tensor::Tensor;

// ============================================================================
// Expand Tests
// ============================================================================

#[test]
fn test_expand_repeats_rows() {
    let mut t = Tensor::from_vec(vec![1.0f32, 2.0, 3.0], &[1, 3]).unwrap();
    t.expand(&[4, 3]).unwrap();

    assert_eq!(t.shape(), &[4, 3]);
    assert_eq!(t.strides(), &[3, 1]);
    assert_eq!(t.size(), 12);

    let mut rows: Vec<Vec<f32>> = vec![Vec::new(); 4];
    t.for_each_dim(1, |value, _, n| rows[n].push(value)).unwrap();
    for row in rows {
        assert_eq!(row, vec![1.0, 2.0, 3.0]);
    }
}

#[test]
fn test_expand_adds_leading_dims() {
    let mut t = Tensor::from_vec(vec![5.0f32, 6.0], &[2]).unwrap();
    t.expand(&[3, 4, 2]).unwrap();

    assert_eq!(t.shape(), &[3, 4, 2]);
    assert_eq!(t.strides(), &[8, 2, 1]);
    assert_eq!(t.size(), 24);
    assert_eq!(t.to_vec(), [5.0, 6.0].repeat(12));
}

#[test]
fn test_expand_exact_shape_is_identity() {
    let mut t = Tensor::from_vec((1..=6).map(|v| v as f64).collect(), &[2, 3]).unwrap();
    t.expand(&[2, 3]).unwrap();
    assert!(t.is_expanded());
    assert_eq!(t.to_vec(), (1..=6).map(|v| v as f64).collect::<Vec<_>>());
}

#[test]
fn test_unexpand_reverts() {
    let mut t = Tensor::from_vec(vec![1.0f32, 2.0, 3.0], &[1, 3]).unwrap();
    t.expand(&[4, 3]).unwrap();
    t.unexpand();

    assert!(!t.is_expanded());
    assert_eq!(t.shape(), &[1, 3]);
    assert_eq!(t.size(), 3);

    // A second unexpand is a no-op.
    t.unexpand();
    assert_eq!(t.shape(), &[1, 3]);
}

#[test]
fn test_reexpand_replaces_view() {
    let mut t = Tensor::from_vec(vec![1.0f32, 2.0, 3.0], &[1, 3]).unwrap();
    t.expand(&[2, 3]).unwrap();
    t.expand(&[5, 3]).unwrap();
    assert_eq!(t.shape(), &[5, 3]);
    assert_eq!(t.size(), 15);
}

// ============================================================================
// Expand Error Tests
// ============================================================================

#[test]
fn test_expand_incompatible_extent() {
    let mut t = Tensor::from_vec(vec![1.0f32, 2.0, 3.0], &[1, 3]).unwrap();
    let err = t.expand(&[2, 4]).unwrap_err();
    assert!(matches!(err, Error::IncompatibleExpand { .. }));
    assert!(!t.is_expanded());
}

#[test]
fn test_expand_zero_extent() {
    let mut t = Tensor::from_vec(vec![1.0f32, 2.0, 3.0], &[1, 3]).unwrap();
    let err = t.expand(&[0, 3]).unwrap_err();
    assert!(matches!(err, Error::InvalidExpandSize { size: 0 }));
}

#[test]
fn test_expand_cannot_drop_dims() {
    let mut t = Tensor::from_vec((0..6).map(|v| v as f32).collect(), &[2, 3]).unwrap();
    let err = t.expand(&[3]).unwrap_err();
    assert!(matches!(err, Error::IncompatibleExpand { .. }));
}

#[test]
fn test_failed_expand_preserves_previous_view() {
    let mut t = Tensor::from_vec(vec![1.0f32, 2.0, 3.0], &[1, 3]).unwrap();
    t.expand(&[4, 3]).unwrap();
    assert!(t.expand(&[4, 5]).is_err());

    // The earlier view stays in force.
    assert!(t.is_expanded());
    assert_eq!(t.shape(), &[4, 3]);
    assert_eq!(t.size(), 12);
}

// ============================================================================
// Broadcast Read Tests
// ============================================================================

#[test]
fn test_expanded_get() {
    let mut t = Tensor::from_vec(vec![10.0f32, 20.0, 30.0], &[1, 3]).unwrap();
    t.expand(&[4, 3]).unwrap();

    for row in 0..4 {
        assert_eq!(t.get(&[row, 0]), Some(10.0));
        assert_eq!(t.get(&[row, 1]), Some(20.0));
        assert_eq!(t.get(&[row, 2]), Some(30.0));
    }
    assert_eq!(t.get(&[4, 0]), None);
}

#[test]
fn test_expanded_for_each_wraps_offsets() {
    let mut t = Tensor::from_vec(vec![1.0f32, 2.0, 3.0], &[1, 3]).unwrap();
    t.expand(&[2, 3]).unwrap();

    let mut calls = Vec::new();
    t.for_each(|value, offset| calls.push((value, offset)));
    assert_eq!(
        calls,
        vec![(1.0, 0), (2.0, 1), (3.0, 2), (1.0, 0), (2.0, 1), (3.0, 2)]
    );
}

#[test]
fn test_expanded_nested_materializes_repeats() {
    let mut t = Tensor::from_vec(vec![1.0f32, 2.0, 3.0], &[1, 3]).unwrap();
    t.expand(&[4, 3]).unwrap();
    assert_eq!(
        t.to_nested().to_string(),
        "[[1, 1, 1, 1], [2, 2, 2, 2], [3, 3, 3, 3]]"
    );
}
