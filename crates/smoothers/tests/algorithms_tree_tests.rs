//! Tests for regression trees.
//!
//! These tests verify recursive binary splitting on a single input:
//! - Depth-zero trees and degenerate inputs
//! - Exact recovery of step functions
//! - Threshold placement and tie-breaking
//! - Depth and leaf-count bounds
//!
//! ## Test Organization
//!
//! 1. **Leaves** - Depth zero, single points, equal x
//! 2. **Splits** - Step recovery, thresholds, ties
//! 3. **Structure** - Depth and leaf bounds

use approx::assert_relative_eq;

use smoothers::internals::algorithms::Predictor;
use smoothers::internals::algorithms::tree::{RegressionTree, TreeNode};
use smoothers::internals::primitives::errors::SmoothError;

fn step_data() -> (Vec<f64>, Vec<f64>) {
    let x: Vec<f64> = (0..10).map(|i| i as f64 / 10.0).collect();
    let y = x.iter().map(|&v| if v < 0.5 { -1.0 } else { 3.0 }).collect();
    (x, y)
}

// ============================================================================
// Leaf Tests
// ============================================================================

/// Test a depth-zero tree predicts mean(y).
#[test]
fn test_tree_depth_zero() {
    let (x, y) = step_data();
    let tree = RegressionTree::fit(&x, &y, 0).unwrap();

    assert_eq!(tree.depth(), 0);
    assert_eq!(tree.n_leaves(), 1);
    for q in [-1.0, 0.3, 0.7, 4.0] {
        assert_relative_eq!(tree.predict_point(q).unwrap(), 1.0);
    }
}

/// Test a single point gives a leaf.
#[test]
fn test_tree_single_point() {
    let tree = RegressionTree::fit(&[0.4], &[2.5], 5).unwrap();
    assert_eq!(tree.root(), &TreeNode::Leaf { value: 2.5 });
}

/// Test equal x values admit no split.
#[test]
fn test_tree_equal_x() {
    let tree = RegressionTree::fit(&[0.3, 0.3, 0.3], &[1.0, 2.0, 6.0], 4).unwrap();
    assert_eq!(tree.depth(), 0);
    assert_relative_eq!(tree.predict_point(0.3).unwrap(), 3.0);
}

/// Test empty and mismatched input.
#[test]
fn test_tree_bad_input() {
    assert_eq!(
        RegressionTree::<f64>::fit(&[], &[], 2),
        Err(SmoothError::EmptyInput)
    );
    assert_eq!(
        RegressionTree::fit(&[0.1, 0.2], &[1.0], 2),
        Err(SmoothError::MismatchedInputs { x_len: 2, y_len: 1 })
    );
}

// ============================================================================
// Split Tests
// ============================================================================

/// Test a depth-one tree recovers an exact step.
#[test]
fn test_tree_recovers_step() {
    let (x, y) = step_data();
    let tree = RegressionTree::fit(&x, &y, 1).unwrap();

    assert_eq!(tree.depth(), 1);
    assert_eq!(tree.n_leaves(), 2);
    for (&xi, &yi) in x.iter().zip(y.iter()) {
        assert_relative_eq!(tree.predict_point(xi).unwrap(), yi);
    }

    match tree.root() {
        TreeNode::Internal { threshold, .. } => assert_relative_eq!(*threshold, 0.45),
        leaf => panic!("expected a split, got {leaf:?}"),
    }
}

/// Test deeper trees still recover the step.
#[test]
fn test_tree_deeper_recovers_step() {
    let (x, y) = step_data();
    let tree = RegressionTree::fit(&x, &y, 4).unwrap();
    assert_eq!(tree.predict(&x).unwrap(), y);
}

/// Test unsorted input gives the same tree as sorted input.
#[test]
fn test_tree_unsorted_input() {
    let (x, y) = step_data();
    let mut pairs: Vec<(f64, f64)> = x.iter().copied().zip(y.iter().copied()).collect();
    pairs.reverse();
    pairs.swap(2, 7);
    let (xr, yr): (Vec<f64>, Vec<f64>) = pairs.into_iter().unzip();

    let sorted = RegressionTree::fit(&x, &y, 2).unwrap();
    let shuffled = RegressionTree::fit(&xr, &yr, 2).unwrap();
    assert_eq!(sorted, shuffled);
}

/// Test points on the threshold go left.
#[test]
fn test_tree_threshold_goes_left() {
    let tree = RegressionTree::fit(&[0.0, 1.0], &[10.0, 20.0], 1).unwrap();
    assert_relative_eq!(tree.predict_point(0.5).unwrap(), 10.0);
    assert_relative_eq!(tree.predict_point(0.5000001).unwrap(), 20.0);
}

/// Test the first minimum in ascending order wins ties.
#[test]
fn test_tree_tie_breaking() {
    // Cutting after the first or before the last point scores the same
    let tree = RegressionTree::fit(&[0.0, 1.0, 2.0, 3.0], &[0.0, 1.0, 1.0, 0.0], 1).unwrap();

    match tree.root() {
        TreeNode::Internal { threshold, .. } => assert_relative_eq!(*threshold, 0.5),
        leaf => panic!("expected a split, got {leaf:?}"),
    }
}

// ============================================================================
// Structure Tests
// ============================================================================

/// Test depth and leaf counts stay within bounds.
#[test]
fn test_tree_structure_bounds() {
    let x: Vec<f64> = (0..40).map(|i| i as f64 / 39.0).collect();
    let y: Vec<f64> = x.iter().map(|&v| (9.0 * v).sin()).collect();

    for max_depth in 0..6 {
        let tree = RegressionTree::fit(&x, &y, max_depth).unwrap();
        assert!(tree.depth() <= max_depth);
        assert!(tree.n_leaves() <= 1 << tree.depth());
    }
}

/// Test training error does not increase with depth.
#[test]
fn test_tree_error_decreases_with_depth() {
    let x: Vec<f64> = (0..40).map(|i| i as f64 / 39.0).collect();
    let y: Vec<f64> = x.iter().map(|&v| (9.0 * v).sin()).collect();

    let sse = |depth: usize| {
        let tree = RegressionTree::fit(&x, &y, depth).unwrap();
        let p = tree.predict(&x).unwrap();
        p.iter().zip(y.iter()).map(|(a, b)| (a - b) * (a - b)).sum::<f64>()
    };

    let mut prev = f64::INFINITY;
    for depth in 0..6 {
        let e = sse(depth);
        assert!(e <= prev + 1e-12);
        prev = e;
    }
}
