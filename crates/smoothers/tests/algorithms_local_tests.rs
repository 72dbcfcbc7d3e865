//! Tests for local and baseline smoothers.
//!
//! These tests verify the smoothers whose prediction is a local statistic:
//! - Constant mean and global least-squares line
//! - Running mean and running line over index windows
//! - Gaussian kernel regression
//! - LOESS with tricube weights
//!
//! ## Test Organization
//!
//! 1. **Baselines** - Constant mean, linear regression
//! 2. **Running Smoothers** - Window contents, exact recovery
//! 3. **Kernel Smoother** - Weighting, far queries
//! 4. **LOESS** - Exact recovery, degenerate neighborhoods
//! 5. **Shape** - Length and order of predictions

use approx::{assert_abs_diff_eq, assert_relative_eq};

use smoothers::internals::algorithms::Predictor;
use smoothers::internals::algorithms::local::{
    ConstantMean, GaussianKernel, Loess, RunningLine, RunningMean, fit_linear_regression,
};
use smoothers::internals::primitives::errors::{ErrorKind, SmoothError};

/// Unsorted inputs on the unit interval with a wiggly response.
fn scatter() -> (Vec<f64>, Vec<f64>) {
    let x = vec![0.62, 0.11, 0.93, 0.35, 0.48, 0.05, 0.77, 0.26, 0.84, 0.57];
    let y = x.iter().map(|&v: &f64| (4.0 * v).sin() + 0.2 * v).collect();
    (x, y)
}

// ============================================================================
// Baseline Tests
// ============================================================================

/// Test the constant mean predicts mean(y) everywhere.
#[test]
fn test_constant_mean() {
    let model = ConstantMean::fit(&[0.1, 0.5, 0.9], &[1.0, 2.0, 6.0]).unwrap();
    assert_eq!(model.predict(&[-1.0, 0.3, 7.0]).unwrap(), vec![3.0, 3.0, 3.0]);
}

/// Test the constant mean needs at least one point.
#[test]
fn test_constant_mean_empty() {
    assert_eq!(
        ConstantMean::<f64>::fit(&[], &[]),
        Err(SmoothError::EmptyInput)
    );
}

/// Test linear regression recovers `y = a x + b`.
#[test]
fn test_linear_regression_recovers_line() {
    let (x, _) = scatter();
    let y: Vec<f64> = x.iter().map(|&v| -1.5 * v + 0.25).collect();

    let model = fit_linear_regression(&x, &y).unwrap();
    for q in [0.0, 0.5, 2.0] {
        assert_relative_eq!(model.predict_point(q).unwrap(), -1.5 * q + 0.25, epsilon = 1e-10);
    }
}

/// Test linear regression rejects constant x.
#[test]
fn test_linear_regression_constant_x() {
    let err = fit_linear_regression(&[0.4, 0.4], &[1.0, 2.0]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NumericError);
}

// ============================================================================
// Running Smoother Tests
// ============================================================================

/// Test the running mean averages the `k` neighbors on each side.
#[test]
fn test_running_mean_window() {
    let x: Vec<f64> = (0..10).map(|i| i as f64 / 10.0).collect();
    let y: Vec<f64> = (0..10).map(|i| i as f64).collect();

    let model = RunningMean::fit(&x, &y, 2).unwrap();

    // Insertion position 5 -> indices 3..=6
    assert_relative_eq!(model.predict_point(0.45).unwrap(), 4.5);
    // Equal x inserts after the match: position 1 -> indices 0..=2
    assert_relative_eq!(model.predict_point(0.0).unwrap(), 1.0);
    // Beyond the data -> last two points
    assert_relative_eq!(model.predict_point(5.0).unwrap(), 8.5);
    // Before the data -> first two points
    assert_relative_eq!(model.predict_point(-5.0).unwrap(), 0.5);
}

/// Test the running mean on a single point.
#[test]
fn test_running_mean_single_point() {
    let model = RunningMean::fit(&[0.5], &[2.0], 3).unwrap();
    assert_eq!(model.predict(&[0.0, 0.5, 1.0]).unwrap(), vec![2.0, 2.0, 2.0]);
}

/// Test the running mean rejects a zero neighbor count.
#[test]
fn test_running_mean_zero_k() {
    let err = RunningMean::fit(&[0.5], &[2.0], 0).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidParameter);
}

/// Test the running line recovers `y = a x + b`.
#[test]
fn test_running_line_recovers_line() {
    let (x, _) = scatter();
    let y: Vec<f64> = x.iter().map(|&v| 2.0 * v - 0.7).collect();

    for k in [2, 3, 5] {
        let model = RunningLine::fit(&x, &y, k).unwrap();
        for q in [-0.2, 0.0, 0.3, 0.5, 0.93, 1.4] {
            assert_abs_diff_eq!(model.predict_point(q).unwrap(), 2.0 * q - 0.7, epsilon = 1e-9);
        }
    }
}

/// Test the running line needs two neighbors per side.
///
/// With one neighbor, queries outside the data see a single point.
#[test]
fn test_running_line_min_k() {
    let x = vec![0.1, 0.3, 0.5, 0.7, 0.9];
    let y: Vec<f64> = x.iter().map(|&v| 2.0 * v + 1.0).collect();

    let err = RunningLine::fit(&x, &y, 1).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidParameter);

    let model = RunningLine::fit(&x, &y, 2).unwrap();
    let out = model.predict(&[0.0, 1.0]).unwrap();
    assert_abs_diff_eq!(out[0], 1.0, epsilon = 1e-12);
    assert_abs_diff_eq!(out[1], 3.0, epsilon = 1e-12);
}

/// Test the running line degenerates to the local mean on equal x.
#[test]
fn test_running_line_equal_x() {
    let model = RunningLine::fit(&[0.5, 0.5, 0.5], &[1.0, 2.0, 3.0], 2).unwrap();
    assert_relative_eq!(model.predict_point(0.9).unwrap(), 2.5);
}

// ============================================================================
// Kernel Smoother Tests
// ============================================================================

/// Test the kernel smoother matches the normalized Gaussian weights.
#[test]
fn test_gaussian_kernel_weights() {
    let (x, y) = scatter();
    let lambda = 0.01;
    let model = GaussianKernel::fit(&x, &y, lambda).unwrap();

    let q = 0.4;
    let w: Vec<f64> = x.iter().map(|&xi| (-(q - xi) * (q - xi) / lambda).exp()).collect();
    let expected = w.iter().zip(y.iter()).map(|(a, b)| a * b).sum::<f64>() / w.iter().sum::<f64>();

    assert_relative_eq!(model.predict_point(q).unwrap(), expected, epsilon = 1e-12);
}

/// Test the kernel smoother reproduces a constant response.
#[test]
fn test_gaussian_kernel_constant() {
    let (x, _) = scatter();
    let y = vec![1.25; x.len()];
    let model = GaussianKernel::fit(&x, &y, 0.05).unwrap();

    for q in [0.0, 0.5, 1.0] {
        assert_relative_eq!(model.predict_point(q).unwrap(), 1.25, epsilon = 1e-12);
    }
}

/// Test queries far from the data take the nearest response.
///
/// Every raw weight underflows here; the prediction must still be finite.
#[test]
fn test_gaussian_kernel_far_query() {
    let (x, y) = scatter();
    let model = GaussianKernel::fit(&x, &y, 0.001).unwrap();

    let out = model.predict(&[25.0, -25.0]).unwrap();
    assert_relative_eq!(out[0], y[2], epsilon = 1e-12);
    assert_relative_eq!(out[1], y[5], epsilon = 1e-12);
}

/// Test the narrowest kernel stays finite across the unit interval.
#[test]
fn test_gaussian_kernel_narrow_width() {
    let x = vec![0.02, 0.04, 0.06, 0.08, 0.1];
    let y = vec![0.2, 0.3, 0.4, 0.5, 0.6];
    let model = GaussianKernel::fit(&x, &y, 0.001).unwrap();

    let grid: Vec<f64> = (0..100).map(|i| i as f64 / 100.0).collect();
    let out = model.predict(&grid).unwrap();
    assert!(out.iter().all(|v| v.is_finite()));
    assert_relative_eq!(out[99], 0.6, epsilon = 1e-12);
}

/// Test the kernel width must be positive.
#[test]
fn test_gaussian_kernel_invalid_lambda() {
    let (x, y) = scatter();
    for lambda in [0.0, -1.0, f64::NAN] {
        let err = GaussianKernel::fit(&x, &y, lambda).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidParameter);
    }
}

// ============================================================================
// LOESS Tests
// ============================================================================

/// Test LOESS recovers `y = a x + b`.
#[test]
fn test_loess_recovers_line() {
    let (x, _) = scatter();
    let y: Vec<f64> = x.iter().map(|&v| 0.3 * v + 4.0).collect();

    for span in [3, 5, 7, 20] {
        let model = Loess::fit(&x, &y, span).unwrap();
        for q in [0.05, 0.2, 0.5, 0.8, 0.93] {
            assert_abs_diff_eq!(model.predict_point(q).unwrap(), 0.3 * q + 4.0, epsilon = 1e-9);
        }
    }
}

/// Test LOESS windows hold the nearest neighbors.
#[test]
fn test_loess_window() {
    let x: Vec<f64> = (0..10).map(|i| i as f64).collect();
    let y = vec![0.0; 10];
    let model = Loess::fit(&x, &y, 3).unwrap();

    let win = model.window(6.2);
    assert_eq!((win.left, win.right), (5, 7));

    let win = model.window(-3.0);
    assert_eq!((win.left, win.right), (0, 2));
}

/// Test LOESS falls back to the local mean on a degenerate neighborhood.
#[test]
fn test_loess_equal_x() {
    let model = Loess::fit(&[0.5, 0.5, 0.5], &[1.0, 2.0, 3.0], 3).unwrap();
    assert_relative_eq!(model.predict_point(0.5).unwrap(), 2.0);
    assert_relative_eq!(model.predict_point(0.2).unwrap(), 2.0);
}

/// Test LOESS needs a span of at least two.
#[test]
fn test_loess_span_too_small() {
    let err = Loess::fit(&[0.1, 0.2], &[1.0, 2.0], 1).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidParameter);
}

// ============================================================================
// Shape Tests
// ============================================================================

/// Test predictions preserve the length and order of the query.
#[test]
fn test_predictions_preserve_order() {
    let (x, y) = scatter();
    let query = vec![0.9, 0.1, 0.5, 0.5, 0.0, 0.73];
    let reversed: Vec<f64> = query.iter().rev().copied().collect();

    let models: Vec<Box<dyn Predictor<f64>>> = vec![
        Box::new(ConstantMean::fit(&x, &y).unwrap()),
        Box::new(fit_linear_regression(&x, &y).unwrap()),
        Box::new(RunningMean::fit(&x, &y, 2).unwrap()),
        Box::new(RunningLine::fit(&x, &y, 2).unwrap()),
        Box::new(GaussianKernel::fit(&x, &y, 0.01).unwrap()),
        Box::new(Loess::fit(&x, &y, 5).unwrap()),
    ];

    for model in &models {
        let forward = model.predict(&query).unwrap();
        let mut backward = model.predict(&reversed).unwrap();
        backward.reverse();

        assert_eq!(forward.len(), query.len());
        assert_eq!(forward, backward);
        for (&q, &p) in query.iter().zip(forward.iter()) {
            assert_eq!(model.predict_point(q).unwrap(), p);
        }
    }
}
