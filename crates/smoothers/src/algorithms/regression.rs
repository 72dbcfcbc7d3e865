//! Simple linear regression.
//!
//! ## Purpose
//!
//! This module provides the closed-form least-squares line used by the
//! linear-regression smoother, the running line, and LOESS:
//! - Ordinary least squares (OLS) on a slice of points.
//! - Weighted least squares (WLS) with arbitrary non-negative weights.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::SmoothError;

// ============================================================================
// Accumulation and Solving
// ============================================================================

/// Scalar accumulation for 1D weighted least squares.
#[inline]
pub fn accumulate_wls<T: Float>(x: &[T], y: &[T], weights: &[T]) -> (T, T, T, T, T) {
    let mut sum_w = T::zero();
    let mut sum_wx = T::zero();
    let mut sum_wy = T::zero();
    let mut sum_wxx = T::zero();
    let mut sum_wxy = T::zero();

    for ((&x_val, &y_val), &w) in x.iter().zip(y.iter()).zip(weights.iter()) {
        let wx = w * x_val;

        sum_w = sum_w + w;
        sum_wx = sum_wx + wx;
        sum_wy = sum_wy + w * y_val;
        sum_wxx = sum_wxx + wx * x_val;
        sum_wxy = sum_wxy + wx * y_val;
    }

    (sum_w, sum_wx, sum_wy, sum_wxx, sum_wxy)
}

/// Solve the 2x2 weighted normal equations.
///
/// Returns `(slope, intercept, x_mean, y_mean)`, or `None` when the weights
/// sum to zero. A weighted x-variance at or below `tol` yields a flat line
/// through the weighted mean.
#[inline]
pub fn solve_wls<T: Float>(
    sum_w: T,
    sum_wx: T,
    sum_wy: T,
    sum_wxx: T,
    sum_wxy: T,
    tol: T,
) -> Option<(T, T, T, T)> {
    if sum_w <= T::zero() {
        return None;
    }

    let x_mean = sum_wx / sum_w;
    let y_mean = sum_wy / sum_w;
    let variance = sum_wxx - (sum_wx * sum_wx) / sum_w;

    if variance <= tol {
        return Some((T::zero(), y_mean, x_mean, y_mean));
    }

    let covariance = sum_wxy - (sum_wx * sum_wy) / sum_w;
    let slope = covariance / variance;
    let intercept = y_mean - slope * x_mean;

    Some((slope, intercept, x_mean, y_mean))
}

// ============================================================================
// LinearFit
// ============================================================================

/// Linear regression fit result (slope and intercept).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearFit<T: Float> {
    /// Slope (beta_1)
    pub slope: T,

    /// Intercept (beta_0)
    pub intercept: T,

    /// Mean of x-values
    pub x_mean: T,

    /// Mean of y-values
    pub y_mean: T,
}

impl<T: Float> LinearFit<T> {
    /// Create a zero-initialized fit.
    pub fn zero() -> Self {
        Self {
            slope: T::zero(),
            intercept: T::zero(),
            x_mean: T::zero(),
            y_mean: T::zero(),
        }
    }

    /// Predict y-value for a given x using the model.
    #[inline]
    pub fn predict(&self, x: T) -> T {
        self.intercept + self.slope * x
    }

    /// Centered sums `(x_mean, y_mean, Sxx, Sxy)`.
    fn centered_moments(x: &[T], y: &[T]) -> (T, T, T, T) {
        let n_t = T::from(x.len()).unwrap_or_else(T::one);

        let sum_x = x.iter().fold(T::zero(), |acc, &v| acc + v);
        let sum_y = y.iter().fold(T::zero(), |acc, &v| acc + v);
        let x_mean = sum_x / n_t;
        let y_mean = sum_y / n_t;

        let mut variance = T::zero();
        let mut covariance = T::zero();
        for (&xi, &yi) in x.iter().zip(y.iter()) {
            let dx = xi - x_mean;
            variance = variance + dx * dx;
            covariance = covariance + dx * (yi - y_mean);
        }

        (x_mean, y_mean, variance, covariance)
    }

    /// Fit ordinary least squares, falling back to a flat line at `mean(y)`
    /// when every x is (numerically) the same.
    pub fn fit_ols(x: &[T], y: &[T]) -> Self {
        if x.is_empty() {
            return Self::zero();
        }

        let (x_mean, y_mean, variance, covariance) = Self::centered_moments(x, y);

        let tol = T::from(1e-12).unwrap();
        if variance <= tol {
            return Self {
                slope: T::zero(),
                intercept: y_mean,
                x_mean,
                y_mean,
            };
        }

        let slope = covariance / variance;
        Self {
            slope,
            intercept: y_mean - slope * x_mean,
            x_mean,
            y_mean,
        }
    }

    /// Fit ordinary least squares, failing when the slope is undefined.
    pub fn try_fit_ols(x: &[T], y: &[T]) -> Result<Self, SmoothError> {
        if x.is_empty() {
            return Err(SmoothError::EmptyInput);
        }

        let (x_mean, y_mean, variance, covariance) = Self::centered_moments(x, y);
        if variance <= T::zero() {
            return Err(SmoothError::ZeroVariance("x".to_string()));
        }

        let slope = covariance / variance;
        Ok(Self {
            slope,
            intercept: y_mean - slope * x_mean,
            x_mean,
            y_mean,
        })
    }

    /// Fit weighted least squares.
    ///
    /// `scale` is the typical distance in the window and sets the relative
    /// tolerance below which the weighted x-variance counts as zero.
    pub fn fit_wls(x: &[T], y: &[T], weights: &[T], scale: T) -> Option<Self> {
        if x.is_empty() {
            return None;
        }

        let (sum_w, sum_wx, sum_wy, sum_wxx, sum_wxy) = accumulate_wls(x, y, weights);

        let abs_tol = T::from(1e-7).unwrap();
        let rel_tol = T::epsilon() * scale * scale;
        let tol = abs_tol.max(rel_tol) * sum_w.max(T::zero());

        solve_wls(sum_w, sum_wx, sum_wy, sum_wxx, sum_wxy, tol).map(
            |(slope, intercept, x_mean, y_mean)| Self {
                slope,
                intercept,
                x_mean,
                y_mean,
            },
        )
    }
}
