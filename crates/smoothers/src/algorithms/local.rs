//! Local and baseline smoothers.
//!
//! ## Purpose
//!
//! This module provides the smoothers whose prediction at `x` is a simple
//! statistic of the training data:
//! - Constant mean and global least-squares line (baselines).
//! - Running mean and running line over a fixed index-space neighborhood.
//! - Gaussian kernel regression over every training point.
//! - LOESS: tricube-weighted local lines over the nearest neighbors.
//!
//! ## Design notes
//!
//! * **Sort once**: Neighborhood smoothers sort the data by x when fitting and
//!   locate each query with a binary search.
//! * **Index-space windows**: The running mean and running line take up to `k`
//!   points on each side of the query's insertion position, regardless of
//!   how far away those points are.
//! * **Self-contained**: Every fitted model owns a copy of its training data.
//!
//! ## Invariants
//!
//! * Predictions preserve the length and order of the query.
//! * Neighborhood windows are never empty for a non-empty dataset.
//!
//! ## Non-goals
//!
//! * This module does not validate inputs for finiteness (see `engine::validator`).
//! * This module does not update fits incrementally.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::Predictor;
use crate::algorithms::regression::LinearFit;
use crate::math::kernel::WeightFunction;
use crate::math::stats::{mean, weighted_mean};
use crate::primitives::errors::SmoothError;
use crate::primitives::sorting::{SortedData, bisect_right, sort_by_x};
use crate::primitives::window::Window;

/// Sort a non-empty dataset, rejecting mismatched or empty columns.
fn sorted_nonempty<T: Float>(xs: &[T], ys: &[T]) -> Result<SortedData<T>, SmoothError> {
    if xs.len() != ys.len() {
        return Err(SmoothError::MismatchedInputs {
            x_len: xs.len(),
            y_len: ys.len(),
        });
    }
    if xs.is_empty() {
        return Err(SmoothError::EmptyInput);
    }
    Ok(sort_by_x(xs, ys))
}

/// Reject a zero neighbor count.
fn check_neighbors(name: &str, k: usize, min: usize) -> Result<(), SmoothError> {
    if k < min {
        return Err(SmoothError::invalid_parameter(
            name,
            k as f64,
            "too few neighbors",
        ));
    }
    Ok(())
}

// ============================================================================
// Baselines
// ============================================================================

/// Predicts the mean response everywhere.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConstantMean<T> {
    /// Mean of the training responses.
    pub value: T,
}

impl<T: Float> ConstantMean<T> {
    /// Fit the constant-mean baseline.
    pub fn fit(_xs: &[T], ys: &[T]) -> Result<Self, SmoothError> {
        Ok(Self { value: mean(ys)? })
    }
}

impl<T: Float> Predictor<T> for ConstantMean<T> {
    fn predict_point(&self, _x: T) -> Result<T, SmoothError> {
        Ok(self.value)
    }
}

impl<T: Float> Predictor<T> for LinearFit<T> {
    fn predict_point(&self, x: T) -> Result<T, SmoothError> {
        Ok(self.predict(x))
    }
}

/// Fit the global least-squares line; all-equal x-values are an error.
pub fn fit_linear_regression<T: Float>(xs: &[T], ys: &[T]) -> Result<LinearFit<T>, SmoothError> {
    if xs.len() != ys.len() {
        return Err(SmoothError::MismatchedInputs {
            x_len: xs.len(),
            y_len: ys.len(),
        });
    }
    LinearFit::try_fit_ols(xs, ys)
}

// ============================================================================
// Running Mean / Running Line
// ============================================================================

/// Mean of the `k` nearest-by-index points on each side of the query.
#[derive(Debug, Clone, PartialEq)]
pub struct RunningMean<T> {
    data: SortedData<T>,
    k: usize,
}

impl<T: Float> RunningMean<T> {
    /// Fit a running mean with `k` neighbors per side.
    pub fn fit(xs: &[T], ys: &[T], k: usize) -> Result<Self, SmoothError> {
        check_neighbors("k", k, 1)?;
        Ok(Self {
            data: sorted_nonempty(xs, ys)?,
            k,
        })
    }

    /// Neighborhood used for a query point.
    pub fn window(&self, x: T) -> Window {
        let pos = bisect_right(&self.data.x, x);
        Window::symmetric(pos, self.k, self.data.len())
    }
}

impl<T: Float> Predictor<T> for RunningMean<T> {
    fn predict_point(&self, x: T) -> Result<T, SmoothError> {
        mean(&self.data.y[self.window(x).range()])
    }
}

/// Least-squares line through the `k` nearest-by-index points on each side.
#[derive(Debug, Clone, PartialEq)]
pub struct RunningLine<T> {
    data: SortedData<T>,
    k: usize,
}

impl<T: Float> RunningLine<T> {
    /// Fit a running line with `k` neighbors per side.
    ///
    /// `k >= 2`, so queries outside the data still see two points.
    pub fn fit(xs: &[T], ys: &[T], k: usize) -> Result<Self, SmoothError> {
        check_neighbors("k", k, 2)?;
        Ok(Self {
            data: sorted_nonempty(xs, ys)?,
            k,
        })
    }

    /// Neighborhood used for a query point.
    pub fn window(&self, x: T) -> Window {
        let pos = bisect_right(&self.data.x, x);
        Window::symmetric(pos, self.k, self.data.len())
    }
}

impl<T: Float> Predictor<T> for RunningLine<T> {
    fn predict_point(&self, x: T) -> Result<T, SmoothError> {
        let range = self.window(x).range();
        // A window with a single distinct x degenerates to its local mean
        let line = LinearFit::fit_ols(&self.data.x[range.clone()], &self.data.y[range]);
        Ok(line.predict(x))
    }
}

// ============================================================================
// Gaussian Kernel
// ============================================================================

/// Nadaraya-Watson regression with weights `exp(-(x - x_i)^2 / lambda)`.
///
/// Weights are rescaled by the nearest sample's weight before normalizing,
/// which leaves the prediction unchanged but keeps far queries finite.
#[derive(Debug, Clone, PartialEq)]
pub struct GaussianKernel<T> {
    xs: Vec<T>,
    ys: Vec<T>,
    bandwidth: T,
}

impl<T: Float> GaussianKernel<T> {
    /// Fit a Gaussian kernel smoother of width `lambda`.
    pub fn fit(xs: &[T], ys: &[T], lambda: T) -> Result<Self, SmoothError> {
        if !lambda.is_finite() || lambda <= T::zero() {
            return Err(SmoothError::invalid_parameter(
                "lambda",
                lambda.to_f64().unwrap_or(f64::NAN),
                "kernel width must be positive",
            ));
        }
        let data = sorted_nonempty(xs, ys)?;
        Ok(Self {
            xs: data.x,
            ys: data.y,
            bandwidth: WeightFunction::gaussian_bandwidth(lambda),
        })
    }
}

impl<T: Float> Predictor<T> for GaussianKernel<T> {
    fn predict_point(&self, x: T) -> Result<T, SmoothError> {
        // Distances are measured in excess of the nearest sample, so the
        // nearest weight is exactly one and far queries cannot underflow.
        let sq = |xi: T| (x - xi) * (x - xi);
        let nearest = self
            .xs
            .iter()
            .fold(T::infinity(), |acc, &xi| acc.min(sq(xi)));

        let weights: Vec<T> = self
            .xs
            .iter()
            .map(|&xi| {
                let excess = (sq(xi) - nearest).max(T::zero()).sqrt();
                WeightFunction::Gaussian.compute_weight(excess / self.bandwidth)
            })
            .collect();
        weighted_mean(&self.ys, &weights)
    }
}

// ============================================================================
// LOESS
// ============================================================================

/// Tricube-weighted local line over the `span` nearest neighbors.
#[derive(Debug, Clone, PartialEq)]
pub struct Loess<T> {
    data: SortedData<T>,
    span: usize,
}

impl<T: Float> Loess<T> {
    /// Fit LOESS with `span` neighbors per local fit (clamped to the data size).
    pub fn fit(xs: &[T], ys: &[T], span: usize) -> Result<Self, SmoothError> {
        check_neighbors("span", span, 2)?;
        let data = sorted_nonempty(xs, ys)?;
        let span = span.min(data.len());
        Ok(Self { data, span })
    }

    /// Nearest-neighbor window for a query point.
    pub fn window(&self, x: T) -> Window {
        let n = self.data.len();
        let pos = bisect_right(&self.data.x, x).min(n - 1);
        let mut window = Window::initialize(pos, self.span, n);
        window.recenter(&self.data.x, x);
        window
    }
}

impl<T: Float> Predictor<T> for Loess<T> {
    fn predict_point(&self, x: T) -> Result<T, SmoothError> {
        let window = self.window(x);
        let range = window.range();
        let local_mean = || mean(&self.data.y[window.range()]);

        let radius = window.max_distance(&self.data.x, x);
        if radius <= T::zero() {
            return local_mean();
        }

        let mut weights = vec![T::zero(); self.data.len()];
        let total = WeightFunction::Tricube.compute_window_weights(
            &self.data.x,
            window.left,
            window.right,
            x,
            radius,
            &mut weights,
        );
        if total <= T::zero() {
            return local_mean();
        }

        match LinearFit::fit_wls(
            &self.data.x[range.clone()],
            &self.data.y[range.clone()],
            &weights[range],
            radius,
        ) {
            Some(line) => Ok(line.predict(x)),
            None => local_mean(),
        }
    }
}
