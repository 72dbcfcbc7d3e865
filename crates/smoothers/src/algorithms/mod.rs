//! Layer 3: Algorithms
//!
//! # Purpose
//!
//! This layer provides the fitting algorithms:
//! - Simple and weighted linear regression
//! - Ridge regression and basis-expansion regressors
//! - Local smoothers (running mean/line, kernel, LOESS)
//! - Regression trees and gradient boosting
//!
//! Every fitted model implements [`Predictor`]. The curried
//! `fit(xs, ys) -> predict(query)` contract is expressed by [`FitFn`] and
//! [`PredictFn`].
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::SmoothError;

/// Simple linear regression (OLS/WLS).
pub mod regression;

/// Ridge regression on a standardized design.
pub mod ridge;

/// Basis expansion composed with ridge regression.
pub mod expansion;

/// Neighborhood and kernel smoothers.
pub mod local;

/// Regression trees.
pub mod tree;

/// Gradient-boosted regression trees.
pub mod boosting;

// ============================================================================
// Prediction Contract
// ============================================================================

/// Prediction function: scores every query point, preserving order and length.
pub type PredictFn<T> = Box<dyn Fn(&[T]) -> Result<Vec<T>, SmoothError>>;

/// Fit function: consumes a dataset and returns its prediction function.
pub type FitFn<T> = Box<dyn Fn(&[T], &[T]) -> Result<PredictFn<T>, SmoothError>>;

/// A fitted model that can be scored pointwise.
pub trait Predictor<T: Float> {
    /// Score a single query point.
    fn predict_point(&self, x: T) -> Result<T, SmoothError>;

    /// Score every query point in order.
    fn predict(&self, xs: &[T]) -> Result<Vec<T>, SmoothError> {
        xs.iter().map(|&x| self.predict_point(x)).collect()
    }
}

/// Box a fitted model as a [`PredictFn`] that owns it.
pub fn into_predict_fn<T, P>(model: P) -> PredictFn<T>
where
    T: Float + 'static,
    P: Predictor<T> + 'static,
{
    Box::new(move |xs: &[T]| model.predict(xs))
}

/// Box a fitting routine as a [`FitFn`].
pub fn into_fit_fn<T, P, F>(fit: F) -> FitFn<T>
where
    T: Float + 'static,
    P: Predictor<T> + 'static,
    F: Fn(&[T], &[T]) -> Result<P, SmoothError> + 'static,
{
    Box::new(move |xs: &[T], ys: &[T]| fit(xs, ys).map(into_predict_fn::<T, P>))
}
