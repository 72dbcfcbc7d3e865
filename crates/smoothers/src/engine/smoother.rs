//! Smoother factories.
//!
//! ## Purpose
//!
//! A factory turns a parameter map into a [`FitFn`]: the first link of the
//! `parameters -> fit(xs, ys) -> predict(query)` chain. This module provides
//! one factory per registered algorithm.
//!
//! ## Design notes
//!
//! * **Checked inputs**: Every fit function returned here validates its
//!   dataset (lengths, finiteness, the algorithm's minimum point count)
//!   before fitting, and every predict function validates its query.
//! * **Raw parameters**: Factories read the values they need and reject
//!   unusable ones, but do not apply the registry's ranges; use
//!   `SmootherDescriptor::fit_fn` for that.
//!
//! ## Key concepts
//!
//! | Algorithm            | Parameters                        | Min points |
//! |----------------------|-----------------------------------|------------|
//! | Constant mean        |                                   | 1          |
//! | Running mean         | `k`                               | 1          |
//! | Linear regression    |                                   | 2          |
//! | Gaussian kernel      | `lambda`                          | 1          |
//! | Running line         | `k` (at least 2)                  | 2          |
//! | LOESS                | `span`                            | 2          |
//! | Polynomial ridge     | `degree`, `lambda`                | 2          |
//! | Fixed-knot splines   | `n`, `lambda`                     | 2          |
//! | Regression tree      | `depth`                           | 1          |
//! | Gradient boosting    | `n_trees`, `learning_rate`, `depth` | 1        |

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::boosting::GradientBooster;
use crate::algorithms::expansion::make_regressor;
use crate::algorithms::local::{
    ConstantMean, GaussianKernel, Loess, RunningLine, RunningMean, fit_linear_regression,
};
use crate::algorithms::tree::RegressionTree;
use crate::algorithms::{FitFn, PredictFn, Predictor, into_predict_fn};
use crate::engine::parameters::Parameters;
use crate::engine::validator::Validator;
use crate::math::basis::{Basis, BasisFamily, make_knots};
use crate::primitives::errors::SmoothError;

/// Factory: parameters to fit function.
pub type Factory<T> = Box<dyn Fn(&Parameters) -> Result<FitFn<T>, SmoothError>>;

// ============================================================================
// Input Checks
// ============================================================================

/// Wrap a prediction function so that it rejects non-finite queries.
fn checked_predict<T: Float + 'static>(predict: PredictFn<T>) -> PredictFn<T> {
    Box::new(move |query: &[T]| {
        Validator::validate_query(query)?;
        predict(query)
    })
}

/// Build a [`FitFn`] that validates its dataset before calling `fit`.
fn checked_fit<T, P, F>(min_points: usize, fit: F) -> FitFn<T>
where
    T: Float + 'static,
    P: Predictor<T> + 'static,
    F: Fn(&[T], &[T]) -> Result<P, SmoothError> + 'static,
{
    Box::new(move |xs: &[T], ys: &[T]| {
        Validator::validate_inputs(xs, ys, min_points)?;
        let model = fit(xs, ys)?;
        Ok(checked_predict(into_predict_fn(model)))
    })
}

/// Wrap an already-boxed [`FitFn`] with input checks.
fn checked_fit_fn<T: Float + 'static>(min_points: usize, fit: FitFn<T>) -> FitFn<T> {
    Box::new(move |xs: &[T], ys: &[T]| {
        Validator::validate_inputs(xs, ys, min_points)?;
        fit(xs, ys).map(checked_predict)
    })
}

/// Require an integer parameter to be at least `min`.
fn count_at_least(params: &Parameters, name: &str, min: usize) -> Result<usize, SmoothError> {
    let value = params.count(name)?;
    if value < min {
        return Err(SmoothError::invalid_parameter(
            name,
            value as f64,
            "below the algorithm's minimum",
        ));
    }
    Ok(value)
}

/// Read a ridge shrinkage strength, which must be non-negative.
fn shrinkage<T: Float>(params: &Parameters) -> Result<T, SmoothError> {
    let lambda: T = params.float("lambda")?;
    if lambda < T::zero() {
        return Err(SmoothError::invalid_parameter(
            "lambda",
            params.require("lambda")?,
            "shrinkage must be non-negative",
        ));
    }
    Ok(lambda)
}

// ============================================================================
// Baselines
// ============================================================================

/// Constant mean of the responses.
pub fn constant_mean<T: Float + 'static>(_params: &Parameters) -> Result<FitFn<T>, SmoothError> {
    Ok(checked_fit(1, |xs: &[T], ys: &[T]| ConstantMean::fit(xs, ys)))
}

/// Global least-squares line.
pub fn linear_regression<T: Float + 'static>(
    _params: &Parameters,
) -> Result<FitFn<T>, SmoothError> {
    Ok(checked_fit(2, |xs: &[T], ys: &[T]| {
        fit_linear_regression(xs, ys)
    }))
}

// ============================================================================
// Local Smoothers
// ============================================================================

/// Running mean with `k` neighbors per side.
pub fn running_mean<T: Float + 'static>(params: &Parameters) -> Result<FitFn<T>, SmoothError> {
    let k = count_at_least(params, "k", 1)?;
    Ok(checked_fit(1, move |xs: &[T], ys: &[T]| {
        RunningMean::fit(xs, ys, k)
    }))
}

/// Running line with `k` neighbors per side.
pub fn running_line<T: Float + 'static>(params: &Parameters) -> Result<FitFn<T>, SmoothError> {
    let k = count_at_least(params, "k", 2)?;
    Ok(checked_fit(2, move |xs: &[T], ys: &[T]| {
        RunningLine::fit(xs, ys, k)
    }))
}

/// Gaussian kernel smoother of width `lambda`.
pub fn gaussian_kernel<T: Float + 'static>(params: &Parameters) -> Result<FitFn<T>, SmoothError> {
    let lambda: T = params.float("lambda")?;
    if lambda <= T::zero() {
        return Err(SmoothError::invalid_parameter(
            "lambda",
            params.require("lambda")?,
            "kernel width must be positive",
        ));
    }
    Ok(checked_fit(1, move |xs: &[T], ys: &[T]| {
        GaussianKernel::fit(xs, ys, lambda)
    }))
}

/// LOESS over the `span` nearest neighbors.
pub fn loess<T: Float + 'static>(params: &Parameters) -> Result<FitFn<T>, SmoothError> {
    let span = count_at_least(params, "span", 2)?;
    Ok(checked_fit(2, move |xs: &[T], ys: &[T]| {
        Loess::fit(xs, ys, span)
    }))
}

// ============================================================================
// Basis Expansion
// ============================================================================

/// Ridge regression on the polynomial basis `x, x^2, ..., x^degree`.
pub fn polynomial_regression<T: Float + 'static>(
    params: &Parameters,
) -> Result<FitFn<T>, SmoothError> {
    let degree = count_at_least(params, "degree", 1)?;
    let lambda = shrinkage::<T>(params)?;
    Ok(checked_fit_fn(
        2,
        make_regressor(Basis::polynomial(degree), lambda),
    ))
}

/// Factory for ridge regression on a fixed-knot spline basis of `family`.
///
/// The returned factory reads `n` (number of interior knots, placed evenly
/// on the unit interval) and `lambda`.
pub fn spline_regression<T: Float + 'static>(family: BasisFamily) -> Factory<T> {
    Box::new(move |params: &Parameters| {
        let n = count_at_least(params, "n", 1)?;
        let lambda = shrinkage::<T>(params)?;
        let basis = family.build(make_knots::<T>(n));
        Ok(checked_fit_fn(2, make_regressor(basis, lambda)))
    })
}

// ============================================================================
// Trees
// ============================================================================

/// Regression tree of at most `depth` levels.
pub fn regression_tree<T: Float + 'static>(params: &Parameters) -> Result<FitFn<T>, SmoothError> {
    let depth = params.count("depth")?;
    Ok(checked_fit(1, move |xs: &[T], ys: &[T]| {
        RegressionTree::fit(xs, ys, depth)
    }))
}

/// Gradient-boosted trees.
pub fn gradient_boosting<T: Float + 'static>(
    params: &Parameters,
) -> Result<FitFn<T>, SmoothError> {
    let n_trees = params.count("n_trees")?;
    let depth = params.count("depth")?;
    let learning_rate: T = params.float("learning_rate")?;
    if learning_rate <= T::zero() {
        return Err(SmoothError::invalid_parameter(
            "learning_rate",
            params.require("learning_rate")?,
            "must be finite and positive",
        ));
    }
    Ok(checked_fit(1, move |xs: &[T], ys: &[T]| {
        GradientBooster::fit(xs, ys, n_trees, learning_rate, depth)
    }))
}
