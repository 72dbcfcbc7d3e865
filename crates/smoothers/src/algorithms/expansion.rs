//! Basis-expansion regression.
//!
//! ## Purpose
//!
//! Composes a [`Basis`] with the ridge solver: `fit` expands the inputs into
//! a design matrix and solves for the coefficients; `predict` expands each
//! query point through the same basis and scores it.
//!
//! ## Invariants
//!
//! * The basis used to score is the one used to fit.
//! * Each fit owns its own [`RidgeFit`]; nothing is shared between fits.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::ridge::{RidgeFit, fit_ridge};
use crate::algorithms::{FitFn, Predictor, into_fit_fn};
use crate::math::basis::Basis;
use crate::primitives::errors::SmoothError;

/// A basis plus shrinkage strength, ready to be fit.
#[derive(Debug, Clone, PartialEq)]
pub struct BasisRegression<T> {
    basis: Basis<T>,
    lambda: T,
}

impl<T: Float> BasisRegression<T> {
    /// Create a regressor over `basis` with ridge strength `lambda`.
    pub fn new(basis: Basis<T>, lambda: T) -> Self {
        Self { basis, lambda }
    }

    /// The basis the regressor expands through.
    pub fn basis(&self) -> &Basis<T> {
        &self.basis
    }

    /// Fit the regression on `(xs, ys)`.
    pub fn fit(&self, xs: &[T], ys: &[T]) -> Result<BasisRegressionFit<T>, SmoothError> {
        let design = self.basis.design_matrix(xs);
        let ridge = fit_ridge(&design, ys, self.lambda)?;
        Ok(BasisRegressionFit {
            basis: self.basis.clone(),
            ridge,
        })
    }
}

/// A fitted basis-expansion regression.
#[derive(Debug, Clone, PartialEq)]
pub struct BasisRegressionFit<T> {
    basis: Basis<T>,
    ridge: RidgeFit<T>,
}

impl<T: Float> BasisRegressionFit<T> {
    /// The underlying ridge artifact.
    pub fn ridge(&self) -> &RidgeFit<T> {
        &self.ridge
    }

    /// The basis used for scoring.
    pub fn basis(&self) -> &Basis<T> {
        &self.basis
    }
}

impl<T: Float> Predictor<T> for BasisRegressionFit<T> {
    fn predict_point(&self, x: T) -> Result<T, SmoothError> {
        Ok(self.ridge.score(&self.basis.expand(x)))
    }
}

/// Build the `fit(xs, ys) -> predict(query)` chain for a basis and `lambda`.
pub fn make_regressor<T: Float + 'static>(basis: Basis<T>, lambda: T) -> FitFn<T> {
    let regressor = BasisRegression::new(basis, lambda);
    into_fit_fn(move |xs: &[T], ys: &[T]| regressor.fit(xs, ys))
}
