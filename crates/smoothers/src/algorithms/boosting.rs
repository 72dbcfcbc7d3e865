//! Gradient boosting with regression trees.
//!
//! ## Purpose
//!
//! This module fits an additive ensemble of shallow regression trees under
//! squared-error loss. Each stage fits a tree to the current residuals and
//! adds a damped copy of it to the model.
//!
//! ## Key concepts
//!
//! ```text
//! F_0(x) = mean(y)
//! F_m(x) = F_{m-1}(x) + learning_rate * tree_m(x),   m = 1..n_trees
//! ```
//!
//! ## Invariants
//!
//! * Exactly `n_trees` stages are fitted; `n_trees == 0` is the constant mean.
//! * `learning_rate` is finite and strictly positive.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::Predictor;
use crate::algorithms::tree::RegressionTree;
use crate::math::stats::mean;
use crate::primitives::errors::SmoothError;

/// A fitted gradient-boosted ensemble.
#[derive(Debug, Clone, PartialEq)]
pub struct GradientBooster<T> {
    intercept: T,
    trees: Vec<RegressionTree<T>>,
    learning_rate: T,
}

impl<T: Float> GradientBooster<T> {
    /// Fit `n_trees` stages of depth-`tree_depth` trees.
    pub fn fit(
        xs: &[T],
        ys: &[T],
        n_trees: usize,
        learning_rate: T,
        tree_depth: usize,
    ) -> Result<Self, SmoothError> {
        if !learning_rate.is_finite() || learning_rate <= T::zero() {
            return Err(SmoothError::invalid_parameter(
                "learning_rate",
                learning_rate.to_f64().unwrap_or(f64::NAN),
                "must be finite and positive",
            ));
        }
        if xs.len() != ys.len() {
            return Err(SmoothError::MismatchedInputs {
                x_len: xs.len(),
                y_len: ys.len(),
            });
        }

        let intercept = mean(ys)?;
        let mut residuals: Vec<T> = ys.iter().map(|&y| y - intercept).collect();
        let mut trees = Vec::with_capacity(n_trees);

        for _ in 0..n_trees {
            let tree = RegressionTree::fit(xs, &residuals, tree_depth)?;
            for (r, &x) in residuals.iter_mut().zip(xs.iter()) {
                *r = *r - learning_rate * tree.root().evaluate(x);
            }
            trees.push(tree);
        }

        log::debug!(
            "boosting: fitted {} stages (depth {tree_depth}) on {} samples",
            trees.len(),
            xs.len()
        );

        Ok(Self {
            intercept,
            trees,
            learning_rate,
        })
    }

    /// Initial constant prediction (mean response).
    pub fn intercept(&self) -> T {
        self.intercept
    }

    /// Fitted stages, in order.
    pub fn trees(&self) -> &[RegressionTree<T>] {
        &self.trees
    }

    /// Number of fitted stages.
    pub fn n_stages(&self) -> usize {
        self.trees.len()
    }

    /// Shrinkage applied to every stage.
    pub fn learning_rate(&self) -> T {
        self.learning_rate
    }
}

impl<T: Float> Predictor<T> for GradientBooster<T> {
    fn predict_point(&self, x: T) -> Result<T, SmoothError> {
        let boost = self
            .trees
            .iter()
            .fold(T::zero(), |acc, tree| acc + tree.root().evaluate(x));
        Ok(self.intercept + self.learning_rate * boost)
    }
}
