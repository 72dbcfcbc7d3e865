//! High-level API for curve smoothing.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point. It implements a
//! fluent builder that selects a smoother from a [`Registry`], sets its
//! hyperparameters, and produces a fitted curve ready for rendering.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder; every hyperparameter falls back to its
//!   registered default.
//! * **Validated**: Duplicates, unknown ids, and out-of-range values are
//!   reported when `.build()` is called.
//! * **Type-Safe**: Generic over `Float` types for flexible precision.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`SmootherBuilder`] via `Smoother::new()`.
//! 2. Choose an algorithm (`.algorithm(id)`) and set parameters (`.parameter(name, value)`).
//! 3. Call `.build(&registry)` to get a [`ConfiguredSmoother`].
//! 4. Call `.fit(&x, &y)` to get a [`FittedSmoother`], then `.predict()` or `.curve()`.

// External dependencies
use num_traits::Float;
use std::fmt::{Debug, Formatter, Result as FmtResult};

// Internal dependencies
use crate::algorithms::{FitFn, PredictFn};
use crate::engine::validator::Validator;
use crate::math::stats::unit_grid;

// Publicly re-exported types
pub use crate::engine::output::SmoothedCurve;
pub use crate::engine::parameters::{Hyperparameter, Parameters};
pub use crate::engine::registry::{Registry, SmootherDescriptor};
pub use crate::math::basis::BasisFamily;
pub use crate::primitives::dataset::Dataset;
pub use crate::primitives::errors::{ErrorKind, SmoothError};

/// Number of grid points a curve is sampled on by default.
pub const DEFAULT_GRID_SIZE: usize = 100;

// ============================================================================
// Builder
// ============================================================================

/// Fluent builder for selecting and configuring a smoother.
#[derive(Debug, Clone, Default)]
pub struct SmootherBuilder {
    /// Registry id of the smoother (default: the first registered one).
    pub algorithm: Option<String>,

    /// Hyperparameter values set so far.
    pub parameters: Parameters,

    /// Number of grid points for [`FittedSmoother::curve`].
    pub grid_size: Option<usize>,

    /// Tracks if any setting was made multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<String>,
}

impl SmootherBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Select the smoother by registry id.
    pub fn algorithm(mut self, id: impl Into<String>) -> Self {
        if self.algorithm.is_some() {
            self.duplicate_param = Some("algorithm".to_string());
        }
        self.algorithm = Some(id.into());
        self
    }

    /// Set a hyperparameter.
    pub fn parameter(mut self, name: impl Into<String>, value: f64) -> Self {
        let name = name.into();
        if self.parameters.contains(&name) {
            self.duplicate_param = Some(name.clone());
        }
        self.parameters.set(name, value);
        self
    }

    /// Set several hyperparameters at once.
    pub fn parameters(self, params: &Parameters) -> Self {
        params
            .iter()
            .fold(self, |builder, (name, value)| builder.parameter(name, value))
    }

    /// Set the number of grid points a curve is sampled on.
    pub fn grid_size(mut self, n: usize) -> Self {
        if self.grid_size.is_some() {
            self.duplicate_param = Some("grid_size".to_string());
        }
        self.grid_size = Some(n);
        self
    }

    /// Validate the configuration against `registry`.
    pub fn build<T: Float + 'static>(
        self,
        registry: &Registry<T>,
    ) -> Result<ConfiguredSmoother<T>, SmoothError> {
        Validator::validate_no_duplicates(self.duplicate_param.as_deref())?;

        let grid_size = self.grid_size.unwrap_or(DEFAULT_GRID_SIZE);
        Validator::validate_grid_size(grid_size)?;

        let descriptor = match &self.algorithm {
            Some(id) => registry.lookup(id)?,
            None => registry
                .iter()
                .next()
                .ok_or_else(|| SmoothError::UnknownSmoother(String::new()))?,
        };

        let parameters = descriptor.resolve(&self.parameters)?;
        let fit = descriptor.factory(&parameters)?;
        let knots = descriptor.knots(&parameters)?;

        log::debug!(
            "api: built '{}' ({}) with grid of {grid_size}",
            descriptor.id(),
            parameters
        );

        Ok(ConfiguredSmoother {
            id: descriptor.id(),
            label: descriptor.label(),
            parameters,
            knots,
            grid_size,
            fit,
        })
    }
}

// ============================================================================
// Configured Smoother
// ============================================================================

/// A validated smoother, ready to fit datasets.
pub struct ConfiguredSmoother<T> {
    id: &'static str,
    label: &'static str,
    parameters: Parameters,
    knots: Option<Vec<T>>,
    grid_size: usize,
    fit: FitFn<T>,
}

impl<T: Float + 'static> ConfiguredSmoother<T> {
    /// Registry id of the smoother.
    pub fn id(&self) -> &'static str {
        self.id
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        self.label
    }

    /// Resolved hyperparameters.
    pub fn parameters(&self) -> &Parameters {
        &self.parameters
    }

    /// Knot positions, for fixed-knot smoothers.
    pub fn knots(&self) -> Option<&[T]> {
        self.knots.as_deref()
    }

    /// Fit the smoother to `(x, y)`.
    pub fn fit(&self, x: &[T], y: &[T]) -> Result<FittedSmoother<'_, T>, SmoothError> {
        let predict = (self.fit)(x, y)?;
        log::debug!("api: fitted '{}' on {} points", self.id, x.len());
        Ok(FittedSmoother {
            config: self,
            n_points: x.len(),
            predict,
        })
    }

    /// Fit the smoother to a [`Dataset`].
    pub fn fit_dataset(&self, data: &Dataset<T>) -> Result<FittedSmoother<'_, T>, SmoothError> {
        let (x, y) = data.columns();
        self.fit(x, y)
    }
}

impl<T: Debug> Debug for ConfiguredSmoother<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("ConfiguredSmoother")
            .field("id", &self.id)
            .field("parameters", &self.parameters)
            .field("knots", &self.knots)
            .field("grid_size", &self.grid_size)
            .finish_non_exhaustive()
    }
}

// ============================================================================
// Fitted Smoother
// ============================================================================

/// A smoother fitted to one dataset.
pub struct FittedSmoother<'a, T> {
    config: &'a ConfiguredSmoother<T>,
    n_points: usize,
    predict: PredictFn<T>,
}

impl<T: Float + 'static> FittedSmoother<'_, T> {
    /// Number of training points.
    pub fn n_points(&self) -> usize {
        self.n_points
    }

    /// Evaluate the fitted curve at every query point, in order.
    pub fn predict(&self, query: &[T]) -> Result<Vec<T>, SmoothError> {
        (self.predict)(query)
    }

    /// Sample the fitted curve on the grid `0, 1/n, ..., (n-1)/n`.
    pub fn curve(&self) -> Result<SmoothedCurve<T>, SmoothError> {
        let x = unit_grid(self.config.grid_size);
        let y = self.predict(&x)?;
        Ok(SmoothedCurve {
            id: self.config.id.to_string(),
            label: self.config.label.to_string(),
            parameters: self.config.parameters.clone(),
            n_points: self.n_points,
            x,
            y,
            knots: self.config.knots.clone(),
        })
    }
}

impl<T: Debug> Debug for FittedSmoother<'_, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("FittedSmoother")
            .field("config", self.config)
            .field("n_points", &self.n_points)
            .finish_non_exhaustive()
    }
}
