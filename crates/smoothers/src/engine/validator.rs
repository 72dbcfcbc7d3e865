//! Input and hyperparameter validation.
//!
//! ## Purpose
//!
//! This module checks datasets and parameter maps before any numeric work
//! starts: input lengths, finite values, per-algorithm minimum point counts,
//! and hyperparameter ranges.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Efficiency**: Checks are ordered from cheap to expensive.
//! * **Resolution**: Parameter validation also resolves missing values to
//!   their declared defaults.
//!
//! ## Invariants
//!
//! * A resolved parameter map holds exactly one value per descriptor.
//! * Validation logic is deterministic and side-effect free (apart from logging).
//!
//! ## Non-goals
//!
//! * This module does not sort, transform, or filter input data.
//! * This module does not clamp or round invalid parameters.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::engine::parameters::{Hyperparameter, Parameters};
use crate::primitives::errors::SmoothError;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for smoother inputs and configuration.
///
/// Provides static methods that fail fast on the first violation.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Core Input Validation
    // ========================================================================

    /// Validate a dataset for an algorithm that needs `min_points` points.
    pub fn validate_inputs<T: Float>(
        x: &[T],
        y: &[T],
        min_points: usize,
    ) -> Result<(), SmoothError> {
        // Check 1: Matching lengths
        let n = x.len();
        if n != y.len() {
            return Err(SmoothError::MismatchedInputs {
                x_len: n,
                y_len: y.len(),
            });
        }

        // Check 2: Non-empty arrays
        if n == 0 {
            return Err(SmoothError::EmptyInput);
        }

        // Check 3: Sufficient points for the algorithm
        if n < min_points {
            return Err(SmoothError::TooFewPoints {
                got: n,
                min: min_points,
            });
        }

        // Check 4: All values finite
        for i in 0..n {
            if !x[i].is_finite() {
                return Err(SmoothError::InvalidNumericValue(format!(
                    "x[{}]={}",
                    i,
                    x[i].to_f64().unwrap_or(f64::NAN)
                )));
            }
            if !y[i].is_finite() {
                return Err(SmoothError::InvalidNumericValue(format!(
                    "y[{}]={}",
                    i,
                    y[i].to_f64().unwrap_or(f64::NAN)
                )));
            }
        }

        Ok(())
    }

    /// Validate query points for finiteness.
    pub fn validate_query<T: Float>(query: &[T]) -> Result<(), SmoothError> {
        for (i, &q) in query.iter().enumerate() {
            if !q.is_finite() {
                return Err(SmoothError::InvalidNumericValue(format!(
                    "query[{}]={}",
                    i,
                    q.to_f64().unwrap_or(f64::NAN)
                )));
            }
        }
        Ok(())
    }

    // ========================================================================
    // Parameter Validation
    // ========================================================================

    /// Validate one value against its descriptor.
    pub fn validate_hyperparameter(
        descriptor: &Hyperparameter,
        value: f64,
    ) -> Result<(), SmoothError> {
        if !value.is_finite() || !descriptor.contains(value) {
            return Err(SmoothError::ParameterOutOfRange {
                name: descriptor.name.to_string(),
                value,
                min: descriptor.min,
                max: descriptor.max,
            });
        }
        if descriptor.is_integral() && value.fract() != 0.0 {
            return Err(SmoothError::NonIntegerParameter {
                name: descriptor.name.to_string(),
                value,
            });
        }
        Ok(())
    }

    /// Validate `params` against `descriptors` and resolve missing values.
    ///
    /// Names without a descriptor are ignored.
    pub fn validate_parameters(
        descriptors: &[Hyperparameter],
        params: &Parameters,
    ) -> Result<Parameters, SmoothError> {
        let mut resolved = Parameters::new();
        for descriptor in descriptors {
            let value = params.get(descriptor.name).unwrap_or(descriptor.default);
            Self::validate_hyperparameter(descriptor, value)?;
            resolved.set(descriptor.name, value);
        }

        for (name, _) in params.iter() {
            if !descriptors.iter().any(|d| d.name == name) {
                log::debug!("validator: ignoring unknown parameter '{name}'");
            }
        }

        Ok(resolved)
    }

    /// Validate the number of points in the output grid.
    pub fn validate_grid_size(grid_size: usize) -> Result<(), SmoothError> {
        if grid_size == 0 {
            return Err(SmoothError::invalid_parameter(
                "grid_size",
                0.0,
                "must be at least 1",
            ));
        }
        Ok(())
    }

    /// Validate that nothing was set multiple times in the builder.
    pub fn validate_no_duplicates(duplicate_param: Option<&str>) -> Result<(), SmoothError> {
        if let Some(param) = duplicate_param {
            return Err(SmoothError::DuplicateParameter {
                parameter: param.to_string(),
            });
        }
        Ok(())
    }
}
