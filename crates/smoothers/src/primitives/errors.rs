//! Error types for smoothing operations.
//!
//! ## Purpose
//!
//! This module defines error conditions that can occur while configuring,
//! fitting, or evaluating a smoother: input validation, hyperparameter
//! constraints, registry lookups, and numerical failures.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors include relevant values (e.g., actual vs. expected lengths).
//! * **Classified**: Every variant maps onto one [`ErrorKind`] so callers can
//!   decide how to react without matching every variant.
//! * **Trait Implementation**: Implements `Display` and `std::error::Error`.
//!
//! ## Key concepts
//!
//! 1. **Dimension errors**: Empty arrays, mismatched lengths, too few points.
//! 2. **Parameter errors**: Out-of-range, non-integer, or otherwise invalid hyperparameters.
//! 3. **Numeric errors**: Singular systems, zero variance, zero total weight, non-finite input.
//! 4. **Lookup errors**: Unknown smoother identifiers.
//!
//! ## Invariants
//!
//! * All variants provide sufficient context for diagnosis.
//! * Error messages are consistent in tone and formatting.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//! * This module does not provide error recovery or fallback strategies.

// External dependencies
use std::error::Error;
use std::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Classification
// ============================================================================

/// Coarse classification of a [`SmoothError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Input lengths disagree or there are too few points for the algorithm.
    DimensionMismatch,

    /// A hyperparameter is outside its declared range or otherwise unusable.
    InvalidParameter,

    /// The numeric work could not be completed (singular system, zero weight, ...).
    NumericError,

    /// The requested smoother does not exist in the registry.
    NotFound,
}

// ============================================================================
// Error Type
// ============================================================================

/// Error type for smoothing operations.
#[derive(Debug, Clone, PartialEq)]
pub enum SmoothError {
    /// Input arrays are empty.
    EmptyInput,

    /// `x` and `y` arrays must have the same number of elements.
    MismatchedInputs {
        /// Number of elements in the `x` array.
        x_len: usize,
        /// Number of elements in the `y` array.
        y_len: usize,
    },

    /// Number of points is below the minimum requirement of the algorithm.
    TooFewPoints {
        /// Number of points provided.
        got: usize,
        /// Minimum required points.
        min: usize,
    },

    /// A hyperparameter lies outside its declared `[min, max]` range.
    ParameterOutOfRange {
        /// Name of the hyperparameter.
        name: String,
        /// The offending value.
        value: f64,
        /// Declared lower bound.
        min: f64,
        /// Declared upper bound.
        max: f64,
    },

    /// A hyperparameter that must be a whole number has a fractional part.
    NonIntegerParameter {
        /// Name of the hyperparameter.
        name: String,
        /// The offending value.
        value: f64,
    },

    /// A hyperparameter value is unusable for the algorithm.
    InvalidParameter {
        /// Name of the hyperparameter.
        name: String,
        /// The offending value.
        value: f64,
        /// Constraint that was violated.
        reason: &'static str,
    },

    /// Parameter was set multiple times in the builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: String,
    },

    /// Input data contains NaN or infinite values.
    InvalidNumericValue(String),

    /// The regularized normal equations could not be solved.
    SingularSystem {
        /// Dimension of the linear system.
        size: usize,
    },

    /// A column or response has zero standard deviation and cannot be standardized.
    ZeroVariance(String),

    /// Kernel or weighted-mean weights sum to zero.
    ZeroWeight,

    /// No smoother is registered under the requested identifier.
    UnknownSmoother(String),
}

impl SmoothError {
    /// Classify the error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::EmptyInput | Self::MismatchedInputs { .. } | Self::TooFewPoints { .. } => {
                ErrorKind::DimensionMismatch
            }
            Self::ParameterOutOfRange { .. }
            | Self::NonIntegerParameter { .. }
            | Self::InvalidParameter { .. }
            | Self::DuplicateParameter { .. } => ErrorKind::InvalidParameter,
            Self::InvalidNumericValue(_)
            | Self::SingularSystem { .. }
            | Self::ZeroVariance(_)
            | Self::ZeroWeight => ErrorKind::NumericError,
            Self::UnknownSmoother(_) => ErrorKind::NotFound,
        }
    }

    /// Shorthand for an [`SmoothError::InvalidParameter`].
    pub(crate) fn invalid_parameter(name: &str, value: f64, reason: &'static str) -> Self {
        Self::InvalidParameter {
            name: name.to_string(),
            value,
            reason,
        }
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for SmoothError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::EmptyInput => write!(f, "Input arrays are empty"),
            Self::MismatchedInputs { x_len, y_len } => {
                write!(f, "Length mismatch: x has {x_len} points, y has {y_len}")
            }
            Self::TooFewPoints { got, min } => {
                write!(f, "Too few points: got {got}, need at least {min}")
            }
            Self::ParameterOutOfRange {
                name,
                value,
                min,
                max,
            } => {
                write!(
                    f,
                    "Parameter '{name}' out of range: {value} (must be in [{min}, {max}])"
                )
            }
            Self::NonIntegerParameter { name, value } => {
                write!(f, "Parameter '{name}' must be a whole number, got {value}")
            }
            Self::InvalidParameter {
                name,
                value,
                reason,
            } => write!(f, "Invalid parameter '{name}': {value} ({reason})"),
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
                )
            }
            Self::InvalidNumericValue(s) => write!(f, "Invalid numeric value: {s}"),
            Self::SingularSystem { size } => {
                write!(f, "Singular linear system of size {size}")
            }
            Self::ZeroVariance(what) => {
                write!(f, "Zero standard deviation in {what}; cannot standardize")
            }
            Self::ZeroWeight => write!(f, "Weights sum to zero"),
            Self::UnknownSmoother(id) => write!(f, "Unknown smoother: '{id}'"),
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

impl Error for SmoothError {}
