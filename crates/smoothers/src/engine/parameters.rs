//! Hyperparameter descriptors and resolved parameter maps.
//!
//! ## Purpose
//!
//! A [`Hyperparameter`] describes one tunable knob of a smoother (its range,
//! step and default), the way a slider would present it. [`Parameters`] is
//! the caller's current setting of those knobs: a map from name to value.
//!
//! ## Design notes
//!
//! * **f64 everywhere**: Hyperparameters are always `f64`, independent of
//!   the float type the smoother runs in.
//! * **Integral knobs**: A descriptor whose `min` and `step` are whole numbers
//!   only takes whole values (knot counts, degrees, depths, ...).
//! * **Ordered**: [`Parameters`] iterates in name order.

// External dependencies
use num_traits::Float;
use std::collections::BTreeMap;
use std::fmt::{Display, Formatter, Result as FmtResult};

// Internal dependencies
use crate::primitives::errors::SmoothError;

// ============================================================================
// Hyperparameter
// ============================================================================

/// Description of a single tunable hyperparameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hyperparameter {
    /// Key used in [`Parameters`].
    pub name: &'static str,

    /// Human-readable label.
    pub label: &'static str,

    /// Smallest accepted value.
    pub min: f64,

    /// Largest accepted value.
    pub max: f64,

    /// Slider increment.
    pub step: f64,

    /// Value used when the caller does not set one.
    pub default: f64,
}

impl Hyperparameter {
    /// Create a descriptor.
    pub const fn new(
        name: &'static str,
        label: &'static str,
        min: f64,
        max: f64,
        step: f64,
        default: f64,
    ) -> Self {
        Self {
            name,
            label,
            min,
            max,
            step,
            default,
        }
    }

    /// Whether the hyperparameter only takes whole values.
    pub fn is_integral(&self) -> bool {
        self.min.fract() == 0.0 && self.step.fract() == 0.0
    }

    /// Whether `value` lies in `[min, max]`.
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

// ============================================================================
// Parameters
// ============================================================================

/// A map from hyperparameter name to value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Parameters {
    values: BTreeMap<String, f64>,
}

impl Parameters {
    /// Create an empty parameter map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `name` to `value`, returning the map (builder style).
    pub fn with(mut self, name: impl Into<String>, value: f64) -> Self {
        self.set(name, value);
        self
    }

    /// Set `name` to `value`, returning the previous value if any.
    pub fn set(&mut self, name: impl Into<String>, value: f64) -> Option<f64> {
        self.values.insert(name.into(), value)
    }

    /// Value of `name`, if set.
    pub fn get(&self, name: &str) -> Option<f64> {
        self.values.get(name).copied()
    }

    /// Whether `name` is set.
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Number of set parameters.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether no parameter is set.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate over `(name, value)` pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.values.iter().map(|(k, &v)| (k.as_str(), v))
    }

    /// Value of `name`, failing when it is not set.
    pub fn require(&self, name: &str) -> Result<f64, SmoothError> {
        self.get(name)
            .ok_or_else(|| SmoothError::invalid_parameter(name, f64::NAN, "missing"))
    }

    /// Value of `name` as a non-negative whole number.
    pub fn count(&self, name: &str) -> Result<usize, SmoothError> {
        let value = self.require(name)?;
        if !value.is_finite() || value.fract() != 0.0 {
            return Err(SmoothError::NonIntegerParameter {
                name: name.to_string(),
                value,
            });
        }
        if value < 0.0 {
            return Err(SmoothError::invalid_parameter(
                name,
                value,
                "must be non-negative",
            ));
        }
        Ok(value as usize)
    }

    /// Value of `name` converted to the smoother's float type.
    pub fn float<T: Float>(&self, name: &str) -> Result<T, SmoothError> {
        let value = self.require(name)?;
        T::from(value)
            .filter(|v| v.is_finite())
            .ok_or_else(|| SmoothError::invalid_parameter(name, value, "not representable"))
    }
}

impl<S: Into<String>> FromIterator<(S, f64)> for Parameters {
    fn from_iter<I: IntoIterator<Item = (S, f64)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

impl<S: Into<String>> Extend<(S, f64)> for Parameters {
    fn extend<I: IntoIterator<Item = (S, f64)>>(&mut self, iter: I) {
        self.values
            .extend(iter.into_iter().map(|(k, v)| (k.into(), v)));
    }
}

impl Display for Parameters {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let mut first = true;
        for (name, value) in self.iter() {
            if !first {
                write!(f, ", ")?;
            }
            write!(f, "{name}={value}")?;
            first = false;
        }
        Ok(())
    }
}
