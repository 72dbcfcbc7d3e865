//! The smoother registry.
//!
//! ## Purpose
//!
//! This module names every available smoother and describes how to configure
//! it: a stable identifier, a label, the hyperparameters it takes, its
//! factory, and (for fixed-knot splines) how its knots are placed.
//!
//! ## Design notes
//!
//! * **Explicit value**: The registry is built once with
//!   [`Registry::standard`] and passed by reference; there is no global.
//! * **Insertion order**: [`Registry::iter`] and [`Registry::ids`] list
//!   smoothers in registration order, which is the order a selector shows.
//! * **Validated entry point**: [`SmootherDescriptor::fit_fn`] resolves and
//!   range-checks parameters before calling the factory.
//!
//! ## Invariants
//!
//! * Identifiers are unique within a registry.
//! * Descriptors are immutable once registered.

// External dependencies
use num_traits::Float;
use std::fmt::{Debug, Formatter, Result as FmtResult};

// Internal dependencies
use crate::algorithms::FitFn;
use crate::engine::parameters::{Hyperparameter, Parameters};
use crate::engine::smoother::{self, Factory};
use crate::engine::validator::Validator;
use crate::math::basis::{BasisFamily, make_knots};
use crate::primitives::errors::SmoothError;

/// Generator of `n` knot positions on the unit interval.
pub type KnotGenerator<T> = fn(usize) -> Vec<T>;

// ============================================================================
// Smoother Descriptor
// ============================================================================

/// A registered smoother.
pub struct SmootherDescriptor<T> {
    id: &'static str,
    label: &'static str,
    factory: Factory<T>,
    hyperparameters: Vec<Hyperparameter>,
    knot_generator: Option<KnotGenerator<T>>,
}

impl<T: Float + 'static> SmootherDescriptor<T> {
    /// Create a descriptor.
    pub fn new(
        id: &'static str,
        label: &'static str,
        factory: Factory<T>,
        hyperparameters: Vec<Hyperparameter>,
    ) -> Self {
        Self {
            id,
            label,
            factory,
            hyperparameters,
            knot_generator: None,
        }
    }

    /// Attach a knot generator (builder style).
    pub fn with_knots(mut self, generator: KnotGenerator<T>) -> Self {
        self.knot_generator = Some(generator);
        self
    }

    /// Stable identifier.
    pub fn id(&self) -> &'static str {
        self.id
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        self.label
    }

    /// Hyperparameters accepted by the smoother.
    pub fn hyperparameters(&self) -> &[Hyperparameter] {
        &self.hyperparameters
    }

    /// Descriptor of the hyperparameter called `name`.
    pub fn hyperparameter(&self, name: &str) -> Option<&Hyperparameter> {
        self.hyperparameters.iter().find(|h| h.name == name)
    }

    /// Knot generator, for smoothers with fixed knots.
    pub fn knot_generator(&self) -> Option<KnotGenerator<T>> {
        self.knot_generator
    }

    /// Parameter map holding every default value.
    pub fn defaults(&self) -> Parameters {
        self.hyperparameters
            .iter()
            .map(|h| (h.name, h.default))
            .collect()
    }

    /// Call the factory directly, without range checks.
    pub fn factory(&self, params: &Parameters) -> Result<FitFn<T>, SmoothError> {
        (self.factory)(params)
    }

    /// Check `params` against the hyperparameters, filling in defaults.
    pub fn resolve(&self, params: &Parameters) -> Result<Parameters, SmoothError> {
        Validator::validate_parameters(&self.hyperparameters, params)
    }

    /// Validate `params` and build the fit function.
    pub fn fit_fn(&self, params: &Parameters) -> Result<FitFn<T>, SmoothError> {
        let resolved = self.resolve(params)?;
        log::debug!("registry: configuring '{}' with {}", self.id, resolved);
        self.factory(&resolved)
    }

    /// Knot positions for the resolved parameters, for fixed-knot smoothers.
    pub fn knots(&self, resolved: &Parameters) -> Result<Option<Vec<T>>, SmoothError> {
        match self.knot_generator {
            Some(generate) => Ok(Some(generate(resolved.count("n")?))),
            None => Ok(None),
        }
    }
}

impl<T> Debug for SmootherDescriptor<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("SmootherDescriptor")
            .field("id", &self.id)
            .field("label", &self.label)
            .field("hyperparameters", &self.hyperparameters)
            .field("has_knots", &self.knot_generator.is_some())
            .finish_non_exhaustive()
    }
}

// ============================================================================
// Registry
// ============================================================================

/// An ordered collection of smoothers, looked up by id.
#[derive(Debug)]
pub struct Registry<T> {
    descriptors: Vec<SmootherDescriptor<T>>,
}

impl<T: Float + 'static> Default for Registry<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float + 'static> Registry<T> {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            descriptors: Vec::new(),
        }
    }

    /// Add a smoother, replacing any existing one with the same id.
    pub fn register(mut self, descriptor: SmootherDescriptor<T>) -> Self {
        match self
            .descriptors
            .iter_mut()
            .find(|d| d.id == descriptor.id)
        {
            Some(existing) => *existing = descriptor,
            None => self.descriptors.push(descriptor),
        }
        self
    }

    /// Descriptor registered under `id`.
    pub fn lookup(&self, id: &str) -> Result<&SmootherDescriptor<T>, SmoothError> {
        self.descriptors
            .iter()
            .find(|d| d.id == id)
            .ok_or_else(|| SmoothError::UnknownSmoother(id.to_string()))
    }

    /// Registered ids, in registration order.
    pub fn ids(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.descriptors.iter().map(|d| d.id)
    }

    /// Registered descriptors, in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &SmootherDescriptor<T>> {
        self.descriptors.iter()
    }

    /// Number of registered smoothers.
    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    /// The standard catalog of smoothers.
    pub fn standard() -> Self {
        let lambda = |max: f64, step: f64| {
            Hyperparameter::new("lambda", "Ridge Shrinkage", 0.0, max, step, 0.0)
        };
        let knots =
            |default: f64| Hyperparameter::new("n", "Number of Knots", 2.0, 10.0, 1.0, default);

        Self::new()
            .register(SmootherDescriptor::new(
                "smooth-type-mean",
                "Constant Mean",
                Box::new(smoother::constant_mean::<T>),
                vec![],
            ))
            .register(SmootherDescriptor::new(
                "smooth-type-runmean",
                "Running Mean",
                Box::new(smoother::running_mean::<T>),
                vec![Hyperparameter::new(
                    "k",
                    "Number of Neighbors",
                    1.0,
                    20.0,
                    1.0,
                    2.0,
                )],
            ))
            .register(SmootherDescriptor::new(
                "smooth-type-linreg",
                "Linear Regression",
                Box::new(smoother::linear_regression::<T>),
                vec![],
            ))
            .register(SmootherDescriptor::new(
                "smooth-type-gaussk",
                "Gaussian Kernel Smoother",
                Box::new(smoother::gaussian_kernel::<T>),
                vec![Hyperparameter::new(
                    "lambda",
                    "Width of Kernel",
                    0.001,
                    0.05,
                    0.001,
                    0.01,
                )],
            ))
            .register(SmootherDescriptor::new(
                "smooth-type-runline",
                "Running Line",
                Box::new(smoother::running_line::<T>),
                vec![Hyperparameter::new(
                    "k",
                    "Number of Neighbors",
                    2.0,
                    20.0,
                    1.0,
                    2.0,
                )],
            ))
            .register(SmootherDescriptor::new(
                "smooth-type-loess",
                "Local Linear Regression (LOESS)",
                Box::new(smoother::loess::<T>),
                vec![Hyperparameter::new("span", "Neighbors", 2.0, 20.0, 1.0, 7.0)],
            ))
            .register(SmootherDescriptor::new(
                "smooth-type-polyreg",
                "Polynomial Ridge Regression",
                Box::new(smoother::polynomial_regression::<T>),
                vec![
                    Hyperparameter::new("degree", "Polynomial Degree", 1.0, 20.0, 1.0, 2.0),
                    lambda(0.01, 0.00001),
                ],
            ))
            .register(
                SmootherDescriptor::new(
                    "smooth-type-pl",
                    "Piecewise Linear Spline (Fixed Knots)",
                    smoother::spline_regression::<T>(BasisFamily::PiecewiseLinear),
                    vec![knots(2.0), lambda(0.1, 0.0001)],
                )
                .with_knots(make_knots::<T>),
            )
            .register(
                SmootherDescriptor::new(
                    "smooth-type-quad",
                    "Quadratic Spline (Fixed Knots)",
                    smoother::spline_regression::<T>(BasisFamily::Quadratic),
                    vec![knots(2.0), lambda(0.01, 0.00001)],
                )
                .with_knots(make_knots::<T>),
            )
            .register(
                SmootherDescriptor::new(
                    "smooth-type-spline",
                    "Cubic Spline (Fixed Knots)",
                    smoother::spline_regression::<T>(BasisFamily::Cubic),
                    vec![knots(2.0), lambda(0.001, 0.000001)],
                )
                .with_knots(make_knots::<T>),
            )
            .register(
                SmootherDescriptor::new(
                    "smooth-type-natural-spline",
                    "Natural Cubic Spline (Fixed Knots)",
                    smoother::spline_regression::<T>(BasisFamily::NaturalCubic),
                    vec![knots(3.0), lambda(0.001, 0.000001)],
                )
                .with_knots(make_knots::<T>),
            )
            .register(SmootherDescriptor::new(
                "smooth-type-tree",
                "Regression Tree",
                Box::new(smoother::regression_tree::<T>),
                vec![Hyperparameter::new("depth", "Max Depth", 0.0, 8.0, 1.0, 2.0)],
            ))
            .register(SmootherDescriptor::new(
                "smooth-type-boosting",
                "Gradient Boosted Trees",
                Box::new(smoother::gradient_boosting::<T>),
                vec![
                    Hyperparameter::new("n_trees", "Number of Trees", 0.0, 100.0, 1.0, 20.0),
                    Hyperparameter::new(
                        "learning_rate",
                        "Learning Rate",
                        0.01,
                        1.0,
                        0.01,
                        0.1,
                    ),
                    Hyperparameter::new("depth", "Tree Depth", 1.0, 4.0, 1.0, 1.0),
                ],
            ))
    }
}
