//! Tests for the smoother registry.
//!
//! ## Test Organization
//!
//! 1. **Catalog** - Ids, order, labels, hyperparameters
//! 2. **Lookup and Registration** - Unknown ids, replacement
//! 3. **Configuration** - Defaults, range checks, knots
//! 4. **Fitting** - Every registered smoother on sample data

use approx::assert_relative_eq;

use smoothers::internals::engine::parameters::{Hyperparameter, Parameters};
use smoothers::internals::engine::registry::{Registry, SmootherDescriptor};
use smoothers::internals::engine::smoother;
use smoothers::internals::primitives::errors::{ErrorKind, SmoothError};

const IDS: [&str; 13] = [
    "smooth-type-mean",
    "smooth-type-runmean",
    "smooth-type-linreg",
    "smooth-type-gaussk",
    "smooth-type-runline",
    "smooth-type-loess",
    "smooth-type-polyreg",
    "smooth-type-pl",
    "smooth-type-quad",
    "smooth-type-spline",
    "smooth-type-natural-spline",
    "smooth-type-tree",
    "smooth-type-boosting",
];

// ============================================================================
// Catalog Tests
// ============================================================================

/// Test the standard catalog lists every smoother in order.
#[test]
fn test_standard_ids_in_order() {
    let registry = Registry::<f64>::standard();
    assert_eq!(registry.len(), IDS.len());
    assert_eq!(registry.ids().collect::<Vec<_>>(), IDS.to_vec());
}

/// Test hyperparameter descriptors of a few smoothers.
#[test]
fn test_standard_hyperparameters() {
    let registry = Registry::<f64>::standard();

    let runmean = registry.lookup("smooth-type-runmean").unwrap();
    assert_eq!(runmean.label(), "Running Mean");
    assert_eq!(
        runmean.hyperparameters(),
        &[Hyperparameter::new("k", "Number of Neighbors", 1.0, 20.0, 1.0, 2.0)]
    );

    let gaussk = registry.lookup("smooth-type-gaussk").unwrap();
    let lambda = gaussk.hyperparameter("lambda").unwrap();
    assert_eq!(lambda.label, "Width of Kernel");
    assert_eq!((lambda.min, lambda.max, lambda.default), (0.001, 0.05, 0.01));
    assert!(!lambda.is_integral());

    let natural = registry.lookup("smooth-type-natural-spline").unwrap();
    assert_eq!(natural.hyperparameter("n").unwrap().default, 3.0);
    assert_eq!(natural.hyperparameter("lambda").unwrap().max, 0.001);

    let mean = registry.lookup("smooth-type-mean").unwrap();
    assert!(mean.hyperparameters().is_empty());
    assert!(mean.defaults().is_empty());
}

/// Test only fixed-knot splines carry a knot generator.
#[test]
fn test_knot_generators() {
    let registry = Registry::<f64>::standard();
    let with_knots: Vec<&str> = registry
        .iter()
        .filter(|d| d.knot_generator().is_some())
        .map(|d| d.id())
        .collect();
    assert_eq!(
        with_knots,
        vec![
            "smooth-type-pl",
            "smooth-type-quad",
            "smooth-type-spline",
            "smooth-type-natural-spline"
        ]
    );
}

// ============================================================================
// Lookup and Registration Tests
// ============================================================================

/// Test unknown ids are reported.
#[test]
fn test_lookup_unknown() {
    let registry = Registry::<f64>::standard();
    let err = registry.lookup("smooth-type-nope").unwrap_err();
    assert_eq!(err, SmoothError::UnknownSmoother("smooth-type-nope".to_string()));
    assert_eq!(err.kind(), ErrorKind::NotFound);
}

/// Test registering an existing id replaces it in place.
#[test]
fn test_register_replaces() {
    let registry = Registry::<f64>::new()
        .register(SmootherDescriptor::new(
            "a",
            "First",
            Box::new(smoother::constant_mean::<f64>),
            vec![],
        ))
        .register(SmootherDescriptor::new(
            "b",
            "Second",
            Box::new(smoother::linear_regression::<f64>),
            vec![],
        ))
        .register(SmootherDescriptor::new(
            "a",
            "Replaced",
            Box::new(smoother::constant_mean::<f64>),
            vec![],
        ));

    assert_eq!(registry.ids().collect::<Vec<_>>(), vec!["a", "b"]);
    assert_eq!(registry.lookup("a").unwrap().label(), "Replaced");
}

/// Test an empty registry.
#[test]
fn test_empty_registry() {
    let registry = Registry::<f64>::default();
    assert!(registry.is_empty());
    assert!(registry.lookup("smooth-type-mean").is_err());
}

// ============================================================================
// Configuration Tests
// ============================================================================

/// Test defaults and resolution.
#[test]
fn test_defaults_and_resolve() {
    let registry = Registry::<f64>::standard();
    let boosting = registry.lookup("smooth-type-boosting").unwrap();

    let defaults = boosting.defaults();
    assert_eq!(defaults.get("n_trees"), Some(20.0));
    assert_eq!(defaults.get("learning_rate"), Some(0.1));
    assert_eq!(defaults.get("depth"), Some(1.0));

    let resolved = boosting
        .resolve(&Parameters::new().with("n_trees", 5.0))
        .unwrap();
    assert_eq!(resolved.get("n_trees"), Some(5.0));
    assert_eq!(resolved.get("depth"), Some(1.0));
}

/// Test fit_fn applies the declared ranges.
#[test]
fn test_fit_fn_range_checks() {
    let registry = Registry::<f64>::standard();
    let runmean = registry.lookup("smooth-type-runmean").unwrap();

    let err = runmean
        .fit_fn(&Parameters::new().with("k", 21.0))
        .err()
        .unwrap();
    assert!(matches!(err, SmoothError::ParameterOutOfRange { .. }));

    let err = runmean
        .fit_fn(&Parameters::new().with("k", 2.5))
        .err()
        .unwrap();
    assert!(matches!(err, SmoothError::NonIntegerParameter { .. }));

    // A running line needs at least two neighbors per side
    let runline = registry.lookup("smooth-type-runline").unwrap();
    assert!(runline.fit_fn(&Parameters::new().with("k", 1.0)).is_err());
    assert!(runline.fit_fn(&Parameters::new().with("k", 2.0)).is_ok());
}

/// Test knot positions follow the resolved knot count.
#[test]
fn test_knots() {
    let registry = Registry::<f64>::standard();

    let spline = registry.lookup("smooth-type-spline").unwrap();
    let knots = spline
        .knots(&spline.resolve(&Parameters::new()).unwrap())
        .unwrap()
        .unwrap();
    assert_eq!(knots.len(), 2);
    assert_relative_eq!(knots[0], 1.0 / 3.0, epsilon = 1e-12);
    assert_relative_eq!(knots[1], 2.0 / 3.0, epsilon = 1e-12);

    let resolved = spline
        .resolve(&Parameters::new().with("n", 4.0))
        .unwrap();
    assert_eq!(spline.knots(&resolved).unwrap().unwrap().len(), 4);

    let loess = registry.lookup("smooth-type-loess").unwrap();
    let resolved = loess.resolve(&Parameters::new()).unwrap();
    assert_eq!(loess.knots(&resolved).unwrap(), None);
}

// ============================================================================
// Fitting Tests
// ============================================================================

/// Test every registered smoother fits with its defaults.
#[test]
fn test_every_smoother_fits() {
    let registry = Registry::<f64>::standard();
    let x: Vec<f64> = (0..15).map(|i| (i as f64 + 0.5) / 15.0).collect();
    let y: Vec<f64> = x.iter().map(|&v| 0.5 + 0.3 * (5.0 * v).sin()).collect();
    let query: Vec<f64> = (0..50).map(|i| i as f64 / 50.0).collect();

    for descriptor in registry.iter() {
        let fit = descriptor.fit_fn(&Parameters::new()).unwrap();
        let predict = fit(&x, &y).unwrap();
        let out = predict(&query).unwrap();
        assert_eq!(out.len(), query.len(), "{}", descriptor.id());
        assert!(
            out.iter().all(|v| v.is_finite() && v.abs() < 5.0),
            "{} produced {:?}",
            descriptor.id(),
            out
        );
    }
}

/// Test the registry works at single precision.
#[test]
fn test_registry_f32() {
    let registry = Registry::<f32>::standard();
    let descriptor = registry.lookup("smooth-type-linreg").unwrap();
    let fit = descriptor.fit_fn(&Parameters::new()).unwrap();
    let predict = fit(&[0.0, 1.0], &[1.0, 2.0]).unwrap();
    assert_relative_eq!(predict(&[0.5]).unwrap()[0], 1.5_f32, epsilon = 1e-6);
}
