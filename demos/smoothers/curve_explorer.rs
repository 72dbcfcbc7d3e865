//! Curve Explorer Examples
//!
//! This example walks through the smoother registry on one scatter of points:
//! - Listing every registered smoother with its hyperparameters
//! - Fitting a smoother with its default settings
//! - Sweeping a hyperparameter to see its effect on the curve
//! - Fixed-knot splines and their knot positions
//! - Handling configuration errors
//!
//! Each scenario prints the fitted curve or a short summary of it.

use smoothers::prelude::*;

fn main() -> Result<(), SmoothError> {
    println!("{}", "=".repeat(80));
    println!("Scatterplot Smoothers - Curve Explorer");
    println!("{}", "=".repeat(80));
    println!();

    let registry = Registry::<f64>::standard();
    let data = sample_data();

    example_1_catalog(&registry);
    example_2_default_fit(&registry, &data)?;
    example_3_parameter_sweep(&registry, &data)?;
    example_4_splines(&registry, &data)?;
    example_5_errors(&registry);

    Ok(())
}

/// A noisy hump on the unit interval.
fn sample_data() -> Dataset<f64> {
    let mut data = Dataset::new();
    for i in 0..30 {
        let x = (i as f64 + 0.5) / 30.0;
        // Deterministic pseudo-noise
        let noise = 0.08 * ((i * 7919) % 13) as f64 / 13.0 - 0.04;
        data.push(x, (std::f64::consts::PI * x).sin() + noise);
    }
    data
}

/// Example 1: Catalog
/// Lists every smoother and the hyperparameters it accepts
fn example_1_catalog(registry: &Registry<f64>) {
    println!("Example 1: Catalog");
    println!("{}", "-".repeat(80));

    for descriptor in registry.iter() {
        println!("{:<28} {}", descriptor.id(), descriptor.label());
        for h in descriptor.hyperparameters() {
            println!(
                "    {:<14} {:<22} [{}, {}] step {} default {}",
                h.name, h.label, h.min, h.max, h.step, h.default
            );
        }
    }

    println!();
}

/// Example 2: Default Fit
/// Fits the Gaussian kernel smoother with its default width
fn example_2_default_fit(
    registry: &Registry<f64>,
    data: &Dataset<f64>,
) -> Result<(), SmoothError> {
    println!("Example 2: Default Fit");
    println!("{}", "-".repeat(80));

    let smoother = Smoother::new()
        .algorithm("smooth-type-gaussk")
        .build(registry)?;
    let curve = smoother.fit_dataset(data)?.curve()?;
    println!("{}", curve);

    println!();
    Ok(())
}

/// Example 3: Parameter Sweep
/// Shows how the neighbor count changes a running mean
fn example_3_parameter_sweep(
    registry: &Registry<f64>,
    data: &Dataset<f64>,
) -> Result<(), SmoothError> {
    println!("Example 3: Parameter Sweep");
    println!("{}", "-".repeat(80));

    println!("{:>4} {:>10} {:>10} {:>12}", "k", "min", "max", "roughness");
    for k in [1.0, 2.0, 5.0, 10.0, 20.0] {
        let smoother = Smoother::new()
            .algorithm("smooth-type-runmean")
            .parameter("k", k)
            .grid_size(200)
            .build(registry)?;
        let curve = smoother.fit_dataset(data)?.curve()?;

        let (lo, hi) = curve.y_range().unwrap_or((f64::NAN, f64::NAN));
        let roughness: f64 = curve.y.windows(2).map(|w| (w[1] - w[0]).abs()).sum();
        println!("{:>4} {:>10.4} {:>10.4} {:>12.4}", k, lo, hi, roughness);
    }

    println!();
    Ok(())
}

/// Example 4: Fixed-Knot Splines
/// Compares the four spline families on the same knots
fn example_4_splines(registry: &Registry<f64>, data: &Dataset<f64>) -> Result<(), SmoothError> {
    println!("Example 4: Fixed-Knot Splines");
    println!("{}", "-".repeat(80));

    let query = [0.0, 0.25, 0.5, 0.75, 0.99];
    for id in [
        "smooth-type-pl",
        "smooth-type-quad",
        "smooth-type-spline",
        "smooth-type-natural-spline",
    ] {
        let smoother = Smoother::new()
            .algorithm(id)
            .parameter("n", 4.0)
            .build(registry)?;
        let fitted = smoother.fit_dataset(data)?;

        let knots: Vec<String> = smoother
            .knots()
            .unwrap_or(&[])
            .iter()
            .map(|k| format!("{k:.2}"))
            .collect();
        let values: Vec<String> = fitted
            .predict(&query)?
            .iter()
            .map(|v| format!("{v:7.4}"))
            .collect();

        println!("{:<38} knots [{}]", smoother.label(), knots.join(", "));
        println!("    f({:?}) = [{}]", query, values.join(", "));
    }

    println!();
    Ok(())
}

/// Example 5: Errors
/// Demonstrates how configuration mistakes are reported
fn example_5_errors(registry: &Registry<f64>) {
    println!("Example 5: Errors");
    println!("{}", "-".repeat(80));

    let attempts = [
        Smoother::new().algorithm("smooth-type-wavelet"),
        Smoother::new().algorithm("smooth-type-loess").parameter("span", 40.0),
        Smoother::new().algorithm("smooth-type-tree").parameter("depth", 1.5),
        Smoother::new().parameter("k", 1.0).parameter("k", 2.0),
        Smoother::new().grid_size(0),
    ];

    for builder in attempts {
        match builder.build(registry) {
            Ok(smoother) => println!("built {}", smoother.id()),
            Err(e) => println!("{:?}: {}", e.kind(), e),
        }
    }

    println!();
}
