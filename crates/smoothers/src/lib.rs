//! # smoothers: Interactive Scatterplot Smoothing for Rust
//!
//! A library of regression and nonparametric curve-fitting algorithms behind
//! one uniform interface: pick a smoother by id, set its hyperparameters, fit
//! it to a scatter of `(x, y)` points, and sample the fitted curve.
//!
//! ## Available smoothers
//!
//! | Id                           | Smoother                                 |
//! |------------------------------|------------------------------------------|
//! | `smooth-type-mean`           | Constant mean                            |
//! | `smooth-type-runmean`        | Running mean                             |
//! | `smooth-type-linreg`         | Least-squares line                       |
//! | `smooth-type-gaussk`         | Gaussian kernel smoother                 |
//! | `smooth-type-runline`        | Running line                             |
//! | `smooth-type-loess`          | Local linear regression (LOESS)          |
//! | `smooth-type-polyreg`        | Polynomial ridge regression              |
//! | `smooth-type-pl`             | Piecewise linear spline (fixed knots)    |
//! | `smooth-type-quad`           | Quadratic spline (fixed knots)           |
//! | `smooth-type-spline`         | Cubic spline (fixed knots)               |
//! | `smooth-type-natural-spline` | Natural cubic spline (fixed knots)       |
//! | `smooth-type-tree`           | Regression tree                          |
//! | `smooth-type-boosting`       | Gradient-boosted trees                   |
//!
//! ## Quick Start
//!
//! ```rust
//! use smoothers::prelude::*;
//!
//! let x = vec![0.05, 0.2, 0.35, 0.5, 0.65, 0.8, 0.95];
//! let y = vec![0.1, 0.35, 0.5, 0.55, 0.5, 0.35, 0.1];
//!
//! let registry = Registry::<f64>::standard();
//!
//! // Select and configure the smoother
//! let smoother = Smoother::new()
//!     .algorithm("smooth-type-natural-spline")
//!     .parameter("n", 3.0)
//!     .parameter("lambda", 0.0001)
//!     .build(&registry)?;
//!
//! // Fit it and sample the curve on [0, 1)
//! let fitted = smoother.fit(&x, &y)?;
//! let curve = fitted.curve()?;
//!
//! assert_eq!(curve.len(), 100);
//! println!("{}", curve);
//! # Result::<(), SmoothError>::Ok(())
//! ```
//!
//! ### Result and Error Handling
//!
//! Every fallible operation returns `Result<_, SmoothError>`; errors are
//! classified by [`SmoothError::kind`](prelude::SmoothError::kind):
//!
//! ```rust
//! use smoothers::prelude::*;
//!
//! let registry = Registry::<f64>::standard();
//! let err = Smoother::new()
//!     .algorithm("smooth-type-runmean")
//!     .parameter("k", 50.0)
//!     .build(&registry)
//!     .unwrap_err();
//!
//! assert_eq!(err.kind(), ErrorKind::InvalidParameter);
//! ```
//!
//! ## Lower-level interface
//!
//! The builder packages the chain `parameters -> fit(xs, ys) -> predict(query)`.
//! The chain is also available directly through the registry:
//!
//! ```rust
//! use smoothers::prelude::*;
//!
//! let registry = Registry::<f64>::standard();
//! let descriptor = registry.lookup("smooth-type-linreg")?;
//!
//! let fit = descriptor.fit_fn(&Parameters::new())?;
//! let predict = fit(&[0.0, 1.0, 2.0], &[1.0, 3.0, 5.0])?;
//!
//! assert_eq!(predict(&[3.0])?, vec![7.0]);
//! # Result::<(), SmoothError>::Ok(())
//! ```
//!
//! ## Logging
//!
//! Diagnostics go through the [`log`](https://docs.rs/log) facade: `debug`
//! for configuration and fit sizes, `warn` for singular ridge systems. The
//! crate never installs a logger.
//!
//! ## License
//!
//! See the repository for license information and contribution guidelines.

// Layer 1: Primitives - data structures and basic utilities.
mod primitives;

// Layer 2: Math - pure mathematical functions.
mod math;

// Layer 3: Algorithms - fitting algorithms.
mod algorithms;

// Layer 4: Engine - parameters, validation, factories and the registry.
mod engine;

// High-level fluent API.
mod api;

// Standard prelude.
pub mod prelude {
    pub use crate::api::{
        BasisFamily, ConfiguredSmoother, DEFAULT_GRID_SIZE, Dataset, ErrorKind, FittedSmoother,
        Hyperparameter, Parameters, Registry, SmoothError, SmoothedCurve, SmootherBuilder,
        SmootherBuilder as Smoother, SmootherDescriptor,
    };
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for integration tests and demos.
#[doc(hidden)]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod math {
        pub use crate::math::*;
    }
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
