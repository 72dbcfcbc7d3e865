//! Ridge regression on a standardized design matrix.
//!
//! ## Purpose
//!
//! This module solves the regularized least-squares problem behind every
//! basis-expansion smoother and keeps the standardization needed to score
//! new inputs.
//!
//! ## Design notes
//!
//! * **Standardization**: Every column of `X` and the response are centered and
//!   scaled to unit sample standard deviation before solving. Centering
//!   absorbs the intercept, so bases carry no constant term.
//! * **Shrinkage**: `lambda * I` with entry `[0][0]` zeroed; the linear term is
//!   never penalized.
//! * **Solver**: LU decomposition with partial pivoting (`nalgebra`), in `f64`
//!   regardless of the caller's float type.
//!
//! ## Key concepts
//!
//! ```text
//! beta = (Z'Z + S)^-1 Z'y_z        Z = standardized X, y_z = standardized y
//! f(x) = (beta . z(x)) * sd_y + mean_y
//! ```
//!
//! ## Invariants
//!
//! * `coefficients.len() == x_standardization.mean.len() == x_standardization.sd.len()`.
//! * Every stored standard deviation is strictly positive.
//!
//! ## Non-goals
//!
//! * This module does not choose `lambda`.
//! * This module does not expand raw inputs (see `expansion`).

// External dependencies
use nalgebra::{DMatrix, DVector};
use num_traits::Float;

// Internal dependencies
use crate::math::stats::{dot, mean, sample_sd};
use crate::primitives::errors::SmoothError;

// ============================================================================
// Standardization
// ============================================================================

/// Translation and scale that standardize one variable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Standardization<T> {
    /// Mean of the variable.
    pub mean: T,

    /// Sample standard deviation of the variable.
    pub sd: T,
}

impl<T: Float> Standardization<T> {
    /// Compute the standardization of `v`; `what` names it in errors.
    pub fn compute(v: &[T], what: &str) -> Result<Self, SmoothError> {
        let mean = mean(v)?;
        let sd = sample_sd(v)?;
        if !(sd > T::zero()) || !sd.is_finite() {
            return Err(SmoothError::ZeroVariance(what.to_string()));
        }
        Ok(Self { mean, sd })
    }

    /// Map a raw value to standard units.
    #[inline]
    pub fn apply(&self, v: T) -> T {
        (v - self.mean) / self.sd
    }

    /// Map a value in standard units back to the raw scale.
    #[inline]
    pub fn invert(&self, z: T) -> T {
        z * self.sd + self.mean
    }
}

/// Per-column standardization of a design matrix.
#[derive(Debug, Clone, PartialEq)]
pub struct MatrixStandardization<T> {
    /// Column means.
    pub mean: Vec<T>,

    /// Column sample standard deviations.
    pub sd: Vec<T>,
}

impl<T: Float> MatrixStandardization<T> {
    /// Compute the standardization of every column of `rows`.
    pub fn compute(rows: &[Vec<T>]) -> Result<Self, SmoothError> {
        let p = rows.first().map_or(0, Vec::len);
        let mut means = Vec::with_capacity(p);
        let mut sds = Vec::with_capacity(p);

        let mut column = Vec::with_capacity(rows.len());
        for j in 0..p {
            column.clear();
            column.extend(rows.iter().map(|row| row[j]));
            let s = Standardization::compute(&column, &format!("feature column {j}"))?;
            means.push(s.mean);
            sds.push(s.sd);
        }

        Ok(Self {
            mean: means,
            sd: sds,
        })
    }

    /// Standardize one feature vector.
    pub fn apply(&self, row: &[T]) -> Vec<T> {
        row.iter()
            .zip(self.mean.iter().zip(self.sd.iter()))
            .map(|(&v, (&m, &s))| (v - m) / s)
            .collect()
    }
}

// ============================================================================
// Ridge Fit
// ============================================================================

/// Everything needed to score a fitted ridge regression.
#[derive(Debug, Clone, PartialEq)]
pub struct RidgeFit<T> {
    /// Coefficients on the standardized features.
    pub coefficients: Vec<T>,

    /// Standardization of the design matrix columns.
    pub x_standardization: MatrixStandardization<T>,

    /// Standardization of the response.
    pub y_standardization: Standardization<T>,
}

impl<T: Float> RidgeFit<T> {
    /// Score one already-expanded feature vector.
    pub fn score(&self, features: &[T]) -> T {
        debug_assert_eq!(
            features.len(),
            self.coefficients.len(),
            "score: feature count mismatch"
        );
        let z = self.x_standardization.apply(features);
        self.y_standardization.invert(dot(&self.coefficients, &z))
    }

    /// Number of fitted coefficients.
    pub fn n_features(&self) -> usize {
        self.coefficients.len()
    }
}

/// Fit a ridge regression of `y` on the rows of `design` with shrinkage `lambda`.
pub fn fit_ridge<T: Float>(
    design: &[Vec<T>],
    y: &[T],
    lambda: T,
) -> Result<RidgeFit<T>, SmoothError> {
    if !lambda.is_finite() || lambda < T::zero() {
        return Err(SmoothError::invalid_parameter(
            "lambda",
            lambda.to_f64().unwrap_or(f64::NAN),
            "must be finite and non-negative",
        ));
    }

    let n = design.len();
    if n == 0 {
        return Err(SmoothError::EmptyInput);
    }
    if n != y.len() {
        return Err(SmoothError::MismatchedInputs {
            x_len: n,
            y_len: y.len(),
        });
    }

    let p = design[0].len();
    if p == 0 {
        return Err(SmoothError::SingularSystem { size: 0 });
    }
    debug_assert!(
        design.iter().all(|row| row.len() == p),
        "fit_ridge: ragged design matrix"
    );

    let x_standardization = MatrixStandardization::compute(design)?;
    let y_standardization = Standardization::compute(y, "response")?;

    let z = DMatrix::<f64>::from_fn(n, p, |i, j| {
        let v = (design[i][j] - x_standardization.mean[j]) / x_standardization.sd[j];
        v.to_f64().unwrap_or(f64::NAN)
    });
    let yz = DVector::<f64>::from_iterator(
        n,
        y.iter()
            .map(|&v| y_standardization.apply(v).to_f64().unwrap_or(f64::NAN)),
    );

    let zt = z.transpose();
    let mut xtx = &zt * &z;
    let xty = &zt * &yz;

    // Linear term stays unpenalized
    let lambda_f = lambda.to_f64().unwrap_or(0.0);
    for j in 1..p {
        xtx[(j, j)] += lambda_f;
    }

    let lu = xtx.lu();
    if is_numerically_singular(&lu.u(), p) {
        log::warn!("ridge: singular {p}x{p} system (lambda = {lambda_f}, n = {n})");
        return Err(SmoothError::SingularSystem { size: p });
    }

    let beta = match lu.solve(&xty) {
        Some(beta) if beta.iter().all(|b| b.is_finite()) => beta,
        _ => {
            log::warn!("ridge: LU solve failed for {p}x{p} system (lambda = {lambda_f})");
            return Err(SmoothError::SingularSystem { size: p });
        }
    };

    let coefficients = beta
        .iter()
        .map(|&b| T::from(b).unwrap_or_else(T::nan))
        .collect();

    log::debug!("ridge: fitted {p} coefficients on {n} samples");

    Ok(RidgeFit {
        coefficients,
        x_standardization,
        y_standardization,
    })
}

/// Whether the LU upper factor has a pivot that is zero relative to the largest one.
fn is_numerically_singular(u: &DMatrix<f64>, p: usize) -> bool {
    let pivots = u.diagonal();
    let max_pivot = pivots.iter().fold(0.0_f64, |acc, v| acc.max(v.abs()));
    let min_pivot = pivots.iter().fold(f64::INFINITY, |acc, v| acc.min(v.abs()));
    let threshold = max_pivot * f64::EPSILON * p as f64;
    !(max_pivot > 0.0) || !(min_pivot > threshold)
}
