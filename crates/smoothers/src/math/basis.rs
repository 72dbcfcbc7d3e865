//! Basis expansions of a scalar predictor.
//!
//! ## Purpose
//!
//! A basis is an ordered sequence of scalar functions `[f_1, ..., f_p]`.
//! Expanding `x` through a basis yields the feature vector
//! `[f_1(x), ..., f_p(x)]`, which lets a linear method fit a nonlinear shape.
//!
//! ## Design notes
//!
//! * **No constant term**: Every basis starts at the linear term; the intercept
//!   is recovered by the ridge solver's standardization.
//! * **Linear term first**: Feature 0 is always the raw `x`, which the ridge
//!   solver leaves unpenalized.
//!
//! ## Key concepts
//!
//! | Basis          | Features                                        |
//! |----------------|-------------------------------------------------|
//! | Polynomial(d)  | `x, x^2, ..., x^d`                              |
//! | Piecewise lin. | `x, (x - k_i)+`                                 |
//! | Quadratic      | `x, x^2, (x - k_i)+^2`                          |
//! | Cubic          | `x, x^2, x^3, (x - k_i)+^3`                     |
//! | Natural cubic  | `x, d_k(x) - d_{m-2}(x)` for `k = 0..m-3`       |
//!
//! ## Invariants
//!
//! * `expand(x).len() == dim()` for every `x`.
//! * Natural cubic spline features are affine outside `[k_0, k_{m-1}]`.
//!
//! ## Non-goals
//!
//! * This module does not check that knots are sorted or distinct.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::stats::linspace;

// ============================================================================
// Knot Placement
// ============================================================================

/// `n` equally spaced knots strictly inside `(0, 1)`.
pub fn make_knots<T: Float>(n: usize) -> Vec<T> {
    let grid = linspace(T::zero(), T::one(), n + 2);
    grid[1..=n].to_vec()
}

/// Positive part `max(t, 0)`.
#[inline]
fn pos<T: Float>(t: T) -> T {
    t.max(T::zero())
}

// ============================================================================
// Basis
// ============================================================================

/// A basis of scalar functions over a single predictor.
#[derive(Debug, Clone, PartialEq)]
pub enum Basis<T> {
    /// Powers `x^1 .. x^degree`.
    Polynomial {
        /// Highest power.
        degree: usize,
    },

    /// Piecewise linear spline with truncated linear terms at each knot.
    PiecewiseLinear {
        /// Breakpoints.
        knots: Vec<T>,
    },

    /// Quadratic spline with truncated quadratic terms at each knot.
    Quadratic {
        /// Breakpoints.
        knots: Vec<T>,
    },

    /// Unrestricted cubic spline with truncated cubic terms at each knot.
    Cubic {
        /// Breakpoints.
        knots: Vec<T>,
    },

    /// Cubic spline constrained to be linear beyond the boundary knots.
    NaturalCubic {
        /// Breakpoints, ascending.
        knots: Vec<T>,
    },
}

impl<T: Float> Basis<T> {
    /// Polynomial basis of the given degree.
    pub fn polynomial(degree: usize) -> Self {
        Self::Polynomial { degree }
    }

    /// Knots of a spline basis; `None` for the polynomial basis.
    pub fn knots(&self) -> Option<&[T]> {
        match self {
            Self::Polynomial { .. } => None,
            Self::PiecewiseLinear { knots }
            | Self::Quadratic { knots }
            | Self::Cubic { knots }
            | Self::NaturalCubic { knots } => Some(knots),
        }
    }

    /// Number of features produced per input value.
    pub fn dim(&self) -> usize {
        match self {
            Self::Polynomial { degree } => *degree,
            Self::PiecewiseLinear { knots } => 1 + knots.len(),
            Self::Quadratic { knots } => 2 + knots.len(),
            Self::Cubic { knots } => 3 + knots.len(),
            Self::NaturalCubic { knots } => 1 + knots.len().saturating_sub(2),
        }
    }

    /// Evaluate every basis function at `x`, in order.
    pub fn expand(&self, x: T) -> Vec<T> {
        let mut out = Vec::with_capacity(self.dim());
        self.expand_into(x, &mut out);
        out
    }

    /// Evaluate every basis function at `x`, appending to `out`.
    pub fn expand_into(&self, x: T, out: &mut Vec<T>) {
        match self {
            Self::Polynomial { degree } => {
                let mut p = T::one();
                for _ in 0..*degree {
                    p = p * x;
                    out.push(p);
                }
            }
            Self::PiecewiseLinear { knots } => {
                out.push(x);
                out.extend(knots.iter().map(|&k| pos(x - k)));
            }
            Self::Quadratic { knots } => {
                out.push(x);
                out.push(x * x);
                out.extend(knots.iter().map(|&k| {
                    let t = pos(x - k);
                    t * t
                }));
            }
            Self::Cubic { knots } => {
                out.push(x);
                out.push(x * x);
                out.push(x * x * x);
                out.extend(knots.iter().map(|&k| {
                    let t = pos(x - k);
                    t * t * t
                }));
            }
            Self::NaturalCubic { knots } => {
                out.push(x);
                let m = knots.len();
                if m < 3 {
                    return;
                }
                let last = knots[m - 1];
                let d = |j: usize| {
                    let a = pos(x - knots[j]);
                    let b = pos(x - last);
                    (a * a * a - b * b * b) / (last - knots[j])
                };
                let d_ref = d(m - 2);
                for k in 0..m - 2 {
                    out.push(d(k) - d_ref);
                }
            }
        }
    }

    /// Expand every value of `xs`; one row per input.
    pub fn design_matrix(&self, xs: &[T]) -> Vec<Vec<T>> {
        xs.iter().map(|&x| self.expand(x)).collect()
    }
}

// ============================================================================
// Spline Families
// ============================================================================

/// Fixed-knot spline families understood by the spline regressor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BasisFamily {
    /// Piecewise linear spline.
    PiecewiseLinear,

    /// Quadratic spline.
    Quadratic,

    /// Unrestricted cubic spline.
    Cubic,

    /// Natural cubic spline.
    NaturalCubic,
}

impl BasisFamily {
    /// Get the name of the family.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::PiecewiseLinear => "PiecewiseLinear",
            Self::Quadratic => "Quadratic",
            Self::Cubic => "Cubic",
            Self::NaturalCubic => "NaturalCubic",
        }
    }

    /// Build the basis of this family over `knots`.
    pub fn build<T: Float>(&self, knots: Vec<T>) -> Basis<T> {
        match self {
            Self::PiecewiseLinear => Basis::PiecewiseLinear { knots },
            Self::Quadratic => Basis::Quadratic { knots },
            Self::Cubic => Basis::Cubic { knots },
            Self::NaturalCubic => Basis::NaturalCubic { knots },
        }
    }
}
