//! Output types for a fitted smoother.
//!
//! ## Purpose
//!
//! This module defines [`SmoothedCurve`], the fitted curve sampled on a grid
//! and ready to hand to a renderer, together with the metadata describing
//! how it was produced.
//!
//! ## Design notes
//!
//! * **Self-describing**: The curve carries the smoother's id, label and the
//!   resolved parameters that produced it.
//! * **Knots**: Fixed-knot smoothers attach their knot positions so a
//!   renderer can mark them.
//! * **Ergonomics**: Implements `Display` for human-readable output.
//!
//! ## Invariants
//!
//! * `x.len() == y.len()`.
//! * `x` is ascending.
//!
//! ## Non-goals
//!
//! * This module does not perform calculations; it only stores results.
//! * This module does not provide serialization/deserialization logic.

// External dependencies
use num_traits::Float;
use std::fmt::{Debug, Display, Formatter, Result};

// Internal dependencies
use crate::engine::parameters::Parameters;

// ============================================================================
// Result Structure
// ============================================================================

/// A fitted curve sampled on a grid.
#[derive(Debug, Clone, PartialEq)]
pub struct SmoothedCurve<T> {
    /// Registry id of the smoother.
    pub id: String,

    /// Human-readable label of the smoother.
    pub label: String,

    /// Resolved hyperparameters used for the fit.
    pub parameters: Parameters,

    /// Number of training points.
    pub n_points: usize,

    /// Grid x-values.
    pub x: Vec<T>,

    /// Fitted values at the grid.
    pub y: Vec<T>,

    /// Knot positions, for fixed-knot smoothers.
    pub knots: Option<Vec<T>>,
}

impl<T: Float> SmoothedCurve<T> {
    /// Number of grid points.
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// Whether the curve has no grid points.
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Check if knot positions are attached.
    pub fn has_knots(&self) -> bool {
        self.knots.is_some()
    }

    /// Iterate over `(x, y)` vertices of the curve.
    pub fn points(&self) -> impl Iterator<Item = (T, T)> + '_ {
        self.x.iter().copied().zip(self.y.iter().copied())
    }

    /// Smallest and largest fitted value, if any.
    pub fn y_range(&self) -> Option<(T, T)> {
        let mut iter = self.y.iter().copied();
        let first = iter.next()?;
        Some(iter.fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v))))
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl<T: Float + Display + Debug> Display for SmoothedCurve<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Summary:")?;
        writeln!(f, "  Smoother:    {} ({})", self.label, self.id)?;
        writeln!(f, "  Data points: {}", self.n_points)?;
        if !self.parameters.is_empty() {
            writeln!(f, "  Parameters:  {}", self.parameters)?;
        }
        if let Some(knots) = &self.knots {
            write!(f, "  Knots:      ")?;
            for k in knots {
                write!(f, " {:.4}", k)?;
            }
            writeln!(f)?;
        }
        writeln!(f)?;

        writeln!(f, "Fitted Curve:")?;
        writeln!(f, "{:>8} {:>12}", "X", "Y_smooth")?;
        writeln!(f, "{:-<width$}", "", width = 21)?;

        // Data rows (show first 10 and last 10 if more than 20 points)
        let n = self.x.len();
        let rows_to_show: Vec<usize> = if n <= 20 {
            (0..n).collect()
        } else {
            (0..10).chain(n - 10..n).collect()
        };

        let mut prev_idx = 0;
        for (i, &idx) in rows_to_show.iter().enumerate() {
            // Add ellipsis if we skipped rows
            if i > 0 && idx != prev_idx + 1 {
                writeln!(f, "{:>8}", "...")?;
            }
            prev_idx = idx;

            writeln!(f, "{:>8.2} {:>12.6}", self.x[idx], self.y[idx])?;
        }

        Ok(())
    }
}
