//! Sorting utilities for scatterplot data.
//!
//! ## Purpose
//!
//! This module orders `(x, y)` samples by ascending x and provides the
//! monotonic index search used by every neighborhood-based smoother and by
//! the regression tree.
//!
//! ## Design notes
//!
//! * **Stability**: Uses stable sorting to preserve the relative order of equal x-values.
//! * **Fast path**: Already-sorted input is copied without sorting.
//!
//! ## Invariants
//!
//! * Sorted x-values are non-decreasing (for finite values).
//! * `y[i]` is the response paired with `x[i]` in the original input.
//!
//! ## Non-goals
//!
//! * This module does not perform data validation.

// External dependencies
use std::cmp::Ordering;
use num_traits::Float;

// ============================================================================
// Data Structures
// ============================================================================

/// Input data reordered by ascending x-coordinate.
#[derive(Debug, Clone, PartialEq)]
pub struct SortedData<T> {
    /// Sorted x-coordinates.
    pub x: Vec<T>,

    /// Y-coordinates reordered to match sorted x-coordinates.
    pub y: Vec<T>,
}

impl<T: Float> SortedData<T> {
    /// Number of samples.
    #[inline]
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// Whether there are no samples.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }
}

// ============================================================================
// Sorting Functions
// ============================================================================

/// Sort input data by x-coordinates in ascending order.
///
/// 1. Checks if data is already sorted (fast path).
/// 2. Pairs x with original indices and performs a stable sort.
/// 3. Gathers y through the permutation.
#[inline]
pub fn sort_by_x<T: Float>(x: &[T], y: &[T]) -> SortedData<T> {
    debug_assert_eq!(x.len(), y.len(), "sort_by_x: length mismatch");

    if x.windows(2).all(|w| w[0] <= w[1]) {
        return SortedData {
            x: x.to_vec(),
            y: y.to_vec(),
        };
    }

    let mut pairs: Vec<(T, usize)> = x.iter().enumerate().map(|(i, &xi)| (xi, i)).collect();

    // Stable sort keeps ties in insertion order
    pairs.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(Ordering::Equal));

    SortedData {
        x: pairs.iter().map(|p| p.0).collect(),
        y: pairs.iter().map(|p| y[p.1]).collect(),
    }
}

/// Insertion index of `value` in `sorted`, placed after any equal elements.
#[inline]
pub fn bisect_right<T: Float>(sorted: &[T], value: T) -> usize {
    sorted.partition_point(|&xi| xi <= value)
}
