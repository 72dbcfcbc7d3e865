//! Windowing primitives for neighborhood smoothers.
//!
//! This module provides index windows over x-sorted datasets: the symmetric
//! index-space window used by the running mean and running line, and the
//! sliding nearest-neighbor window used by LOESS.

// External dependencies
use std::ops::RangeInclusive;
use num_traits::Float;

/// Inclusive window bounds `[left, right]` over a sorted dataset.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Window {
    /// Left boundary index (inclusive).
    pub left: usize,

    /// Right boundary index (inclusive).
    pub right: usize,
}

impl Window {
    /// Window of up to `k` points on each side of insertion position `pos`.
    ///
    /// Covers the half-open index range `[pos - k, pos + k)` clamped to `[0, n)`.
    /// Requires `n >= 1` and `k >= 1`, in which case the window is never empty.
    #[inline]
    pub fn symmetric(pos: usize, k: usize, n: usize) -> Self {
        debug_assert!(n >= 1, "symmetric: empty dataset");
        debug_assert!(k >= 1, "symmetric: k must be at least 1");

        let pos = pos.min(n);
        let left = pos.saturating_sub(k).min(n - 1);
        let right = (pos + k).min(n).max(left + 1) - 1;
        Self { left, right }
    }

    /// Initialize a window of `window_size` points centered on index `idx`.
    #[inline]
    pub fn initialize(idx: usize, window_size: usize, n: usize) -> Self {
        debug_assert!(
            window_size >= 1,
            "initialize: window_size must be at least 1"
        );

        if window_size >= n {
            return Self {
                left: 0,
                right: n.saturating_sub(1),
            };
        }

        let half = window_size / 2;
        let mut left = idx.saturating_sub(half);
        let max_left = n - window_size;
        if left > max_left {
            left = max_left;
        }

        let right = left + window_size - 1;
        Self { left, right }
    }

    /// Slide the window until it holds the nearest neighbors of `x_query`.
    ///
    /// The window keeps its length; `x` must be sorted ascending.
    #[inline]
    pub fn recenter<T: Float>(&mut self, x: &[T], x_query: T) {
        let n = x.len();
        debug_assert!(n >= 1, "recenter: empty dataset");

        self.left = self.left.min(n - 1);
        self.right = self.right.min(n - 1);

        // Slide right while the point after the window is closer than the leftmost point
        while self.right < n - 1 {
            let d_left = (x_query - x[self.left]).abs();
            let d_right = (x[self.right + 1] - x_query).abs();

            if d_left <= d_right {
                break;
            }

            self.left += 1;
            self.right += 1;
        }

        // Slide left while the point before the window is strictly closer than the rightmost point
        while self.left > 0 {
            let d_left = (x_query - x[self.left - 1]).abs();
            let d_right = (x[self.right] - x_query).abs();

            if d_right <= d_left {
                break;
            }

            self.left -= 1;
            self.right -= 1;
        }
    }

    /// Maximum distance from `x_query` to any point in the window.
    #[inline]
    pub fn max_distance<T: Float>(&self, x: &[T], x_query: T) -> T {
        T::max(
            (x_query - x[self.left]).abs(),
            (x[self.right] - x_query).abs(),
        )
    }

    /// Index range covered by the window.
    #[inline]
    pub fn range(&self) -> RangeInclusive<usize> {
        self.left..=self.right
    }

    /// Number of points in the window.
    #[inline]
    pub fn len(&self) -> usize {
        self.right - self.left + 1
    }

    /// Check if the window is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.right < self.left
    }
}
