//! Kernel (weight) functions for distance-weighted smoothers.
//!
//! ## Purpose
//!
//! This module provides the kernels that turn a normalized distance
//! `u = |x - x_i| / h` into a weight. The Gaussian kernel drives the kernel
//! smoother; the tricube kernel drives LOESS.
//!
//! ## Design notes
//!
//! * **Normalization**: Weights are unnormalized; callers divide by their sum.
//! * **Support**: Tricube is bounded on [-1, 1]; Gaussian is unbounded.
//! * **No floor**: Gaussian weights may underflow to exactly zero for large
//!   `u`; the kernel smoother measures distance in excess of the nearest
//!   sample so that its total weight stays positive.
//!
//! ## Invariants
//!
//! * Kernels are non-negative (K(u) >= 0) and symmetric (K(u) = K(-u)).
//! * Bounded kernels return exactly zero outside their support.

// External dependencies
use num_traits::Float;

// ============================================================================
// Weight Function Enum
// ============================================================================

/// Weight function (kernel) for distance-weighted smoothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WeightFunction {
    /// Gaussian kernel: K(u) = exp(-u^2 / 2).
    Gaussian,

    /// Tricube kernel: K(u) = (1 - |u|^3)^3 for |u| < 1.
    #[default]
    Tricube,
}

impl WeightFunction {
    /// Get the name of the weight function.
    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            WeightFunction::Gaussian => "Gaussian",
            WeightFunction::Tricube => "Tricube",
        }
    }

    /// Returns the support interval for bounded kernels.
    #[inline]
    pub fn support(&self) -> Option<(f64, f64)> {
        match self {
            WeightFunction::Gaussian => None,
            WeightFunction::Tricube => Some((-1.0, 1.0)),
        }
    }

    /// Returns `true` if the kernel has bounded support.
    #[inline]
    pub fn is_bounded(&self) -> bool {
        self.support().is_some()
    }

    /// Compute the unnormalized weight K(u) for a given normalized distance.
    #[inline]
    pub fn compute_weight<T: Float>(&self, u: T) -> T {
        let abs_u = u.abs();

        if self.is_bounded() && abs_u >= T::one() {
            return T::zero();
        }

        match self {
            WeightFunction::Gaussian => {
                let half = T::from(0.5).unwrap();
                (-half * abs_u * abs_u).exp()
            }
            WeightFunction::Tricube => {
                let tmp = T::one() - abs_u * abs_u * abs_u;
                tmp * tmp * tmp
            }
        }
    }

    /// Gaussian bandwidth `h` such that `K(d / h) = exp(-d^2 / lambda)`.
    #[inline]
    pub fn gaussian_bandwidth<T: Float>(lambda: T) -> T {
        (lambda / T::from(2.0).unwrap()).sqrt()
    }

    /// Weight every point of `x[left..=right]` against `x_query`.
    ///
    /// Writes weights into `weights[left..=right]` and returns their sum.
    /// A non-positive bandwidth assigns weight one to points exactly at the
    /// query and zero elsewhere.
    pub fn compute_window_weights<T: Float>(
        &self,
        x: &[T],
        left: usize,
        right: usize,
        x_query: T,
        bandwidth: T,
        weights: &mut [T],
    ) -> T {
        let n = x.len();
        if n == 0 || left > right || right >= n {
            return T::zero();
        }

        let mut sum = T::zero();
        for j in left..=right {
            let distance = (x[j] - x_query).abs();
            let w = if bandwidth <= T::zero() {
                if distance == T::zero() {
                    T::one()
                } else {
                    T::zero()
                }
            } else {
                self.compute_weight(distance / bandwidth)
            };
            weights[j] = w;
            sum = sum + w;
        }
        sum
    }
}
