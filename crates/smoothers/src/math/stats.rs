//! Descriptive statistics shared by every smoother.
//!
//! ## Purpose
//!
//! Means, weighted means, sample standard deviations, dot products, and
//! evenly spaced grids. Every algorithm above this layer is built from these.
//!
//! ## Design notes
//!
//! * **Explicit failure**: Empty input, zero total weight, and too few points for
//!   a sample deviation are reported as errors instead of producing NaN.
//! * **Generics**: All helpers are generic over `Float` types.
//!
//! ## Non-goals
//!
//! * This module does not check inputs for NaN or infinity.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::SmoothError;

/// Arithmetic mean of `v`.
pub fn mean<T: Float>(v: &[T]) -> Result<T, SmoothError> {
    if v.is_empty() {
        return Err(SmoothError::EmptyInput);
    }
    let n = T::from(v.len()).unwrap_or_else(T::one);
    Ok(sum(v) / n)
}

/// Mean of `v` weighted by `w`; weights need not be normalized.
pub fn weighted_mean<T: Float>(v: &[T], w: &[T]) -> Result<T, SmoothError> {
    if v.is_empty() {
        return Err(SmoothError::EmptyInput);
    }
    if v.len() != w.len() {
        return Err(SmoothError::MismatchedInputs {
            x_len: v.len(),
            y_len: w.len(),
        });
    }

    let total = sum(w);
    if total == T::zero() {
        return Err(SmoothError::ZeroWeight);
    }
    Ok(dot(v, w) / total)
}

/// Sample standard deviation of `v` (n - 1 denominator).
pub fn sample_sd<T: Float>(v: &[T]) -> Result<T, SmoothError> {
    let n = v.len();
    if n < 2 {
        return Err(SmoothError::TooFewPoints { got: n, min: 2 });
    }

    let m = mean(v)?;
    let ss = v.iter().fold(T::zero(), |acc, &vi| {
        let d = vi - m;
        acc + d * d
    });
    let dof = T::from(n - 1).unwrap_or_else(T::one);
    Ok((ss / dof).sqrt())
}

/// Dot product of two equal-length vectors.
#[inline]
pub fn dot<T: Float>(a: &[T], b: &[T]) -> T {
    debug_assert_eq!(a.len(), b.len(), "dot: length mismatch");
    a.iter()
        .zip(b.iter())
        .fold(T::zero(), |acc, (&ai, &bi)| acc + ai * bi)
}

/// Sum of a vector.
#[inline]
pub fn sum<T: Float>(v: &[T]) -> T {
    v.iter().fold(T::zero(), |acc, &vi| acc + vi)
}

/// Lift a scalar function to one mapping slices to vectors.
pub fn vectorize<T, F>(f: F) -> impl Fn(&[T]) -> Vec<T>
where
    T: Float,
    F: Fn(T) -> T,
{
    move |xs: &[T]| xs.iter().map(|&x| f(x)).collect()
}

/// `n` evenly spaced points from `start` to `end`, both included.
pub fn linspace<T: Float>(start: T, end: T, n: usize) -> Vec<T> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let steps = T::from(n - 1).unwrap_or_else(T::one);
            let step = (end - start) / steps;
            (0..n)
                .map(|i| {
                    if i == n - 1 {
                        end
                    } else {
                        start + step * T::from(i).unwrap_or_else(T::zero)
                    }
                })
                .collect()
        }
    }
}

/// `n` evenly spaced points `0, 1/n, ..., (n-1)/n` covering `[0, 1)`.
pub fn unit_grid<T: Float>(n: usize) -> Vec<T> {
    let denom = T::from(n).unwrap_or_else(T::one);
    (0..n)
        .map(|i| T::from(i).unwrap_or_else(T::zero) / denom)
        .collect()
}
