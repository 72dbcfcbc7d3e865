//! Append-only scatterplot dataset.
//!
//! A [`Dataset`] is the pair of columns `(xs, ys)` a user builds by placing
//! points one at a time. Both columns grow together, so they always have the
//! same length and are always handed to a smoother as a pair.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::SmoothError;

/// Ordered pair of equal-length x and y columns.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Dataset<T> {
    xs: Vec<T>,
    ys: Vec<T>,
}

impl<T: Float> Dataset<T> {
    /// Create an empty dataset.
    pub fn new() -> Self {
        Self {
            xs: Vec::new(),
            ys: Vec::new(),
        }
    }

    /// Build a dataset from two columns, which must have the same length.
    pub fn from_columns(xs: Vec<T>, ys: Vec<T>) -> Result<Self, SmoothError> {
        if xs.len() != ys.len() {
            return Err(SmoothError::MismatchedInputs {
                x_len: xs.len(),
                y_len: ys.len(),
            });
        }
        Ok(Self { xs, ys })
    }

    /// Append one point.
    pub fn push(&mut self, x: T, y: T) {
        self.xs.push(x);
        self.ys.push(y);
    }

    /// Remove every point.
    pub fn clear(&mut self) {
        self.xs.clear();
        self.ys.clear();
    }

    /// Number of points.
    #[inline]
    pub fn len(&self) -> usize {
        self.xs.len()
    }

    /// Whether the dataset holds no points.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    /// The x column.
    #[inline]
    pub fn xs(&self) -> &[T] {
        &self.xs
    }

    /// The y column.
    #[inline]
    pub fn ys(&self) -> &[T] {
        &self.ys
    }

    /// Both columns, in the order a fit function consumes them.
    #[inline]
    pub fn columns(&self) -> (&[T], &[T]) {
        (&self.xs, &self.ys)
    }
}

impl<T: Float> Extend<(T, T)> for Dataset<T> {
    fn extend<I: IntoIterator<Item = (T, T)>>(&mut self, iter: I) {
        for (x, y) in iter {
            self.push(x, y);
        }
    }
}

impl<T: Float> FromIterator<(T, T)> for Dataset<T> {
    fn from_iter<I: IntoIterator<Item = (T, T)>>(iter: I) -> Self {
        let mut data = Self::new();
        data.extend(iter);
        data
    }
}
