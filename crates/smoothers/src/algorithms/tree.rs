//! Regression trees on a single input.
//!
//! ## Purpose
//!
//! This module fits piecewise-constant regression trees by recursive binary
//! splitting on x, minimizing the summed squared error of the two children.
//!
//! ## Design notes
//!
//! * **Sort once**: The data is sorted by x before growing; every node then
//!   owns a contiguous slice, so a split is a cut position in that slice.
//! * **Prefix sums**: Candidate splits are scored in one pass from running
//!   sums of the (centered) responses.
//! * **Thresholds**: Candidates are midpoints of adjacent distinct x-values.
//!   The first minimum in ascending order wins; `x <= threshold` goes left.
//!
//! ## Invariants
//!
//! * `depth() <= max_depth` and `n_leaves() <= 2^depth()`.
//! * Every leaf holds the mean response of the samples routed to it.
//!
//! ## Non-goals
//!
//! * This module does not prune, and does not enforce a minimum leaf size.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::Predictor;
use crate::math::stats::mean;
use crate::primitives::errors::SmoothError;
use crate::primitives::sorting::sort_by_x;

// ============================================================================
// Tree Nodes
// ============================================================================

/// A node of a regression tree.
#[derive(Debug, Clone, PartialEq)]
pub enum TreeNode<T> {
    /// Terminal node predicting a constant.
    Leaf {
        /// Mean response of the samples in this leaf.
        value: T,
    },

    /// Binary split on x.
    Internal {
        /// Points with `x <= threshold` go left.
        threshold: T,
        /// Subtree for `x <= threshold`.
        left: Box<TreeNode<T>>,
        /// Subtree for `x > threshold`.
        right: Box<TreeNode<T>>,
    },
}

impl<T: Float> TreeNode<T> {
    /// Descend to the leaf that owns `x`.
    pub fn evaluate(&self, x: T) -> T {
        let mut node = self;
        loop {
            match node {
                TreeNode::Leaf { value } => return *value,
                TreeNode::Internal {
                    threshold,
                    left,
                    right,
                } => {
                    node = if x <= *threshold { left } else { right };
                }
            }
        }
    }

    /// Number of split levels below this node.
    pub fn depth(&self) -> usize {
        match self {
            TreeNode::Leaf { .. } => 0,
            TreeNode::Internal { left, right, .. } => 1 + left.depth().max(right.depth()),
        }
    }

    /// Number of leaves below this node.
    pub fn n_leaves(&self) -> usize {
        match self {
            TreeNode::Leaf { .. } => 1,
            TreeNode::Internal { left, right, .. } => left.n_leaves() + right.n_leaves(),
        }
    }
}

// ============================================================================
// Regression Tree
// ============================================================================

/// A fitted regression tree.
#[derive(Debug, Clone, PartialEq)]
pub struct RegressionTree<T> {
    root: TreeNode<T>,
}

impl<T: Float> RegressionTree<T> {
    /// Grow a tree of at most `max_depth` levels on `(xs, ys)`.
    pub fn fit(xs: &[T], ys: &[T], max_depth: usize) -> Result<Self, SmoothError> {
        if xs.len() != ys.len() {
            return Err(SmoothError::MismatchedInputs {
                x_len: xs.len(),
                y_len: ys.len(),
            });
        }
        if xs.is_empty() {
            return Err(SmoothError::EmptyInput);
        }

        let sorted = sort_by_x(xs, ys);
        let root = grow(&sorted.x, &sorted.y, max_depth)?;
        log::debug!(
            "tree: grew depth {} with {} leaves on {} samples",
            root.depth(),
            root.n_leaves(),
            xs.len()
        );
        Ok(Self { root })
    }

    /// Root node.
    pub fn root(&self) -> &TreeNode<T> {
        &self.root
    }

    /// Depth of the fitted tree (0 for a single leaf).
    pub fn depth(&self) -> usize {
        self.root.depth()
    }

    /// Number of leaves.
    pub fn n_leaves(&self) -> usize {
        self.root.n_leaves()
    }
}

impl<T: Float> Predictor<T> for RegressionTree<T> {
    fn predict_point(&self, x: T) -> Result<T, SmoothError> {
        Ok(self.root.evaluate(x))
    }
}

/// Grow a subtree on a slice already sorted by x.
fn grow<T: Float>(xs: &[T], ys: &[T], max_depth: usize) -> Result<TreeNode<T>, SmoothError> {
    let value = mean(ys)?;
    if max_depth == 0 || xs.len() <= 1 {
        return Ok(TreeNode::Leaf { value });
    }

    let Some((cut, threshold)) = best_split(xs, ys, value) else {
        return Ok(TreeNode::Leaf { value });
    };

    let left = grow(&xs[..cut], &ys[..cut], max_depth - 1)?;
    let right = grow(&xs[cut..], &ys[cut..], max_depth - 1)?;
    Ok(TreeNode::Internal {
        threshold,
        left: Box::new(left),
        right: Box::new(right),
    })
}

/// Best cut position and threshold, or `None` when all x are equal.
///
/// Responses are centered on `center` before accumulating, which keeps the
/// prefix-sum SSE formula well conditioned.
fn best_split<T: Float>(xs: &[T], ys: &[T], center: T) -> Option<(usize, T)> {
    let n = xs.len();
    let half = T::from(0.5).unwrap();

    let (total, total_sq) = ys.iter().fold((T::zero(), T::zero()), |(s, sq), &y| {
        let d = y - center;
        (s + d, sq + d * d)
    });

    let mut best: Option<(usize, T, T)> = None;
    let mut left_sum = T::zero();
    let mut left_sq = T::zero();

    for i in 1..n {
        let d = ys[i - 1] - center;
        left_sum = left_sum + d;
        left_sq = left_sq + d * d;

        if xs[i] <= xs[i - 1] {
            continue;
        }

        let n_left = T::from(i).unwrap();
        let n_right = T::from(n - i).unwrap();
        let right_sum = total - left_sum;
        let right_sq = total_sq - left_sq;

        let sse = (left_sq - left_sum * left_sum / n_left)
            + (right_sq - right_sum * right_sum / n_right);

        if best.is_none_or(|(_, _, best_sse)| sse < best_sse) {
            let threshold = (xs[i - 1] + xs[i]) * half;
            best = Some((i, threshold, sse));
        }
    }

    best.map(|(cut, threshold, _)| (cut, threshold))
}
