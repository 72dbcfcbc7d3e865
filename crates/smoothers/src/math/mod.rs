//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides pure mathematical functions used throughout the crate:
//! - Descriptive statistics (means, deviations, dot products, grids)
//! - Basis expansions and knot placement
//! - Kernel functions for distance-based weighting
//!
//! These are reusable mathematical building blocks with no algorithm-specific logic.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Descriptive statistics.
pub mod stats;

/// Basis expansions of a scalar predictor.
pub mod basis;

/// Kernel (weight) functions for distance-based weighting.
pub mod kernel;
