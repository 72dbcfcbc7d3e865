//! Layer 4: Engine
//!
//! # Purpose
//!
//! This layer turns the algorithms into configurable smoothers: it describes
//! their hyperparameters, validates inputs and parameters, builds fit
//! functions from parameter maps, and collects everything in a registry.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine ← You are here
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Hyperparameter descriptors and parameter maps.
pub mod parameters;

/// Validation utilities.
pub mod validator;

/// Factories from parameters to fit functions.
pub mod smoother;

/// The smoother registry.
pub mod registry;

/// Output types for fitted smoothers.
pub mod output;
