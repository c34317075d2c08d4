//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides the distribution statistics as pure functions of the
//! parameters, with no configuration or state.
//!
//! # Architecture
//!
//! ```text
//! Layer 3: API
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Standard deviation.
pub mod stdev;
