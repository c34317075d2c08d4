//! # levy — Lévy distribution statistics for Rust
//!
//! Standard deviation of the Lévy distribution with location `mu` and scale
//! `c`.
//!
//! ## What is the Lévy distribution?
//!
//! The Lévy distribution is a continuous distribution supported on
//! `(mu, inf)`. It is heavy-tailed: its mean and variance are infinite for
//! every valid parameterization (`c > 0`), so its standard deviation is
//! `+inf`.
//!
//! ## Quick Start
//!
//! ```rust
//! use levy::prelude::*;
//!
//! let sd = stdev(0.0_f64, 1.0);
//! assert_eq!(sd, f64::INFINITY);
//!
//! // Invalid parameters are reported as NaN, never as a panic.
//! assert!(stdev(2.0_f64, -1.0).is_nan());
//! assert!(stdev(f64::NAN, 1.0).is_nan());
//! ```
//!
//! ### Checked Parameters
//!
//! When invalid parameters should be an error rather than NaN, build a
//! [`Levy`](prelude::Levy) value:
//!
//! ```rust
//! use levy::prelude::*;
//!
//! let dist = Levy::builder()
//!     .location(5.0)
//!     .scale(2.0)
//!     .build()?;
//!
//! assert_eq!(dist.stdev(), f64::INFINITY);
//! println!("{}", dist);
//!
//! assert_eq!(Levy::new(0.0, 0.0), Err(LevyError::InvalidScale(0.0)));
//! # Result::<(), LevyError>::Ok(())
//! ```
//!
//! ```text
//! Levy(mu=5, c=2)
//! ```
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! Disable default features to remove the standard library dependency:
//!
//! ```toml
//! [dependencies]
//! levy = { version = "0.1", default-features = false }
//! ```
//!
//! Both `f64` and `f32` are supported:
//!
//! ```rust
//! use levy::prelude::*;
//!
//! assert_eq!(stdev(0.5_f32, 3.0), f32::INFINITY);
//! ```
//!
//! ## License
//!
//! See the repository for license information and contribution guidelines.

#![cfg_attr(not(feature = "std"), no_std)]

// Layer 1: Primitives - errors and parameter validation.
mod primitives;

// Layer 2: Math - pure distribution statistics.
mod math;

// High-level API for validated parameters.
mod api;

// Standard prelude.
pub mod prelude {
    pub use crate::api::{Levy, LevyBuilder, LevyError};
    pub use crate::math::stdev::stdev;
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing purposes.
// It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod math {
        pub use crate::math::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
