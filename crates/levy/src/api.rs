//! High-level API for Lévy distribution parameters.
//!
//! ## Purpose
//!
//! This module provides a validated parameter object, [`Levy`], and a fluent
//! builder for it. A `Levy` value always holds parameters for which the
//! distribution is defined.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder defaulting to the standard Lévy
//!   distribution (`mu = 0`, `c = 1`).
//! * **Validated**: Parameters are checked when `.build()` or `Levy::new` is
//!   called; builder errors are deferred until then.
//! * **Type-Safe**: Generic over `Float` types.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`LevyBuilder`] via `Levy::builder()`.
//! 2. Chain `.location()` and `.scale()`.
//! 3. Call `.build()` to obtain a [`Levy`].

// External dependencies
use core::fmt::{Display, Formatter, Result as FmtResult};
use num_traits::Float;

// Internal dependencies
use crate::math::stdev::stdev;
use crate::primitives::params::Validator;

// Publicly re-exported types
pub use crate::primitives::errors::LevyError;

// ============================================================================
// Distribution
// ============================================================================

/// A Lévy distribution with validated location and scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Levy<T> {
    mu: T,
    c: T,
}

impl<T: Float> Levy<T> {
    /// Create a distribution, rejecting a NaN location or a non-positive scale.
    pub fn new(mu: T, c: T) -> Result<Self, LevyError> {
        Validator::validate(mu, c)?;
        Ok(Self { mu, c })
    }

    /// Start a fluent builder.
    pub fn builder() -> LevyBuilder<T> {
        LevyBuilder::new()
    }

    /// Location parameter `mu`.
    pub fn location(&self) -> T {
        self.mu
    }

    /// Scale parameter `c`.
    pub fn scale(&self) -> T {
        self.c
    }

    /// Standard deviation. Always `+inf` for a constructed distribution.
    pub fn stdev(&self) -> T {
        stdev(self.mu, self.c)
    }
}

impl<T: Float + Display> Display for Levy<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "Levy(mu={}, c={})", self.mu, self.c)
    }
}

// ============================================================================
// Builder
// ============================================================================

/// Fluent builder for [`Levy`].
#[derive(Debug, Clone)]
pub struct LevyBuilder<T> {
    /// Location parameter (default: 0).
    pub location: Option<T>,

    /// Scale parameter (default: 1).
    pub scale: Option<T>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl<T: Float> Default for LevyBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> LevyBuilder<T> {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            location: None,
            scale: None,
            duplicate_param: None,
        }
    }

    /// Set the location parameter `mu`.
    pub fn location(mut self, mu: T) -> Self {
        if self.location.is_some() {
            self.duplicate_param = Some("location");
        }
        self.location = Some(mu);
        self
    }

    /// Set the scale parameter `c`.
    pub fn scale(mut self, c: T) -> Self {
        if self.scale.is_some() {
            self.duplicate_param = Some("scale");
        }
        self.scale = Some(c);
        self
    }

    /// Validate the configuration and build the distribution.
    pub fn build(self) -> Result<Levy<T>, LevyError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;

        let mu = self.location.unwrap_or_else(T::zero);
        let c = self.scale.unwrap_or_else(T::one);
        Levy::new(mu, c)
    }
}
