//! Error types for checked Lévy parameter handling.
//!
//! ## Purpose
//!
//! This module defines the error conditions reported when a Lévy
//! distribution is constructed from invalid parameters.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors carry the offending value where there is one.
//! * **Deferred**: Builder errors are stored and reported by `build()`.
//! * **No-std**: Only `Display` is required; `std::error::Error` is
//!   implemented when `std` is enabled.
//!
//! ## Invariants
//!
//! * The unchecked `stdev` function never produces a `LevyError`; it reports
//!   undefined results as NaN.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.

// Feature-gated imports
#[cfg(feature = "std")]
use std::error::Error;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for Lévy parameter validation.
#[derive(Debug, Clone, PartialEq)]
pub enum LevyError {
    /// Location parameter `mu` is NaN.
    InvalidLocation,

    /// Scale parameter `c` is NaN or not strictly positive.
    InvalidScale(f64),

    /// A builder parameter was set more than once.
    DuplicateParameter {
        /// Name of the parameter.
        parameter: &'static str,
    },
}

impl Display for LevyError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::InvalidLocation => write!(f, "Invalid location: mu must not be NaN"),
            Self::InvalidScale(c) => write!(f, "Invalid scale: {c} (must be > 0)"),
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
                )
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for LevyError {}
