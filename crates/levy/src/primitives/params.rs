//! Parameter validation for the Lévy distribution.
//!
//! ## Purpose
//!
//! This module decides whether a `(mu, c)` pair describes a valid Lévy
//! distribution. The predicate is shared by the unchecked `stdev` function
//! and the checked `Levy` constructor so the two can never disagree.
//!
//! ## Key concepts
//!
//! * **Location**: any value except NaN. Infinite locations are accepted.
//! * **Scale**: strictly positive, `+inf` included. NaN fails every
//!   comparison, so it is tested explicitly with `is_nan()`.
//!
//! ## Invariants
//!
//! * `is_valid(mu, c)` is true iff `validate(mu, c)` is `Ok`.
//! * Checks run in the order location, scale NaN, scale sign.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::LevyError;

/// Validation utility for Lévy distribution parameters.
pub struct Validator;

impl Validator {
    /// Returns `true` if `mu` and `c` parameterize a Lévy distribution.
    #[inline]
    pub fn is_valid<T: Float>(mu: T, c: T) -> bool {
        !(mu.is_nan() || c.is_nan() || c <= T::zero())
    }

    /// Validate `mu` and `c`, failing on the first violation.
    pub fn validate<T: Float>(mu: T, c: T) -> Result<(), LevyError> {
        if mu.is_nan() {
            return Err(LevyError::InvalidLocation);
        }

        if c.is_nan() || c <= T::zero() {
            return Err(LevyError::InvalidScale(c.to_f64().unwrap_or(f64::NAN)));
        }

        Ok(())
    }

    /// Report a parameter that was configured more than once.
    pub fn validate_no_duplicates(
        duplicate_param: Option<&'static str>,
    ) -> Result<(), LevyError> {
        if let Some(parameter) = duplicate_param {
            return Err(LevyError::DuplicateParameter { parameter });
        }
        Ok(())
    }
}
