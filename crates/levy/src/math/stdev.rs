//! Standard deviation of the Lévy distribution.
//!
//! ## Purpose
//!
//! The Lévy distribution with location `mu` and scale `c > 0` has infinite
//! variance, so its standard deviation is `+inf` for every valid
//! parameterization. Invalid parameters yield NaN.
//!
//! ## Design notes
//!
//! * **Sentinel**: Undefined results are reported as `T::nan()`, never as an
//!   error or a panic.
//! * **Generics**: Works for any `Float` (`f64`, `f32`).
//!
//! ## Invariants
//!
//! * `stdev(mu, c)` is `+inf` iff `mu` is not NaN, `c` is not NaN and `c > 0`.
//! * Every other input returns NaN.
//!
//! ## Non-goals
//!
//! * Other moments, quantiles and sampling are not provided.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::params::Validator;

/// Returns the standard deviation of a Lévy distribution with location `mu`
/// and scale `c`.
///
/// # Examples
///
/// ```
/// use levy::prelude::*;
///
/// assert_eq!(stdev(0.0, 1.0), f64::INFINITY);
/// assert_eq!(stdev(5.0, 2.0), f64::INFINITY);
/// assert!(stdev(f64::NAN, 1.0).is_nan());
/// assert!(stdev(0.0, f64::NAN).is_nan());
/// assert!(stdev(0.0_f64, 0.0).is_nan());
/// ```
#[inline]
pub fn stdev<T: Float>(mu: T, c: T) -> T {
    if Validator::is_valid(mu, c) {
        T::infinity()
    } else {
        T::nan()
    }
}
