//! C bindings for levy.
//!
//! Provides C access to the Lévy standard deviation via C FFI. The header
//! `include/levy.h` is generated by `build.rs`.

use std::os::raw::{c_double, c_float, c_int};

use levy::prelude::{Levy, stdev};

/// Standard deviation of a Lévy distribution with location `mu` and scale `c`.
///
/// Returns `+inf` for valid parameters and NaN otherwise.
#[unsafe(no_mangle)]
pub extern "C" fn levy_stdev(mu: c_double, c: c_double) -> c_double {
    stdev(mu, c)
}

/// Single-precision variant of [`levy_stdev`].
#[unsafe(no_mangle)]
pub extern "C" fn levy_stdevf(mu: c_float, c: c_float) -> c_float {
    stdev(mu, c)
}

/// Returns 1 if `mu` and `c` parameterize a Lévy distribution, 0 otherwise.
#[unsafe(no_mangle)]
pub extern "C" fn levy_is_valid(mu: c_double, c: c_double) -> c_int {
    c_int::from(Levy::new(mu, c).is_ok())
}
