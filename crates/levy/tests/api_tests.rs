#![cfg(feature = "dev")]
//! Tests for the high-level Lévy API.
//!
//! ## Test Organization
//!
//! 1. **Construction** - `Levy::new` accepts and rejects parameters
//! 2. **Builder** - Defaults, chaining, duplicate detection
//! 3. **Statistics** - `stdev` on a constructed distribution

use levy::internals::api::{Levy, LevyBuilder, LevyError};

// ============================================================================
// Construction Tests
// ============================================================================

/// Test construction with valid parameters.
#[test]
fn test_new_valid() {
    let dist = Levy::new(5.0, 2.0).unwrap();

    assert_eq!(dist.location(), 5.0);
    assert_eq!(dist.scale(), 2.0);
}

/// Test construction with invalid parameters.
#[test]
fn test_new_invalid() {
    assert_eq!(Levy::new(f64::NAN, 1.0), Err(LevyError::InvalidLocation));
    assert_eq!(Levy::new(0.0, 0.0), Err(LevyError::InvalidScale(0.0)));
    assert_eq!(Levy::new(2.0, -1.0), Err(LevyError::InvalidScale(-1.0)));
    assert!(Levy::new(0.0, f64::NAN).is_err());
}

/// Test display formatting.
#[test]
fn test_display() {
    let dist = Levy::new(5.0, 2.0).unwrap();

    assert_eq!(dist.to_string(), "Levy(mu=5, c=2)");
}

// ============================================================================
// Builder Tests
// ============================================================================

/// Test builder defaults to the standard Lévy distribution.
#[test]
fn test_builder_defaults() {
    let dist = LevyBuilder::<f64>::new().build().unwrap();

    assert_eq!(dist.location(), 0.0);
    assert_eq!(dist.scale(), 1.0);
}

/// Test builder chaining.
#[test]
fn test_builder_chaining() {
    let dist = Levy::builder().location(-1.5).scale(0.5).build().unwrap();

    assert_eq!(dist, Levy::new(-1.5, 0.5).unwrap());
}

/// Test builder validation is deferred to `build`.
#[test]
fn test_builder_invalid_scale() {
    let res = Levy::builder().location(2.0).scale(-1.0).build();

    assert_eq!(res, Err(LevyError::InvalidScale(-1.0)));
}

/// Test builder rejects parameters set twice.
#[test]
fn test_builder_duplicate_parameter() {
    let res = Levy::builder().scale(1.0).scale(2.0).build();
    assert_eq!(
        res,
        Err(LevyError::DuplicateParameter { parameter: "scale" })
    );

    let res = Levy::builder().location(1.0).location(2.0).build();
    assert_eq!(
        res,
        Err(LevyError::DuplicateParameter {
            parameter: "location"
        })
    );
}

// ============================================================================
// Statistics Tests
// ============================================================================

/// Test standard deviation of constructed distributions.
#[test]
fn test_levy_stdev() {
    assert_eq!(Levy::new(0.0, 1.0).unwrap().stdev(), f64::INFINITY);
    assert_eq!(Levy::new(0.0_f32, 3.0).unwrap().stdev(), f32::INFINITY);
    assert_eq!(
        Levy::new(f64::NEG_INFINITY, f64::INFINITY).unwrap().stdev(),
        f64::INFINITY
    );
}
