//! Cross-module tests for the simulation core
//!
//! Tests are organized by topic:
//! - `golden` - Pinned reference output for the built-in PLG preset
//! - `properties` - Invariants of lever application and simulation aggregates
//! - `decision` - Decision engine end-to-end on the built-in presets

mod golden;

/// Assert two floats are equal within an absolute tolerance
#[track_caller]
pub(crate) fn assert_close(actual: f64, expected: f64, tolerance: f64) {
    assert!(
        (actual - expected).abs() <= tolerance,
        "expected {expected}, got {actual} (tolerance {tolerance})"
    );
}
