//! # trigcalc-core
//!
//! Core library for TrigCalc-rs. Approximates sine and cosine three ways
//! (truncated Taylor series, one-degree lookup table, `f64` stdlib) behind
//! the [`TrigBackend`] trait.

pub mod angle;
pub mod backend;
pub mod constants;
pub mod options;
pub mod registry;
pub mod results;
pub mod table;
pub mod taylor;

// Re-exports
pub use backend::{BuiltinBackend, TrigBackend, TrigError};
pub use constants::{exit_codes, DEFAULT_MODULE_NAME, DEFAULT_TERMS, LOOKUP_TABLE_SIZE};
pub use options::Options;
pub use registry::{BackendFactory, DefaultFactory};
pub use results::{ErrorAnalysis, TrigResults};

/// Compute all six approximations of `angle_deg` with the built-in backend.
///
/// This is a convenience function for simple use cases. Front ends go
/// through the loader so that module failures are reported.
///
/// # Example
/// ```
/// let r = trigcalc_core::calculate(30.0, 10);
/// assert!((r.sin_std - 0.5).abs() < 1e-15);
/// assert!(r.has_lookup());
/// ```
#[must_use]
pub fn calculate(angle_deg: f64, terms: u32) -> TrigResults {
    let backend = BuiltinBackend::new();
    backend.init();
    backend.calculate(angle_deg, terms)
}
