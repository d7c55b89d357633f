//! Angle conversion helpers.

use std::f64::consts::{PI, TAU};

/// Convert degrees to radians as `deg * π / 180`.
///
/// Every approximation goes through this one conversion so that the table
/// and the stdlib reference agree bit for bit at integer angles.
#[must_use]
pub fn degrees_to_radians(deg: f64) -> f64 {
    deg * PI / 180.0
}

/// Reduce an angle in radians into `[-π, π]`.
#[must_use]
pub fn reduce_angle(x: f64) -> f64 {
    let r = (x + PI).rem_euclid(TAU) - PI;
    // rem_euclid can land exactly on TAU for tiny negative inputs
    if r > PI {
        r - TAU
    } else {
        r
    }
}
