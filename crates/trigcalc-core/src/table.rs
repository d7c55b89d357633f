//! Precomputed sine/cosine table at one-degree resolution.

use crate::angle::degrees_to_radians;
use crate::constants::LOOKUP_TABLE_SIZE;

/// Sine and cosine of every integer degree in `0..360`.
#[derive(Debug, Clone)]
pub struct LookupTable {
    sin: Box<[f64]>,
    cos: Box<[f64]>,
}

impl LookupTable {
    /// Build the table.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn new() -> Self {
        let (sin, cos): (Vec<f64>, Vec<f64>) = (0..LOOKUP_TABLE_SIZE)
            .map(|deg| degrees_to_radians(deg as f64).sin_cos())
            .unzip();
        Self {
            sin: sin.into_boxed_slice(),
            cos: cos.into_boxed_slice(),
        }
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sin.len()
    }

    /// Whether the table is empty (never true for a built table).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sin.is_empty()
    }

    /// Table index for an angle in degrees, or `None` if the angle is not an
    /// integer number of degrees.
    ///
    /// Angles outside `0..360` wrap, so `-90` maps to `270` and `720` to `0`.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn index_of(angle_deg: f64) -> Option<usize> {
        if !angle_deg.is_finite() || angle_deg.fract() != 0.0 {
            return None;
        }
        let wrapped = angle_deg.rem_euclid(360.0);
        Some(wrapped as usize % LOOKUP_TABLE_SIZE)
    }

    /// Look up `(sin, cos)` for an integer angle in degrees.
    #[must_use]
    pub fn lookup(&self, angle_deg: f64) -> Option<(f64, f64)> {
        Self::index_of(angle_deg).map(|i| (self.sin[i], self.cos[i]))
    }
}

impl Default for LookupTable {
    fn default() -> Self {
        Self::new()
    }
}
