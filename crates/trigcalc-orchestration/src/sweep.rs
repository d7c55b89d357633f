//! Angle sweeps: the same computation over an evenly spaced range.

use std::str::FromStr;

use rayon::prelude::*;
use serde::Serialize;
use tracing::debug;

use trigcalc_core::backend::TrigBackend;
use trigcalc_core::constants::MAX_SWEEP_ROWS;
use trigcalc_core::results::{ErrorAnalysis, TrigResults};

use crate::interfaces::SessionError;
use crate::loader::LibraryLoader;

/// Errors in a sweep request.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SweepError {
    #[error("invalid sweep range '{0}': expected START:END[:STEP]")]
    Parse(String),

    #[error("sweep step must be a positive number")]
    Step,

    #[error("sweep end must not be below start")]
    Reversed,

    #[error("sweep would produce more than {limit} rows", limit = MAX_SWEEP_ROWS)]
    TooManyRows,

    #[error(transparent)]
    Session(#[from] SessionError),
}

/// An inclusive range of angles in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepRange {
    pub start: f64,
    pub end: f64,
    pub step: f64,
}

impl SweepRange {
    /// Validate and build a range.
    #[allow(clippy::cast_precision_loss)]
    pub fn new(start: f64, end: f64, step: f64) -> Result<Self, SweepError> {
        if !(step.is_finite() && step > 0.0) {
            return Err(SweepError::Step);
        }
        if !start.is_finite() || !end.is_finite() {
            return Err(SweepError::Parse(format!("{start}:{end}:{step}")));
        }
        if end < start {
            return Err(SweepError::Reversed);
        }
        let range = Self { start, end, step };
        if range.steps() + 1.0 > MAX_SWEEP_ROWS as f64 {
            return Err(SweepError::TooManyRows);
        }
        Ok(range)
    }

    /// Whole steps between start and end, as a float so huge ranges
    /// can be rejected before any integer conversion.
    fn steps(&self) -> f64 {
        // Tolerate rounding so that 0:1:0.1 includes 1.
        ((self.end - self.start) / self.step + 1e-9).floor()
    }

    /// Number of angles in the range.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn len(&self) -> usize {
        (self.steps() as usize).saturating_add(1)
    }

    /// Always false: a valid range holds at least its start.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// The `i`-th angle.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn angle(&self, i: usize) -> f64 {
        self.start + self.step * i as f64
    }
}

impl FromStr for SweepRange {
    type Err = SweepError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(':').map(str::trim).collect();
        let parse = |p: &str| p.parse::<f64>().map_err(|_| SweepError::Parse(s.to_string()));
        match *parts.as_slice() {
            [start, end] => Self::new(parse(start)?, parse(end)?, 1.0),
            [start, end, step] => Self::new(parse(start)?, parse(end)?, parse(step)?),
            _ => Err(SweepError::Parse(s.to_string())),
        }
    }
}

/// One row of a sweep.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SweepRow {
    pub angle: f64,
    pub results: TrigResults,
    pub errors: ErrorAnalysis,
}

/// Aggregate accuracy over a sweep.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SweepSummary {
    pub rows: usize,
    pub lookup_hits: usize,
    pub max_taylor_error: f64,
    pub worst_angle: f64,
}

/// Compute every angle of `range` with `backend`, in parallel.
///
/// Rows come back in angle order.
pub fn sweep_backend(backend: &dyn TrigBackend, range: &SweepRange, terms: u32) -> Vec<SweepRow> {
    debug!(rows = range.len(), terms, "running sweep");
    (0..range.len())
        .into_par_iter()
        .map(|i| {
            let angle = range.angle(i);
            let results = backend.calculate(angle, terms);
            SweepRow {
                angle,
                results,
                errors: results.errors(),
            }
        })
        .collect()
}

/// Sweep through the loaded module.
pub fn run_sweep(
    loader: &LibraryLoader,
    range: &SweepRange,
    terms: u32,
) -> Result<Vec<SweepRow>, SweepError> {
    let backend = loader.backend().ok_or(SessionError::NotLoaded)?;
    Ok(sweep_backend(backend.as_ref(), range, terms))
}

/// Summarize a sweep. Returns `None` for an empty slice.
#[must_use]
pub fn summarize(rows: &[SweepRow]) -> Option<SweepSummary> {
    let worst = rows
        .iter()
        .max_by(|a, b| a.errors.max_taylor().total_cmp(&b.errors.max_taylor()))?;
    Some(SweepSummary {
        rows: rows.len(),
        lookup_hits: rows.iter().filter(|r| r.results.has_lookup()).count(),
        max_taylor_error: worst.errors.max_taylor(),
        worst_angle: worst.angle,
    })
}
