//! The trigonometry backend trait and the built-in implementation.
//!
//! A backend exposes the two entry points of a trigonometry module:
//! `init`, called once after the module is resolved, and `calculate`,
//! which returns all six approximations for one angle.

use std::sync::OnceLock;

use tracing::{debug, warn};

use crate::angle::{degrees_to_radians, reduce_angle};
use crate::options::Options;
use crate::results::TrigResults;
use crate::table::LookupTable;
use crate::taylor::{cosine_taylor, sine_taylor};

/// Error type for module resolution and calculation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TrigError {
    /// No module is registered under this name.
    #[error("module not found: {0}")]
    ModuleNotFound(String),

    /// The module does not export a required entry point.
    #[error("unresolved entry point: {0}")]
    Unresolved(&'static str),
}

/// A loaded trigonometry module.
pub trait TrigBackend: Send + Sync {
    /// Prepare the module. Must run once before `calculate`.
    fn init(&self);

    /// Compute the six approximations of `angle_deg`.
    fn calculate(&self, angle_deg: f64, terms: u32) -> TrigResults;

    /// Get the name of this backend.
    fn name(&self) -> &str;
}

/// Statically linked backend: Taylor series, 1° lookup table and `f64`
/// stdlib routines.
pub struct BuiltinBackend {
    table: OnceLock<LookupTable>,
    range_reduction: bool,
}

impl BuiltinBackend {
    /// Create an uninitialised backend.
    #[must_use]
    pub fn new() -> Self {
        Self::with_options(&Options::default())
    }

    /// Create an uninitialised backend with the given options.
    #[must_use]
    pub fn with_options(opts: &Options) -> Self {
        Self {
            table: OnceLock::new(),
            range_reduction: opts.range_reduction,
        }
    }

    /// Whether `init` has run.
    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.table.get().is_some()
    }

    fn lookup(&self, angle_deg: f64) -> (f64, f64) {
        let Some(table) = self.table.get() else {
            warn!("lookup table used before init");
            return (f64::NAN, f64::NAN);
        };
        table.lookup(angle_deg).unwrap_or((f64::NAN, f64::NAN))
    }
}

impl Default for BuiltinBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl TrigBackend for BuiltinBackend {
    fn init(&self) {
        let table = self.table.get_or_init(LookupTable::new);
        debug!(entries = table.len(), "lookup table ready");
    }

    fn calculate(&self, angle_deg: f64, terms: u32) -> TrigResults {
        let angle_rad = degrees_to_radians(angle_deg);
        let taylor_x = if self.range_reduction {
            reduce_angle(angle_rad)
        } else {
            angle_rad
        };

        let (sin_lookup, cos_lookup) = self.lookup(angle_deg);

        TrigResults {
            sin_taylor: sine_taylor(taylor_x, terms),
            cos_taylor: cosine_taylor(taylor_x, terms),
            sin_lookup,
            cos_lookup,
            sin_std: angle_rad.sin(),
            cos_std: angle_rad.cos(),
        }
    }

    fn name(&self) -> &str {
        if self.range_reduction {
            "BuiltinReduced"
        } else {
            "Builtin"
        }
    }
}
