//! Trigonometry module loader.
//!
//! The loader is the only owner of the module handle. It moves through
//! three states:
//!
//! ```text
//! Unloaded --load ok--> Loaded --unload--> Unloaded
//! Unloaded --load err-> Failed   (terminal)
//! ```

use std::sync::Arc;

use tracing::{debug, info, warn};

use trigcalc_core::backend::{TrigBackend, TrigError};
use trigcalc_core::constants::{CALCULATE_SYMBOL, INIT_SYMBOL};
use trigcalc_core::registry::BackendFactory;

use crate::interfaces::Warning;

/// Reasons the module could not be brought up.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoadError {
    /// The module could not be located or opened.
    #[error("Failed to load trigonometry library: {0}")]
    Load(String),

    /// The module lacks `init` or `calculate_trigonometry`.
    #[error("Failed to resolve library functions")]
    Resolve,
}

impl LoadError {
    /// The user-facing warning for this error.
    #[must_use]
    pub fn warning(&self) -> Warning {
        Warning::new("Error", self.to_string())
    }
}

impl From<TrigError> for LoadError {
    fn from(err: TrigError) -> Self {
        match err {
            TrigError::Unresolved(_) => Self::Resolve,
            TrigError::ModuleNotFound(_) => Self::Load(err.to_string()),
        }
    }
}

/// Observable loader state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoaderState {
    Unloaded,
    Loaded,
    Failed,
}

enum Handle {
    Unloaded,
    Loaded(Arc<dyn TrigBackend>),
    Failed(LoadError),
}

/// Owns the trigonometry module for the lifetime of the application.
pub struct LibraryLoader {
    module: String,
    handle: Handle,
}

impl LibraryLoader {
    /// Create a loader for the named module. Nothing is loaded yet.
    #[must_use]
    pub fn new(module: impl Into<String>) -> Self {
        Self {
            module: module.into(),
            handle: Handle::Unloaded,
        }
    }

    /// Name of the module this loader manages.
    #[must_use]
    pub fn module(&self) -> &str {
        &self.module
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> LoaderState {
        match self.handle {
            Handle::Unloaded => LoaderState::Unloaded,
            Handle::Loaded(_) => LoaderState::Loaded,
            Handle::Failed(_) => LoaderState::Failed,
        }
    }

    /// Whether computations can run.
    #[must_use]
    pub fn is_loaded(&self) -> bool {
        matches!(self.handle, Handle::Loaded(_))
    }

    /// The recorded failure, if the loader is in the `Failed` state.
    #[must_use]
    pub fn error(&self) -> Option<&LoadError> {
        match &self.handle {
            Handle::Failed(err) => Some(err),
            _ => None,
        }
    }

    /// The loaded backend, if any.
    #[must_use]
    pub fn backend(&self) -> Option<&Arc<dyn TrigBackend>> {
        match &self.handle {
            Handle::Loaded(backend) => Some(backend),
            _ => None,
        }
    }

    /// Locate the module, resolve its entry points and run `init` once.
    ///
    /// Loading an already loaded module is a no-op. A failed loader stays
    /// failed and returns the original error.
    pub fn load(&mut self, factory: &dyn BackendFactory) -> Result<(), LoadError> {
        match &self.handle {
            Handle::Loaded(_) => return Ok(()),
            Handle::Failed(err) => return Err(err.clone()),
            Handle::Unloaded => {}
        }

        debug!(
            module = %self.module,
            symbols = ?[INIT_SYMBOL, CALCULATE_SYMBOL],
            "loading trigonometry module"
        );
        match factory.get(&self.module) {
            Ok(backend) => {
                backend.init();
                info!(module = %self.module, backend = backend.name(), "trigonometry module loaded");
                self.handle = Handle::Loaded(backend);
                Ok(())
            }
            Err(err) => {
                let err = LoadError::from(err);
                warn!(module = %self.module, error = %err, "trigonometry module unavailable");
                self.handle = Handle::Failed(err.clone());
                Err(err)
            }
        }
    }

    /// Release the module if held. A failed loader stays failed.
    pub fn unload(&mut self) {
        if let Handle::Loaded(backend) = &self.handle {
            debug!(module = %self.module, backend = backend.name(), "unloading trigonometry module");
            self.handle = Handle::Unloaded;
        }
    }
}

impl Drop for LibraryLoader {
    fn drop(&mut self) {
        self.unload();
    }
}
