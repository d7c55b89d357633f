//! One application session: startup, activations and shutdown.

use parking_lot::Mutex;
use tracing::{debug, info};

use trigcalc_core::registry::BackendFactory;

use crate::bridge::calculate_trigonometry;
use crate::display::ResultDisplay;
use crate::input::parse_input;
use crate::interfaces::{Notifier, ResultPresenter, SessionError};
use crate::loader::{LibraryLoader, LoadError, LoaderState};

/// Ties the loader to a notifier and a presenter.
///
/// Every activation runs synchronously on the caller's thread: parse, call
/// the module, present. The latest display replaces the previous one.
pub struct Session<'a> {
    loader: LibraryLoader,
    notifier: &'a dyn Notifier,
    presenter: &'a dyn ResultPresenter,
    current: Mutex<Option<ResultDisplay>>,
}

impl<'a> Session<'a> {
    /// Start a session: load `module` and warn if that fails.
    ///
    /// A load failure is not fatal; the session starts with computation
    /// disabled.
    pub fn start(
        module: &str,
        factory: &dyn BackendFactory,
        notifier: &'a dyn Notifier,
        presenter: &'a dyn ResultPresenter,
    ) -> Self {
        let mut loader = LibraryLoader::new(module);
        if let Err(err) = loader.load(factory) {
            notifier.warn(&err.warning());
        }
        Self::with_loader(loader, notifier, presenter)
    }

    /// Build a session around an existing loader.
    #[must_use]
    pub fn with_loader(
        loader: LibraryLoader,
        notifier: &'a dyn Notifier,
        presenter: &'a dyn ResultPresenter,
    ) -> Self {
        Self {
            loader,
            notifier,
            presenter,
            current: Mutex::new(None),
        }
    }

    /// The loader owned by this session.
    #[must_use]
    pub fn loader(&self) -> &LibraryLoader {
        &self.loader
    }

    /// State of the module.
    #[must_use]
    pub fn state(&self) -> LoaderState {
        self.loader.state()
    }

    /// Load failure recorded at startup, if any.
    #[must_use]
    pub fn load_error(&self) -> Option<&LoadError> {
        self.loader.error()
    }

    /// The most recently presented display.
    #[must_use]
    pub fn current(&self) -> Option<ResultDisplay> {
        self.current.lock().clone()
    }

    /// Handle one activation of the Calculate action.
    ///
    /// The angle is validated before the module state is checked, so an
    /// invalid angle is reported even when no module is loaded.
    pub fn activate(&self, angle_text: &str, terms_text: &str) -> Result<ResultDisplay, SessionError> {
        let outcome = parse_input(angle_text, terms_text).and_then(|input| {
            let results = calculate_trigonometry(&self.loader, &input)?;
            let display = ResultDisplay::from_results(&results);
            self.presenter.present(&input, &results, &display);
            debug!(angle = input.angle, terms = input.terms, "activation complete");
            Ok(display)
        });

        match outcome {
            Ok(display) => {
                *self.current.lock() = Some(display.clone());
                Ok(display)
            }
            Err(err) => {
                self.notifier.warn(&err.warning());
                Err(err)
            }
        }
    }

    /// Release the module.
    pub fn shutdown(&mut self) {
        info!(module = self.loader.module(), "shutting down");
        self.loader.unload();
    }
}
