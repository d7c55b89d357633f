//! Computation bridge: forwards validated input to the loaded module.

use tracing::{trace, warn};

use trigcalc_core::results::TrigResults;

use crate::input::ParsedInput;
use crate::interfaces::SessionError;
use crate::loader::LibraryLoader;

/// Run one computation through the loaded module.
///
/// Returns [`SessionError::NotLoaded`] without computing when the loader
/// holds no module. Results are forwarded unchanged.
pub fn calculate_trigonometry(
    loader: &LibraryLoader,
    input: &ParsedInput,
) -> Result<TrigResults, SessionError> {
    let Some(backend) = loader.backend() else {
        warn!(module = loader.module(), state = ?loader.state(), "computation requested without a module");
        return Err(SessionError::NotLoaded);
    };
    let results = backend.calculate(input.angle, input.terms);
    trace!(angle = input.angle, terms = input.terms, ?results, "computed");
    Ok(results)
}
