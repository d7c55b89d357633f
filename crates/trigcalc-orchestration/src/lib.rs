//! # trigcalc-orchestration
//!
//! Module loading, input parsing, the computation bridge and result
//! presentation: everything between a front end and the backend.

pub mod bridge;
pub mod display;
pub mod input;
pub mod interfaces;
pub mod loader;
pub mod session;
pub mod sweep;

pub use display::{format_general, ResultDisplay, LOOKUP_UNAVAILABLE};
pub use input::{parse_input, ParsedInput};
pub use interfaces::{Notifier, ResultPresenter, SessionError, Warning};
pub use loader::{LibraryLoader, LoadError, LoaderState};
pub use session::Session;
