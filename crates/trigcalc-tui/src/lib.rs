//! # trigcalc-tui
//!
//! Interactive TUI form using ratatui with Elm architecture: two inputs,
//! a Calculate action, the results panel and a modal warning dialog.

pub mod bridge;
pub mod dialog;
pub mod footer;
pub mod form;
pub mod header;
pub mod keymap;
pub mod logs;
pub mod messages;
pub mod model;
pub mod results;
pub mod styles;

pub use bridge::{TuiNotifier, TuiResultPresenter};
pub use messages::TuiMessage;
pub use model::{Command, TuiApp};
