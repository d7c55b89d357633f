//! TUI message types (Elm Messages).

use trigcalc_orchestration::display::ResultDisplay;
use trigcalc_orchestration::interfaces::Warning;

/// Messages that drive the TUI update cycle.
#[derive(Debug, Clone)]
pub enum TuiMessage {
    /// A fresh result set replacing the displayed one.
    Results {
        display: ResultDisplay,
        angle: f64,
        terms: u32,
    },
    /// A warning to show in the modal dialog.
    Warning(Warning),
    /// Log message.
    Log(String),
}
