//! Bridge between the session and TUI messages.

use crossbeam_channel::Sender;

use trigcalc_core::results::TrigResults;
use trigcalc_orchestration::display::ResultDisplay;
use trigcalc_orchestration::input::ParsedInput;
use trigcalc_orchestration::interfaces::{Notifier, ResultPresenter, Warning};

use crate::messages::TuiMessage;

/// Notifier that opens the TUI warning dialog.
pub struct TuiNotifier {
    tx: Sender<TuiMessage>,
}

impl TuiNotifier {
    #[must_use]
    pub fn new(tx: Sender<TuiMessage>) -> Self {
        Self { tx }
    }
}

impl Notifier for TuiNotifier {
    fn warn(&self, warning: &Warning) {
        let _ = self.tx.try_send(TuiMessage::Warning(warning.clone()));
        let _ = self.tx.try_send(TuiMessage::Log(format!("[WARN] {warning}")));
    }
}

/// TUI result presenter.
pub struct TuiResultPresenter {
    tx: Sender<TuiMessage>,
}

impl TuiResultPresenter {
    #[must_use]
    pub fn new(tx: Sender<TuiMessage>) -> Self {
        Self { tx }
    }
}

impl ResultPresenter for TuiResultPresenter {
    fn present(&self, input: &ParsedInput, _results: &TrigResults, display: &ResultDisplay) {
        let _ = self.tx.try_send(TuiMessage::Results {
            display: display.clone(),
            angle: input.angle,
            terms: input.terms,
        });
        let _ = self.tx.try_send(TuiMessage::Log(format!(
            "{}° with {} terms: sin {} / cos {}",
            input.angle, input.terms, display.sin_std, display.cos_std
        )));
    }
}
