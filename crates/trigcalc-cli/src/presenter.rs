//! CLI result presenter and warning notifier.

use parking_lot::Mutex;
use tracing::error;

use trigcalc_core::results::TrigResults;
use trigcalc_orchestration::display::ResultDisplay;
use trigcalc_orchestration::input::ParsedInput;
use trigcalc_orchestration::interfaces::{Notifier, ResultPresenter, Warning};

use crate::output::{render_json, render_quiet, render_report, OutputFormat};
use crate::ui::print_warning;

/// CLI result presenter.
///
/// Prints each result set and keeps the last rendering so it can also be
/// written to a file.
pub struct CLIResultPresenter {
    format: OutputFormat,
    quiet: bool,
    details: bool,
    last: Mutex<Option<String>>,
}

impl CLIResultPresenter {
    #[must_use]
    pub fn new(format: OutputFormat, quiet: bool, details: bool) -> Self {
        Self {
            format,
            quiet,
            details,
            last: Mutex::new(None),
        }
    }

    /// The most recent rendering, if any.
    #[must_use]
    pub fn last_rendered(&self) -> Option<String> {
        self.last.lock().clone()
    }

    fn render(&self, input: &ParsedInput, results: &TrigResults, display: &ResultDisplay) -> String {
        match self.format {
            OutputFormat::Json => render_json(input, results, display).unwrap_or_else(|e| {
                error!(error = %e, "failed to serialize results");
                String::new()
            }),
            OutputFormat::Text if self.quiet => render_quiet(display),
            OutputFormat::Text => render_report(input, results, display, self.details),
        }
    }
}

impl ResultPresenter for CLIResultPresenter {
    fn present(&self, input: &ParsedInput, results: &TrigResults, display: &ResultDisplay) {
        let rendered = self.render(input, results, display);
        print!("{rendered}");
        if self.format == OutputFormat::Json {
            println!();
        }
        *self.last.lock() = Some(rendered);
    }
}

/// Notifier that prints warnings to stderr.
pub struct CLINotifier;

impl Notifier for CLINotifier {
    fn warn(&self, warning: &Warning) {
        print_warning(&warning.title, &warning.message);
    }
}
