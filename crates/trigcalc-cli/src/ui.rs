//! UI helpers for CLI display.

use console::style;

/// Check if color output is disabled via `NO_COLOR` env var.
#[must_use]
pub fn is_color_disabled() -> bool {
    std::env::var("NO_COLOR").is_ok()
}

/// Format a section header.
#[must_use]
pub fn header(text: &str) -> String {
    if is_color_disabled() {
        format!("--- {text} ---")
    } else {
        style(format!("--- {text} ---")).bold().cyan().to_string()
    }
}

/// Format a field label, padded to a common width.
#[must_use]
pub fn label(text: &str) -> String {
    let padded = format!("{text:<6}");
    if is_color_disabled() {
        padded
    } else {
        style(padded).dim().to_string()
    }
}

/// Print a warning (title and message) to stderr.
pub fn print_warning(title: &str, message: &str) {
    if is_color_disabled() {
        eprintln!("[WARN] {title}: {message}");
    } else {
        eprintln!("{} {title}: {message}", style("[WARN]").yellow().bold());
    }
}

/// Print an error message.
pub fn print_error(text: &str) {
    if is_color_disabled() {
        eprintln!("[ERROR] {text}");
    } else {
        eprintln!("{} {text}", style("[ERROR]").red().bold());
    }
}
