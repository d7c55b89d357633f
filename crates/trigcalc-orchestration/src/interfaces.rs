//! Orchestration interfaces.

use std::fmt;

use trigcalc_core::results::TrigResults;

use crate::display::ResultDisplay;
use crate::input::ParsedInput;

/// Errors raised by a single activation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    /// The angle text is not a finite number.
    #[error("Invalid Input: Please enter a valid angle")]
    InvalidAngle,

    /// The trigonometry module is not loaded.
    #[error("Library not loaded properly")]
    NotLoaded,
}

impl SessionError {
    /// The user-facing warning for this error.
    #[must_use]
    pub fn warning(&self) -> Warning {
        match self {
            Self::InvalidAngle => Warning::new("Invalid Input", "Please enter a valid angle"),
            Self::NotLoaded => Warning::new("Error", self.to_string()),
        }
    }
}

/// A non-fatal, user-facing warning (title and message).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Warning {
    pub title: String,
    pub message: String,
}

impl Warning {
    #[must_use]
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.title, self.message)
    }
}

/// Trait for showing warnings to the user.
pub trait Notifier: Send + Sync {
    /// Show a warning. The application stays responsive afterwards.
    fn warn(&self, warning: &Warning);
}

/// Trait for presenting results to the user.
pub trait ResultPresenter: Send + Sync {
    /// Replace the displayed results with a fresh set.
    fn present(&self, input: &ParsedInput, results: &TrigResults, display: &ResultDisplay);
}

/// Notifier that drops every warning.
pub struct NullNotifier;

impl Notifier for NullNotifier {
    fn warn(&self, _warning: &Warning) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_error_display() {
        assert_eq!(
            SessionError::InvalidAngle.to_string(),
            "Invalid Input: Please enter a valid angle"
        );
        assert_eq!(
            SessionError::NotLoaded.to_string(),
            "Library not loaded properly"
        );
    }

    #[test]
    fn invalid_angle_warning() {
        let w = SessionError::InvalidAngle.warning();
        assert_eq!(w.title, "Invalid Input");
        assert_eq!(w.message, "Please enter a valid angle");
        assert_eq!(w.to_string(), "Invalid Input: Please enter a valid angle");
    }

    #[test]
    fn not_loaded_warning() {
        let w = SessionError::NotLoaded.warning();
        assert_eq!(w.title, "Error");
        assert_eq!(w.message, "Library not loaded properly");
    }

    #[test]
    fn null_notifier() {
        NullNotifier.warn(&Warning::new("Error", "ignored"));
    }
}
