//! Error handling and exit codes.

use trigcalc_core::constants::exit_codes;
use trigcalc_orchestration::interfaces::SessionError;
use trigcalc_orchestration::loader::LoadError;
use trigcalc_orchestration::sweep::SweepError;

/// Top-level application errors.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Session(#[from] SessionError),

    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Sweep(#[from] SweepError),

    #[error("configuration error: {0}")]
    Config(String),
}

/// Map an application error to its exit code.
#[must_use]
pub fn handle_error(err: &AppError) -> i32 {
    match err {
        AppError::Session(e) | AppError::Sweep(SweepError::Session(e)) => session_code(e),
        AppError::Load(_) => exit_codes::ERROR_LIBRARY,
        AppError::Sweep(_) | AppError::Config(_) => exit_codes::ERROR_CONFIG,
    }
}

fn session_code(err: &SessionError) -> i32 {
    match err {
        SessionError::InvalidAngle => exit_codes::ERROR_INVALID_INPUT,
        SessionError::NotLoaded => exit_codes::ERROR_LIBRARY,
    }
}

/// Exit code for any error reaching `main`.
#[must_use]
pub fn exit_code(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<AppError>()
        .map_or(exit_codes::ERROR_GENERIC, handle_error)
}

/// Whether the error was already shown to the user through the notifier.
#[must_use]
pub fn already_reported(err: &anyhow::Error) -> bool {
    matches!(err.downcast_ref::<AppError>(), Some(AppError::Session(_)))
}
