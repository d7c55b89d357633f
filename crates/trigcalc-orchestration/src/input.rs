//! Parsing of the two raw input fields.
//!
//! The angle is strict: anything that is not a finite number rejects the
//! activation. The term count is lenient: anything that is not a positive
//! 32-bit integer silently becomes [`DEFAULT_TERMS`].

use serde::Serialize;
use tracing::debug;

use trigcalc_core::constants::DEFAULT_TERMS;

use crate::interfaces::SessionError;

/// Validated input for one computation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ParsedInput {
    /// Angle in degrees.
    pub angle: f64,
    /// Number of Taylor terms.
    pub terms: u32,
}

/// Parse the angle field.
pub fn parse_angle(text: &str) -> Result<f64, SessionError> {
    match text.trim().parse::<f64>() {
        Ok(angle) if angle.is_finite() => Ok(angle),
        _ => Err(SessionError::InvalidAngle),
    }
}

/// Parse the terms field, falling back to the default.
#[must_use]
pub fn parse_terms(text: &str) -> u32 {
    let parsed = text.trim().parse::<i32>().ok().filter(|&n| n > 0);
    match parsed.and_then(|n| u32::try_from(n).ok()) {
        Some(terms) => terms,
        None => {
            debug!(input = text, default = DEFAULT_TERMS, "using default term count");
            DEFAULT_TERMS
        }
    }
}

/// Parse both fields. Only the angle can fail.
pub fn parse_input(angle_text: &str, terms_text: &str) -> Result<ParsedInput, SessionError> {
    let angle = parse_angle(angle_text)?;
    let terms = parse_terms(terms_text);
    Ok(ParsedInput { angle, terms })
}
