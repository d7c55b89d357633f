//! The six-value result aggregate and its error analysis.

use serde::Serialize;

/// Sine and cosine of one angle by three independent methods.
///
/// The lookup pair is NaN when the angle has no table entry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TrigResults {
    pub sin_taylor: f64,
    pub cos_taylor: f64,
    pub sin_lookup: f64,
    pub cos_lookup: f64,
    pub sin_std: f64,
    pub cos_std: f64,
}

impl TrigResults {
    /// Whether the lookup table produced a value for this angle.
    ///
    /// Only the sine is consulted; the cosine follows it.
    #[must_use]
    pub fn has_lookup(&self) -> bool {
        !self.sin_lookup.is_nan()
    }

    /// Absolute errors of the approximations against the stdlib values.
    #[must_use]
    pub fn errors(&self) -> ErrorAnalysis {
        let lookup = self.has_lookup().then(|| {
            (
                (self.sin_lookup - self.sin_std).abs(),
                (self.cos_lookup - self.cos_std).abs(),
            )
        });
        ErrorAnalysis {
            sin_taylor: (self.sin_taylor - self.sin_std).abs(),
            cos_taylor: (self.cos_taylor - self.cos_std).abs(),
            sin_lookup: lookup.map(|(s, _)| s),
            cos_lookup: lookup.map(|(_, c)| c),
        }
    }
}

/// Absolute error of each approximation relative to the stdlib reference.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ErrorAnalysis {
    pub sin_taylor: f64,
    pub cos_taylor: f64,
    /// `None` when the angle has no lookup entry.
    pub sin_lookup: Option<f64>,
    pub cos_lookup: Option<f64>,
}

impl ErrorAnalysis {
    /// Largest Taylor error of the pair.
    #[must_use]
    pub fn max_taylor(&self) -> f64 {
        self.sin_taylor.max(self.cos_taylor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(sin_lookup: f64, cos_lookup: f64) -> TrigResults {
        TrigResults {
            sin_taylor: 0.5,
            cos_taylor: 0.8,
            sin_lookup,
            cos_lookup,
            sin_std: 0.6,
            cos_std: 0.8,
        }
    }

    #[test]
    fn lookup_presence_follows_sine() {
        assert!(sample(0.6, 0.8).has_lookup());
        assert!(!sample(f64::NAN, 0.707).has_lookup());
        assert!(sample(0.6, f64::NAN).has_lookup());
    }

    #[test]
    fn errors_against_stdlib() {
        let errors = sample(0.6, 0.8).errors();
        assert!((errors.sin_taylor - 0.1).abs() < 1e-12);
        assert!(errors.cos_taylor.abs() < 1e-12);
        assert_eq!(errors.sin_lookup, Some(0.0));
        assert_eq!(errors.cos_lookup, Some(0.0));
        assert!((errors.max_taylor() - 0.1).abs() < 1e-12);
    }

    #[test]
    fn errors_without_lookup() {
        let errors = sample(f64::NAN, 0.8).errors();
        assert!(errors.sin_lookup.is_none());
        assert!(errors.cos_lookup.is_none());
    }

    #[test]
    fn serializes_named_fields() {
        let json = serde_json::to_value(sample(0.6, 0.8)).unwrap();
        assert_eq!(json["sin_std"], 0.6);
        assert_eq!(json["cos_taylor"], 0.8);
    }
}
