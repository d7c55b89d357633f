//! Calculation options.

use crate::constants::DEFAULT_TERMS;

/// Options for a trigonometry calculation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Number of Taylor terms.
    pub terms: u32,
    /// Reduce the angle into `[-π, π]` before evaluating the Taylor series.
    pub range_reduction: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            terms: DEFAULT_TERMS,
            range_reduction: false,
        }
    }
}

impl Options {
    /// Normalize options, applying the default term count where it is zero.
    #[must_use]
    pub fn normalize(mut self) -> Self {
        if self.terms == 0 {
            self.terms = DEFAULT_TERMS;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_options() {
        let opts = Options::default();
        assert_eq!(opts.terms, DEFAULT_TERMS);
        assert!(!opts.range_reduction);
    }

    #[test]
    fn normalize_zero_terms() {
        let opts = Options {
            terms: 0,
            ..Default::default()
        };
        assert_eq!(opts.normalize().terms, DEFAULT_TERMS);
    }

    #[test]
    fn normalize_keeps_explicit_terms() {
        let opts = Options {
            terms: 3,
            range_reduction: true,
        };
        let normalized = opts.clone().normalize();
        assert_eq!(normalized, opts);
    }
}
