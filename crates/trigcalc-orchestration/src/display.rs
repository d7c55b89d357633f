//! Formatting of a result set into six display strings.

use serde::Serialize;

use trigcalc_core::results::TrigResults;

/// Shown in both lookup fields when the angle has no table entry.
pub const LOOKUP_UNAVAILABLE: &str = "N/A (non-integer angle)";

/// Significant digits used for every displayed value.
pub const DISPLAY_PRECISION: usize = 15;

/// Format `value` like C's `%.{precision}g`.
///
/// Fixed notation is used when the decimal exponent lies in
/// `-4..precision`, scientific notation otherwise. Trailing zeros are
/// removed in both cases.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap, clippy::cast_sign_loss)]
pub fn format_general(value: f64, precision: usize) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    let precision = precision.max(1);
    // The exponent is taken after rounding to `precision` digits.
    let scientific = format!("{:.*e}", precision - 1, value);
    let (mantissa, exponent) = scientific
        .split_once('e')
        .unwrap_or((scientific.as_str(), "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);

    if exponent < -4 || exponent >= precision as i32 {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!(
            "{}e{sign}{:02}",
            trim_fraction(mantissa),
            exponent.unsigned_abs()
        )
    } else {
        let decimals = (precision as i32 - 1 - exponent) as usize;
        trim_fraction(&format!("{value:.decimals$}")).to_string()
    }
}

/// Strip trailing zeros (and a dangling point) from a decimal fraction.
fn trim_fraction(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}

fn format_value(value: f64) -> String {
    format_general(value, DISPLAY_PRECISION)
}

/// The six read-only result fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultDisplay {
    pub sin_taylor: String,
    pub cos_taylor: String,
    pub sin_lookup: String,
    pub cos_lookup: String,
    pub sin_std: String,
    pub cos_std: String,
}

impl ResultDisplay {
    /// Format a result set.
    ///
    /// The lookup sine gates both lookup fields: when it is NaN both show
    /// [`LOOKUP_UNAVAILABLE`], whatever the lookup cosine holds.
    #[must_use]
    pub fn from_results(results: &TrigResults) -> Self {
        let (sin_lookup, cos_lookup) = if results.sin_lookup.is_nan() {
            (LOOKUP_UNAVAILABLE.to_string(), LOOKUP_UNAVAILABLE.to_string())
        } else {
            (format_value(results.sin_lookup), format_value(results.cos_lookup))
        };
        Self {
            sin_taylor: format_value(results.sin_taylor),
            cos_taylor: format_value(results.cos_taylor),
            sin_lookup,
            cos_lookup,
            sin_std: format_value(results.sin_std),
            cos_std: format_value(results.cos_std),
        }
    }

    /// Field labels in display order.
    pub const LABELS: [&'static str; 6] = [
        "Taylor sin",
        "Taylor cos",
        "Lookup sin",
        "Lookup cos",
        "Stdlib sin",
        "Stdlib cos",
    ];

    /// Labelled fields in display order.
    #[must_use]
    pub fn fields(&self) -> [(&'static str, &str); 6] {
        let [l0, l1, l2, l3, l4, l5] = Self::LABELS;
        [
            (l0, self.sin_taylor.as_str()),
            (l1, self.cos_taylor.as_str()),
            (l2, self.sin_lookup.as_str()),
            (l3, self.cos_lookup.as_str()),
            (l4, self.sin_std.as_str()),
            (l5, self.cos_std.as_str()),
        ]
    }
}
