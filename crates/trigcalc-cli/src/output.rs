//! CLI output formatting.

use std::fmt::Write as _;
use std::io::{self, Write};

use serde::Serialize;

use trigcalc_core::angle::degrees_to_radians;
use trigcalc_core::results::TrigResults;
use trigcalc_orchestration::display::{format_general, ResultDisplay, DISPLAY_PRECISION, LOOKUP_UNAVAILABLE};
use trigcalc_orchestration::input::ParsedInput;
use trigcalc_orchestration::sweep::{SweepRow, SweepSummary};

use crate::ui::{header, label};

/// How results are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Significant digits for error magnitudes.
const ERROR_PRECISION: usize = 3;

/// Render the full three-panel report.
#[must_use]
pub fn render_report(
    input: &ParsedInput,
    results: &TrigResults,
    display: &ResultDisplay,
    details: bool,
) -> String {
    let mut out = String::new();
    let rad = format_general(degrees_to_radians(input.angle), DISPLAY_PRECISION);
    let _ = writeln!(out, "Angle: {}° ({rad} rad)", format_general(input.angle, DISPLAY_PRECISION));

    let _ = writeln!(out, "{}", header(&format!("Taylor Series ({} terms)", input.terms)));
    let _ = writeln!(out, "{} {}", label("sin"), display.sin_taylor);
    let _ = writeln!(out, "{} {}", label("cos"), display.cos_taylor);

    let _ = writeln!(out, "{}", header("Lookup Table"));
    let _ = writeln!(out, "{} {}", label("sin"), display.sin_lookup);
    let _ = writeln!(out, "{} {}", label("cos"), display.cos_lookup);

    let _ = writeln!(out, "{}", header("Standard Library"));
    let _ = writeln!(out, "{} {}", label("sin"), display.sin_std);
    let _ = writeln!(out, "{} {}", label("cos"), display.cos_std);

    if details {
        let errors = results.errors();
        let lookup = |e: Option<f64>| {
            e.map_or_else(
                || LOOKUP_UNAVAILABLE.to_string(),
                |v| format_general(v, ERROR_PRECISION),
            )
        };
        let _ = writeln!(out, "{}", header("Absolute Error vs Standard Library"));
        let _ = writeln!(
            out,
            "{} taylor {}  lookup {}",
            label("sin"),
            format_general(errors.sin_taylor, ERROR_PRECISION),
            lookup(errors.sin_lookup)
        );
        let _ = writeln!(
            out,
            "{} taylor {}  lookup {}",
            label("cos"),
            format_general(errors.cos_taylor, ERROR_PRECISION),
            lookup(errors.cos_lookup)
        );
    }
    out
}

/// Render only the six values, one per line, in display order.
#[must_use]
pub fn render_quiet(display: &ResultDisplay) -> String {
    display
        .fields()
        .iter()
        .map(|(_, value)| format!("{value}\n"))
        .collect()
}

#[derive(Serialize)]
struct JsonReport<'a> {
    angle: f64,
    terms: u32,
    results: &'a TrigResults,
    display: &'a ResultDisplay,
}

/// Render one activation as JSON. NaN values become `null`.
pub fn render_json(
    input: &ParsedInput,
    results: &TrigResults,
    display: &ResultDisplay,
) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&JsonReport {
        angle: input.angle,
        terms: input.terms,
        results,
        display,
    })
}

const COLUMN: usize = 23;

/// Render a sweep as an aligned table followed by a summary line.
#[must_use]
pub fn render_sweep_table(rows: &[SweepRow], summary: Option<&SweepSummary>) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:>10} {:>COLUMN$} {:>COLUMN$} {:>COLUMN$} {:>COLUMN$} {:>COLUMN$} {:>COLUMN$}",
        "angle", "taylor sin", "taylor cos", "lookup sin", "lookup cos", "std sin", "std cos"
    );
    for row in rows {
        let d = ResultDisplay::from_results(&row.results);
        let _ = writeln!(
            out,
            "{:>10} {:>COLUMN$} {:>COLUMN$} {:>COLUMN$} {:>COLUMN$} {:>COLUMN$} {:>COLUMN$}",
            format_general(row.angle, DISPLAY_PRECISION),
            d.sin_taylor,
            d.cos_taylor,
            d.sin_lookup,
            d.cos_lookup,
            d.sin_std,
            d.cos_std
        );
    }
    if let Some(s) = summary {
        let _ = writeln!(
            out,
            "{} rows, {} lookup hits, max Taylor error {} at {}°",
            s.rows,
            s.lookup_hits,
            format_general(s.max_taylor_error, ERROR_PRECISION),
            format_general(s.worst_angle, DISPLAY_PRECISION)
        );
    }
    out
}

/// Render a sweep as JSON.
pub fn render_sweep_json(
    rows: &[SweepRow],
    summary: Option<&SweepSummary>,
) -> serde_json::Result<String> {
    #[derive(Serialize)]
    struct JsonSweep<'a> {
        rows: &'a [SweepRow],
        summary: Option<&'a SweepSummary>,
    }
    serde_json::to_string_pretty(&JsonSweep { rows, summary })
}

/// Write rendered output to a file.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be created or written.
pub fn write_to_file(path: &str, contents: &str) -> io::Result<()> {
    let mut file = std::fs::File::create(path)?;
    file.write_all(contents.as_bytes())?;
    Ok(())
}
