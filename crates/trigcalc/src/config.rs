//! Application configuration from CLI flags and environment.

use clap::Parser;
use tracing::Level;

use trigcalc_cli::output::OutputFormat;
use trigcalc_core::constants::DEFAULT_MODULE_NAME;
use trigcalc_core::options::Options;
use trigcalc_orchestration::input::parse_terms;
use trigcalc_orchestration::sweep::{SweepError, SweepRange};

/// TrigCalc-rs — compare Taylor series, lookup table and std trigonometry.
#[derive(Parser, Debug)]
#[command(name = "trigcalc", version, about)]
#[allow(clippy::struct_excessive_bools)]
pub struct AppConfig {
    /// Angle in degrees.
    #[arg(short, long, env = "TRIGCALC_ANGLE", allow_hyphen_values = true)]
    pub angle: Option<String>,

    /// Number of Taylor series terms (invalid or non-positive values use 10).
    #[arg(
        short,
        long,
        default_value = "10",
        env = "TRIGCALC_TERMS",
        allow_hyphen_values = true
    )]
    pub terms: String,

    /// Trigonometry module to load.
    #[arg(long, default_value = DEFAULT_MODULE_NAME, env = "TRIGCALC_MODULE")]
    pub module: String,

    /// Reduce the angle into [-π, π] before the Taylor expansion.
    #[arg(long)]
    pub reduce: bool,

    /// Emit JSON instead of text.
    #[arg(long)]
    pub json: bool,

    /// Output file path.
    #[arg(short, long)]
    pub output: Option<String>,

    /// Show absolute errors against the standard library.
    #[arg(short, long)]
    pub details: bool,

    /// Quiet mode (only the six values).
    #[arg(short, long)]
    pub quiet: bool,

    /// Verbose output.
    #[arg(short, long)]
    pub verbose: bool,

    /// Sweep a range of angles: START:END[:STEP].
    #[arg(long, value_name = "START:END[:STEP]", allow_hyphen_values = true)]
    pub sweep: Option<String>,

    /// Launch interactive TUI.
    #[arg(long)]
    pub tui: bool,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Default log level; `RUST_LOG` still takes precedence per target.
    #[must_use]
    pub fn log_level(&self) -> Level {
        if self.verbose {
            Level::DEBUG
        } else {
            Level::WARN
        }
    }

    #[must_use]
    pub fn output_format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }

    /// Backend options derived from the flags.
    #[must_use]
    pub fn options(&self) -> Options {
        Options {
            terms: parse_terms(&self.terms),
            range_reduction: self.reduce,
        }
        .normalize()
    }

    /// The requested sweep, if any.
    pub fn sweep_range(&self) -> Result<Option<SweepRange>, SweepError> {
        self.sweep
            .as_deref()
            .map(str::parse::<SweepRange>)
            .transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> AppConfig {
        AppConfig::try_parse_from(std::iter::once("trigcalc").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn defaults() {
        let config = parse(&[]);
        assert_eq!(config.terms, "10");
        assert_eq!(config.module, "trigonometry");
        assert!(config.angle.is_none());
        assert!(!config.reduce);
        assert_eq!(config.output_format(), OutputFormat::Text);
        assert_eq!(config.log_level(), Level::WARN);
    }

    #[test]
    fn negative_angle_is_a_value() {
        let config = parse(&["-a", "-45", "-t", "-3"]);
        assert_eq!(config.angle.as_deref(), Some("-45"));
        assert_eq!(config.terms, "-3");
        assert_eq!(config.options().terms, 10);
    }

    #[test]
    fn options_follow_flags() {
        let config = parse(&["-a", "30", "--terms", "4", "--reduce"]);
        let opts = config.options();
        assert_eq!(opts.terms, 4);
        assert!(opts.range_reduction);
    }

    #[test]
    fn verbose_raises_level() {
        assert_eq!(parse(&["-v"]).log_level(), Level::DEBUG);
    }

    #[test]
    fn json_format() {
        assert_eq!(parse(&["--json"]).output_format(), OutputFormat::Json);
    }

    #[test]
    fn sweep_range_parsing() {
        let config = parse(&["--sweep", "-90:90:45"]);
        let range = config.sweep_range().unwrap().unwrap();
        assert_eq!(range.len(), 5);

        assert!(parse(&[]).sweep_range().unwrap().is_none());
        assert!(parse(&["--sweep", "bogus"]).sweep_range().is_err());
    }

    #[test]
    fn unknown_shell_rejected() {
        let err = AppConfig::try_parse_from(["trigcalc", "--completion", "nosuchshell"]);
        assert!(err.is_err());
    }
}
