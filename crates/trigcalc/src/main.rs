//! TrigCalc-rs — Taylor series, lookup table and std trigonometry side by side.

use std::process::ExitCode;

use trigcalc_lib::{app, config, errors};

fn main() -> ExitCode {
    let config = config::AppConfig::parse();

    // Initialize tracing; RUST_LOG overrides the flag-derived default
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::builder()
                .with_default_directive(config.log_level().into())
                .from_env_lossy(),
        )
        .init();

    match app::run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if !errors::already_reported(&err) {
                trigcalc_cli::ui::print_error(&format!("{err:#}"));
            }
            let code = errors::exit_code(&err);
            ExitCode::from(u8::try_from(code).unwrap_or(1))
        }
    }
}
