//! Application entry point and dispatch.

use anyhow::Result;
use tracing::{debug, info};

use trigcalc_cli::output::{render_sweep_json, render_sweep_table, write_to_file, OutputFormat};
use trigcalc_cli::presenter::{CLINotifier, CLIResultPresenter};
use trigcalc_core::registry::DefaultFactory;
use trigcalc_orchestration::loader::LibraryLoader;
use trigcalc_orchestration::session::Session;
use trigcalc_orchestration::sweep::{run_sweep, summarize, SweepRange};

use crate::config::AppConfig;
use crate::errors::AppError;
use crate::version::full_version;

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    debug!(version = %full_version(), "starting");

    // Handle shell completion
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        trigcalc_cli::completion::generate_completion(&mut cmd, shell, &mut std::io::stdout());
        return Ok(());
    }

    let factory = DefaultFactory::with_options(config.options());

    // Handle TUI mode
    if config.tui {
        return run_tui(config, &factory);
    }

    if let Some(range) = config.sweep_range().map_err(AppError::from)? {
        return run_sweep_mode(config, &factory, &range);
    }

    // CLI mode
    run_cli(config, &factory)
}

fn run_cli(config: &AppConfig, factory: &DefaultFactory) -> Result<()> {
    let angle = config.angle.as_deref().ok_or_else(|| {
        AppError::Config("no angle given: use --angle, --sweep or --tui".to_string())
    })?;

    let notifier = CLINotifier;
    let presenter = CLIResultPresenter::new(config.output_format(), config.quiet, config.details);
    let mut session = Session::start(&config.module, factory, &notifier, &presenter);

    let outcome = session.activate(angle, &config.terms);
    session.shutdown();
    outcome.map_err(AppError::from)?;

    // Write to file if requested
    if let Some(ref path) = config.output {
        if let Some(rendered) = presenter.last_rendered() {
            write_to_file(path, &rendered)?;
            info!(path, "results written");
        }
    }

    Ok(())
}

fn run_sweep_mode(config: &AppConfig, factory: &DefaultFactory, range: &SweepRange) -> Result<()> {
    let terms = config.options().terms;
    let mut loader = LibraryLoader::new(config.module.as_str());
    loader.load(factory).map_err(AppError::from)?;

    let rows = run_sweep(&loader, range, terms).map_err(AppError::from)?;
    loader.unload();

    let summary = if config.quiet { None } else { summarize(&rows) };
    let rendered = match config.output_format() {
        OutputFormat::Json => {
            let mut json = render_sweep_json(&rows, summary.as_ref())?;
            json.push('\n');
            json
        }
        OutputFormat::Text => render_sweep_table(&rows, summary.as_ref()),
    };
    print!("{rendered}");

    if let Some(ref path) = config.output {
        write_to_file(path, &rendered)?;
        info!(path, rows = rows.len(), "sweep written");
    }

    Ok(())
}

fn run_tui(config: &AppConfig, factory: &DefaultFactory) -> Result<()> {
    // Create crossbeam channel for TUI messages
    let (tx, rx) = crossbeam_channel::unbounded::<trigcalc_tui::TuiMessage>();

    let notifier = trigcalc_tui::TuiNotifier::new(tx.clone());
    let presenter = trigcalc_tui::TuiResultPresenter::new(tx);
    let mut session = Session::start(&config.module, factory, &notifier, &presenter);

    let mut app = trigcalc_tui::TuiApp::new(rx, config.module.as_str(), session.state());
    if let Some(angle) = &config.angle {
        app.form.angle.clone_from(angle);
    }
    app.form.terms.clone_from(&config.terms);

    // Run TUI event loop on the main thread
    let outcome = app.run(&session);
    session.shutdown();
    outcome.map_err(|e| anyhow::anyhow!("TUI error: {e}"))?;

    Ok(())
}
