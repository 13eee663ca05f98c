//! Application entry point and dispatch.

use std::io::{self, BufRead};
use std::sync::Arc;

use anyhow::Result;
use tracing::debug;

use keycalc_cli::output::{format_display, write_to_file};
use keycalc_cli::presenter::{CliPresenter, SessionPresenter};
use keycalc_cli::ui::print_banner;
use keycalc_core::observers::LoggingObserver;
use keycalc_core::{parse_keys, CalculatorEngine, DisplayValue, Key, Resolution};

use crate::config::AppConfig;
use crate::errors::AppError;

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    // Handle shell completion
    if let Some(shell) = config.completion {
        keycalc_cli::completion::generate_completion::<AppConfig>(shell, &mut io::stdout());
        return Ok(());
    }

    // Handle TUI mode
    if config.tui {
        return run_tui();
    }

    let mut presenter = CliPresenter::stdout(config.group, config.quiet);
    let display = match config.keys.as_deref() {
        Some(script) => run_script(config, script, &mut presenter)?,
        None => {
            if !config.quiet {
                let engine = new_session();
                print_banner(&engine.registry().available());
            }
            let stdin = io::stdin();
            run_lines(config, stdin.lock(), &mut presenter)?
        }
    };

    finish(config, &display)?;
    Ok(())
}

/// A session with logging attached.
#[must_use]
pub fn new_session() -> CalculatorEngine {
    let mut engine = CalculatorEngine::new();
    engine.subscribe(Arc::new(LoggingObserver::new()));
    engine
}

/// Replay one script on a fresh session and present the outcome.
///
/// # Errors
///
/// Returns [`AppError::UnrecognizedKey`] under `--strict`, or an I/O error
/// from the presenter.
pub fn run_script<P: SessionPresenter>(
    config: &AppConfig,
    script: &str,
    presenter: &mut P,
) -> Result<DisplayValue, AppError> {
    let mut engine = new_session();
    replay(config, &mut engine, script, presenter)?;
    present(config, &engine, presenter)?;
    Ok(engine.display_value())
}

/// Feed every input line to one session, presenting after each line.
///
/// Under `--strict` a line holding an unrecognized key is reported and
/// skipped whole; the session continues with the next line.
///
/// # Errors
///
/// Returns an I/O error from reading input or from the presenter.
pub fn run_lines<R: BufRead, P: SessionPresenter>(
    config: &AppConfig,
    input: R,
    presenter: &mut P,
) -> Result<DisplayValue, AppError> {
    let mut engine = new_session();
    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        match replay(config, &mut engine, &line, presenter) {
            Ok(()) => {}
            Err(err @ AppError::UnrecognizedKey(_)) => presenter.present_error(&err.to_string()),
            Err(err) => return Err(err),
        }
        present(config, &engine, presenter)?;
    }
    Ok(engine.display_value())
}

fn replay<P: SessionPresenter>(
    config: &AppConfig,
    engine: &mut CalculatorEngine,
    script: &str,
    presenter: &mut P,
) -> Result<(), AppError> {
    let keys = parse_keys(script);
    if config.strict {
        // Reject before pressing so a bad script leaves the session untouched
        for key in &keys {
            check_key(engine, key)?;
        }
    }
    for key in &keys {
        engine.press(key);
        if config.trace {
            presenter.present_step(key, &engine.display_value(), engine.phase())?;
        }
    }
    debug!(script, phase = %engine.phase(), "Script replayed");
    Ok(())
}

fn check_key(engine: &CalculatorEngine, key: &Key) -> Result<(), AppError> {
    match key {
        Key::Symbol(symbol) if engine.registry().resolve(symbol) == Resolution::Unrecognized => {
            Err(AppError::UnrecognizedKey(symbol.clone()))
        }
        _ => Ok(()),
    }
}

fn present<P: SessionPresenter>(
    config: &AppConfig,
    engine: &CalculatorEngine,
    presenter: &mut P,
) -> Result<(), AppError> {
    if config.json {
        presenter.present_snapshot(&engine.snapshot())?;
    } else if !config.trace {
        presenter.present_display(&engine.display_value(), engine.phase())?;
    }
    Ok(())
}

/// Write the output file and apply the strict error check.
fn finish(config: &AppConfig, display: &DisplayValue) -> Result<(), AppError> {
    if let Some(ref path) = config.output {
        write_to_file(path, &format_display(display, config.group))?;
    }
    if config.strict && display.is_error() {
        return Err(AppError::DivideByZero);
    }
    Ok(())
}

fn run_tui() -> Result<()> {
    let mut app = keycalc_tui::TuiApp::with_engine(new_session());
    app.run().map_err(|e| anyhow::anyhow!("TUI error: {e}"))?;
    Ok(())
}
