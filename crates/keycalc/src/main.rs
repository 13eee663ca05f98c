//! keycalc: four-function keypad calculator.

use anyhow::Result;
use keycalc_lib::{app, config, errors};

fn main() -> Result<()> {
    // Logs go to stderr so stdout carries only the display
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = config::AppConfig::parse();
    if let Err(err) = app::run(&config) {
        keycalc_cli::ui::print_error(&format!("{err:#}"));
        std::process::exit(errors::handle_error(&err));
    }
    Ok(())
}
