//! Application configuration from CLI flags and environment.

use std::path::PathBuf;

use clap::Parser;

/// keycalc: a four-function keypad calculator.
///
/// Key scripts are digits and operator symbols, e.g. `12+30=`. Recognized
/// operators are `+ - * / = C` and their aliases `x × ÷ − AC`.
#[derive(Parser, Debug)]
#[command(name = "keycalc", version, about)]
#[allow(clippy::struct_excessive_bools)]
pub struct AppConfig {
    /// Key script to replay, e.g. "12+30=".
    #[arg(short, long, env = "KEYCALC_KEYS")]
    pub keys: Option<String>,

    /// Print one line per key: key, display, phase.
    #[arg(short, long)]
    pub trace: bool,

    /// Print the final session state as JSON.
    #[arg(long)]
    pub json: bool,

    /// Group integer digits with thousands separators.
    #[arg(short, long)]
    pub group: bool,

    /// Fail on unrecognized keys and on an error display.
    #[arg(long)]
    pub strict: bool,

    /// Quiet mode (only output the display).
    #[arg(short, long)]
    pub quiet: bool,

    /// Launch the interactive keypad.
    #[arg(long)]
    pub tui: bool,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,

    /// Also write the final display to this file.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }
}
