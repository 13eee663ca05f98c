//! UI helpers for CLI display.

use console::style;

/// Check if color output is disabled via `NO_COLOR` env var.
#[must_use]
pub fn is_color_disabled() -> bool {
    std::env::var("NO_COLOR").is_ok()
}

/// Style the display text: red for the error indicator, bold otherwise.
#[must_use]
pub fn styled_display(text: &str, is_error: bool) -> String {
    if is_color_disabled() {
        text.to_string()
    } else if is_error {
        style(text).red().bold().to_string()
    } else {
        style(text).bold().to_string()
    }
}

/// Print the banner shown before an interactive stdin session.
pub fn print_banner(symbols: &[&str]) {
    let line = format!(
        "keycalc: type digits and operators ({}), one script per line; Ctrl+D to quit",
        symbols.join(" ")
    );
    if is_color_disabled() {
        eprintln!("{line}");
    } else {
        eprintln!("{}", style(line).cyan());
    }
}

/// Print an error message.
pub fn print_error(text: &str) {
    if is_color_disabled() {
        eprintln!("[ERROR] {text}");
    } else {
        eprintln!("{} {text}", style("[ERROR]").red().bold());
    }
}
