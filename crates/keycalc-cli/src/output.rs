//! CLI output formatting.

use std::io::{self, Write};
use std::path::Path;

use keycalc_core::DisplayValue;

/// Render a display value as text, optionally grouping integer digits.
#[must_use]
pub fn format_display(value: &DisplayValue, group: bool) -> String {
    match value {
        DisplayValue::Number(n) if group && n.is_finite() => group_digits(&value.to_string()),
        other => other.to_string(),
    }
}

/// Insert thousands separators into the integer part of a decimal string.
#[must_use]
pub fn group_digits(s: &str) -> String {
    let (sign, unsigned) = match s.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", s),
    };
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (unsigned, None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, c) in int_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    let mut result: String = sign.to_string();
    result.extend(grouped.chars().rev());
    if let Some(frac) = frac_part {
        result.push('.');
        result.push_str(frac);
    }
    result
}

/// Format one `--trace` line.
#[must_use]
pub fn format_step(key: &str, display: &str, phase: &str) -> String {
    format!("{key:>3} -> {display:<20} [{phase}]")
}

/// Write the display text to a file.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be created or written.
pub fn write_to_file(path: &Path, text: &str) -> io::Result<()> {
    let mut file = std::fs::File::create(path)?;
    writeln!(file, "{text}")?;
    Ok(())
}
