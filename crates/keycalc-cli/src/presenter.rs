//! CLI session presenter.

use std::io::{self, Write};

use keycalc_core::{DisplayValue, Key, Phase, StateSnapshot};

use crate::output::{format_display, format_step};
use crate::ui::{print_error, styled_display};

/// Trait for presenting a calculator session to the user.
pub trait SessionPresenter {
    /// Present the current display value.
    fn present_display(&mut self, value: &DisplayValue, phase: Phase) -> io::Result<()>;

    /// Present the effect of a single key (trace mode).
    fn present_step(&mut self, key: &Key, value: &DisplayValue, phase: Phase) -> io::Result<()>;

    /// Present a full state snapshot.
    fn present_snapshot(&mut self, snapshot: &StateSnapshot) -> io::Result<()>;

    /// Present an error.
    fn present_error(&self, error: &str);
}

/// Presenter writing plain lines to any writer (stdout in the binary).
pub struct CliPresenter<W: Write> {
    out: W,
    group: bool,
    quiet: bool,
}

impl<W: Write> CliPresenter<W> {
    #[must_use]
    pub fn new(out: W, group: bool, quiet: bool) -> Self {
        Self { out, group, quiet }
    }

    /// Recover the writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl CliPresenter<io::Stdout> {
    /// Presenter on standard output.
    #[must_use]
    pub fn stdout(group: bool, quiet: bool) -> Self {
        Self::new(io::stdout(), group, quiet)
    }
}

impl<W: Write> SessionPresenter for CliPresenter<W> {
    fn present_display(&mut self, value: &DisplayValue, phase: Phase) -> io::Result<()> {
        let text = format_display(value, self.group);
        if self.quiet {
            writeln!(self.out, "{text}")
        } else {
            writeln!(
                self.out,
                "{} [{phase}]",
                styled_display(&text, value.is_error())
            )
        }
    }

    fn present_step(&mut self, key: &Key, value: &DisplayValue, phase: Phase) -> io::Result<()> {
        let text = format_display(value, self.group);
        writeln!(
            self.out,
            "{}",
            format_step(&key.to_string(), &text, phase.label())
        )
    }

    fn present_snapshot(&mut self, snapshot: &StateSnapshot) -> io::Result<()> {
        let json = snapshot.to_json().map_err(io::Error::other)?;
        writeln!(self.out, "{json}")
    }

    fn present_error(&self, error: &str) {
        print_error(error);
    }
}
