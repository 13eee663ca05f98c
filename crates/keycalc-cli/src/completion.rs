//! Shell completion generation.

use std::io;

use clap::CommandFactory;
use clap_complete::{generate, Shell};

/// Name the completion scripts are generated for.
pub const BIN_NAME: &str = "keycalc";

/// Write the completion script of the parser `P` for `shell` to `out`.
pub fn generate_completion<P: CommandFactory>(shell: Shell, out: &mut dyn io::Write) {
    let mut cmd = P::command();
    generate(shell, &mut cmd, BIN_NAME, out);
}
