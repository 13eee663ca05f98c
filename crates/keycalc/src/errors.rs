//! Error handling and exit codes.

use std::io;

use thiserror::Error;

use keycalc_core::constants::exit_codes;

/// Failures of a CLI session.
#[derive(Debug, Error)]
pub enum AppError {
    /// A symbol the registry does not know, rejected under `--strict`.
    #[error("unrecognized key {0:?}")]
    UnrecognizedKey(String),

    /// The session ended on the error indicator under `--strict`.
    #[error("calculation ended in error (division by zero)")]
    DivideByZero,

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Map an application error to the process exit code.
#[must_use]
pub fn handle_error(err: &anyhow::Error) -> i32 {
    match err.downcast_ref::<AppError>() {
        Some(AppError::UnrecognizedKey(_)) => exit_codes::ERROR_INPUT,
        Some(AppError::DivideByZero) => exit_codes::ERROR_DIVIDE_BY_ZERO,
        Some(AppError::Io(_)) | None => exit_codes::ERROR_GENERIC,
    }
}
