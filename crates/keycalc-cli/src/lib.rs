//! # keycalc-cli
//!
//! CLI output, session presentation, and shell completion.

pub mod completion;
pub mod output;
pub mod presenter;
pub mod ui;

pub use presenter::{CliPresenter, SessionPresenter};
