//! keycalc library: application logic for the keypad calculator.

pub mod app;
pub mod config;
pub mod errors;
