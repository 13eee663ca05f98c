//! Constants shared by the engine and its front ends.

/// Text rendered in place of a division-by-zero result.
pub const ERROR_TEXT: &str = "Error";

/// Radix used when accumulating digit input.
pub const RADIX: f64 = 10.0;

/// Result of an evaluation with no pending operator.
pub const NO_OPERATOR_RESULT: f64 = 0.0;

/// Maximum number of transitions kept by a history tape.
pub const TAPE_CAPACITY: usize = 500;

/// Process exit codes.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error (I/O, terminal setup).
    pub const ERROR_GENERIC: i32 = 1;
    /// Malformed input on the command line.
    pub const ERROR_INPUT: i32 = 2;
    /// The session ended on a division by zero in strict mode.
    pub const ERROR_DIVIDE_BY_ZERO: i32 = 3;
}
