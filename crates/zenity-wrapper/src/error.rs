//! Errors raised by the zenity wrapper

use thiserror::Error;

/// Exit code zenity uses when the user cancels or declines
pub const EXIT_CANCELLED: i32 = 1;

/// Exit code zenity uses when `--timeout` expires
pub const EXIT_TIMEOUT: i32 = 5;

/// Errors specific to zenity invocations
///
/// Cancellation is never one of these: a dismissed dialog is reported as a
/// value (`None`, `false`, `Button::Cancel`) by the dialog methods.
#[derive(Error, Debug)]
pub enum ZenityError {
    #[error("zenity binary not found: {0}. Install zenity (e.g. 'apt install zenity' or 'brew install zenity').")]
    BinaryNotFound(String),

    #[error("zenity exited with status {0}")]
    Failed(i32),

    #[error("zenity was terminated by a signal")]
    Terminated,

    #[error("dialog timed out")]
    TimedOut,

    #[error("Unexpected zenity output: {0}")]
    InvalidOutput(String),

    #[error("Progress dialog is already closed")]
    ProgressClosed,
}
