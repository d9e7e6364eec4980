//! Live progress dialogs
//!
//! zenity's progress protocol is line based: a bare integer sets the
//! percentage and a line starting with `#` replaces the status text. Closing
//! stdin finishes the dialog.

use anyhow::{bail, Context, Result};
use std::io::{ErrorKind, Write};
use std::process::{Child, ChildStdin};
use tracing::debug;

use crate::error::ZenityError;
use crate::output::Outcome;

/// Handle to a running progress dialog
///
/// Dropping the handle closes stdin and reaps the process, so the dialog
/// never outlives its handle.
#[derive(Debug)]
pub struct ProgressHandle {
    child: Child,
    stdin: Option<ChildStdin>,
}

impl ProgressHandle {
    pub(crate) fn new(mut child: Child) -> Result<Self> {
        let stdin = child
            .stdin
            .take()
            .context("Progress dialog has no stdin")?;
        Ok(Self {
            child,
            stdin: Some(stdin),
        })
    }

    /// Set the percentage (clamped to 100) and optionally the status text
    pub fn update(&mut self, percentage: u32, message: Option<&str>) -> Result<()> {
        let mut lines = format!("{}\n", percentage.min(100));
        if let Some(message) = message.filter(|m| !m.is_empty()) {
            lines.push_str(&format_message(message));
        }
        self.write(&lines)
    }

    /// Replace the status text without moving the bar
    pub fn message(&mut self, message: &str) -> Result<()> {
        self.write(&format_message(message))
    }

    /// Whether the dialog is still open
    pub fn is_running(&mut self) -> bool {
        matches!(self.child.try_wait(), Ok(None))
    }

    /// Close stdin and wait for the dialog to exit
    ///
    /// Returns `true` when zenity finished normally and `false` when the user
    /// cancelled it.
    pub fn close(mut self) -> Result<bool> {
        self.finish()?.confirmed()
    }

    fn finish(&mut self) -> Result<Outcome> {
        drop(self.stdin.take());
        let status = self
            .child
            .wait()
            .context("Failed to wait for progress dialog")?;
        let outcome = Outcome::from_status(status);
        debug!(?outcome, "progress dialog finished");
        Ok(outcome)
    }

    fn write(&mut self, lines: &str) -> Result<()> {
        let stdin = match self.stdin.as_mut() {
            Some(stdin) => stdin,
            None => bail!(ZenityError::ProgressClosed),
        };
        match stdin.write_all(lines.as_bytes()).and_then(|_| stdin.flush()) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::BrokenPipe => {
                self.stdin = None;
                bail!(ZenityError::ProgressClosed)
            }
            Err(e) => Err(e).context("Failed to write to progress dialog"),
        }
    }
}

impl Drop for ProgressHandle {
    fn drop(&mut self) {
        // Already reaped by close()
        if self.stdin.is_none() && !self.is_running() {
            return;
        }
        if let Err(e) = self.finish() {
            debug!(error = %e, "failed to reap progress dialog");
        }
    }
}

fn format_message(message: &str) -> String {
    format!("# {}\n", message.replace('\n', " "))
}
