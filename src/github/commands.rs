//! Workflow commands and the failure-reporting callback.
//!
//! The runner interprets stdout lines of the form `::name::value`. Values are
//! escaped so a multi-line message stays a single command.

use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, PoisonError};

/// Marks the current CI step as failed with a message.
pub trait FailureReporter {
    /// Records the failure and surfaces `message` to the user.
    fn set_failed(&self, message: &str);
}

/// Escapes a workflow command value.
#[must_use]
pub fn escape_data(value: &str) -> String {
    value
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

/// Renders a workflow command line (without trailing newline).
#[must_use]
pub fn format_command(name: &str, value: &str) -> String {
    format!("::{name}::{}", escape_data(value))
}

/// [`FailureReporter`] that speaks the GitHub Actions workflow command protocol.
///
/// Failures are written as `::error::` annotations; the reporter remembers
/// whether any failure was recorded so the process can pick its exit code.
#[derive(Debug)]
pub struct ActionsReporter<W = std::io::Stdout> {
    out: Mutex<W>,
    failed: AtomicBool,
}

impl ActionsReporter<std::io::Stdout> {
    /// Creates a reporter writing to stdout.
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> ActionsReporter<W> {
    /// Creates a reporter writing to `out`.
    #[must_use]
    pub const fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
            failed: AtomicBool::new(false),
        }
    }

    /// Returns true once [`FailureReporter::set_failed`] has been called.
    #[must_use]
    pub fn has_failed(&self) -> bool {
        self.failed.load(Ordering::SeqCst)
    }

    /// Asks the runner to redact `secret` from all subsequent log output.
    ///
    /// Blank values are ignored.
    pub fn add_mask(&self, secret: &str) {
        if secret.trim().is_empty() {
            return;
        }
        self.issue("add-mask", secret);
    }

    /// Consumes the reporter and returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.out.into_inner().unwrap_or_else(PoisonError::into_inner)
    }

    fn issue(&self, name: &str, value: &str) {
        let mut out = self.out.lock().unwrap_or_else(PoisonError::into_inner);
        if let Err(e) = writeln!(out, "{}", format_command(name, value)).and_then(|()| out.flush())
        {
            tracing::warn!("Failed to write workflow command '{name}': {e}");
        }
    }
}

impl<W: Write> FailureReporter for ActionsReporter<W> {
    fn set_failed(&self, message: &str) {
        self.failed.store(true, Ordering::SeqCst);
        self.issue("error", message);
    }
}
