//! Loader command implementation.
//!
//! Runs one loader until either the configured duration elapses or the
//! interrupt future resolves (Ctrl+C in the binary), then stops it.

use std::future::Future;
use std::time::Duration;

use tracing::debug;

use crate::loader::{start_loader, LoaderKind, LoaderOptions};
use crate::output::Output;

/// Result type for loader command operations.
pub type LoaderCommandResult = Result<LoaderOutcome, LoaderCommandError>;

/// Error type for loader command operations.
#[derive(Debug, thiserror::Error)]
pub enum LoaderCommandError {
    /// The loader could not be started or stopped.
    #[error("Loader failed: {0}")]
    Render(#[from] crate::Error),
}

/// How a loader run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoaderOutcome {
    /// The duration elapsed.
    Completed,
    /// The interrupt fired first.
    Interrupted,
}

/// Settings for one run of the loader demo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoaderDemo {
    /// Animation kind.
    pub kind: LoaderKind,
    /// Text shown after the frame.
    pub message: String,
    /// Scheduling options.
    pub options: LoaderOptions,
    /// How long to run before stopping.
    pub duration: Duration,
}

/// Run a loader on `output` until `duration` elapses or `interrupt` resolves.
///
/// Completion prints a green check line, interruption a red cross line;
/// either way the cursor is shown again.
pub async fn run_loader<F>(output: &Output, demo: &LoaderDemo, interrupt: F) -> LoaderCommandResult
where
    F: Future,
{
    let handle = start_loader(output, demo.kind, demo.message.clone(), demo.options)?;

    let outcome = tokio::select! {
        _ = tokio::time::sleep(demo.duration) => LoaderOutcome::Completed,
        _ = interrupt => LoaderOutcome::Interrupted,
    };
    debug!(?outcome, "loader demo finished");

    match outcome {
        LoaderOutcome::Completed => handle.stop_with_success("Done")?,
        LoaderOutcome::Interrupted => handle.stop_with_failure("Interrupted")?,
    }
    Ok(outcome)
}
