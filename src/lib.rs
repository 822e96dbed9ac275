//! termfx - ANSI colors, in-place progress bars and animated loaders.
//!
//! The library renders three kinds of terminal effects:
//!
//! - [`colorize`] wraps a message in one of eight [`Color`] escapes.
//! - [`render_progress`] redraws a single-line progress bar in place.
//! - [`start_loader`] animates a [`LoaderKind`] on a timer until the
//!   returned [`LoaderHandle`] is stopped.
//!
//! The `termfx` binary wraps these in a small demo CLI with a JSON config.

#![deny(missing_docs)]

/// Version string from Cargo.toml.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod ansi;
pub mod cli;
pub mod color;
pub mod config;
pub mod error;
pub mod loader;
pub mod output;
pub mod progress;

// Re-export key types for convenience
pub use color::{colorize, Color};
pub use error::{Error, Result};
pub use loader::{start_loader, LoaderHandle, LoaderKind, LoaderOptions, LoaderSnapshot};
pub use output::{CaptureBuffer, Output};
pub use progress::{
    finish_progress, render_progress, render_progress_styled, ProgressState, ProgressStyle,
};
