//! Error type for the rendering library.

use std::io;

/// Convenience alias for results returned by the renderers.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced by the rendering library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A name outside a closed set (color, loader kind) was supplied.
    #[error("Invalid {kind}: {value:?} (expected one of: {expected})")]
    InvalidArgument {
        /// What was being parsed, e.g. "color".
        kind: &'static str,
        /// The rejected input.
        value: String,
        /// Comma-separated list of accepted names.
        expected: String,
    },

    /// A loader was started outside a tokio runtime.
    #[error("Loader requires a running tokio runtime")]
    NoRuntime,

    /// Writing to the output sink failed.
    #[error("Failed to write to terminal: {0}")]
    Io(#[from] io::Error),
}

impl Error {
    /// Build an [`Error::InvalidArgument`] from the accepted names.
    pub fn invalid_argument(kind: &'static str, value: &str, accepted: &[&str]) -> Self {
        Self::InvalidArgument {
            kind,
            value: value.to_string(),
            expected: accepted.join(", "),
        }
    }
}
