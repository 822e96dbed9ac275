//! Animated loaders.
//!
//! A loader cycles through a fixed frame sequence on a timer until its
//! [`LoaderHandle`] is stopped:
//!
//! ```ignore
//! let output = Output::stdout();
//! let loader = start_loader(&output, LoaderKind::Spin, "Processing", LoaderOptions::default())?;
//! // ... do work ...
//! loader.stop_with_success("Done")?;
//! ```

mod handle;
mod kind;
mod session;

pub use handle::{
    start_loader, LoaderHandle, LoaderOptions, LoaderSnapshot, DEFAULT_INTERVAL, MIN_INTERVAL,
    STOP_SEQUENCE,
};
pub use kind::{LoaderKind, BAR_FRAMES, DOTS_FRAMES, SPIN_FRAMES};
pub use session::{LoaderSession, LoaderState};
