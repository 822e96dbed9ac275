//! Explicit per-animation state.
//!
//! A [`LoaderSession`] owns the frame cursor and start instant of one
//! running loader. It renders lines but never writes them; the timer task
//! in `handle.rs` drives it.

use std::time::Duration;

use tokio::time::Instant;

use super::kind::LoaderKind;
use crate::ansi::{CARRIAGE_RETURN, DIM, FRAME, RESET};

/// Lifecycle of a loader: `Created → Running → Stopped`, never back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoaderState {
    /// Built but the cursor has not been hidden yet.
    Created,
    /// Timer is ticking.
    Running,
    /// Timer cancelled and terminal restored.
    Stopped,
}

/// Frame cursor, message and timing of one loader.
#[derive(Debug, Clone)]
pub struct LoaderSession {
    kind: LoaderKind,
    message: String,
    interval: Duration,
    started_at: Instant,
    frame_index: usize,
    ticks: u64,
}

impl LoaderSession {
    /// Create a session starting now.
    pub fn new(kind: LoaderKind, message: impl Into<String>, interval: Duration) -> Self {
        Self::starting_at(kind, message, interval, Instant::now())
    }

    /// Create a session with an explicit start instant.
    pub fn starting_at(
        kind: LoaderKind,
        message: impl Into<String>,
        interval: Duration,
        started_at: Instant,
    ) -> Self {
        Self {
            kind,
            message: message.into(),
            interval,
            started_at,
            frame_index: 0,
            ticks: 0,
        }
    }

    /// Animation kind.
    pub fn kind(&self) -> LoaderKind {
        self.kind
    }

    /// Text shown after the frame.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Timer cadence.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// When the session started.
    pub fn started_at(&self) -> Instant {
        self.started_at
    }

    /// Index of the frame the next tick will draw.
    pub fn frame_index(&self) -> usize {
        self.frame_index
    }

    /// Number of frames drawn so far.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Frame the next tick will draw.
    pub fn current_frame(&self) -> &'static str {
        self.kind.frame(self.frame_index)
    }

    /// Time since the session started.
    pub fn elapsed(&self) -> Duration {
        self.started_at.elapsed()
    }

    /// Render the line for the current frame at the given elapsed time.
    ///
    /// Format: `\r` + cyan frame + reset + ` message ` + dim `(N.Ns)`.
    pub fn render_line(&self, elapsed: Duration) -> String {
        format!(
            "{CARRIAGE_RETURN}{FRAME}{frame}{RESET} {message} {DIM}({secs:.1}s){RESET}",
            frame = self.current_frame(),
            message = self.message,
            secs = elapsed.as_secs_f64(),
        )
    }

    /// Render the current frame, then advance the cursor (wrapping).
    pub fn tick(&mut self) -> String {
        let line = self.render_line(self.elapsed());
        self.frame_index = (self.frame_index + 1) % self.kind.frames().len();
        self.ticks += 1;
        line
    }
}
