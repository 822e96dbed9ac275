//! Timer-driven loader sessions and their stop handles.
//!
//! [`start_loader`] hides the cursor, spawns one tokio task that ticks the
//! session at a fixed cadence, and returns a [`LoaderHandle`]. The task and
//! the handle share a single lock over the session state: a tick either
//! completes before `stop()` takes the lock, or observes `Stopped` and
//! exits without writing.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};
use tracing::{debug, trace, warn};

use super::kind::LoaderKind;
use super::session::{LoaderSession, LoaderState};
use crate::ansi::{CURSOR_HIDE, CURSOR_SHOW};
use crate::color::{colorize, Color};
use crate::error::{Error, Result};
use crate::output::Output;

/// Default time between frames.
pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(300);

/// Shortest accepted interval; smaller values are raised to this.
pub const MIN_INTERVAL: Duration = Duration::from_millis(1);

/// Written by `stop()`: back to column 0, clear the line, show the cursor.
pub const STOP_SEQUENCE: &str = "\r\x1b[K\x1b[?25h";

/// How a loader is scheduled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoaderOptions {
    /// Time between frames.
    pub interval: Duration,
    /// Draw frame 0 at start instead of after the first interval.
    pub immediate_first_frame: bool,
}

impl Default for LoaderOptions {
    fn default() -> Self {
        Self {
            interval: DEFAULT_INTERVAL,
            immediate_first_frame: false,
        }
    }
}

impl LoaderOptions {
    /// Options with the given interval in milliseconds.
    pub fn with_interval_ms(interval_ms: u64) -> Self {
        Self {
            interval: Duration::from_millis(interval_ms),
            ..Self::default()
        }
    }

    /// Toggle drawing the first frame at start.
    pub fn immediate(mut self, immediate_first_frame: bool) -> Self {
        self.immediate_first_frame = immediate_first_frame;
        self
    }
}

/// Point-in-time view of a loader.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoaderSnapshot {
    /// Animation kind.
    pub kind: LoaderKind,
    /// Index of the frame the next tick will draw.
    pub frame_index: usize,
    /// Frames drawn so far.
    pub ticks: u64,
    /// Lifecycle state.
    pub state: LoaderState,
}

struct Shared {
    session: LoaderSession,
    state: LoaderState,
}

/// Stop handle for a running loader.
///
/// Stopping is idempotent; dropping a running handle stops it.
pub struct LoaderHandle {
    shared: Arc<Mutex<Shared>>,
    output: Output,
    task: JoinHandle<()>,
}

/// Start a loader on `output`.
///
/// Must be called from within a tokio runtime. Only one loader should
/// target a given line at a time; concurrent loaders on the same stream
/// overwrite each other's frames.
pub fn start_loader(
    output: &Output,
    kind: LoaderKind,
    message: impl Into<String>,
    options: LoaderOptions,
) -> Result<LoaderHandle> {
    let runtime = Handle::try_current().map_err(|_| Error::NoRuntime)?;
    let interval = options.interval.max(MIN_INTERVAL);

    let session = LoaderSession::new(kind, message, interval);
    let shared = Arc::new(Mutex::new(Shared {
        session,
        state: LoaderState::Created,
    }));

    // Cursor hide and the optional first frame go out as one write.
    let mut preamble = String::from(CURSOR_HIDE);
    {
        let mut guard = shared.lock();
        guard.state = LoaderState::Running;
        if options.immediate_first_frame {
            preamble.push_str(&guard.session.tick());
        }
    }
    if let Err(err) = output.write_str(&preamble) {
        // A partial write may have hidden the cursor with no handle left to show it.
        let _ = output.write_str(CURSOR_SHOW);
        return Err(err.into());
    }

    let first_tick = Instant::now() + interval;
    let task = runtime.spawn(run_ticks(
        Arc::clone(&shared),
        output.clone(),
        first_tick,
        interval,
    ));

    debug!(
        kind = %kind,
        interval_ms = interval.as_millis() as u64,
        immediate = options.immediate_first_frame,
        "loader started"
    );

    Ok(LoaderHandle {
        shared,
        output: output.clone(),
        task,
    })
}

async fn run_ticks(
    shared: Arc<Mutex<Shared>>,
    output: Output,
    first_tick: Instant,
    interval: Duration,
) {
    let mut ticker = time::interval_at(first_tick, interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        ticker.tick().await;
        if !draw_frame(&shared, &output) {
            break;
        }
    }
}

/// Draw one frame. Returns false once the loader should stop ticking.
fn draw_frame(shared: &Mutex<Shared>, output: &Output) -> bool {
    let mut guard = shared.lock();
    if guard.state == LoaderState::Stopped {
        return false;
    }

    let line = guard.session.tick();
    trace!(frame = guard.session.ticks(), "loader tick");
    match output.write_str(&line) {
        Ok(()) => true,
        Err(err) => {
            warn!(error = %err, "loader output failed, ticking stopped");
            false
        }
    }
}

impl LoaderHandle {
    /// Stop the animation and restore the terminal.
    ///
    /// No frame is written after this returns. Calling it again does
    /// nothing.
    pub fn stop(&self) -> Result<()> {
        self.finish().map(|_| ())
    }

    /// Stop, then print a green check mark and `message` on its own line.
    ///
    /// Prints nothing if the loader was already stopped.
    pub fn stop_with_success(&self, message: &str) -> Result<()> {
        self.stop_with_symbol("✔", Color::Green, message)
    }

    /// Stop, then print a red cross and `message` on its own line.
    ///
    /// Prints nothing if the loader was already stopped.
    pub fn stop_with_failure(&self, message: &str) -> Result<()> {
        self.stop_with_symbol("✘", Color::Red, message)
    }

    /// Whether `stop()` has been called.
    pub fn is_stopped(&self) -> bool {
        self.shared.lock().state == LoaderState::Stopped
    }

    /// Current frame cursor, tick count and state.
    pub fn snapshot(&self) -> LoaderSnapshot {
        let guard = self.shared.lock();
        LoaderSnapshot {
            kind: guard.session.kind(),
            frame_index: guard.session.frame_index(),
            ticks: guard.session.ticks(),
            state: guard.state,
        }
    }

    /// Time since the loader started.
    pub fn elapsed(&self) -> Duration {
        self.shared.lock().session.elapsed()
    }

    fn stop_with_symbol(&self, symbol: &str, color: Color, message: &str) -> Result<()> {
        if self.finish()? {
            let line = format!("{} {message}\n", colorize(symbol, color));
            self.output.write_str(&line)?;
        }
        Ok(())
    }

    /// Transition to `Stopped`. Returns whether this call did the stopping.
    fn finish(&self) -> Result<bool> {
        let mut guard = self.shared.lock();
        if guard.state == LoaderState::Stopped {
            return Ok(false);
        }
        guard.state = LoaderState::Stopped;
        self.task.abort();

        debug!(
            kind = %guard.session.kind(),
            ticks = guard.session.ticks(),
            "loader stopped"
        );
        self.output.write_str(STOP_SEQUENCE)?;
        Ok(true)
    }
}

impl Drop for LoaderHandle {
    fn drop(&mut self) {
        let _ = self.finish();
    }
}

impl std::fmt::Debug for LoaderHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoaderHandle")
            .field("snapshot", &self.snapshot())
            .finish_non_exhaustive()
    }
}
