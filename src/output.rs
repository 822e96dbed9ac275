//! Shared output sink for terminal writes.
//!
//! Every renderer writes through an [`Output`]. Clones share one sink and
//! one lock, so a single logical write (one progress line, one loader frame)
//! is never split by another writer mid-escape-sequence.

use std::fmt;
use std::io::{self, Write};
use std::sync::Arc;

use parking_lot::Mutex;

/// A cloneable handle to a shared terminal sink.
#[derive(Clone)]
pub struct Output {
    sink: Arc<Mutex<Box<dyn Write + Send>>>,
}

impl Output {
    /// Wrap an arbitrary writer.
    pub fn new<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            sink: Arc::new(Mutex::new(Box::new(writer))),
        }
    }

    /// Output bound to the process's standard output.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }

    /// Write `text` and flush, holding the lock for the whole operation.
    pub fn write_str(&self, text: &str) -> io::Result<()> {
        let mut sink = self.sink.lock();
        sink.write_all(text.as_bytes())?;
        sink.flush()
    }
}

impl fmt::Debug for Output {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Output").finish_non_exhaustive()
    }
}

/// In-memory sink that records everything written to it.
///
/// Clones share the same buffer, so one clone can be handed to an
/// [`Output`] while another is kept to inspect what was rendered.
#[derive(Debug, Clone, Default)]
pub struct CaptureBuffer {
    bytes: Arc<Mutex<Vec<u8>>>,
}

impl CaptureBuffer {
    /// Create an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything written so far, lossily decoded as UTF-8.
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.bytes.lock()).into_owned()
    }

    /// Discard everything written so far.
    pub fn clear(&self) {
        self.bytes.lock().clear();
    }

    /// Whether nothing has been written since creation or the last clear.
    pub fn is_empty(&self) -> bool {
        self.bytes.lock().is_empty()
    }

    /// An [`Output`] writing into this buffer.
    pub fn output(&self) -> Output {
        Output::new(self.clone())
    }
}

impl Write for CaptureBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.bytes.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
