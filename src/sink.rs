//! Line-oriented output sinks for observations.
//!
//! A sink is append-only and accepts whole lines. Implementations must be
//! safe to share between threads: two lights writing at once never
//! interleave partial lines.

use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use std::io::{self, Stdout, Write};

/// Destination for observation lines.
pub trait LineSink: Send + Sync {
    /// Append one line. `line` carries no trailing newline.
    fn write_line(&self, line: &str) -> io::Result<()>;
}

/// Sink over any writer, serialized by a mutex.
///
/// # Example
///
/// ```rust
/// use stoplight::sink::{LineSink, WriterSink};
///
/// let sink = WriterSink::new(Vec::new());
/// sink.write_line("[Oak] Light is RED").unwrap();
/// assert_eq!(sink.into_inner(), b"[Oak] Light is RED\n");
/// ```
pub struct WriterSink<W: Write + Send> {
    out: Mutex<W>,
}

impl<W: Write + Send> WriterSink<W> {
    /// Wrap `out`; every write takes the lock.
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    /// Write `text` as-is, without a trailing newline, and flush.
    ///
    /// Used for prompts that share the writer with observation lines.
    pub fn write_text(&self, text: &str) -> io::Result<()> {
        let mut out = self.out.lock();
        out.write_all(text.as_bytes())?;
        out.flush()
    }

    /// Release the writer.
    pub fn into_inner(self) -> W {
        self.out.into_inner()
    }
}

impl WriterSink<Stdout> {
    /// Console sink.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send> LineSink for WriterSink<W> {
    fn write_line(&self, line: &str) -> io::Result<()> {
        let mut out = self.out.lock();
        writeln!(out, "{line}")?;
        out.flush()
    }
}

/// In-memory collector, mostly for tests.
///
/// Each line is stored with the wall-clock time it arrived.
#[derive(Default)]
pub struct MemorySink {
    entries: Mutex<Vec<(DateTime<Utc>, String)>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the lines received so far.
    pub fn lines(&self) -> Vec<String> {
        self.entries
            .lock()
            .iter()
            .map(|(_, line)| line.clone())
            .collect()
    }

    /// Snapshot of lines together with their arrival times.
    pub fn entries(&self) -> Vec<(DateTime<Utc>, String)> {
        self.entries.lock().clone()
    }

    /// Number of lines received so far.
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }
}

impl LineSink for MemorySink {
    fn write_line(&self, line: &str) -> io::Result<()> {
        self.entries.lock().push((Utc::now(), line.to_string()));
        Ok(())
    }
}
