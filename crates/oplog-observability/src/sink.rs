//! Destinations for lifecycle log lines.

use std::io::{self, Write};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use oplog_core::EventKind;

use crate::logging::LogLine;

/// Receives lifecycle lines, one call per line.
///
/// Emitting never fails from the caller's point of view: a sink that cannot
/// write reports the problem as a `tracing` diagnostic and drops the line, so
/// logging can never change the outcome of the wrapped operation.
pub trait LogSink: Send + Sync {
    /// Write one line.
    fn emit(&self, line: &LogLine);
}

impl<S: LogSink + ?Sized> LogSink for &S {
    fn emit(&self, line: &LogLine) {
        (**self).emit(line);
    }
}

impl<S: LogSink + ?Sized> LogSink for Arc<S> {
    fn emit(&self, line: &LogLine) {
        (**self).emit(line);
    }
}

impl<S: LogSink + ?Sized> LogSink for Box<S> {
    fn emit(&self, line: &LogLine) {
        (**self).emit(line);
    }
}

/// Writes each line to the process's standard output.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutSink;

impl LogSink for StdoutSink {
    fn emit(&self, line: &LogLine) {
        // One locked write per line so concurrent callers never tear a line.
        let mut out = io::stdout().lock();
        if let Err(e) = writeln!(out, "{}", line) {
            tracing::warn!(error = %e, label = %line.label, "failed to write log line to stdout");
        }
    }
}

/// Writes each line to any `io::Write` behind a mutex.
#[derive(Debug)]
pub struct WriterSink<W> {
    writer: Mutex<W>,
}

impl<W: Write + Send> WriterSink<W> {
    /// Create a sink over `writer`.
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    /// Take back the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer.into_inner().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<W: Write + Send> LogSink for WriterSink<W> {
    fn emit(&self, line: &LogLine) {
        let mut writer = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        if let Err(e) = writeln!(writer, "{}", line).and_then(|()| writer.flush()) {
            tracing::warn!(error = %e, label = %line.label, "failed to write log line");
        }
    }
}

/// Keeps lines in memory.
///
/// Clones share the same buffer, so a clone can be handed to a wrapper while
/// the original is kept for inspection.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    lines: Arc<Mutex<Vec<LogLine>>>,
}

impl MemorySink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    fn buffer(&self) -> MutexGuard<'_, Vec<LogLine>> {
        self.lines.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// All captured lines, in emission order.
    pub fn entries(&self) -> Vec<LogLine> {
        self.buffer().clone()
    }

    /// All captured lines, rendered.
    pub fn lines(&self) -> Vec<String> {
        self.buffer().iter().map(LogLine::to_human).collect()
    }

    /// Tags of all captured lines, in emission order.
    pub fn kinds(&self) -> Vec<EventKind> {
        self.buffer().iter().map(LogLine::kind).collect()
    }

    /// Captured lines for one label.
    pub fn for_label(&self, label: &str) -> Vec<LogLine> {
        self.buffer()
            .iter()
            .filter(|line| line.label == label)
            .cloned()
            .collect()
    }

    /// Number of captured lines.
    pub fn len(&self) -> usize {
        self.buffer().len()
    }

    /// Whether nothing has been captured.
    pub fn is_empty(&self) -> bool {
        self.buffer().is_empty()
    }

    /// Drop all captured lines.
    pub fn clear(&self) {
        self.buffer().clear();
    }
}

impl LogSink for MemorySink {
    fn emit(&self, line: &LogLine) {
        self.buffer().push(line.clone());
    }
}

/// Forwards each line as a `tracing` event at INFO level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl LogSink for TracingSink {
    fn emit(&self, line: &LogLine) {
        tracing::info!(
            target: "oplog",
            label = %line.label,
            kind = %line.kind(),
            "{}",
            line
        );
    }
}
