//! Human-readable lifecycle log lines.

use std::fmt;

use oplog_core::{EventKind, LifecycleEvent};

/// One lifecycle line for a labelled operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogLine {
    /// Display timestamp of the invocation start.
    pub timestamp: String,
    /// Operation label, used verbatim.
    pub label: String,
    /// Lifecycle event reported by this line.
    pub event: LifecycleEvent,
}

impl LogLine {
    /// Create a new log line.
    pub fn new(
        timestamp: impl Into<String>,
        label: impl Into<String>,
        event: LifecycleEvent,
    ) -> Self {
        Self {
            timestamp: timestamp.into(),
            label: label.into(),
            event,
        }
    }

    /// Tag printed for this line.
    pub fn kind(&self) -> EventKind {
        self.event.kind()
    }

    /// Format as human-readable string.
    pub fn to_human(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for LogLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] [{}] {}", self.timestamp, self.kind(), self.label)?;
        match &self.event {
            LifecycleEvent::Entry { input } => write!(f, " called with parameter: {}", input),
            LifecycleEvent::Exit => write!(f, " executed successfully"),
            LifecycleEvent::Result { output } => write!(f, " returned: {}", output),
            LifecycleEvent::Performance { elapsed } => write!(f, " {} ms", elapsed.as_millis()),
            LifecycleEvent::Error { message } => write!(f, " failed with exception: {}", message),
        }
    }
}
