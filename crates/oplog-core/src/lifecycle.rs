//! Invocation lifecycle tracking.

use std::fmt;
use std::time::Duration;

/// Kind of a lifecycle event, as printed in the log line tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Entry,
    Exit,
    Result,
    Performance,
    Error,
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Entry => write!(f, "ENTRY"),
            Self::Exit => write!(f, "EXIT"),
            Self::Result => write!(f, "RESULT"),
            Self::Performance => write!(f, "PERFORMANCE"),
            Self::Error => write!(f, "ERROR"),
        }
    }
}

/// A lifecycle point of one invocation, with the data it reports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LifecycleEvent {
    /// Operation called; carries the rendered input.
    Entry { input: String },
    /// Operation returned normally.
    Exit,
    /// Rendered return value.
    Result { output: String },
    /// Time spent inside the operation.
    Performance { elapsed: Duration },
    /// Operation failed; carries the failure message.
    Error { message: String },
}

impl LifecycleEvent {
    /// The tag this event is printed under.
    pub fn kind(&self) -> EventKind {
        match self {
            Self::Entry { .. } => EventKind::Entry,
            Self::Exit => EventKind::Exit,
            Self::Result { .. } => EventKind::Result,
            Self::Performance { .. } => EventKind::Performance,
            Self::Error { .. } => EventKind::Error,
        }
    }
}

/// Phases of a single invocation.
///
/// ```text
/// NotStarted -> EntryLogged -> ExitLogged -> ResultLogged -> PerformanceLogged -> Returned
///                           \-> ErrorLogged -> PerformanceLogged -> Rethrown
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvocationPhase {
    NotStarted,
    EntryLogged,
    ExitLogged,
    ResultLogged,
    ErrorLogged,
    /// Performance reported; `failed` records which branch led here.
    PerformanceLogged { failed: bool },
    /// Result handed back to the caller.
    Returned,
    /// Failure handed back to the caller.
    Rethrown,
}

impl InvocationPhase {
    /// Move to the next phase after `event` is logged.
    ///
    /// Returns `None` if the event is not allowed in this phase.
    pub fn advance(self, event: EventKind) -> Option<Self> {
        match (self, event) {
            (Self::NotStarted, EventKind::Entry) => Some(Self::EntryLogged),
            (Self::EntryLogged, EventKind::Exit) => Some(Self::ExitLogged),
            (Self::EntryLogged, EventKind::Error) => Some(Self::ErrorLogged),
            (Self::ExitLogged, EventKind::Result) => Some(Self::ResultLogged),
            (Self::ResultLogged, EventKind::Performance) => {
                Some(Self::PerformanceLogged { failed: false })
            }
            (Self::ErrorLogged, EventKind::Performance) => {
                Some(Self::PerformanceLogged { failed: true })
            }
            _ => None,
        }
    }

    /// Hand control back to the caller once all events are logged.
    pub fn finish(self) -> Option<Self> {
        match self {
            Self::PerformanceLogged { failed: false } => Some(Self::Returned),
            Self::PerformanceLogged { failed: true } => Some(Self::Rethrown),
            _ => None,
        }
    }

    /// Whether the invocation has ended.
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Returned | Self::Rethrown)
    }

    /// Replay a sequence of event kinds for one invocation from the start.
    ///
    /// Returns the terminal phase if the sequence is a complete, valid
    /// invocation, and `None` otherwise.
    pub fn replay(events: impl IntoIterator<Item = EventKind>) -> Option<Self> {
        events
            .into_iter()
            .try_fold(Self::NotStarted, |phase, event| phase.advance(event))?
            .finish()
    }
}
