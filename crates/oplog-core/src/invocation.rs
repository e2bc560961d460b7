//! Per-call invocation record.

use std::fmt::Display;
use std::time::{Duration, Instant};

use crate::lifecycle::{EventKind, InvocationPhase, LifecycleEvent};
use crate::render::Render;
use crate::timestamp::now_timestamp;

/// Record of one call to a wrapped operation.
///
/// Created when the call starts and consumed when it completes, so every
/// invocation ends in exactly one terminal group of events. The display
/// timestamp is captured once at the start and shared by every line of the
/// call; elapsed time comes from a monotonic clock read at both ends.
#[derive(Debug)]
pub struct Invocation<'a> {
    label: &'a str,
    timestamp: String,
    start: Instant,
    phase: InvocationPhase,
}

impl<'a> Invocation<'a> {
    /// Start an invocation, returning the record and its ENTRY event.
    pub fn begin<T: Render + ?Sized>(label: &'a str, input: &T) -> (Self, LifecycleEvent) {
        Self::begin_at(label, now_timestamp(), input)
    }

    /// Start an invocation with an explicit display timestamp.
    pub fn begin_at<T: Render + ?Sized>(
        label: &'a str,
        timestamp: impl Into<String>,
        input: &T,
    ) -> (Self, LifecycleEvent) {
        let start = Instant::now();
        let entry = LifecycleEvent::Entry {
            input: input.render(),
        };
        let mut invocation = Self {
            label,
            timestamp: timestamp.into(),
            start,
            phase: InvocationPhase::NotStarted,
        };
        invocation.advance(EventKind::Entry);
        (invocation, entry)
    }

    /// Label of the operation being invoked.
    pub fn label(&self) -> &'a str {
        self.label
    }

    /// Display timestamp captured at the start of the call.
    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    /// Current phase.
    pub fn phase(&self) -> InvocationPhase {
        self.phase
    }

    /// Time since the call started.
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// Complete the invocation with a returned value.
    ///
    /// Yields EXIT, RESULT and PERFORMANCE, in that order.
    pub fn succeed<R: Render + ?Sized>(self, output: &R) -> Completion {
        let elapsed = self.elapsed();
        self.complete(
            vec![
                LifecycleEvent::Exit,
                LifecycleEvent::Result {
                    output: output.render(),
                },
                LifecycleEvent::Performance { elapsed },
            ],
            elapsed,
        )
    }

    /// Complete the invocation with a failure.
    ///
    /// Yields ERROR and PERFORMANCE, in that order.
    pub fn fail<E: Display + ?Sized>(self, error: &E) -> Completion {
        let elapsed = self.elapsed();
        self.complete(
            vec![
                LifecycleEvent::Error {
                    message: error.to_string(),
                },
                LifecycleEvent::Performance { elapsed },
            ],
            elapsed,
        )
    }

    fn complete(mut self, events: Vec<LifecycleEvent>, elapsed: Duration) -> Completion {
        for event in &events {
            self.advance(event.kind());
        }
        let finished = self.phase.finish();
        debug_assert!(finished.is_some(), "incomplete invocation in {:?}", self.phase);
        Completion {
            timestamp: self.timestamp,
            events,
            phase: finished.unwrap_or(self.phase),
            elapsed,
        }
    }

    fn advance(&mut self, event: EventKind) {
        let next = self.phase.advance(event);
        debug_assert!(next.is_some(), "{} not allowed in {:?}", event, self.phase);
        if let Some(next) = next {
            self.phase = next;
        }
    }
}

/// Terminal events of a finished invocation.
#[derive(Debug, Clone)]
pub struct Completion {
    /// Display timestamp from the start of the call.
    pub timestamp: String,
    /// Terminal events, in emission order.
    pub events: Vec<LifecycleEvent>,
    /// `Returned` or `Rethrown`.
    pub phase: InvocationPhase,
    /// Time spent inside the operation.
    pub elapsed: Duration,
}
