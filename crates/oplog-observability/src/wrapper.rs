//! Instrumented-operation wrapper.

use std::fmt::Display;

use oplog_core::{validate_label, Invocation, LabelError, LifecycleEvent, Operation, Render};

use crate::logging::LogLine;
use crate::sink::{LogSink, StdoutSink};

/// An operation that logs its lifecycle around every call.
///
/// `Logged` has the same input, output and error types as the operation it
/// wraps. Each call emits ENTRY, then either EXIT, RESULT and PERFORMANCE
/// (returning the value unchanged) or ERROR and PERFORMANCE (returning the
/// same error unchanged). The wrapped operation runs exactly once per call.
///
/// The wrapper keeps no per-call state, so a `Logged` can be shared across
/// threads whenever the operation and sink can.
#[derive(Debug, Clone)]
pub struct Logged<O, S = StdoutSink> {
    operation: O,
    label: String,
    sink: S,
}

impl<O, S: LogSink> Logged<O, S> {
    /// Wrap `operation`, writing lines for `label` to `sink`.
    pub fn new(operation: O, label: impl Into<String>, sink: S) -> Self {
        Self {
            operation,
            label: label.into(),
            sink,
        }
    }

    /// Like [`Logged::new`], but rejects an empty label.
    pub fn try_new(operation: O, label: impl Into<String>, sink: S) -> Result<Self, LabelError> {
        let label = label.into();
        validate_label(&label)?;
        Ok(Self::new(operation, label, sink))
    }

    /// Label used in every line.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Sink receiving the lines.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// The wrapped operation.
    pub fn inner(&self) -> &O {
        &self.operation
    }

    /// Unwrap, returning the original operation.
    pub fn into_inner(self) -> O {
        self.operation
    }

    fn emit(&self, timestamp: &str, event: LifecycleEvent) {
        self.sink.emit(&LogLine::new(timestamp, self.label.as_str(), event));
    }
}

impl<T, R, O, S> Operation<T, R> for Logged<O, S>
where
    O: Operation<T, R>,
    O::Error: Display,
    T: Render,
    R: Render,
    S: LogSink,
{
    type Error = O::Error;

    fn execute(&self, input: T) -> Result<R, Self::Error> {
        let (invocation, entry) = Invocation::begin(&self.label, &input);
        self.emit(invocation.timestamp(), entry);

        let outcome = self.operation.execute(input);

        let completion = match &outcome {
            Ok(output) => invocation.succeed(output),
            Err(error) => invocation.fail(error),
        };
        for event in completion.events {
            self.emit(&completion.timestamp, event);
        }

        outcome
    }
}

/// Wrap `operation` so each call logs its lifecycle to standard output.
pub fn with_logging<O>(operation: O, label: impl Into<String>) -> Logged<O> {
    Logged::new(operation, label, StdoutSink)
}

/// Wrap `operation` so each call logs its lifecycle to `sink`.
pub fn with_logging_to<O, S: LogSink>(
    operation: O,
    label: impl Into<String>,
    sink: S,
) -> Logged<O, S> {
    Logged::new(operation, label, sink)
}

/// Like [`with_logging`], but rejects an empty label.
pub fn try_with_logging<O>(
    operation: O,
    label: impl Into<String>,
) -> Result<Logged<O>, LabelError> {
    Logged::try_new(operation, label, StdoutSink)
}

/// Like [`with_logging_to`], but rejects an empty label.
pub fn try_with_logging_to<O, S: LogSink>(
    operation: O,
    label: impl Into<String>,
    sink: S,
) -> Result<Logged<O, S>, LabelError> {
    Logged::try_new(operation, label, sink)
}

/// Method-style wrapping: `op.logged("label")`.
pub trait OperationExt: Sized {
    /// Wrap `self`, logging to standard output.
    fn logged(self, label: impl Into<String>) -> Logged<Self> {
        with_logging(self, label)
    }

    /// Wrap `self`, logging to `sink`.
    fn logged_to<S: LogSink>(self, label: impl Into<String>, sink: S) -> Logged<Self, S> {
        with_logging_to(self, label, sink)
    }
}

impl<O> OperationExt for O {}
