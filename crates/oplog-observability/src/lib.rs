//! Lifecycle logging for operations.
//!
//! This crate provides:
//! - `Logged` / `with_logging` - Wrap an operation so every call logs ENTRY,
//!   EXIT, RESULT, PERFORMANCE and ERROR lines
//! - `LogLine` - One human-readable lifecycle line
//! - `LogSink` - Where lines go (`StdoutSink`, `WriterSink`, `MemorySink`,
//!   `TracingSink`)

mod logging;
mod sink;
mod wrapper;

pub use logging::*;
pub use sink::*;
pub use wrapper::*;

// Re-export the operation abstractions from oplog-core for convenience
pub use oplog_core::{LabelError, Operation, OperationError, Render};
