//! Core abstractions for instrumented operations.
//!
//! This crate provides the fundamental types and traits:
//! - `Operation` trait - Single-input, single-output capability
//! - `Invocation` - Per-call record that yields lifecycle events
//! - `LifecycleEvent` / `InvocationPhase` - Invocation lifecycle tracking
//! - `Render` - Plain-text rendering of inputs and outputs
//! - `OperationError` / `LabelError` - Error types

mod error;
mod invocation;
mod lifecycle;
mod operation;
mod render;
mod timestamp;

pub use error::*;
pub use invocation::*;
pub use lifecycle::*;
pub use operation::*;
pub use render::*;
pub use timestamp::*;
