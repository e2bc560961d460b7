//! Error types shared by operations and wrappers.

/// General-purpose failure for operations that have no error type of their own.
///
/// The wrapper never produces this itself; it forwards whatever error the
/// wrapped operation returns.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct OperationError {
    message: String,
}

impl OperationError {
    /// Create a failure carrying `message`.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The human-readable failure message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<String> for OperationError {
    fn from(message: String) -> Self {
        Self::new(message)
    }
}

impl From<&str> for OperationError {
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}

/// Error returned when a wrapper label is unusable.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LabelError {
    #[error("Operation label must not be empty")]
    Empty,
}

/// Validate a label for use in log lines.
///
/// Labels are used verbatim, so only empty or whitespace-only labels are
/// rejected.
pub fn validate_label(label: &str) -> Result<&str, LabelError> {
    if label.trim().is_empty() {
        return Err(LabelError::Empty);
    }
    Ok(label)
}
