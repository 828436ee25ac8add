//! Error types of the queue layer.
use std::collections::TryReserveError;
use std::fmt;

/// Queue errors.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum QueueError {
    /// When the global allocator cannot provide a node or a string copy.
    OutOfMemory(&'static str),
    /// When an argument is outside of the domain of the operation.
    InvalidInput(&'static str),
    /// When the operation needs at least one element.
    Empty,
}

/// Sugar of error.
pub type Result<T> = std::result::Result<T, QueueError>;

impl fmt::Display for QueueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueueError::OutOfMemory(what) => write!(f, "out of memory: {}", what),
            QueueError::InvalidInput(what) => write!(f, "invalid input: {}", what),
            QueueError::Empty => f.write_str("the queue is empty"),
        }
    }
}

impl std::error::Error for QueueError {}

impl From<TryReserveError> for QueueError {
    fn from(_: TryReserveError) -> Self {
        QueueError::OutOfMemory("try reserve error")
    }
}
