use thiserror::Error;

/// Errors raised by queue operations
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueueError {
    #[error("print queue is empty")]
    Empty,
}

pub type Result<T> = std::result::Result<T, QueueError>;
