//! Animation error types

use thiserror::Error;

/// Errors raised when talking to a driver through its handle
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationError {
    /// The scheduler that owned the driver has been dropped
    #[error("animation scheduler has been dropped")]
    SchedulerDropped,

    /// The driver was disposed or never existed in this scheduler
    #[error("progress driver has been disposed")]
    DriverDisposed,
}

/// Result type for animation operations
pub type Result<T> = std::result::Result<T, AnimationError>;
