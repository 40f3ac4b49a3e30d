//! Flip card error types

use flipcard_animation::AnimationError;
use thiserror::Error;

/// Flip card errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FlipCardError {
    /// An operation needing the progress driver ran before `mount()` or
    /// after `unmount()`
    #[error("flip card is not mounted")]
    NotMounted,

    /// `mount()` was called on a card that already owns a driver
    #[error("flip card is already mounted")]
    AlreadyMounted,

    /// The driver could not be reached through its scheduler
    #[error(transparent)]
    Animation(#[from] AnimationError),

    /// Options could not be parsed
    #[error("invalid flip card options: {0}")]
    InvalidOptions(String),
}

/// Result type for flip card operations
pub type Result<T> = std::result::Result<T, FlipCardError>;
