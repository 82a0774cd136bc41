//! Error types for the player controller

use thiserror::Error;

/// Player errors
///
/// All of these are caller-contract violations. Navigation past either end
/// of the queue is not an error (see `Navigation::Unchanged`).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PlayerError {
    /// Tried to load an empty episode sequence
    #[error("Queue is empty")]
    EmptyQueue,

    /// Start index outside the supplied sequence
    #[error("Start index {index} out of bounds for queue of {len}")]
    StartIndexOutOfBounds {
        /// Requested start index
        index: usize,
        /// Length of the supplied sequence
        len: usize,
    },

    /// No episode is current
    #[error("No episode loaded")]
    NoEpisodeLoaded,

    /// Seek target past the end of the current episode
    #[error("Invalid seek position: {position}s (episode is {duration}s)")]
    InvalidSeekPosition {
        /// Requested position in seconds
        position: u64,
        /// Episode duration in seconds
        duration: u64,
    },

    /// A previous holder of the shared player panicked
    #[error("Player lock poisoned")]
    LockPoisoned,
}

/// Result type for player operations
pub type Result<T> = std::result::Result<T, PlayerError>;
