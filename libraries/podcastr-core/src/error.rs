//! Core error types for Podcastr
use thiserror::Error;

use crate::types::EpisodeId;

/// Result type alias using `CoreError`
pub type Result<T> = std::result::Result<T, CoreError>;

/// Core error type for Podcastr
#[derive(Error, Debug)]
pub enum CoreError {
    /// A listing row index past the end of its section
    #[error("Row {row} out of bounds for {section} episodes (len {len})")]
    RowOutOfBounds {
        /// Section name ("latest" or "all")
        section: &'static str,
        /// Requested row
        row: usize,
        /// Number of rows in the section
        len: usize,
    },

    /// No episode with this id in the listing
    #[error("Episode not found: {0}")]
    EpisodeNotFound(EpisodeId),

    /// Episode payload could not be decoded
    #[error("Invalid episode payload: {0}")]
    Parse(#[from] serde_json::Error),
}
