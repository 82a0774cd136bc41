//! Player Events
//!
//! Event-based communication for UI synchronization.
//! Events are emitted after the state change they describe is complete:
//! - Queue loads and clears
//! - Current episode changes
//! - Transport flag changes (playing, looping, shuffling)
//! - Restarts (looping) and progress updates

use podcastr_core::{Episode, EpisodeId};
use serde::{Deserialize, Serialize};

/// Events emitted by the player controller
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum PlayerEvent {
    /// A new queue replaced the old one
    QueueLoaded {
        /// New queue length
        length: usize,
        /// Index playback starts from
        start_index: usize,
    },

    /// Current episode changed
    EpisodeChanged {
        /// Index of the new current episode
        index: usize,
        /// ID of the new current episode
        episode_id: EpisodeId,
        /// ID of the previous episode (if any)
        previous_episode_id: Option<EpisodeId>,
    },

    /// Playing flag flipped
    PlayingChanged {
        /// New value
        is_playing: bool,
    },

    /// Loop flag flipped
    LoopingChanged {
        /// New value
        is_looping: bool,
    },

    /// Shuffle flag flipped
    ShufflingChanged {
        /// New value
        is_shuffling: bool,
    },

    /// Current episode must restart from the beginning (looping)
    Restarted {
        /// ID of the restarted episode
        episode_id: EpisodeId,
    },

    /// Playback position changed
    ProgressChanged {
        /// New position in seconds
        seconds: u64,
    },

    /// Queue emptied and playback stopped
    Cleared,
}

/// Read-only view of the player state
///
/// Carries everything the rendering layer displays except the full queue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerSnapshot {
    /// Current episode (if any)
    pub current_episode: Option<Episode>,

    /// Index of the current episode
    pub current_index: Option<usize>,

    /// Number of episodes in the queue
    pub queue_len: usize,

    /// Transport: playing
    pub is_playing: bool,

    /// Transport: looping
    pub is_looping: bool,

    /// Transport: shuffling
    pub is_shuffling: bool,

    /// Whether "next" can move
    pub has_next: bool,

    /// Whether "previous" can move
    pub has_previous: bool,

    /// Position in the current episode, in seconds
    pub progress: u64,
}
