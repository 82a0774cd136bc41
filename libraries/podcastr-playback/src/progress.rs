//! Playback position within the current episode
//!
//! Whole seconds, as reported by the media element's time updates.

use crate::error::{PlayerError, Result};

/// Position tracker bounded by the current episode's duration
#[derive(Debug, Clone, Default)]
pub struct Progress {
    /// Current position in seconds
    position: u64,
}

impl Progress {
    /// Create at position zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a reported position, clamped to `duration`
    ///
    /// Returns true if the stored position changed.
    pub fn report(&mut self, seconds: u64, duration: u64) -> bool {
        let clamped = seconds.min(duration);
        if clamped == self.position {
            return false;
        }
        self.position = clamped;
        true
    }

    /// Move to an explicit position (scrubbing)
    ///
    /// Positions past `duration` are rejected rather than clamped.
    pub fn seek(&mut self, seconds: u64, duration: u64) -> Result<()> {
        if seconds > duration {
            return Err(PlayerError::InvalidSeekPosition {
                position: seconds,
                duration,
            });
        }
        self.position = seconds;
        Ok(())
    }

    /// Back to the start
    pub fn reset(&mut self) {
        self.position = 0;
    }

    /// Current position in seconds
    pub fn position(&self) -> u64 {
        self.position
    }
}
