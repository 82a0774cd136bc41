//! Home page listing
//!
//! The home page shows the newest episodes on top and every other episode in
//! a table below. Both sections play from one combined queue, so a row's
//! start index depends on which section it sits in.

use crate::error::{CoreError, Result};
use crate::types::{Episode, EpisodeId};
use std::sync::Arc;

/// Number of episodes shown in the "latest" section by default
pub const DEFAULT_LATEST_COUNT: usize = 2;

/// Episodes split into "latest" and "all" sections
///
/// Structure:
/// ```text
/// Combined queue: [ L0, L1 | A0, A1, A2, ... ]
///                   latest   all (starts at latest.len())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EpisodeListing {
    /// Combined queue, latest section first
    queue: Arc<[Episode]>,

    /// Length of the latest section
    latest_len: usize,
}

impl EpisodeListing {
    /// Split a newest-first episode sequence
    ///
    /// The first `latest_count` episodes (or fewer, if the sequence is short)
    /// form the latest section; the rest go to the table.
    pub fn split(episodes: Vec<Episode>, latest_count: usize) -> Self {
        let latest_len = latest_count.min(episodes.len());
        Self {
            queue: episodes.into(),
            latest_len,
        }
    }

    /// Newest episodes (top section)
    pub fn latest(&self) -> &[Episode] {
        &self.queue[..self.latest_len]
    }

    /// Remaining episodes (table section)
    pub fn all(&self) -> &[Episode] {
        &self.queue[self.latest_len..]
    }

    /// Combined play queue (latest followed by all)
    ///
    /// Cheap to call: the queue is shared, not copied.
    pub fn play_queue(&self) -> Arc<[Episode]> {
        Arc::clone(&self.queue)
    }

    /// Queue start index for a row in the latest section
    pub fn latest_start(&self, row: usize) -> Result<usize> {
        if row >= self.latest_len {
            return Err(CoreError::RowOutOfBounds {
                section: "latest",
                row,
                len: self.latest_len,
            });
        }
        Ok(row)
    }

    /// Queue start index for a row in the table section
    pub fn all_start(&self, row: usize) -> Result<usize> {
        let len = self.all().len();
        if row >= len {
            return Err(CoreError::RowOutOfBounds {
                section: "all",
                row,
                len,
            });
        }
        Ok(row + self.latest_len)
    }

    /// Look up an episode by id (detail page)
    pub fn find(&self, id: &EpisodeId) -> Result<&Episode> {
        self.queue
            .iter()
            .find(|episode| &episode.id == id)
            .ok_or_else(|| CoreError::EpisodeNotFound(id.clone()))
    }

    /// Total number of episodes
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Check if the listing has no episodes
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}
