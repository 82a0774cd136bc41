//! Episode queue
//!
//! The queue shares the caller's episode list and tracks a single cursor
//! into it. Navigation is index-based and never reorders the list.

use crate::error::{PlayerError, Result};
use podcastr_core::Episode;
use std::sync::Arc;

/// Episode list plus current position
///
/// Invariant: `current` is `Some(i)` with `i < episodes.len()` exactly when
/// the list is non-empty.
#[derive(Debug, Clone)]
pub struct EpisodeQueue {
    /// Episodes in load order (shared with the caller)
    episodes: Arc<[Episode]>,

    /// Index of the current episode
    current: Option<usize>,
}

impl EpisodeQueue {
    /// Create new empty queue
    pub fn new() -> Self {
        Self {
            episodes: Arc::from(Vec::<Episode>::new()),
            current: None,
        }
    }

    /// Replace the list and cursor in one step
    ///
    /// Rejects an empty list or an out-of-range start index, leaving the
    /// queue untouched.
    pub fn load(&mut self, episodes: Arc<[Episode]>, start_index: usize) -> Result<()> {
        if episodes.is_empty() {
            return Err(PlayerError::EmptyQueue);
        }
        if start_index >= episodes.len() {
            return Err(PlayerError::StartIndexOutOfBounds {
                index: start_index,
                len: episodes.len(),
            });
        }

        self.episodes = episodes;
        self.current = Some(start_index);
        Ok(())
    }

    /// Clear list and cursor
    pub fn clear(&mut self) {
        self.episodes = Arc::from(Vec::<Episode>::new());
        self.current = None;
    }

    /// Move the cursor to `index`
    ///
    /// Returns the previous index, or `None` if `index` is out of range or
    /// the queue is empty.
    pub fn jump_to(&mut self, index: usize) -> Option<usize> {
        let from = self.current?;
        if index >= self.episodes.len() {
            return None;
        }
        self.current = Some(index);
        Some(from)
    }

    /// Index after the current one, if it exists
    pub fn next_index(&self) -> Option<usize> {
        self.current
            .map(|i| i + 1)
            .filter(|&i| i < self.episodes.len())
    }

    /// Index before the current one, if it exists
    pub fn previous_index(&self) -> Option<usize> {
        self.current.and_then(|i| i.checked_sub(1))
    }

    /// Current index
    pub fn current_index(&self) -> Option<usize> {
        self.current
    }

    /// Current episode
    pub fn current(&self) -> Option<&Episode> {
        self.current.and_then(|i| self.episodes.get(i))
    }

    /// Episode at index
    pub fn get(&self, index: usize) -> Option<&Episode> {
        self.episodes.get(index)
    }

    /// All episodes in load order
    pub fn episodes(&self) -> &Arc<[Episode]> {
        &self.episodes
    }

    /// Number of episodes
    pub fn len(&self) -> usize {
        self.episodes.len()
    }

    /// Check if queue is empty
    pub fn is_empty(&self) -> bool {
        self.episodes.is_empty()
    }
}

impl Default for EpisodeQueue {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_episodes(n: usize) -> Arc<[Episode]> {
        (0..n)
            .map(|i| {
                Episode::new(
                    format!("{}", i),
                    format!("Episode {}", i),
                    "https://cdn/ep.mp3",
                    600,
                )
            })
            .collect()
    }

    #[test]
    fn create_empty_queue() {
        let queue = EpisodeQueue::new();
        assert!(queue.is_empty());
        assert_eq!(queue.current_index(), None);
        assert!(queue.current().is_none());
    }

    #[test]
    fn load_sets_cursor() {
        let mut queue = EpisodeQueue::new();
        queue.load(create_test_episodes(3), 1).unwrap();

        assert_eq!(queue.len(), 3);
        assert_eq!(queue.current_index(), Some(1));
        assert_eq!(queue.current().unwrap().id, "1");
    }

    #[test]
    fn load_rejects_empty() {
        let mut queue = EpisodeQueue::new();
        assert_eq!(queue.load(create_test_episodes(0), 0), Err(PlayerError::EmptyQueue));
    }

    #[test]
    fn rejected_load_keeps_previous_queue() {
        let mut queue = EpisodeQueue::new();
        queue.load(create_test_episodes(2), 1).unwrap();

        let result = queue.load(create_test_episodes(4), 4);
        assert_eq!(
            result,
            Err(PlayerError::StartIndexOutOfBounds { index: 4, len: 4 })
        );
        assert_eq!(queue.len(), 2);
        assert_eq!(queue.current_index(), Some(1));
    }

    #[test]
    fn load_shares_list() {
        let episodes = create_test_episodes(2);
        let mut queue = EpisodeQueue::new();
        queue.load(Arc::clone(&episodes), 0).unwrap();

        assert!(Arc::ptr_eq(queue.episodes(), &episodes));
    }

    #[test]
    fn next_and_previous_stop_at_edges() {
        let mut queue = EpisodeQueue::new();
        queue.load(create_test_episodes(2), 0).unwrap();

        assert_eq!(queue.previous_index(), None);
        assert_eq!(queue.next_index(), Some(1));

        queue.jump_to(1);
        assert_eq!(queue.next_index(), None);
        assert_eq!(queue.previous_index(), Some(0));
    }

    #[test]
    fn jump_out_of_range_is_ignored() {
        let mut queue = EpisodeQueue::new();
        queue.load(create_test_episodes(2), 0).unwrap();

        assert_eq!(queue.jump_to(5), None);
        assert_eq!(queue.current_index(), Some(0));
    }

    #[test]
    fn jump_on_empty_queue() {
        let mut queue = EpisodeQueue::new();
        assert_eq!(queue.jump_to(0), None);
        assert_eq!(queue.next_index(), None);
        assert_eq!(queue.previous_index(), None);
    }

    #[test]
    fn clear_queue() {
        let mut queue = EpisodeQueue::new();
        queue.load(create_test_episodes(3), 2).unwrap();

        queue.clear();
        assert!(queue.is_empty());
        assert_eq!(queue.current_index(), None);
    }
}
