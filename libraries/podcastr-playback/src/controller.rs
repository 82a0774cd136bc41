//! Player controller - core orchestration
//!
//! Owns the episode queue and transport flags, and turns user and
//! media-element events into state changes plus notifications.

use crate::{
    error::{PlayerError, Result},
    events::{PlayerEvent, PlayerSnapshot},
    observers::{ObserverRegistry, SubscriptionId},
    progress::Progress,
    queue::EpisodeQueue,
    shuffle::pick_other_index,
    types::{Navigation, PlayerConfig},
};
use podcastr_core::{Episode, EpisodeId};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::Arc;
use tracing::{debug, trace, warn};

/// Central player state
///
/// Orchestrates:
/// - Episode queue (shared list + current index)
/// - Transport flags (playing, looping, shuffling)
/// - Position within the current episode
/// - Observer notification and a pending event buffer
///
/// Invariants held after every call:
/// - the current index is `Some` exactly when the queue is non-empty
/// - `is_playing` is false when the queue is empty
#[derive(Debug)]
pub struct PlayerController {
    // State
    queue: EpisodeQueue,
    is_playing: bool,
    progress: Progress,

    // Modes
    is_looping: bool,
    is_shuffling: bool,
    rng: StdRng,

    // Notification
    observers: ObserverRegistry,
    pending_events: Vec<PlayerEvent>,
}

impl PlayerController {
    /// Create new player controller
    pub fn new(config: PlayerConfig) -> Self {
        let rng = config
            .shuffle_seed
            .map_or_else(StdRng::from_entropy, StdRng::seed_from_u64);

        Self {
            queue: EpisodeQueue::new(),
            is_playing: false,
            progress: Progress::new(),
            is_looping: config.looping,
            is_shuffling: config.shuffling,
            rng,
            observers: ObserverRegistry::new(),
            pending_events: Vec::new(),
        }
    }

    // ===== Queue =====

    /// Replace the queue and start playing from `start_index`
    ///
    /// An empty list or an out-of-range index is rejected and leaves the
    /// player exactly as it was.
    pub fn load_queue(
        &mut self,
        episodes: impl Into<Arc<[Episode]>>,
        start_index: usize,
    ) -> Result<()> {
        let episodes = episodes.into();
        let previous_episode_id = self.queue.current().map(|e| e.id.clone());
        let was_playing = self.is_playing;

        if let Err(err) = self.queue.load(episodes, start_index) {
            warn!("Rejected queue load: {}", err);
            return Err(err);
        }

        self.progress.reset();
        self.is_playing = true;

        let length = self.queue.len();
        debug!("Loaded queue of {} episodes at index {}", length, start_index);

        self.emit(PlayerEvent::QueueLoaded {
            length,
            start_index,
        });
        self.emit_episode_changed(start_index, previous_episode_id);
        if !was_playing {
            self.emit(PlayerEvent::PlayingChanged { is_playing: true });
        }

        Ok(())
    }

    /// Play one episode on its own (queue of one)
    pub fn play_single(&mut self, episode: Episode) -> Result<()> {
        self.load_queue(vec![episode], 0)
    }

    /// Empty the queue and stop
    ///
    /// Loop and shuffle flags are kept.
    pub fn clear_player_state(&mut self) {
        if self.queue.is_empty() && !self.is_playing {
            return;
        }

        let was_playing = self.is_playing;
        self.queue.clear();
        self.progress.reset();
        self.is_playing = false;

        debug!("Cleared player state");

        self.emit(PlayerEvent::Cleared);
        if was_playing {
            self.emit(PlayerEvent::PlayingChanged { is_playing: false });
        }
    }

    // ===== Transport =====

    /// Flip the playing flag (ignored on an empty queue)
    pub fn toggle_play(&mut self) {
        if self.queue.is_empty() {
            debug!("Ignoring toggle_play on empty queue");
            return;
        }
        self.set_playing_flag(!self.is_playing);
    }

    /// Sync the playing flag with the media element
    ///
    /// `true` is ignored on an empty queue; nothing can be playing.
    pub fn set_is_playing(&mut self, value: bool) {
        if value == self.is_playing {
            return;
        }
        if value && self.queue.is_empty() {
            debug!("Ignoring set_is_playing(true) on empty queue");
            return;
        }
        self.set_playing_flag(value);
    }

    /// Flip the loop flag
    pub fn toggle_loop(&mut self) {
        self.is_looping = !self.is_looping;
        debug!("Looping: {}", self.is_looping);
        self.emit(PlayerEvent::LoopingChanged {
            is_looping: self.is_looping,
        });
    }

    /// Flip the shuffle flag
    pub fn toggle_shuffle(&mut self) {
        self.is_shuffling = !self.is_shuffling;
        debug!("Shuffling: {}", self.is_shuffling);
        self.emit(PlayerEvent::ShufflingChanged {
            is_shuffling: self.is_shuffling,
        });
    }

    // ===== Navigation =====

    /// Go to the next episode
    ///
    /// - Looping: stays put and asks for a restart
    /// - Shuffling: jumps to a random other episode (stays put with one episode)
    /// - Otherwise: index + 1, no wraparound at the end
    pub fn play_next(&mut self) -> Navigation {
        let Some(current) = self.queue.current_index() else {
            return Navigation::Unchanged;
        };

        if self.is_looping {
            self.restart();
            return Navigation::Restart;
        }

        let target = if self.is_shuffling {
            pick_other_index(&mut self.rng, self.queue.len(), current)
        } else {
            self.queue.next_index()
        };

        match target {
            Some(to) => self.move_to(to),
            None => Navigation::Unchanged,
        }
    }

    /// Go to the previous episode
    ///
    /// Always sequential, even when shuffling, and never wraps. The loop flag
    /// does not apply here.
    pub fn play_previous(&mut self) -> Navigation {
        match self.queue.previous_index() {
            Some(to) => self.move_to(to),
            None => Navigation::Unchanged,
        }
    }

    /// The media element reached the end of the current episode
    ///
    /// Restarts when looping, advances when there is a next episode, and
    /// otherwise clears the player.
    pub fn handle_episode_ended(&mut self) -> Navigation {
        if self.queue.is_empty() {
            return Navigation::Unchanged;
        }

        if self.is_looping {
            let was_playing = self.is_playing;
            self.progress.reset();
            self.is_playing = true;

            self.emit_restarted();
            if !was_playing {
                debug!("Playing: true");
                self.emit(PlayerEvent::PlayingChanged { is_playing: true });
            }
            return Navigation::Restart;
        }

        if self.has_next() {
            let navigation = self.play_next();
            if navigation != Navigation::Unchanged {
                return navigation;
            }
        }

        self.clear_player_state();
        Navigation::Cleared
    }

    // ===== Progress =====

    /// Record the position reported by the media element
    ///
    /// Clamped to the current episode's duration; ignored when nothing is
    /// loaded.
    pub fn set_progress(&mut self, seconds: u64) {
        let Some(duration) = self.queue.current().map(|e| e.duration) else {
            return;
        };

        if self.progress.report(seconds, duration) {
            trace!("Progress: {}s / {}s", self.progress.position(), duration);
            self.emit(PlayerEvent::ProgressChanged {
                seconds: self.progress.position(),
            });
        }
    }

    /// Scrub to a position in the current episode
    pub fn seek(&mut self, seconds: u64) -> Result<()> {
        let duration = self
            .queue
            .current()
            .map(|e| e.duration)
            .ok_or(PlayerError::NoEpisodeLoaded)?;

        self.progress.seek(seconds, duration)?;
        debug!("Seek to {}s", seconds);
        self.emit(PlayerEvent::ProgressChanged { seconds });
        Ok(())
    }

    // ===== State Queries =====

    /// Episodes in the current queue, in load order
    pub fn episode_queue(&self) -> &Arc<[Episode]> {
        self.queue.episodes()
    }

    /// Index of the current episode
    pub fn current_index(&self) -> Option<usize> {
        self.queue.current_index()
    }

    /// Currently loaded episode
    pub fn current_episode(&self) -> Option<&Episode> {
        self.queue.current()
    }

    /// Playing flag
    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    /// Loop flag
    pub fn is_looping(&self) -> bool {
        self.is_looping
    }

    /// Shuffle flag
    pub fn is_shuffling(&self) -> bool {
        self.is_shuffling
    }

    /// Whether "next" has somewhere to go
    ///
    /// Always true while shuffling (with an episode loaded).
    pub fn has_next(&self) -> bool {
        match self.queue.current_index() {
            Some(_) if self.is_shuffling => true,
            Some(_) => self.queue.next_index().is_some(),
            None => false,
        }
    }

    /// Whether "previous" has somewhere to go
    pub fn has_previous(&self) -> bool {
        self.queue.previous_index().is_some()
    }

    /// Position in the current episode, in seconds
    pub fn progress(&self) -> u64 {
        self.progress.position()
    }

    /// Everything the rendering layer displays, in one value
    pub fn snapshot(&self) -> PlayerSnapshot {
        PlayerSnapshot {
            current_episode: self.queue.current().cloned(),
            current_index: self.queue.current_index(),
            queue_len: self.queue.len(),
            is_playing: self.is_playing,
            is_looping: self.is_looping,
            is_shuffling: self.is_shuffling,
            has_next: self.has_next(),
            has_previous: self.has_previous(),
            progress: self.progress.position(),
        }
    }

    // ===== Events =====

    /// Register an observer, called after every state change
    pub fn subscribe<F>(&mut self, observer: F) -> SubscriptionId
    where
        F: FnMut(&PlayerEvent, &PlayerSnapshot) + Send + 'static,
    {
        self.observers.subscribe(Box::new(observer))
    }

    /// Remove an observer
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.unsubscribe(id)
    }

    /// Drain all pending events
    ///
    /// Returns every event emitted since the last drain, for consumers that
    /// poll instead of subscribing. Events are only buffered while no
    /// observer is registered.
    pub fn drain_events(&mut self) -> Vec<PlayerEvent> {
        std::mem::take(&mut self.pending_events)
    }

    /// Check if there are pending events
    pub fn has_pending_events(&self) -> bool {
        !self.pending_events.is_empty()
    }

    // ===== Internal =====

    fn move_to(&mut self, to: usize) -> Navigation {
        let previous_episode_id = self.queue.current().map(|e| e.id.clone());
        let Some(from) = self.queue.jump_to(to) else {
            return Navigation::Unchanged;
        };

        self.progress.reset();
        debug!("Episode {} -> {}", from, to);
        self.emit_episode_changed(to, previous_episode_id);

        Navigation::Moved { from, to }
    }

    fn restart(&mut self) {
        self.progress.reset();
        self.emit_restarted();
    }

    fn emit_restarted(&mut self) {
        if let Some(episode) = self.queue.current() {
            let episode_id = episode.id.clone();
            debug!("Restarting episode {}", episode_id);
            self.emit(PlayerEvent::Restarted { episode_id });
        }
    }

    fn set_playing_flag(&mut self, value: bool) {
        if self.is_playing == value {
            return;
        }
        self.is_playing = value;
        debug!("Playing: {}", value);
        self.emit(PlayerEvent::PlayingChanged { is_playing: value });
    }

    fn emit_episode_changed(
        &mut self,
        index: usize,
        previous_episode_id: Option<EpisodeId>,
    ) {
        if let Some(episode) = self.queue.get(index) {
            let episode_id = episode.id.clone();
            self.emit(PlayerEvent::EpisodeChanged {
                index,
                episode_id,
                previous_episode_id,
            });
        }
    }

    /// Deliver to observers, or buffer for `drain_events` when there are none
    fn emit(&mut self, event: PlayerEvent) {
        if self.observers.is_empty() {
            self.pending_events.push(event);
            return;
        }
        let snapshot = self.snapshot();
        self.observers.notify(&event, &snapshot);
    }
}

impl Default for PlayerController {
    fn default() -> Self {
        Self::new(PlayerConfig::default())
    }
}
