//! Podcastr - Playback Management
//!
//! Episode queue and player-state controller for the Podcastr front-end.
//!
//! This crate provides:
//! - Queue loading from a shared episode list (`Arc<[Episode]>`)
//! - Transport flags (playing, looping, shuffling)
//! - Next/previous navigation without wraparound, with shuffle picks
//! - Track-ended handling and scrubbing
//! - Observer subscriptions and a pollable event buffer
//! - A mutex-guarded shared handle
//! - Optional WASM bindings for the browser (`wasm` feature)
//!
//! # Architecture
//!
//! `podcastr-playback` holds no audio and performs no I/O. The rendering
//! layer owns the media element and reports its events here
//! (`set_is_playing`, `set_progress`, `handle_episode_ended`); the controller
//! answers with state changes and, for looping, a request to restart.
//!
//! # Example: Playing the home page queue
//!
//! ```rust
//! use podcastr_core::{Episode, EpisodeListing};
//! use podcastr_playback::{Navigation, PlayerController};
//!
//! let episodes: Vec<Episode> = ["a", "b", "c"]
//!     .iter()
//!     .map(|id| Episode::new(*id, format!("Episode {id}"), format!("https://cdn/{id}.mp3"), 900))
//!     .collect();
//! let listing = EpisodeListing::split(episodes, 2);
//!
//! let mut player = PlayerController::default();
//!
//! // User clicks play on the first table row
//! player.load_queue(listing.play_queue(), listing.all_start(0).unwrap()).unwrap();
//! assert_eq!(player.current_index(), Some(2));
//! assert!(player.is_playing());
//!
//! // End of the queue: no wraparound
//! assert_eq!(player.play_next(), Navigation::Unchanged);
//! assert_eq!(player.play_previous(), Navigation::Moved { from: 2, to: 1 });
//! ```
//!
//! # Example: Observing state changes
//!
//! ```rust
//! use podcastr_core::Episode;
//! use podcastr_playback::{PlayerController, PlayerEvent};
//! use std::sync::{Arc, Mutex};
//!
//! let mut player = PlayerController::default();
//! let seen = Arc::new(Mutex::new(Vec::new()));
//!
//! let log = Arc::clone(&seen);
//! player.subscribe(move |event, snapshot| {
//!     log.lock().unwrap().push((event.clone(), snapshot.is_playing));
//! });
//!
//! player.play_single(Episode::new("a", "Episode a", "https://cdn/a.mp3", 60)).unwrap();
//! player.toggle_play();
//!
//! let seen = seen.lock().unwrap();
//! assert_eq!(seen.last().unwrap().0, PlayerEvent::PlayingChanged { is_playing: false });
//! assert!(!seen.last().unwrap().1);
//! ```

mod controller;
mod error;
mod events;
mod observers;
mod progress;
mod queue;
mod shared;
pub mod shuffle;
pub mod types;
pub mod wasm;

// Public exports
pub use controller::PlayerController;
pub use error::{PlayerError, Result};
pub use events::{PlayerEvent, PlayerSnapshot};
pub use observers::{Observer, SubscriptionId};
pub use shared::SharedPlayer;
pub use types::{Navigation, PlayerConfig};
