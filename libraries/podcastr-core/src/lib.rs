//! Podcastr Core
//!
//! Episode records and listing shapes shared by every Podcastr crate.
//!
//! The data layer that talks to the episodes API lives outside this
//! workspace. What arrives here is already normalized: durations come in
//! whole seconds together with their display string, and publish dates are
//! pre-formatted.
//!
//! # Example
//!
//! ```rust
//! use podcastr_core::{Episode, EpisodeListing};
//!
//! let episodes: Vec<Episode> = (1..=4)
//!     .map(|n| Episode::new(format!("ep-{n}"), format!("Episode {n}"), "https://cdn/ep.mp3", 600))
//!     .collect();
//!
//! // Two newest episodes on top, the rest in the table
//! let listing = EpisodeListing::split(episodes, 2);
//! assert_eq!(listing.latest().len(), 2);
//! assert_eq!(listing.all().len(), 2);
//!
//! // First table row plays from index 2 of the combined queue
//! assert_eq!(listing.all_start(0).unwrap(), 2);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod listing;
pub mod types;

pub use error::{CoreError, Result};
pub use listing::EpisodeListing;
pub use types::{Episode, EpisodeId};
