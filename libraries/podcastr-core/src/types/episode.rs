//! Episode domain type
use crate::error::Result;
use crate::types::EpisodeId;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Podcast episode, as supplied by the data layer
///
/// Field names on the wire are camelCase (`durationAsString`, `publishedAt`).
/// Display fields are pre-formatted upstream and passed through untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Episode {
    /// Unique episode identifier
    pub id: EpisodeId,

    /// Episode title
    pub title: String,

    /// Hosts and guests, as a display string
    pub members: String,

    /// Thumbnail image URL
    pub thumbnail: String,

    /// Duration in whole seconds
    pub duration: u64,

    /// Human-readable duration (`HH:MM:SS`)
    pub duration_as_string: String,

    /// Media file URL
    pub url: String,

    /// Publish date, already formatted for display
    pub published_at: String,

    /// HTML description (only present on detail pages)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Episode {
    /// Create an episode with the fields playback needs
    ///
    /// Display-only fields start empty; set them directly when rendering matters.
    pub fn new(
        id: impl Into<EpisodeId>,
        title: impl Into<String>,
        url: impl Into<String>,
        duration_secs: u64,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            members: String::new(),
            thumbnail: String::new(),
            duration: duration_secs,
            duration_as_string: String::new(),
            url: url.into(),
            published_at: String::new(),
            description: None,
        }
    }

    /// Duration as a `Duration`
    pub fn duration(&self) -> Duration {
        Duration::from_secs(self.duration)
    }

    /// Decode a JSON array of episodes
    pub fn list_from_json(json: &str) -> Result<Vec<Episode>> {
        Ok(serde_json::from_str(json)?)
    }
}
