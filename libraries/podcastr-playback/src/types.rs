//! Core types for the player controller

use serde::{Deserialize, Serialize};

/// Outcome of a next/previous/ended request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Navigation {
    /// Current index moved
    Moved {
        /// Index before the move
        from: usize,
        /// Index after the move
        to: usize,
    },

    /// Looping: the media element must rewind the current episode
    Restart,

    /// No valid move (end of queue, single episode, or empty queue)
    Unchanged,

    /// Track ended with nothing left to play; the player was cleared
    Cleared,
}

impl Navigation {
    /// Whether the current episode changed
    pub fn moved(&self) -> bool {
        matches!(self, Navigation::Moved { .. })
    }

    /// Short lowercase name, used at the JS boundary and in the shell
    pub fn as_str(&self) -> &'static str {
        match self {
            Navigation::Moved { .. } => "moved",
            Navigation::Restart => "restart",
            Navigation::Unchanged => "unchanged",
            Navigation::Cleared => "cleared",
        }
    }
}

/// Configuration for the player controller
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    /// Initial loop flag (default: false)
    pub looping: bool,

    /// Initial shuffle flag (default: false)
    pub shuffling: bool,

    /// Seed for shuffle picks (default: None, seeded from entropy)
    pub shuffle_seed: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = PlayerConfig::default();
        assert!(!config.looping);
        assert!(!config.shuffling);
        assert_eq!(config.shuffle_seed, None);
    }

    #[test]
    fn config_fields_default_when_missing() {
        let config: PlayerConfig = serde_json::from_str(r#"{"shuffling": true}"#).unwrap();
        assert!(config.shuffling);
        assert!(!config.looping);
    }

    #[test]
    fn navigation_names() {
        assert_eq!(Navigation::Moved { from: 0, to: 1 }.as_str(), "moved");
        assert_eq!(Navigation::Restart.as_str(), "restart");
        assert_eq!(Navigation::Unchanged.as_str(), "unchanged");
        assert!(Navigation::Moved { from: 0, to: 1 }.moved());
        assert!(!Navigation::Restart.moved());
    }
}
