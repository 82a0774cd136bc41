//! ID types for Podcastr entities
use serde::{Deserialize, Serialize};
use std::fmt;

/// Episode identifier, as assigned by the episodes API (also the page slug)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EpisodeId(String);

impl EpisodeId {
    /// Create a new episode ID
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the inner string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EpisodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for EpisodeId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for EpisodeId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl PartialEq<str> for EpisodeId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for EpisodeId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_as_plain_string() {
        let id = EpisodeId::new("a-semana-de-arte");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"a-semana-de-arte\"");

        let back: EpisodeId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, "a-semana-de-arte");
    }

    #[test]
    fn display_matches_inner() {
        assert_eq!(EpisodeId::from("slug").to_string(), "slug");
    }
}
