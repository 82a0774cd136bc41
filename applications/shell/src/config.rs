//! Shell configuration
use crate::error::{Result, ShellError};
use podcastr_core::listing::DEFAULT_LATEST_COUNT;
use podcastr_playback::PlayerConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default config file, read from the working directory when present
pub const DEFAULT_CONFIG_FILE: &str = "podcastr.toml";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ShellConfig {
    /// Initial transport flags and shuffle seed
    #[serde(default)]
    pub player: PlayerConfig,

    /// Size of the home page "latest" section
    #[serde(default = "default_latest_count")]
    pub latest_count: usize,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            player: PlayerConfig::default(),
            latest_count: default_latest_count(),
        }
    }
}

impl ShellConfig {
    /// Load configuration from file and environment
    ///
    /// An explicit `path` must exist. Without one, `podcastr.toml` is used if
    /// it is in the working directory. `PODCASTR_*` variables override both
    /// (`PODCASTR_PLAYER__SHUFFLE_SEED=7`).
    pub fn load(path: Option<&Path>) -> Result<Self> {
        Self::load_with_env(path, None)
    }

    /// Load with an explicit variable map standing in for the process
    /// environment (`None` reads the real one)
    fn load_with_env(
        path: Option<&Path>,
        env: Option<config::Map<String, String>>,
    ) -> Result<Self> {
        let mut settings = config::Config::builder();

        match path {
            Some(path) => {
                settings = settings.add_source(config::File::from(path).required(true));
            }
            None => {
                let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    settings = settings.add_source(config::File::from(default_path));
                }
            }
        }

        // Override with environment variables (prefixed with PODCASTR_)
        settings = settings.add_source(
            config::Environment::with_prefix("PODCASTR")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true)
                .source(env),
        );

        let config = settings
            .build()
            .map_err(|e| ShellError::Config(e.to_string()))?;

        config
            .try_deserialize()
            .map_err(|e| ShellError::Config(e.to_string()))
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.latest_count == 0 {
            return Err(ShellError::Config(
                "latest_count must be at least 1 (set PODCASTR_LATEST_COUNT)".to_string(),
            ));
        }

        Ok(())
    }
}

fn default_latest_count() -> usize {
    DEFAULT_LATEST_COUNT
}
