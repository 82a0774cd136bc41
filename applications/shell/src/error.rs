//! Shell error types
use podcastr_core::CoreError;
use podcastr_playback::PlayerError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ShellError>;

#[derive(Debug, Error)]
pub enum ShellError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("Bad argument for `{command}`: {reason}")]
    BadArgument {
        command: &'static str,
        reason: String,
    },

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Player(#[from] PlayerError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ShellError {
    /// Errors caused by a bad input line; the shell reports them and continues
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, ShellError::Config(_) | ShellError::Io(_))
    }
}
