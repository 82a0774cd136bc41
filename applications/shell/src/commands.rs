//! Shell command parsing
//!
//! One command per input line. Words are separated by whitespace; arguments
//! are positional.

use crate::error::{Result, ShellError};
use podcastr_core::EpisodeId;
use std::str::FromStr;

/// A parsed shell command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Print both listing sections with their row numbers
    List,
    /// Play a row of the latest section
    PlayLatest(usize),
    /// Play a row of the table section
    PlayAll(usize),
    /// Play one episode on its own (detail page)
    Play(EpisodeId),
    Toggle,
    Loop,
    Shuffle,
    Next,
    Previous,
    /// Media element reported the end of the episode
    Ended,
    Seek(u64),
    /// Media element reported its position
    Progress(u64),
    /// Media element reported play/pause
    Playing(bool),
    Clear,
    State,
    Help,
    Quit,
}

impl Command {
    /// Usage text, one command per line
    pub const USAGE: &'static str = "\
list                   show latest episodes and the episode table
play-latest <row>      play a latest episode (queue: latest + table)
play-all <row>         play a table row (queue: latest + table)
play <episode-id>      play a single episode
toggle                 play/pause
loop                   toggle loop
shuffle                toggle shuffle
next | prev            skip forward/back
ended                  report end of episode
seek <seconds>         scrub within the current episode
progress <seconds>     report playback position
playing <true|false>   report play/pause from the media element
clear                  empty the queue and stop
state                  print the player state
help                   show this text
quit                   exit";
}

impl FromStr for Command {
    type Err = ShellError;

    fn from_str(line: &str) -> Result<Self> {
        let mut words = line.split_whitespace();
        let Some(name) = words.next() else {
            return Err(ShellError::UnknownCommand(String::new()));
        };

        let command = match name {
            "list" | "ls" => Command::List,
            "play-latest" => Command::PlayLatest(parse_arg(words.next(), "play-latest")?),
            "play-all" => Command::PlayAll(parse_arg(words.next(), "play-all")?),
            "play" => Command::Play(EpisodeId::new(required(words.next(), "play")?)),
            "toggle" => Command::Toggle,
            "loop" => Command::Loop,
            "shuffle" => Command::Shuffle,
            "next" => Command::Next,
            "prev" | "previous" => Command::Previous,
            "ended" => Command::Ended,
            "seek" => Command::Seek(parse_arg(words.next(), "seek")?),
            "progress" => Command::Progress(parse_arg(words.next(), "progress")?),
            "playing" => Command::Playing(parse_arg(words.next(), "playing")?),
            "clear" => Command::Clear,
            "state" => Command::State,
            "help" | "?" => Command::Help,
            "quit" | "exit" => Command::Quit,
            other => return Err(ShellError::UnknownCommand(other.to_string())),
        };

        if let Some(extra) = words.next() {
            return Err(ShellError::BadArgument {
                command: command.name(),
                reason: format!("unexpected argument `{}`", extra),
            });
        }

        Ok(command)
    }
}

impl Command {
    /// Canonical command name
    pub fn name(&self) -> &'static str {
        match self {
            Command::List => "list",
            Command::PlayLatest(_) => "play-latest",
            Command::PlayAll(_) => "play-all",
            Command::Play(_) => "play",
            Command::Toggle => "toggle",
            Command::Loop => "loop",
            Command::Shuffle => "shuffle",
            Command::Next => "next",
            Command::Previous => "prev",
            Command::Ended => "ended",
            Command::Seek(_) => "seek",
            Command::Progress(_) => "progress",
            Command::Playing(_) => "playing",
            Command::Clear => "clear",
            Command::State => "state",
            Command::Help => "help",
            Command::Quit => "quit",
        }
    }
}

fn required<'a>(word: Option<&'a str>, command: &'static str) -> Result<&'a str> {
    word.ok_or_else(|| ShellError::BadArgument {
        command,
        reason: "missing argument".to_string(),
    })
}

fn parse_arg<T>(word: Option<&str>, command: &'static str) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let word = required(word, command)?;
    word.parse().map_err(|e: T::Err| ShellError::BadArgument {
        command,
        reason: format!("`{}`: {}", word, e),
    })
}
