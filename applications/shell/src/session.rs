//! Shell session
//!
//! Couples the home page listing with a shared player. A subscribed observer
//! records every state change; after each command those lines are written
//! out, followed by the command's own output.

use crate::commands::Command;
use crate::config::ShellConfig;
use crate::error::{Result, ShellError};
use podcastr_core::{Episode, EpisodeListing};
use podcastr_playback::{Navigation, PlayerError, PlayerEvent, PlayerSnapshot, SharedPlayer};
use std::io::{BufRead, Write};
use std::sync::{Arc, Mutex};
use tracing::{debug, warn};

/// Whether the input loop keeps going
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct Session {
    listing: EpisodeListing,
    player: SharedPlayer,
    changes: Arc<Mutex<Vec<String>>>,
}

impl Session {
    /// Build a session over a newest-first episode list
    pub fn new(episodes: Vec<Episode>, config: &ShellConfig) -> Result<Self> {
        let listing = EpisodeListing::split(episodes, config.latest_count);
        let player = SharedPlayer::new(config.player.clone());
        let changes = Arc::new(Mutex::new(Vec::new()));

        let log = Arc::clone(&changes);
        player.with(|p| {
            p.subscribe(move |event, snapshot| {
                if let Ok(mut log) = log.lock() {
                    log.push(format_change(event, snapshot));
                }
            })
        })?;

        debug!(
            "Session ready: {} latest, {} in table",
            listing.latest().len(),
            listing.all().len()
        );

        Ok(Self {
            listing,
            player,
            changes,
        })
    }

    /// Episode listing backing the session
    pub fn listing(&self) -> &EpisodeListing {
        &self.listing
    }

    /// Handle to the player
    pub fn player(&self) -> &SharedPlayer {
        &self.player
    }

    /// Read commands until `quit` or end of input
    ///
    /// Bad lines are reported on `out` and the loop continues.
    pub fn run<R: BufRead, W: Write>(&self, input: R, out: &mut W) -> Result<()> {
        for line in input.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }

            let flow = line
                .parse::<Command>()
                .and_then(|command| self.execute(command, out));

            match flow {
                Ok(Flow::Quit) => break,
                Ok(Flow::Continue) => {}
                Err(e) if e.is_recoverable() => {
                    warn!("Command `{}` failed: {}", line.trim(), e);
                    self.write_changes(out)?;
                    writeln!(out, "error: {}", e)?;
                }
                Err(e) => return Err(e),
            }
        }

        Ok(())
    }

    /// Execute one command and write its output
    pub fn execute<W: Write>(&self, command: Command, out: &mut W) -> Result<Flow> {
        debug!("Executing `{}`", command.name());

        let mut lines = Vec::new();
        match command {
            Command::List => self.list(&mut lines),
            Command::PlayLatest(row) => {
                let start = self.listing.latest_start(row)?;
                self.player
                    .with(|p| p.load_queue(self.listing.play_queue(), start))??;
            }
            Command::PlayAll(row) => {
                let start = self.listing.all_start(row)?;
                self.player
                    .with(|p| p.load_queue(self.listing.play_queue(), start))??;
            }
            Command::Play(id) => {
                let episode = self.listing.find(&id)?.clone();
                self.player.with(|p| p.play_single(episode))??;
            }
            Command::Toggle => self.player.with(|p| p.toggle_play())?,
            Command::Loop => self.player.with(|p| p.toggle_loop())?,
            Command::Shuffle => self.player.with(|p| p.toggle_shuffle())?,
            Command::Next => {
                let navigation = self.player.with(|p| p.play_next())?;
                lines.push(describe_navigation("next", navigation));
            }
            Command::Previous => {
                let navigation = self.player.with(|p| p.play_previous())?;
                lines.push(describe_navigation("prev", navigation));
            }
            Command::Ended => {
                let navigation = self.player.with(|p| p.handle_episode_ended())?;
                lines.push(describe_navigation("ended", navigation));
            }
            Command::Seek(seconds) => self.player.with(|p| p.seek(seconds))??,
            Command::Progress(seconds) => self.player.with(|p| p.set_progress(seconds))?,
            Command::Playing(value) => self.player.with(|p| p.set_is_playing(value))?,
            Command::Clear => self.player.with(|p| p.clear_player_state())?,
            Command::State => {
                let snapshot = self.player.with(|p| p.snapshot())?;
                format_state(&snapshot, &mut lines);
            }
            Command::Help => lines.extend(Command::USAGE.lines().map(str::to_string)),
            Command::Quit => return Ok(Flow::Quit),
        }

        self.write_changes(out)?;
        for line in lines {
            writeln!(out, "{}", line)?;
        }

        Ok(Flow::Continue)
    }

    fn list(&self, lines: &mut Vec<String>) {
        lines.push("Latest:".to_string());
        for (row, episode) in self.listing.latest().iter().enumerate() {
            lines.push(format_row(row, episode));
        }
        lines.push("All episodes:".to_string());
        for (row, episode) in self.listing.all().iter().enumerate() {
            lines.push(format_row(row, episode));
        }
    }

    fn write_changes<W: Write>(&self, out: &mut W) -> Result<()> {
        let changes = {
            let mut log = self
                .changes
                .lock()
                .map_err(|_| ShellError::Player(PlayerError::LockPoisoned))?;
            std::mem::take(&mut *log)
        };

        for change in changes {
            writeln!(out, "{}", change)?;
        }
        Ok(())
    }
}

fn format_row(row: usize, episode: &Episode) -> String {
    if episode.duration_as_string.is_empty() {
        format!("  [{}] {} ({})", row, episode.title, episode.id)
    } else {
        format!(
            "  [{}] {} ({}, {})",
            row, episode.title, episode.id, episode.duration_as_string
        )
    }
}

fn format_change(event: &PlayerEvent, snapshot: &PlayerSnapshot) -> String {
    match event {
        PlayerEvent::QueueLoaded {
            length,
            start_index,
        } => format!("* queue loaded: {} episodes, starting at {}", length, start_index),
        PlayerEvent::EpisodeChanged {
            index, episode_id, ..
        } => {
            let title = snapshot
                .current_episode
                .as_ref()
                .map(|e| e.title.as_str())
                .unwrap_or_default();
            format!("* now playing [{}] {} ({})", index, title, episode_id)
        }
        PlayerEvent::PlayingChanged { is_playing } => {
            format!("* {}", if *is_playing { "playing" } else { "paused" })
        }
        PlayerEvent::LoopingChanged { is_looping } => format!("* loop {}", on_off(*is_looping)),
        PlayerEvent::ShufflingChanged { is_shuffling } => {
            format!("* shuffle {}", on_off(*is_shuffling))
        }
        PlayerEvent::Restarted { episode_id } => format!("* restarting {}", episode_id),
        PlayerEvent::ProgressChanged { seconds } => format!("* position {}s", seconds),
        PlayerEvent::Cleared => "* player cleared".to_string(),
    }
}

fn describe_navigation(command: &str, navigation: Navigation) -> String {
    match navigation {
        Navigation::Moved { from, to } => format!("{}: moved {} -> {}", command, from, to),
        Navigation::Restart => format!("{}: restart (rewind media)", command),
        Navigation::Unchanged => format!("{}: unchanged", command),
        Navigation::Cleared => format!("{}: cleared", command),
    }
}

fn format_state(snapshot: &PlayerSnapshot, lines: &mut Vec<String>) {
    match (&snapshot.current_episode, snapshot.current_index) {
        (Some(episode), Some(index)) => lines.push(format!(
            "episode: [{}/{}] {} ({})",
            index + 1,
            snapshot.queue_len,
            episode.title,
            episode.id
        )),
        _ => lines.push("episode: none".to_string()),
    }
    lines.push(format!(
        "playing: {}  loop: {}  shuffle: {}",
        yes_no(snapshot.is_playing),
        on_off(snapshot.is_looping),
        on_off(snapshot.is_shuffling)
    ));
    if let Some(episode) = &snapshot.current_episode {
        lines.push(format!("progress: {}s / {}s", snapshot.progress, episode.duration));
    }
    lines.push(format!(
        "next: {}  prev: {}",
        yes_no(snapshot.has_next),
        yes_no(snapshot.has_previous)
    ));
}

fn on_off(value: bool) -> &'static str {
    if value {
        "on"
    } else {
        "off"
    }
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use podcastr_playback::PlayerConfig;

    fn create_test_episodes(n: usize) -> Vec<Episode> {
        (0..n)
            .map(|i| {
                Episode::new(
                    format!("ep{}", i),
                    format!("Episode {}", i),
                    format!("https://cdn/ep{}.m4a", i),
                    1800,
                )
            })
            .collect()
    }

    fn create_session(n: usize) -> Session {
        let config = ShellConfig {
            player: PlayerConfig {
                shuffle_seed: Some(5),
                ..Default::default()
            },
            ..Default::default()
        };
        Session::new(create_test_episodes(n), &config).unwrap()
    }

    fn run(session: &Session, command: Command) -> String {
        let mut out = Vec::new();
        session.execute(command, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn list_shows_both_sections() {
        let session = create_session(4);
        let output = run(&session, Command::List);

        assert!(output.starts_with("Latest:\n  [0] Episode 0 (ep0)\n  [1] Episode 1 (ep1)\n"));
        assert!(output.contains("All episodes:\n  [0] Episode 2 (ep2)\n  [1] Episode 3 (ep3)\n"));
    }

    #[test]
    fn play_all_uses_offset_index() {
        let session = create_session(5);
        let output = run(&session, Command::PlayAll(1));

        assert!(output.contains("* queue loaded: 5 episodes, starting at 3"));
        assert!(output.contains("* now playing [3] Episode 3 (ep3)"));
        assert!(output.contains("* playing"));
        assert_eq!(session.player().with(|p| p.current_index()).unwrap(), Some(3));
    }

    #[test]
    fn observer_output_precedes_command_output() {
        let session = create_session(3);
        run(&session, Command::PlayLatest(0));

        let output = run(&session, Command::Next);
        assert_eq!(output, "* now playing [1] Episode 1 (ep1)\nnext: moved 0 -> 1\n");
    }

    #[test]
    fn subscribed_session_buffers_no_events() {
        let session = create_session(3);
        run(&session, Command::PlayLatest(0));
        run(&session, Command::Toggle);

        assert!(!session.player().with(|p| p.has_pending_events()).unwrap());
    }

    #[test]
    fn out_of_range_row_is_an_error() {
        let session = create_session(3);
        let mut out = Vec::new();

        let err = session.execute(Command::PlayAll(5), &mut out).unwrap_err();
        assert!(matches!(err, ShellError::Core(_)));
        assert!(out.is_empty());
    }

    #[test]
    fn play_single_by_id() {
        let session = create_session(4);
        run(&session, Command::Play("ep2".into()));

        let snapshot = session.player().with(|p| p.snapshot()).unwrap();
        assert_eq!(snapshot.queue_len, 1);
        assert_eq!(snapshot.current_episode.unwrap().id, "ep2");
    }

    #[test]
    fn state_on_empty_player() {
        let session = create_session(2);
        let output = run(&session, Command::State);

        assert_eq!(
            output,
            "episode: none\nplaying: no  loop: off  shuffle: off\nnext: no  prev: no\n"
        );
    }

    #[test]
    fn run_continues_past_bad_lines() {
        let session = create_session(3);
        let input = "play-all 0\nbogus\n\nseek 99999\nnext\nquit\nnext\n";
        let mut out = Vec::new();

        session.run(input.as_bytes(), &mut out).unwrap();
        let output = String::from_utf8(out).unwrap();

        assert!(output.contains("error: Unknown command: bogus"));
        assert!(output.contains("error: "));
        assert!(output.contains("next: unchanged"));
        // Nothing after quit runs
        assert_eq!(output.matches("next:").count(), 1);
    }

    #[test]
    fn ended_walks_to_the_end_then_clears() {
        let session = create_session(2);
        run(&session, Command::PlayLatest(0));

        assert!(run(&session, Command::Ended).ends_with("ended: moved 0 -> 1\n"));
        let output = run(&session, Command::Ended);
        assert!(output.contains("* player cleared"));
        assert!(output.contains("* paused"));
        assert!(output.ends_with("ended: cleared\n"));
    }
}
