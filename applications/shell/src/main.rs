//! Podcastr Shell - play an episode list from the terminal
use anyhow::Context;
use clap::Parser;
use podcastr_core::Episode;
use podcastr_shell::{Session, ShellConfig};
use std::{io, path::PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "podcastr-shell")]
#[command(about = "Podcastr episode queue and player shell", long_about = None)]
struct Cli {
    /// JSON file with a newest-first array of episodes
    #[arg(short, long)]
    episodes: PathBuf,

    /// Configuration file path (defaults to ./podcastr.toml when present)
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    // Logs go to stderr; stdout carries the shell output
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "podcastr_shell=info,podcastr_playback=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();

    let config = ShellConfig::load(cli.config.as_deref())?;
    config.validate()?;

    let json = std::fs::read_to_string(&cli.episodes)
        .with_context(|| format!("Failed to read {}", cli.episodes.display()))?;
    let episodes = Episode::list_from_json(&json)
        .with_context(|| format!("Failed to parse {}", cli.episodes.display()))?;

    tracing::info!("Loaded {} episodes", episodes.len());
    if let Some(seed) = config.player.shuffle_seed {
        tracing::info!("Shuffle seed: {}", seed);
    }

    let session = Session::new(episodes, &config)?;

    println!("Type `help` for commands.");
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    session.run(stdin.lock(), &mut stdout)?;

    Ok(())
}
