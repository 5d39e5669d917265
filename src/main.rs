//! Tictactoe Duel - CLI entry point.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use tictactoe_duel::{Difficulty, GameConfig, SimulationConfig, simulate};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command.unwrap_or_default() {
        Command::Play {
            config,
            difficulty,
            seed,
            ai_delay_ms,
        } => run_play(config, difficulty, seed, ai_delay_ms).await,
        Command::Simulate { x, o, games, seed } => run_simulate(x, o, games, seed),
    }
}

/// Run the terminal game.
async fn run_play(
    config_path: std::path::PathBuf,
    difficulty: Option<Difficulty>,
    seed: Option<u64>,
    ai_delay_ms: Option<u64>,
) -> Result<()> {
    // Log to a file so output doesn't tear the TUI.
    let log_file = std::fs::File::create("tictactoe_duel.log")
        .context("Failed to create log file")?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,tictactoe_duel=debug")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .init();

    let config = load_config(&config_path, difficulty, seed, ai_delay_ms)?;
    tictactoe_duel::run_tui(config).await
}

#[instrument(skip(config_path), fields(config_path = %config_path.display()))]
fn load_config(
    config_path: &std::path::Path,
    difficulty: Option<Difficulty>,
    seed: Option<u64>,
    ai_delay_ms: Option<u64>,
) -> Result<GameConfig> {
    let mut config = GameConfig::load_or_default(config_path)?;
    if let Some(difficulty) = difficulty {
        config = config.with_difficulty(difficulty);
    }
    if let Some(seed) = seed {
        config = config.with_seed(seed);
    }
    if let Some(ms) = ai_delay_ms {
        config = config.with_ai_delay_ms(ms);
    }
    info!(?config, "Configuration resolved");
    Ok(config)
}

/// Run AI-vs-AI games and print the tally.
fn run_simulate(x: Difficulty, o: Difficulty, games: u32, seed: u64) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    info!(%x, %o, games, seed, "Starting simulation");
    let report = simulate(&SimulationConfig::new(x, o, games, seed));
    println!("X = {} vs O = {}", x.label(), o.label());
    println!("{report}");
    Ok(())
}
