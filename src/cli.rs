//! Command-line interface for tictactoe_duel.

use clap::{Parser, Subcommand};
use tictactoe_duel::{DEFAULT_CONFIG_FILE, Difficulty};

/// Tic-tac-toe against a tiered heuristic AI
#[derive(Parser, Debug)]
#[command(name = "tictactoe_duel")]
#[command(about = "Terminal tic-tac-toe against an AI opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play against the AI in the terminal
    Play {
        /// Path to the TOML config file
        #[arg(short, long, default_value = DEFAULT_CONFIG_FILE)]
        config: std::path::PathBuf,

        /// Preselect the AI difficulty
        #[arg(short, long, value_enum)]
        difficulty: Option<Difficulty>,

        /// Seed the AI's random source
        #[arg(long)]
        seed: Option<u64>,

        /// Delay before the AI's move appears, in milliseconds
        #[arg(long)]
        ai_delay_ms: Option<u64>,
    },

    /// Pit two AI tiers against each other and print the tally
    Simulate {
        /// Tier playing X (moves first)
        #[arg(long, value_enum, default_value_t = Difficulty::Hard)]
        x: Difficulty,

        /// Tier playing O
        #[arg(long, value_enum, default_value_t = Difficulty::Hard)]
        o: Difficulty,

        /// Number of games
        #[arg(short, long, default_value = "1000")]
        games: u32,

        /// Seed for both engines
        #[arg(long, default_value = "0")]
        seed: u64,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Play {
            config: DEFAULT_CONFIG_FILE.into(),
            difficulty: None,
            seed: None,
            ai_delay_ms: None,
        }
    }
}
