//! Command-line interface for tictactoe_engine.

use clap::{Parser, Subcommand};
use tictactoe_engine::{Difficulty, GameMode, Side};

/// Tic-tac-toe against a friend or the computer
#[derive(Parser, Debug)]
#[command(name = "tictactoe_engine")]
#[command(about = "Tic-tac-toe with easy, medium and minimax AI", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal
    Play {
        /// Path to a TOML config file
        #[arg(short, long)]
        config: Option<std::path::PathBuf>,

        /// Game mode (pvp or ai)
        #[arg(short, long)]
        mode: Option<GameMode>,

        /// AI difficulty (easy, medium, hard)
        #[arg(short, long)]
        difficulty: Option<Difficulty>,

        /// Side the AI plays (x or o)
        #[arg(long)]
        ai_side: Option<Side>,

        /// Pause before the AI reply, in milliseconds
        #[arg(long)]
        delay_ms: Option<u64>,

        /// Seed for the AI's random choices
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Pit two AI tiers against each other
    Simulate {
        /// Difficulty playing X
        #[arg(long, default_value = "medium")]
        x: Difficulty,

        /// Difficulty playing O
        #[arg(long, default_value = "hard")]
        o: Difficulty,

        /// Number of games
        #[arg(short, long, default_value = "100")]
        games: u32,

        /// Seed for the AI's random choices
        #[arg(long)]
        seed: Option<u64>,
    },
}
