//! Tic-tac-toe engine - terminal front end and AI matches.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tictactoe_engine::{Difficulty, EngineConfig, run_match, run_terminal};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            config,
            mode,
            difficulty,
            ai_side,
            delay_ms,
            seed,
        } => {
            let mut engine_config = match config {
                Some(path) => EngineConfig::from_file(path)?,
                None => EngineConfig::default(),
            };
            if let Some(mode) = mode {
                engine_config = engine_config.with_mode(mode);
            }
            if let Some(difficulty) = difficulty {
                engine_config = engine_config.with_difficulty(difficulty);
            }
            if let Some(ai_side) = ai_side {
                engine_config = engine_config.with_ai_side(ai_side);
            }
            if let Some(delay_ms) = delay_ms {
                engine_config = engine_config.with_ai_delay_ms(delay_ms);
            }
            if let Some(seed) = seed {
                engine_config = engine_config.with_seed(seed);
            }
            run_terminal(&engine_config).await
        }
        Command::Simulate { x, o, games, seed } => simulate(x, o, games, seed),
    }
}

/// Run an AI-vs-AI match and print the tally
#[instrument]
fn simulate(x: Difficulty, o: Difficulty, games: u32, seed: Option<u64>) -> Result<()> {
    let mut rng = match seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };
    info!(%x, %o, games, "Starting simulation");
    let scores = run_match(x, o, games, &mut rng);
    println!("{} (X) vs {} (O) over {} games", x, o, games);
    println!("{}", scores);
    Ok(())
}
