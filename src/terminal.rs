//! Line-oriented terminal front end.
//!
//! Reads commands from stdin, forwards them to a shared [`GameSession`] and
//! redraws whenever the session reports an event. AI replies are scheduled
//! through [`AiScheduler`] so they show up after the configured pause.

use crate::config::EngineConfig;
use crate::driver::{AiScheduler, SharedSession};
use crate::games::tictactoe::{Difficulty, MoveError, Position};
use crate::mode::GameMode;
use crate::session::GameSession;
use derive_more::{Display, Error};
use std::str::FromStr;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::Mutex;
use tracing::{debug, info, instrument};

const HELP: &str = "Commands: 1-9 or a square name (e.g. center, top-left) place a mark, r reset board, n new game, \
m pvp|ai switch mode, d easy|medium|hard set difficulty, h help, q quit";

/// A parsed line of player input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Place a mark at a board index (0-8). Typed as a key 1-9 or a square name.
    Place(usize),
    /// Clear the board, keep scores.
    Reset,
    /// Clear the board and scores.
    NewGame,
    /// Switch mode (also clears scores).
    Mode(GameMode),
    /// Change AI strength.
    Difficulty(Difficulty),
    /// Show the command list.
    Help,
    /// Leave.
    Quit,
}

/// Input that is not a command.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Unrecognized input {input:?}. Type h for help.")]
pub struct CommandError {
    /// The offending line.
    pub input: String,
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || CommandError {
            input: s.to_string(),
        };
        let mut words = s.split_whitespace();
        let head = words.next().ok_or_else(err)?.to_lowercase();
        let arg = words.next();
        if words.next().is_some() {
            return Err(err());
        }

        match (head.as_str(), arg) {
            ("r" | "reset", None) => Ok(Command::Reset),
            ("n" | "new", None) => Ok(Command::NewGame),
            ("h" | "help" | "?", None) => Ok(Command::Help),
            ("q" | "quit" | "exit", None) => Ok(Command::Quit),
            ("m" | "mode", Some(mode)) => mode.parse().map(Command::Mode).map_err(|_| err()),
            ("d" | "difficulty", Some(level)) => {
                level.parse().map(Command::Difficulty).map_err(|_| err())
            }
            (key, None) => match key.parse::<usize>() {
                Ok(n @ 1..=9) => Ok(Command::Place(n - 1)),
                Ok(_) => Err(err()),
                Err(_) => Position::from_label_or_number(key)
                    .map(|pos| Command::Place(pos.to_index()))
                    .ok_or_else(err),
            },
            _ => Err(err()),
        }
    }
}

/// Applies a command to the session.
///
/// Returns `Ok(false)` for [`Command::Quit`].
#[instrument(skip(session))]
pub fn apply_command(session: &mut GameSession, command: Command) -> Result<bool, MoveError> {
    match command {
        Command::Place(index) => {
            session.submit_move(index)?;
        }
        Command::Reset => session.reset_board(),
        Command::NewGame => session.new_game(),
        Command::Mode(mode) => session.set_mode(mode),
        Command::Difficulty(difficulty) => session.set_difficulty(difficulty),
        Command::Help => {}
        Command::Quit => return Ok(false),
    }
    Ok(true)
}

/// Renders board, status and scores.
pub fn render(session: &GameSession) -> String {
    let mut out = String::new();
    out.push_str(&format!("\n[{}", session.mode()));
    if session.mode() == GameMode::VsAi {
        out.push_str(&format!(
            ", AI plays {} on {}",
            session.ai_side(),
            session.difficulty()
        ));
    }
    out.push_str("]\n\n");
    out.push_str(&session.board().display());
    out.push_str("\n\n");
    if let Some(line) = session.outcome().winning_line() {
        let [a, b, c] = line.indices();
        out.push_str(&format!("Winning line: {} {} {}\n", a + 1, b + 1, c + 1));
    }
    out.push_str(&session.status_message());
    out.push('\n');
    out.push_str(&session.scores().to_string());
    out.push('\n');
    out
}

/// Runs the interactive loop until `q` or end of input.
#[instrument(skip(config))]
pub async fn run(config: &EngineConfig) -> anyhow::Result<()> {
    let mut session = GameSession::from_config(config);
    let mut events = session.subscribe();
    let session: SharedSession = Arc::new(Mutex::new(session));
    let scheduler = AiScheduler::new(config.ai_delay());

    info!(delay_ms = scheduler.delay().as_millis(), "Starting terminal session");
    println!("{}", HELP);
    println!("{}", render(&*session.lock().await));
    scheduler.schedule_pending(&session).await;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                if line.trim().is_empty() {
                    continue;
                }
                let command = match line.parse::<Command>() {
                    Ok(command) => command,
                    Err(e) => {
                        println!("{}", e);
                        continue;
                    }
                };
                debug!(?command, "Parsed command");
                if command == Command::Help {
                    println!("{}", HELP);
                    continue;
                }
                let result = apply_command(&mut *session.lock().await, command);
                match result {
                    Ok(false) => break,
                    Ok(true) => {
                        scheduler.schedule_pending(&session).await;
                    }
                    Err(e) => println!("{}", e),
                }
            }
            Some(_) = events.recv() => {
                while events.try_recv().is_ok() {}
                println!("{}", render(&*session.lock().await));
            }
        }
    }

    info!(scores = %session.lock().await.scores(), "Terminal session ended");
    Ok(())
}
