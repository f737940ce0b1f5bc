//! Tic-tac-toe engine - board, rules, three AI tiers and game sessions
//!
//! # Architecture
//!
//! - **Games**: board, win/draw rules and the computer opponent
//!   (easy, medium and a minimax-backed hard tier)
//! - **Session**: turn order, two-player vs AI mode, scoreboard, events
//! - **Driver**: delayed AI replies that a board reset can supersede
//! - **Terminal**: a line-oriented front end used by the binary
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{Difficulty, GameMode, GameSession, Outcome, Side};
//!
//! let mut session = GameSession::new(GameMode::VsAi, Difficulty::Hard).with_seed(7);
//! assert_eq!(session.submit_move(4), Ok(Outcome::InProgress));
//!
//! let reply = session.play_pending_ai_move().expect("AI to move");
//! assert_eq!(reply.side, Side::O);
//! assert_eq!(session.to_move(), Side::X);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod arena;
mod config;
mod driver;
mod games;
mod mode;
mod session;
mod terminal;

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Board, Difficulty, Line, Move, MoveError, MoveGenerator, Outcome, ParseBoardError, Position,
    Side, Square, apply_move, choose_move, evaluate,
};

// Crate-level exports - AI internals for analysis and tests
pub use games::tictactoe::ai;

// Crate-level exports - Rules
pub use games::tictactoe::rules;

// Crate-level exports - Session management
pub use mode::GameMode;
pub use session::{AiTicket, GameEvent, GameSession, ScoreBoard};

// Crate-level exports - Scheduling
pub use driver::{AiScheduler, SharedSession};

// Crate-level exports - Configuration
pub use config::{ConfigError, EngineConfig};

// Crate-level exports - Matches and terminal front end
pub use arena::{play_game, run_match};
pub use terminal::{Command, CommandError, apply_command, render, run as run_terminal};
