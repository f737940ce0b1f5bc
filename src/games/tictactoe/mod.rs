//! Tic-tac-toe board, rules and computer opponent.

mod action;
pub mod ai;
mod outcome;
mod position;
pub mod rules;
mod types;

pub use action::{Move, MoveError};
pub use ai::{Difficulty, MoveGenerator, choose_move};
pub use outcome::{Line, Outcome};
pub use position::Position;
pub use rules::{apply_move, evaluate};
pub use types::{Board, ParseBoardError, Side, Square};
