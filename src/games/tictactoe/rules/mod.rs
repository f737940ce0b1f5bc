//! Game rules for tic-tac-toe.
//!
//! Pure functions over board snapshots. Nothing here mutates a board
//! that the caller still holds.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{check_winner, winning_line};

use super::{Board, MoveError, Outcome, Position, Side};
use tracing::instrument;

/// Places `side` at `index`, returning the resulting board.
///
/// The input board is left untouched, so a rejected move has no effect.
///
/// # Errors
///
/// - [`MoveError::OutOfRange`] if `index` is not in 0-8.
/// - [`MoveError::CellOccupied`] if the square is taken.
#[instrument(skip(board))]
pub fn apply_move(board: &Board, index: usize, side: Side) -> Result<Board, MoveError> {
    let pos = Position::from_index(index).ok_or(MoveError::OutOfRange(index))?;
    if !board.is_empty(pos) {
        return Err(MoveError::CellOccupied(pos));
    }
    Ok(board.with_mark(pos, side))
}

/// Evaluates a board.
///
/// Lines are scanned rows first, then columns, then diagonals; the first
/// complete line wins. A full board without a line is a draw.
pub fn evaluate(board: &Board) -> Outcome {
    if let Some((side, line)) = winning_line(board) {
        Outcome::Win { side, line }
    } else if is_full(board) {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}
