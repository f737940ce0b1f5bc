//! One-ply tactics shared by the easy and medium tiers.

use super::super::rules::check_winner;
use super::super::{Board, Position, Side};

/// First empty square (in index order) that completes a line for `side`.
///
/// Used both to win (pass the mover) and to block (pass the opponent).
pub fn winning_move(board: &Board, side: Side) -> Option<Position> {
    board
        .empty_positions()
        .into_iter()
        .find(|pos| check_winner(&board.with_mark(*pos, side)) == Some(side))
}
