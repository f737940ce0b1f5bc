//! Win detection logic for tic-tac-toe.

use super::super::{Board, Line, Side, Square};

/// Finds the first complete line, scanning rows, columns, then diagonals.
///
/// Returns the side holding it together with the line.
pub fn winning_line(board: &Board) -> Option<(Side, Line)> {
    Line::ALL.into_iter().find_map(|line| {
        let [a, b, c] = line.positions();
        match board.get(a) {
            Square::Occupied(side) if board.get(b) == board.get(a) && board.get(c) == board.get(a) => {
                Some((side, line))
            }
            _ => None,
        }
    })
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(side)` if the side has three in a row,
/// `None` otherwise.
pub fn check_winner(board: &Board) -> Option<Side> {
    winning_line(board).map(|(side, _)| side)
}
