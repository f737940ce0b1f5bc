//! Exhaustive minimax search.
//!
//! Scores are from the AI's point of view: a win found `depth` plies below
//! the candidate move is worth `10 - depth`, a loss `depth - 10`, a draw 0.
//! Faster wins and slower losses therefore score higher. The tree is at
//! most 9! leaves, so no pruning is done.
//!
//! Every recursive call works on its own copy of the board.

use super::super::rules::evaluate;
use super::super::{Board, Outcome, Position, Side};
use tracing::{instrument, trace};

const WIN_SCORE: i32 = 10;

/// Best square for `ai`, or `None` on a full board.
///
/// Candidates are tried in ascending index order and a later candidate only
/// replaces the current best on a strictly greater score.
#[instrument(skip(board))]
pub fn best_move(board: &Board, ai: Side, opponent: Side) -> Option<Position> {
    let mut best: Option<(Position, i32)> = None;
    for pos in board.empty_positions() {
        let score = score_position(&board.with_mark(pos, ai), 0, false, ai, opponent);
        trace!(?pos, score, "Scored candidate");
        if best.is_none_or(|(_, best_score)| score > best_score) {
            best = Some((pos, score));
        }
    }
    best.map(|(pos, _)| pos)
}

/// Minimax value of `board` for `ai`.
///
/// `maximizing` is true when `ai` is the side to move on `board`.
pub fn score_position(board: &Board, depth: i32, maximizing: bool, ai: Side, opponent: Side) -> i32 {
    match evaluate(board) {
        Outcome::Win { side, .. } if side == ai => WIN_SCORE - depth,
        Outcome::Win { .. } => depth - WIN_SCORE,
        Outcome::Draw => 0,
        Outcome::InProgress => {
            let mover = if maximizing { ai } else { opponent };
            let scores = board.empty_positions().into_iter().map(|pos| {
                score_position(&board.with_mark(pos, mover), depth + 1, !maximizing, ai, opponent)
            });
            if maximizing {
                scores.max().unwrap_or(0)
            } else {
                scores.min().unwrap_or(0)
            }
        }
    }
}
