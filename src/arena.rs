//! Computer-vs-computer matches.

use crate::games::tictactoe::{Board, Difficulty, MoveGenerator, Outcome, Side, apply_move, evaluate};
use crate::session::ScoreBoard;
use rand::Rng;
use tracing::{debug, info, instrument};

/// Plays one game between two generators and returns the final outcome.
pub fn play_game<R: Rng + ?Sized>(x: &MoveGenerator, o: &MoveGenerator, rng: &mut R) -> Outcome {
    let mut board = Board::new();
    let mut to_move = Side::X;
    loop {
        let outcome = evaluate(&board);
        if outcome.is_terminal() {
            return outcome;
        }
        let generator = match to_move {
            Side::X => x,
            Side::O => o,
        };
        let Some(pos) = generator.choose_move(&board, to_move, to_move.opponent(), rng) else {
            return outcome;
        };
        board = match apply_move(&board, pos.to_index(), to_move) {
            Ok(next) => next,
            Err(_) => return outcome,
        };
        to_move = to_move.opponent();
    }
}

/// Plays `games` games and tallies the results.
#[instrument(skip(rng))]
pub fn run_match<R: Rng + ?Sized>(x: Difficulty, o: Difficulty, games: u32, rng: &mut R) -> ScoreBoard {
    let x_gen = MoveGenerator::new(x);
    let o_gen = MoveGenerator::new(o);
    let mut scores = ScoreBoard::default();
    for game in 0..games {
        let outcome = play_game(&x_gen, &o_gen, rng);
        debug!(game, %outcome, "Game finished");
        scores.record(&outcome);
    }
    info!(%scores, "Match finished");
    scores
}
