//! Computer opponent for tic-tac-toe.
//!
//! Three tiers share one entry point, [`choose_move`]:
//!
//! - **Easy** mostly plays at random, occasionally taking a win or a block.
//! - **Medium** wins, blocks, then prefers the center and corners.
//! - **Hard** runs an exhaustive minimax search and never loses.
//!
//! Randomness comes from the caller so a seeded RNG gives reproducible play.

mod minimax;
mod tactics;

pub use minimax::{best_move, score_position};
pub use tactics::winning_move;

use super::{Board, Position, Side};
use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Chance that the easy tier ignores tactics and plays a random square.
pub const DEFAULT_EASY_RANDOM_PROBABILITY: f64 = 0.7;

/// AI strength.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Difficulty {
    /// Mostly random play.
    Easy,
    /// Win, block, center, corner, anything.
    #[default]
    Medium,
    /// Perfect play via minimax.
    Hard,
}

/// Move selection for one difficulty tier.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoveGenerator {
    difficulty: Difficulty,
    easy_random_probability: f64,
}

impl MoveGenerator {
    /// Creates a generator for `difficulty` with the default easy-tier randomness.
    pub fn new(difficulty: Difficulty) -> Self {
        Self {
            difficulty,
            easy_random_probability: DEFAULT_EASY_RANDOM_PROBABILITY,
        }
    }

    /// Overrides the easy tier's random-move probability (clamped to 0..=1).
    pub fn with_easy_random_probability(mut self, probability: f64) -> Self {
        self.easy_random_probability = if probability.is_nan() {
            DEFAULT_EASY_RANDOM_PROBABILITY
        } else {
            probability.clamp(0.0, 1.0)
        };
        self
    }

    /// Returns the tier.
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Picks a square for `ai` against `opponent`.
    ///
    /// Returns `None` when the board is full.
    #[instrument(skip(self, board, rng), fields(difficulty = %self.difficulty))]
    pub fn choose_move<R: Rng + ?Sized>(
        &self,
        board: &Board,
        ai: Side,
        opponent: Side,
        rng: &mut R,
    ) -> Option<Position> {
        let choice = match self.difficulty {
            Difficulty::Easy => self.easy(board, ai, opponent, rng),
            Difficulty::Medium => medium(board, ai, opponent, rng),
            Difficulty::Hard => best_move(board, ai, opponent),
        };
        debug!(?ai, position = ?choice, "AI chose position");
        choice
    }

    fn easy<R: Rng + ?Sized>(
        &self,
        board: &Board,
        ai: Side,
        opponent: Side,
        rng: &mut R,
    ) -> Option<Position> {
        if rng.gen_bool(self.easy_random_probability) {
            return random_move(board, rng);
        }
        winning_move(board, ai)
            .or_else(|| winning_move(board, opponent))
            .or_else(|| random_move(board, rng))
    }
}

/// Picks a square for `ai` at the given difficulty.
///
/// Shorthand for [`MoveGenerator::choose_move`] with default settings.
pub fn choose_move<R: Rng + ?Sized>(
    board: &Board,
    ai: Side,
    opponent: Side,
    difficulty: Difficulty,
    rng: &mut R,
) -> Option<Position> {
    MoveGenerator::new(difficulty).choose_move(board, ai, opponent, rng)
}

fn medium<R: Rng + ?Sized>(
    board: &Board,
    ai: Side,
    opponent: Side,
    rng: &mut R,
) -> Option<Position> {
    if let Some(pos) = winning_move(board, ai) {
        return Some(pos);
    }
    if let Some(pos) = winning_move(board, opponent) {
        return Some(pos);
    }
    if board.is_empty(Position::Center) {
        return Some(Position::Center);
    }
    let corners: Vec<Position> = Position::CORNERS
        .iter()
        .copied()
        .filter(|pos| board.is_empty(*pos))
        .collect();
    if let Some(pos) = corners.choose(rng) {
        return Some(*pos);
    }
    random_move(board, rng)
}

/// Uniformly random empty square.
fn random_move<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Option<Position> {
    board.empty_positions().choose(rng).copied()
}
