//! Tests for the computer opponent.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::collections::HashMap;
use tictactoe_engine::ai::{best_move, score_position};
use tictactoe_engine::{
    Board, Difficulty, MoveGenerator, Outcome, Position, Side, apply_move, choose_move, evaluate,
};

/// True if the hard AI playing `ai` avoids defeat from `board` against every
/// possible sequence of opponent replies.
fn hard_never_loses(board: Board, ai: Side, seen: &mut HashMap<Board, bool>) -> bool {
    if let Some(result) = seen.get(&board) {
        return *result;
    }
    let result = match evaluate(&board) {
        Outcome::Win { side, .. } => side == ai,
        Outcome::Draw => true,
        Outcome::InProgress => {
            let to_move = if board.count(Side::X) == board.count(Side::O) {
                Side::X
            } else {
                Side::O
            };
            if to_move == ai {
                let pos = best_move(&board, ai, ai.opponent()).expect("board not full");
                let next = apply_move(&board, pos.to_index(), ai).expect("AI picks empty square");
                hard_never_loses(next, ai, seen)
            } else {
                board.empty_positions().into_iter().all(|pos| {
                    let next = apply_move(&board, pos.to_index(), to_move).expect("empty square");
                    hard_never_loses(next, ai, seen)
                })
            }
        }
    };
    seen.insert(board, result);
    result
}

#[test]
fn test_hard_as_o_never_loses() {
    assert!(hard_never_loses(Board::new(), Side::O, &mut HashMap::new()));
}

#[test]
fn test_hard_as_x_never_loses() {
    assert!(hard_never_loses(Board::new(), Side::X, &mut HashMap::new()));
}

#[test]
fn test_hard_vs_hard_is_a_draw() {
    let mut rng = ChaCha8Rng::seed_from_u64(5);
    let mut board = Board::new();
    let mut side = Side::X;
    while !evaluate(&board).is_terminal() {
        let pos = choose_move(&board, side, side.opponent(), Difficulty::Hard, &mut rng).unwrap();
        board = apply_move(&board, pos.to_index(), side).unwrap();
        side = side.opponent();
    }
    assert_eq!(evaluate(&board), Outcome::Draw);
}

#[test]
fn test_hard_answers_center_with_corner() {
    let mut rng = ChaCha8Rng::seed_from_u64(5);
    let board: Board = "____X____".parse().unwrap();
    let reply = choose_move(&board, Side::O, Side::X, Difficulty::Hard, &mut rng).unwrap();
    assert!(Position::CORNERS.contains(&reply), "edge reply {reply} loses to the center");

    // With X to move and best play from here on, O at worst draws.
    let after = apply_move(&board, reply.to_index(), Side::O).unwrap();
    assert!(score_position(&after, 0, false, Side::O, Side::X) >= 0);
}

#[test]
fn test_hard_ties_go_to_lowest_index() {
    // Every opening scores 0 for X, so the first candidate is kept.
    assert_eq!(best_move(&Board::new(), Side::X, Side::O), Some(Position::TopLeft));
}

#[test]
fn test_medium_opens_center() {
    let mut rng = ChaCha8Rng::seed_from_u64(5);
    let pos = choose_move(&Board::new(), Side::O, Side::X, Difficulty::Medium, &mut rng);
    assert_eq!(pos, Some(Position::Center));
}

#[test]
fn test_medium_blocks_before_center() {
    let mut rng = ChaCha8Rng::seed_from_u64(5);
    let board: Board = "XX__O____".parse().unwrap();
    let pos = choose_move(&board, Side::O, Side::X, Difficulty::Medium, &mut rng);
    assert_eq!(pos, Some(Position::TopRight));
}

#[test]
fn test_every_tier_plays_legal_moves() {
    let mut rng = ChaCha8Rng::seed_from_u64(99);
    for difficulty in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
        let board: Board = "XO_X_O___".parse().unwrap();
        let pos = choose_move(&board, Side::X, Side::O, difficulty, &mut rng).unwrap();
        assert!(board.is_empty(pos), "{difficulty} picked occupied {pos}");
    }
}

/// Fraction of `trials` easy-tier picks for O on `board` that land on `target`.
fn easy_hit_rate(generator: MoveGenerator, board: &Board, target: Position, trials: u32) -> f64 {
    let mut rng = ChaCha8Rng::seed_from_u64(2024);
    let mut hits = 0;
    for _ in 0..trials {
        let pos = generator.choose_move(board, Side::O, Side::X, &mut rng).unwrap();
        assert!(board.is_empty(pos), "easy picked occupied {pos}");
        if pos == target {
            hits += 1;
        }
    }
    f64::from(hits) / f64::from(trials)
}

#[test]
fn test_easy_default_split_between_random_and_tactics() {
    // O wins at 2; four squares are open. Tactics (30%) always take the win,
    // random play (70%) finds it one time in four: 0.3 + 0.7 / 4 = 0.475.
    let board: Board = "OO_XX_X__".parse().unwrap();
    let rate = easy_hit_rate(MoveGenerator::new(Difficulty::Easy), &board, Position::TopRight, 10_000);
    assert!((rate - 0.475).abs() < 0.03, "win taken {rate:.3} of the time");
}

#[test]
fn test_easy_fully_random_ignores_tactics() {
    let board: Board = "OO_XX_X__".parse().unwrap();
    let generator = MoveGenerator::new(Difficulty::Easy).with_easy_random_probability(1.0);
    let rate = easy_hit_rate(generator, &board, Position::TopRight, 10_000);
    assert!((rate - 0.25).abs() < 0.03, "win taken {rate:.3} of the time");
}
