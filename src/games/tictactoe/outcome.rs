//! Winning lines and game outcomes.

use super::{Position, Side};
use serde::{Deserialize, Serialize};

/// Three positions that win when held by one side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Line([Position; 3]);

impl Line {
    /// Top row.
    pub const TOP_ROW: Line = Line([Position::TopLeft, Position::TopCenter, Position::TopRight]);
    /// Middle row.
    pub const MIDDLE_ROW: Line = Line([
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ]);
    /// Bottom row.
    pub const BOTTOM_ROW: Line = Line([
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ]);
    /// Left column.
    pub const LEFT_COLUMN: Line = Line([
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ]);
    /// Center column.
    pub const CENTER_COLUMN: Line = Line([
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ]);
    /// Right column.
    pub const RIGHT_COLUMN: Line = Line([
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ]);
    /// Top-left to bottom-right diagonal.
    pub const MAIN_DIAGONAL: Line = Line([Position::TopLeft, Position::Center, Position::BottomRight]);
    /// Top-right to bottom-left diagonal.
    pub const ANTI_DIAGONAL: Line = Line([Position::TopRight, Position::Center, Position::BottomLeft]);

    /// All lines in evaluation order: rows, then columns, then diagonals.
    pub const ALL: [Line; 8] = [
        Line::TOP_ROW,
        Line::MIDDLE_ROW,
        Line::BOTTOM_ROW,
        Line::LEFT_COLUMN,
        Line::CENTER_COLUMN,
        Line::RIGHT_COLUMN,
        Line::MAIN_DIAGONAL,
        Line::ANTI_DIAGONAL,
    ];

    /// Positions on this line.
    pub fn positions(&self) -> [Position; 3] {
        self.0
    }

    /// Board indices on this line.
    pub fn indices(&self) -> [usize; 3] {
        self.0.map(Position::to_index)
    }
}

/// Result of evaluating a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// No line is complete and empty squares remain.
    InProgress,
    /// A side completed a line.
    Win {
        /// The winning side.
        side: Side,
        /// The completed line.
        line: Line,
    },
    /// The board is full without a winner.
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Side> {
        match self {
            Outcome::Win { side, .. } => Some(*side),
            Outcome::InProgress | Outcome::Draw => None,
        }
    }

    /// Returns the completed line if there is one.
    pub fn winning_line(&self) -> Option<Line> {
        match self {
            Outcome::Win { line, .. } => Some(*line),
            Outcome::InProgress | Outcome::Draw => None,
        }
    }

    /// Returns true if the game was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Draw)
    }

    /// Returns true once the game has ended.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::InProgress => write!(f, "In progress"),
            Outcome::Win { side, line } => {
                let [a, b, c] = line.indices();
                write!(f, "Player {} wins on [{}, {}, {}]", side, a, b, c)
            }
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}
