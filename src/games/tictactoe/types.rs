//! Core domain types for tic-tac-toe.

use super::position::Position;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Side of the game (the mark a mover places).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(ascii_case_insensitive)]
pub enum Side {
    /// Side X (always opens).
    X,
    /// Side O.
    O,
}

impl Side {
    /// Returns the opposing side.
    pub fn opponent(self) -> Self {
        match self {
            Side::X => Side::O,
            Side::O => Side::X,
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a side.
    Occupied(Side),
}

impl Square {
    /// Returns the occupying side, if any.
    pub fn side(self) -> Option<Side> {
        match self {
            Square::Empty => None,
            Square::Occupied(side) => Some(side),
        }
    }
}

/// 3x3 tic-tac-toe board.
///
/// Boards are small `Copy` values. Moves produce a new board through
/// [`crate::apply_move`] instead of mutating a shared one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Sets the square at the given position.
    pub(crate) fn set(&mut self, pos: Position, square: Square) {
        self.squares[pos.to_index()] = square;
    }

    /// Returns a copy of this board with `side` placed at `pos`.
    ///
    /// Does not check occupancy; callers validate first.
    pub(crate) fn with_mark(&self, pos: Position, side: Side) -> Self {
        let mut next = *self;
        next.set(pos, Square::Occupied(side));
        next
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Empty positions in ascending index order.
    pub fn empty_positions(&self) -> Vec<Position> {
        Position::valid_moves(self)
    }

    /// Number of squares held by `side`.
    pub fn count(&self, side: Side) -> usize {
        self.squares
            .iter()
            .filter(|sq| **sq == Square::Occupied(side))
            .count()
    }

    /// True when X holds as many squares as O, or exactly one more.
    ///
    /// Every board reachable by X-first alternating play is balanced.
    pub fn is_balanced(&self) -> bool {
        let (x, o) = (self.count(Side::X), self.count(Side::O));
        x == o || x == o + 1
    }

    /// Formats the board as a human-readable string.
    ///
    /// Empty squares show their 1-based key so a terminal player can pick them.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                let symbol = match self.squares[pos] {
                    Square::Empty => (pos + 1).to_string(),
                    Square::Occupied(side) => side.to_string(),
                };
                result.push_str(&symbol);
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Error parsing a board from its compact notation.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum ParseBoardError {
    /// Notation did not contain exactly nine cells.
    #[display("Expected 9 cells, found {found}")]
    WrongLength {
        /// Number of cells found.
        found: usize,
    },
    /// A cell character was not `X`, `O`, `_`, `.` or `-`.
    #[display("Invalid cell character {ch:?}")]
    InvalidCell {
        /// Offending character.
        ch: char,
    },
}

/// Parses the compact row-major notation, e.g. `"XX_OO____"`.
///
/// Whitespace and `|` separators are ignored. Mark counts are not checked;
/// see [`Board::is_balanced`].
impl FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cells: Vec<char> = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '|')
            .collect();
        if cells.len() != 9 {
            return Err(ParseBoardError::WrongLength { found: cells.len() });
        }

        let mut board = Board::new();
        for (pos, ch) in Position::ALL.iter().zip(cells) {
            let square = match ch {
                'X' | 'x' => Square::Occupied(Side::X),
                'O' | 'o' => Square::Occupied(Side::O),
                '_' | '.' | '-' => Square::Empty,
                other => return Err(ParseBoardError::InvalidCell { ch: other }),
            };
            board.set(*pos, square);
        }
        Ok(board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_board() {
        let board: Board = "XX_OO____".parse().unwrap();
        assert_eq!(board.get(Position::TopLeft), Square::Occupied(Side::X));
        assert_eq!(board.get(Position::Center), Square::Occupied(Side::O));
        assert!(board.is_empty(Position::TopRight));
        assert_eq!(board.empty_positions().len(), 5);
    }

    #[test]
    fn test_balance() {
        assert!(Board::new().is_balanced());
        assert!("X________".parse::<Board>().unwrap().is_balanced());
        assert!(!"XXX______".parse::<Board>().unwrap().is_balanced());
        assert!(!"OO_X_____".parse::<Board>().unwrap().is_balanced());
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert_eq!(
            "XO".parse::<Board>().unwrap_err(),
            ParseBoardError::WrongLength { found: 2 }
        );
        assert_eq!(
            "XO?______".parse::<Board>().unwrap_err(),
            ParseBoardError::InvalidCell { ch: '?' }
        );
    }

    #[test]
    fn test_display_shows_keys_for_empty_squares() {
        let board: Board = "X___O____".parse().unwrap();
        assert_eq!(board.display(), "X|2|3\n-+-+-\n4|O|6\n-+-+-\n7|8|9");
    }

    #[test]
    fn test_side_from_str() {
        assert_eq!("x".parse::<Side>().unwrap(), Side::X);
        assert_eq!("O".parse::<Side>().unwrap(), Side::O);
        assert_eq!(Side::X.opponent(), Side::O);
    }
}
