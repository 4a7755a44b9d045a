//! Core domain types for tic-tac-toe.

use crate::Action;
use crate::action::SIZE;
use serde::{Deserialize, Serialize};

/// A player's mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum Mark {
    /// Mark X (moves first, maximizes utility).
    X,
    /// Mark O (moves second, minimizes utility).
    O,
}

impl Mark {
    /// Returns the opponent's mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a mark.
    Occupied(Mark),
}

/// 3x3 tic-tac-toe board.
///
/// Boards are values: every move yields a new board and the one it was
/// derived from is left untouched.
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

    /// Creates a board from three rows, top to bottom.
    pub fn from_rows(rows: [[Square; SIZE]; SIZE]) -> Self {
        let mut squares = [Square::Empty; 9];
        for (r, row) in rows.iter().enumerate() {
            squares[r * SIZE..(r + 1) * SIZE].copy_from_slice(row);
        }
        Self { squares }
    }

    /// Gets the square an action addresses, or `None` when off the board.
    pub fn square(&self, action: Action) -> Option<Square> {
        action.index().map(|i| self.squares[i])
    }

    /// Checks if the addressed square is on the board and empty.
    pub fn is_empty(&self, action: Action) -> bool {
        matches!(self.square(action), Some(Square::Empty))
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Number of squares holding `mark`.
    pub fn count(&self, mark: Mark) -> usize {
        self.squares
            .iter()
            .filter(|s| **s == Square::Occupied(mark))
            .count()
    }

    /// Number of empty squares.
    pub fn empty_count(&self) -> usize {
        self.squares.iter().filter(|s| **s == Square::Empty).count()
    }

    /// Returns a copy of this board with `mark` placed at square `index`.
    ///
    /// Callers must have checked that the index is below 9.
    pub(crate) fn with_mark(mut self, index: usize, mark: Mark) -> Self {
        self.squares[index] = Square::Occupied(mark);
        self
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..SIZE {
            for col in 0..SIZE {
                match self.squares[row * SIZE + col] {
                    Square::Empty => f.write_str(".")?,
                    Square::Occupied(mark) => write!(f, "{mark}")?,
                }
                if col < SIZE - 1 {
                    f.write_str("|")?;
                }
            }
            if row < SIZE - 1 {
                f.write_str("\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}

/// Error parsing a board from text.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseBoardError {
    /// A character that is neither a mark, an empty marker, nor a separator.
    #[display("Unexpected character {:?} in board", _0)]
    UnexpectedChar(#[error(not(source))] char),

    /// The text did not describe exactly nine squares.
    #[display("Expected 9 squares, found {}", _0)]
    WrongLength(#[error(not(source))] usize),
}

impl std::str::FromStr for Board {
    type Err = ParseBoardError;

    /// Parses nine squares in row-major order.
    ///
    /// `X`/`O` are marks (case-insensitive); `.`, `_`, `-` and the digits
    /// `1`-`9` are empty squares. Whitespace and `|` are ignored, as are
    /// `-+-+-` rule lines, so the output of `Display` parses back.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut squares = Vec::with_capacity(9);
        for line in s.lines() {
            // Rule lines ("-+-+-") carry no squares; a row of `-` does.
            if line.contains('+')
                && line.chars().all(|c| matches!(c, '-' | '+') || c.is_whitespace())
            {
                continue;
            }
            for c in line.chars() {
                let square = match c {
                    'X' | 'x' => Square::Occupied(Mark::X),
                    'O' | 'o' => Square::Occupied(Mark::O),
                    '.' | '_' | '-' | '1'..='9' => Square::Empty,
                    '|' => continue,
                    c if c.is_whitespace() => continue,
                    c => return Err(ParseBoardError::UnexpectedChar(c)),
                };
                squares.push(square);
            }
        }

        let squares: [Square; 9] = squares
            .try_into()
            .map_err(|v: Vec<Square>| ParseBoardError::WrongLength(v.len()))?;
        Ok(Self { squares })
    }
}

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win.
    Won(Mark),
    /// Game ended in a draw.
    Draw,
}
