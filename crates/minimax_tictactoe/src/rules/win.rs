//! Win detection logic for tic-tac-toe.

use crate::{Action, Board, Mark, Square};
use tracing::instrument;

/// Every line that wins: rows, then columns, then diagonals.
const LINES: [[Action; 3]; 8] = [
    // Rows
    [Action::new(0, 0), Action::new(0, 1), Action::new(0, 2)],
    [Action::new(1, 0), Action::new(1, 1), Action::new(1, 2)],
    [Action::new(2, 0), Action::new(2, 1), Action::new(2, 2)],
    // Columns
    [Action::new(0, 0), Action::new(1, 0), Action::new(2, 0)],
    [Action::new(0, 1), Action::new(1, 1), Action::new(2, 1)],
    [Action::new(0, 2), Action::new(1, 2), Action::new(2, 2)],
    // Diagonals
    [Action::new(0, 0), Action::new(1, 1), Action::new(2, 2)],
    [Action::new(0, 2), Action::new(1, 1), Action::new(2, 0)],
];

/// Checks if there is a winner on the board.
///
/// Returns `Some(mark)` for the first complete line found, scanning rows,
/// then columns, then diagonals; `None` otherwise. The scan order only
/// matters for boards with two complete lines of different marks, which
/// legal play cannot produce.
#[instrument(level = "trace")]
pub fn winner(board: &Board) -> Option<Mark> {
    LINES.iter().find_map(|line| line_owner(board, line))
}

/// The mark owning every square of `line`, if any.
pub(crate) fn line_owner(board: &Board, [a, b, c]: &[Action; 3]) -> Option<Mark> {
    match board.square(*a)? {
        Square::Occupied(mark)
            if board.square(*b) == Some(Square::Occupied(mark))
                && board.square(*c) == Some(Square::Occupied(mark)) =>
        {
            Some(mark)
        }
        _ => None,
    }
}

/// Iterates the owners of all complete lines, in scan order.
pub(crate) fn line_owners(board: &Board) -> impl Iterator<Item = Mark> + '_ {
    LINES.iter().filter_map(move |line| line_owner(board, line))
}
