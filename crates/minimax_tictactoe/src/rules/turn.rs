//! Turn order, legal actions, and move application.

use crate::{Action, Board, InvalidAction, Mark};
use std::collections::BTreeSet;
use tracing::{instrument, trace};

/// Returns the mark whose turn it is.
///
/// X moves first, so X is to move whenever the marks are level and O
/// otherwise.
#[instrument(level = "trace")]
pub fn current_player(board: &Board) -> Mark {
    if board.count(Mark::X) == board.count(Mark::O) {
        Mark::X
    } else {
        Mark::O
    }
}

/// Returns every empty square as a set of actions.
///
/// The set iterates in row-major order. A full board yields an empty set.
#[instrument(level = "trace")]
pub fn legal_actions(board: &Board) -> BTreeSet<Action> {
    Action::ALL
        .iter()
        .copied()
        .filter(|action| board.is_empty(*action))
        .collect()
}

/// Returns the board that results from the current player marking `action`.
///
/// The input board is not modified.
///
/// # Errors
///
/// Returns [`InvalidAction::OutOfRange`] if the coordinates are off the
/// board and [`InvalidAction::Occupied`] if the square already holds a mark.
#[instrument(level = "trace")]
pub fn apply(board: &Board, action: Action) -> Result<Board, InvalidAction> {
    let index = action
        .index()
        .ok_or(InvalidAction::OutOfRange { action })?;
    if !board.is_empty(action) {
        return Err(InvalidAction::Occupied { action });
    }

    let mark = current_player(board);
    trace!(%mark, "Applying action");
    Ok(board.with_mark(index, mark))
}

/// Iterates `(action, resulting board)` for every legal action, row-major.
///
/// Used by the search so that it neither allocates an action set nor has
/// to handle errors for actions it already knows are legal.
pub(crate) fn successors(board: &Board) -> impl Iterator<Item = (Action, Board)> + '_ {
    let mark = current_player(board);
    Action::ALL
        .iter()
        .copied()
        .enumerate()
        .filter(move |(_, action)| board.is_empty(*action))
        .map(move |(index, action)| (action, board.with_mark(index, mark)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Square;

    #[test]
    fn test_x_moves_first() {
        assert_eq!(current_player(&Board::new()), Mark::X);
    }

    #[test]
    fn test_o_moves_after_x() {
        let board = apply(&Board::new(), Action::new(1, 1)).expect("legal move");
        assert_eq!(current_player(&board), Mark::O);
    }

    #[test]
    fn test_empty_board_has_nine_actions() {
        let actions = legal_actions(&Board::new());
        assert_eq!(actions.len(), 9);
        assert!(actions.iter().copied().eq(Action::ALL));
    }

    #[test]
    fn test_full_board_has_no_actions() {
        let board: Board = "XOX OXX OXO".parse().expect("valid board");
        assert!(legal_actions(&board).is_empty());
    }

    #[test]
    fn test_apply_places_current_mark() {
        let board: Board = "X.. ... ...".parse().expect("valid board");
        let next = apply(&board, Action::new(2, 2)).expect("legal move");
        assert_eq!(next.square(Action::new(2, 2)), Some(Square::Occupied(Mark::O)));
        assert_eq!(board.square(Action::new(2, 2)), Some(Square::Empty));
    }

    #[test]
    fn test_apply_rejects_occupied() {
        let board: Board = "X.. ... ...".parse().expect("valid board");
        let err = apply(&board, Action::new(0, 0)).unwrap_err();
        assert_eq!(
            err,
            InvalidAction::Occupied {
                action: Action::new(0, 0)
            }
        );
    }

    #[test]
    fn test_apply_rejects_out_of_range() {
        let err = apply(&Board::new(), Action::new(3, 1)).unwrap_err();
        assert_eq!(
            err,
            InvalidAction::OutOfRange {
                action: Action::new(3, 1)
            }
        );
    }

    #[test]
    fn test_successors_match_legal_actions() {
        let board: Board = "XO. .X. ...".parse().expect("valid board");
        let legal: Vec<Action> = legal_actions(&board).into_iter().collect();
        let generated: Vec<Action> = successors(&board).map(|(action, _)| action).collect();
        assert_eq!(legal, generated);

        for (action, next) in successors(&board) {
            assert_eq!(apply(&board, action), Ok(next));
        }
    }
}
