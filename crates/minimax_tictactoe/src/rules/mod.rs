//! Game rules for tic-tac-toe.
//!
//! Pure functions over [`Board`] values: whose turn it is, which actions
//! are legal, what a move produces, and how a finished game scores.
//! None of them mutate the board they are given.

pub mod draw;
pub mod turn;
pub mod win;

pub use draw::{is_draw, is_full};
pub use turn::{apply, current_player, legal_actions};
pub(crate) use turn::successors;
pub use win::winner;

use crate::{Board, GameStatus, Mark};
use tracing::instrument;

/// Returns true once the game is over: a mark has won or no squares remain.
#[instrument(level = "trace")]
pub fn is_terminal(board: &Board) -> bool {
    is_full(board) || winner(board).is_some()
}

/// Scores a board from X's perspective.
///
/// 1 if X has won, -1 if O has won, 0 otherwise. Non-terminal boards
/// also score 0; only terminal boards carry a meaningful utility.
#[instrument(level = "trace")]
pub fn utility(board: &Board) -> i32 {
    match winner(board) {
        Some(Mark::X) => 1,
        Some(Mark::O) => -1,
        None => 0,
    }
}

/// Classifies the board as in progress, won, or drawn.
#[instrument(level = "trace")]
pub fn status(board: &Board) -> GameStatus {
    if let Some(mark) = winner(board) {
        GameStatus::Won(mark)
    } else if is_full(board) {
        GameStatus::Draw
    } else {
        GameStatus::InProgress
    }
}
