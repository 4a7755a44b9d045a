//! Errors raised when applying an action.

use crate::Action;

/// The requested action cannot be played on the board.
///
/// This is the only user-correctable failure in the rules engine. It is
/// always reported to the caller; the action is never moved to a nearby
/// legal square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum InvalidAction {
    /// The coordinates fall outside the 3x3 grid.
    #[display("Invalid action {action}: coordinates must be in 0..=2")]
    OutOfRange {
        /// The rejected action.
        action: Action,
    },

    /// The addressed square already holds a mark.
    #[display("Invalid action {action}: square is already occupied")]
    Occupied {
        /// The rejected action.
        action: Action,
    },
}

impl InvalidAction {
    /// The action that was rejected.
    pub fn action(&self) -> Action {
        match self {
            InvalidAction::OutOfRange { action } | InvalidAction::Occupied { action } => *action,
        }
    }
}

impl std::error::Error for InvalidAction {}
