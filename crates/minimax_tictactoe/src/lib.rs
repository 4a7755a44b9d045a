//! Tic-tac-toe rules and exhaustive minimax search.
//!
//! The crate answers four questions about a 3x3 board: whose turn it is,
//! what can be played, whether the game is over, and which move is optimal
//! for the mark to move.
//!
//! # Architecture
//!
//! - **Types**: [`Board`] values of [`Square`]s holding [`Mark`]s
//! - **Rules**: pure functions deriving turn, legal actions, successor
//!   boards, winner and utility
//! - **Search**: minimax over the full game tree, optionally evaluating the
//!   root's actions in parallel
//!
//! # Example
//!
//! ```
//! use minimax_tictactoe::{Action, apply, initial_state, is_terminal, minimax, winner};
//!
//! # fn example() -> Result<(), minimax_tictactoe::InvalidAction> {
//! let board = apply(&initial_state(), Action::new(0, 0))?;
//! let board = apply(&board, Action::new(1, 0))?;
//! let board = apply(&board, Action::new(0, 1))?;
//! let board = apply(&board, Action::new(1, 1))?;
//!
//! let best = minimax(&board);
//! assert_eq!(best, Some(Action::new(0, 2)));
//!
//! let board = apply(&board, Action::new(0, 2))?;
//! assert!(is_terminal(&board));
//! assert!(winner(&board).is_some());
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod config;
mod error;
pub mod invariants;
pub mod rules;
mod search;
mod types;

// Crate-level exports - Board model
pub use action::{Action, SIZE};
pub use types::{Board, GameStatus, Mark, ParseBoardError, Square};

// Crate-level exports - Errors
pub use error::InvalidAction;

// Crate-level exports - Configuration
pub use config::{ConfigError, SearchConfig};

// Crate-level exports - Rules engine
pub use rules::{
    apply, current_player, is_draw, is_full, is_terminal, legal_actions, status, utility,
    winner,
};

// Crate-level exports - Search engine
pub use search::{Minimax, max_value, min_value, minimax, play_out, value};

/// Returns the starting board: all nine squares empty.
pub fn initial_state() -> Board {
    Board::new()
}
