//! Exhaustive minimax search.
//!
//! X maximizes utility and O minimizes it. Every node of the game tree
//! below the given board is visited: there is no pruning and no
//! memoization. From the empty board this is a few hundred thousand
//! positions, which is fine for 3x3 but does not scale to larger boards.
//!
//! Children are derived copies of their parent, so sibling branches share
//! no state and the root's actions can be evaluated in parallel.

use crate::invariants::check_reachable;
use crate::rules::{current_player, is_terminal, successors, utility};
use crate::{Action, Board, Mark, SearchConfig};
use rayon::prelude::*;
use tracing::{debug, instrument, warn};

/// Value of `board` when X, the maximizer, chooses the next move.
///
/// Terminal boards return their utility.
pub fn max_value(board: &Board) -> i32 {
    if is_terminal(board) {
        return utility(board);
    }
    successors(board)
        .map(|(_, next)| min_value(&next))
        .fold(i32::MIN, i32::max)
}

/// Value of `board` when O, the minimizer, chooses the next move.
///
/// Terminal boards return their utility.
pub fn min_value(board: &Board) -> i32 {
    if is_terminal(board) {
        return utility(board);
    }
    successors(board)
        .map(|(_, next)| max_value(&next))
        .fold(i32::MAX, i32::min)
}

/// Minimax value of `board` for whichever mark is to move.
#[instrument(level = "trace")]
pub fn value(board: &Board) -> i32 {
    match current_player(board) {
        Mark::X => max_value(board),
        Mark::O => min_value(board),
    }
}

/// Returns the optimal action for the mark to move, or `None` if the game
/// is over.
///
/// Ties go to the first optimal action in row-major order.
pub fn minimax(board: &Board) -> Option<Action> {
    Minimax::default().best_action(board)
}

/// Plays optimal moves for both sides from `board` until the game ends and
/// returns the actions taken.
pub fn play_out(board: &Board) -> Vec<Action> {
    Minimax::default().play_out(board)
}

/// A root action, the board it leads to, and that board's value.
#[derive(Debug, Clone, Copy)]
struct Child {
    action: Action,
    board: Board,
    value: i32,
}

/// Minimax engine.
///
/// The configuration only changes how the root is evaluated; the chosen
/// action is the same either way.
#[derive(Debug, Clone, Copy, Default)]
pub struct Minimax {
    config: SearchConfig,
}

impl Minimax {
    /// Creates an engine with the given configuration.
    #[instrument]
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    /// Returns the engine configuration.
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Evaluates every legal action at the root, in row-major order.
    ///
    /// Each value is the minimax value of the board the action leads to.
    /// Terminal boards have no actions and yield an empty list.
    #[instrument(skip(self))]
    pub fn evaluate_actions(&self, board: &Board) -> Vec<(Action, i32)> {
        self.evaluate_children(board)
            .into_iter()
            .map(|child| (child.action, child.value))
            .collect()
    }

    /// Returns the optimal action for the mark to move, or `None` if the
    /// game is over.
    ///
    /// Ties go to the first optimal action in row-major order.
    #[instrument(skip(self))]
    pub fn best_action(&self, board: &Board) -> Option<Action> {
        self.select(board).map(|child| child.action)
    }

    /// Plays optimal moves for both sides from `board` until the game ends
    /// and returns the actions taken.
    #[instrument(skip(self))]
    pub fn play_out(&self, board: &Board) -> Vec<Action> {
        let mut board = *board;
        let mut line = Vec::with_capacity(board.empty_count());
        while let Some(child) = self.select(&board) {
            line.push(child.action);
            board = child.board;
        }
        debug!(moves = line.len(), final_value = utility(&board), "Play-out finished");
        line
    }

    /// Picks the child that is strictly best for the mover, first wins ties.
    fn select(&self, board: &Board) -> Option<Child> {
        if let Err(violations) = check_reachable(board) {
            warn!(?violations, "Searching a board that legal play cannot reach");
        }

        let mover = current_player(board);
        let best = self
            .evaluate_children(board)
            .into_iter()
            .reduce(|best, child| {
                let better = match mover {
                    Mark::X => child.value > best.value,
                    Mark::O => child.value < best.value,
                };
                if better { child } else { best }
            });

        if let Some(child) = &best {
            debug!(%mover, action = %child.action, value = child.value, "Selected action");
        }
        best
    }

    fn evaluate_children(&self, board: &Board) -> Vec<Child> {
        if is_terminal(board) {
            return Vec::new();
        }

        // The opponent moves next in every child.
        let reply: fn(&Board) -> i32 = match current_player(board) {
            Mark::X => min_value,
            Mark::O => max_value,
        };
        let evaluate = |(action, next): (Action, Board)| Child {
            action,
            board: next,
            value: reply(&next),
        };

        if *self.config.parallel_root() {
            let children: Vec<_> = successors(board).collect();
            children.into_par_iter().map(evaluate).collect()
        } else {
            successors(board).map(evaluate).collect()
        }
    }
}
