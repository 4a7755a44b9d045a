//! Invariants of boards reachable by legal play.
//!
//! The search assumes it is handed a board that could arise from the empty
//! board by alternating moves. These invariants describe that assumption so
//! it can be checked and tested independently of the search.

use crate::rules::win::line_owners;
use crate::{Board, Mark, rules};

/// A logical property that must hold for a board.
pub trait Invariant {
    /// Checks if the invariant holds for the given board.
    fn holds(board: &Board) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("Invariant violated: {}", description)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implementations are provided for tuples.
pub trait InvariantSet {
    /// Checks all invariants in the set.
    ///
    /// Returns Ok(()) if all invariants hold, or Err with a list of
    /// violations if any invariant fails.
    fn check_all(board: &Board) -> Result<(), Vec<InvariantViolation>>;
}

impl<I1, I2, I3> InvariantSet for (I1, I2, I3)
where
    I1: Invariant,
    I2: Invariant,
    I3: Invariant,
{
    fn check_all(board: &Board) -> Result<(), Vec<InvariantViolation>> {
        let violations: Vec<_> = [
            (I1::holds(board), I1::description()),
            (I2::holds(board), I2::description()),
            (I3::holds(board), I3::description()),
        ]
        .into_iter()
        .filter(|(holds, _)| !holds)
        .map(|(_, description)| InvariantViolation::new(description))
        .collect();

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// X has as many marks as O, or exactly one more.
pub struct MarkBalanceInvariant;

impl Invariant for MarkBalanceInvariant {
    fn holds(board: &Board) -> bool {
        let xs = board.count(Mark::X);
        let os = board.count(Mark::O);
        xs == os || xs == os + 1
    }

    fn description() -> &'static str {
        "X has as many marks as O or exactly one more"
    }
}

/// At most one mark owns a complete line.
pub struct SingleWinnerInvariant;

impl Invariant for SingleWinnerInvariant {
    fn holds(board: &Board) -> bool {
        let mut owners = line_owners(board);
        match owners.next() {
            Some(first) => owners.all(|mark| mark == first),
            None => true,
        }
    }

    fn description() -> &'static str {
        "At most one mark owns a complete line"
    }
}

/// The game stopped when it was won: the winner made the last move.
pub struct WinnerMovedLastInvariant;

impl Invariant for WinnerMovedLastInvariant {
    fn holds(board: &Board) -> bool {
        let xs = board.count(Mark::X);
        let os = board.count(Mark::O);
        match rules::winner(board) {
            Some(Mark::X) => xs == os + 1,
            Some(Mark::O) => xs == os,
            None => true,
        }
    }

    fn description() -> &'static str {
        "The winning mark made the last move"
    }
}

/// Invariants of every board reachable from the empty board.
pub type ReachableBoard = (
    MarkBalanceInvariant,
    SingleWinnerInvariant,
    WinnerMovedLastInvariant,
);

/// Checks that `board` could have arisen through legal play.
pub fn check_reachable(board: &Board) -> Result<(), Vec<InvariantViolation>> {
    <ReachableBoard as InvariantSet>::check_all(board)
}
