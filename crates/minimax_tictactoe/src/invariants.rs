//! Board invariants.
//!
//! Every board reachable through legal play satisfies these properties.
//! Boards built from outside input are checked against them before use.

use crate::rules::win;
use crate::types::{Board, Mark};

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
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

/// A set of invariants checked together.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }
        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// X moves first, so X has as many marks as O or exactly one more.
pub struct MarkBalance;

impl Invariant<Board> for MarkBalance {
    fn holds(board: &Board) -> bool {
        let x = board.count(Mark::X);
        let o = board.count(Mark::O);
        x == o || x == o + 1
    }

    fn description() -> &'static str {
        "X must have as many marks as O or exactly one more"
    }
}

/// At most one mark owns a complete line.
pub struct SingleWinner;

impl Invariant<Board> for SingleWinner {
    fn holds(board: &Board) -> bool {
        let mut owners = win::line_owners(board);
        match owners.next() {
            Some(first) => owners.all(|m| m == first),
            None => true,
        }
    }

    fn description() -> &'static str {
        "X and O cannot both hold a complete line"
    }
}

/// Invariants of every board reachable from the empty board.
pub type BoardInvariants = (MarkBalance, SingleWinner);
