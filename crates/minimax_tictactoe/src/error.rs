//! Error types for board construction and move application.

use derive_more::Display;

/// Error raised when an action cannot be applied to a board.
///
/// Both variants indicate misuse of the rules engine: actions drawn from
/// [`legal_actions`](crate::legal_actions) of the same board never fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum ActionError {
    /// Row or column lies outside `0..=2`.
    #[display("Action ({row}, {col}) is outside the board")]
    OutOfRange {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// The target cell already holds a mark.
    #[display("Cell ({row}, {col}) is already occupied")]
    OccupiedCell {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },
}

impl std::error::Error for ActionError {}

/// Error raised when building a board from untrusted input.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum BoardError {
    /// Notation did not describe exactly nine cells.
    #[display("Expected 9 cells, found {found}")]
    InvalidLength {
        /// Number of cells found.
        found: usize,
    },

    /// Notation contained a character that is not a cell.
    #[display("Invalid cell character {found:?}")]
    InvalidCell {
        /// Offending character.
        found: char,
    },

    /// The cells cannot arise from legal play.
    #[display("Invariant violation: {description}")]
    InvariantViolation {
        /// Violated invariants.
        description: String,
    },
}

impl std::error::Error for BoardError {}
