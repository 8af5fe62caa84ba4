//! Game rules for tic-tac-toe.
//!
//! Pure functions over [`Board`] values. None of them mutate their
//! input; [`apply`] returns a fresh board.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::winner;

use crate::action::Action;
use crate::error::ActionError;
use crate::types::{Board, Cell, Mark, Outcome};
use tracing::{instrument, trace};

/// Returns the empty starting board.
#[instrument]
pub fn initial_board() -> Board {
    Board::new()
}

/// Returns the mark to move next.
///
/// X moves first and whenever both marks have been played equally often.
#[instrument(level = "trace", skip(board))]
pub fn turn_to_move(board: &Board) -> Mark {
    if board.count(Mark::X) <= board.count(Mark::O) {
        Mark::X
    } else {
        Mark::O
    }
}

/// Lists every empty cell as an action, in row-major order.
#[instrument(level = "trace", skip(board))]
pub fn legal_actions(board: &Board) -> Vec<Action> {
    Action::ALL
        .iter()
        .copied()
        .filter(|a| board.is_empty_at(a.row, a.col))
        .collect()
}

/// Returns the board produced by the mark to move playing `action`.
///
/// # Errors
///
/// - [`ActionError::OutOfRange`] if the row or column is outside `0..=2`.
/// - [`ActionError::OccupiedCell`] if the target cell is not empty.
#[instrument(level = "trace", skip(board))]
pub fn apply(board: &Board, action: Action) -> Result<Board, ActionError> {
    let index = action.index().ok_or(ActionError::OutOfRange {
        row: action.row,
        col: action.col,
    })?;

    if board.cells()[index] != Cell::Empty {
        return Err(ActionError::OccupiedCell {
            row: action.row,
            col: action.col,
        });
    }

    let mark = turn_to_move(board);
    trace!(%mark, %action, "Placing mark");
    Ok(board.with_cell(index, Cell::Occupied(mark)))
}

/// Derives the outcome of a board.
#[instrument(level = "trace", skip(board))]
pub fn outcome(board: &Board) -> Outcome {
    if let Some(mark) = winner(board) {
        Outcome::Won(mark)
    } else if is_full(board) {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}

/// Checks if the game is over: someone has won or the board is full.
#[instrument(level = "trace", skip(board))]
pub fn is_terminal(board: &Board) -> bool {
    winner(board).is_some() || is_full(board)
}

/// Scores a board from X's perspective: +1 X wins, -1 O wins, 0 otherwise.
///
/// Only meaningful on terminal boards; a game in progress scores 0.
#[instrument(level = "trace", skip(board))]
pub fn utility(board: &Board) -> i32 {
    match winner(board) {
        Some(mark) => mark.win_utility(),
        None => 0,
    }
}
