//! Perfect-play tic-tac-toe.
//!
//! Boards are immutable values. The rules engine answers questions about
//! a board (whose turn, which moves, is it over, who won) and the search
//! engine finds the optimal move with exhaustive minimax and alpha-beta
//! pruning.
//!
//! # Architecture
//!
//! - **Types**: [`Mark`], [`Cell`], [`Board`], [`Outcome`]
//! - **Rules**: [`turn_to_move`], [`legal_actions`], [`apply`], [`winner`],
//!   [`is_terminal`], [`utility`]
//! - **Search**: [`best_move`], [`search`] with [`SearchConfig`]
//! - **Self-play**: [`self_play`]
//!
//! # Example
//!
//! ```
//! use minimax_tictactoe::{Action, Board, best_move};
//!
//! let board: Board = "XX./OO./...".parse()?;
//! assert_eq!(best_move(&board)?, Some(Action::new(0, 2)));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod error;
pub mod invariants;
mod play;
pub mod rules;
mod search;
mod types;

pub use action::Action;
pub use error::{ActionError, BoardError};
pub use play::{PlayedGame, Ply, self_play};
pub use rules::{
    apply, initial_board, is_full, is_terminal, legal_actions, outcome, turn_to_move, utility,
    winner,
};
pub use search::{SearchConfig, SearchReport, best_move, search};
pub use types::{Board, Cell, Mark, Outcome};
