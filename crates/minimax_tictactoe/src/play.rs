//! Self-play: both sides follow the search until the game ends.

use crate::action::Action;
use crate::error::ActionError;
use crate::rules::{apply, outcome, turn_to_move};
use crate::search::{SearchConfig, search};
use crate::types::{Board, Mark, Outcome};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// One move of a recorded game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Ply {
    /// Mark that moved.
    mark: Mark,
    /// Cell it filled.
    action: Action,
    /// Search score of the board before the move.
    score: i32,
    /// Board after the move.
    board: Board,
}

/// A game played out from a starting board.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct PlayedGame {
    /// Board the game started from.
    start: Board,
    /// Moves in order.
    plies: Vec<Ply>,
    /// Final board.
    last: Board,
    /// Final result.
    outcome: Outcome,
}

impl PlayedGame {
    /// Actions played, in order.
    pub fn actions(&self) -> Vec<Action> {
        self.plies.iter().map(|p| p.action).collect()
    }
}

/// Plays the search's best move for whichever mark is to move until the
/// board is terminal.
///
/// A terminal `start` yields a game with no moves.
///
/// # Errors
///
/// Propagates [`ActionError`] from the search or from [`apply`].
#[instrument(skip(start), fields(filled = start.filled()))]
pub fn self_play(start: &Board, config: &SearchConfig) -> Result<PlayedGame, ActionError> {
    let mut board = *start;
    let mut plies = Vec::new();

    loop {
        let report = search(&board, config)?;
        let Some(action) = report.action() else {
            break;
        };

        let mark = turn_to_move(&board);
        board = apply(&board, action)?;
        debug!(%mark, %action, score = report.score(), "Played move");
        plies.push(Ply {
            mark,
            action,
            score: report.score(),
            board,
        });
    }

    let outcome = outcome(&board);
    info!(moves = plies.len(), %outcome, "Self-play finished");
    Ok(PlayedGame {
        start: *start,
        plies,
        last: board,
        outcome,
    })
}
