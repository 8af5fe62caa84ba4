//! Minimax search with alpha-beta pruning.
//!
//! The tic-tac-toe tree is small enough to search to the end from any
//! position, so every score is exact: +1 X wins, -1 O wins, 0 draw.
//! X maximizes, O minimizes.
//!
//! Children are visited in [`legal_actions`] order (row-major) and the
//! running best is replaced only on strict improvement, so among equally
//! good moves the first in row-major order is chosen.

use crate::action::Action;
use crate::error::ActionError;
use crate::rules::{apply, legal_actions, outcome, turn_to_move};
use crate::types::{Board, Mark, Outcome};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, trace};

/// Lower bound below every utility.
const NEG_INFINITY: i32 = i32::MIN;
/// Upper bound above every utility.
const POS_INFINITY: i32 = i32::MAX;

/// Search options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Stop exploring a node once `beta <= alpha`.
    pruning: bool,
}

impl SearchConfig {
    /// Creates a search configuration.
    pub fn new(pruning: bool) -> Self {
        Self { pruning }
    }

    /// Plain minimax, visiting every node.
    pub fn exhaustive() -> Self {
        Self::new(false)
    }

    /// Returns whether alpha-beta cutoffs are enabled.
    pub fn pruning(&self) -> bool {
        self.pruning
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self { pruning: true }
    }
}

/// Result of a search from one board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchReport {
    action: Option<Action>,
    score: i32,
    nodes: u64,
    cutoffs: u64,
}

impl SearchReport {
    /// Best action for the mark to move, `None` on a terminal board.
    pub fn action(&self) -> Option<Action> {
        self.action
    }

    /// Value of the board under perfect play, from X's perspective.
    pub fn score(&self) -> i32 {
        self.score
    }

    /// Boards visited, including the root.
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Nodes whose remaining children were skipped.
    pub fn cutoffs(&self) -> u64 {
        self.cutoffs
    }
}

/// Returns the optimal action for the mark to move, or `None` if the
/// board is terminal.
///
/// # Errors
///
/// Propagates [`ActionError`] from [`apply`]. Actions come from
/// [`legal_actions`] of the board they are applied to, so this only
/// happens if move generation is broken.
#[instrument(skip(board))]
pub fn best_move(board: &Board) -> Result<Option<Action>, ActionError> {
    Ok(search(board, &SearchConfig::default())?.action)
}

/// Searches `board` to the end of the game and reports the best action,
/// its score and search statistics.
///
/// # Errors
///
/// See [`best_move`].
#[instrument(skip(board), fields(filled = board.filled()))]
pub fn search(board: &Board, config: &SearchConfig) -> Result<SearchReport, ActionError> {
    let maximizing = turn_to_move(board) == Mark::X;
    let mut searcher = Searcher {
        config,
        nodes: 0,
        cutoffs: 0,
    };

    let (score, action) = searcher.value(board, NEG_INFINITY, POS_INFINITY, maximizing)?;

    let report = SearchReport {
        action,
        score,
        nodes: searcher.nodes,
        cutoffs: searcher.cutoffs,
    };
    debug!(
        action = ?report.action,
        score = report.score,
        nodes = report.nodes,
        cutoffs = report.cutoffs,
        "Search complete"
    );
    Ok(report)
}

/// Recursive evaluator holding per-search counters.
struct Searcher<'a> {
    config: &'a SearchConfig,
    nodes: u64,
    cutoffs: u64,
}

impl Searcher<'_> {
    fn value(
        &mut self,
        state: &Board,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
    ) -> Result<(i32, Option<Action>), ActionError> {
        self.nodes += 1;

        let outcome = outcome(state);
        if outcome != Outcome::InProgress {
            return Ok((outcome.utility(), None));
        }

        let mut best = if maximizing { NEG_INFINITY } else { POS_INFINITY };
        let mut best_action = None;

        for action in legal_actions(state) {
            let child = apply(state, action)?;
            let (score, _) = self.value(&child, alpha, beta, !maximizing)?;

            if maximizing {
                if score > best {
                    best = score;
                    best_action = Some(action);
                }
                alpha = alpha.max(best);
            } else {
                if score < best {
                    best = score;
                    best_action = Some(action);
                }
                beta = beta.min(best);
            }

            if self.config.pruning && beta <= alpha {
                self.cutoffs += 1;
                trace!(%action, alpha, beta, "Cutoff");
                break;
            }
        }

        Ok((best, best_action))
    }
}
