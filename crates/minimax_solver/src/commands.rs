//! Command implementations. Each returns the text to print.

use crate::cli::{Cli, Command};
use crate::config::{OutputFormat, SolverConfig};
use anyhow::Result;
use minimax_tictactoe::{
    Action, Board, Mark, Outcome, SearchConfig, initial_board, is_terminal, legal_actions,
    outcome, search, self_play, turn_to_move, utility, winner,
};
use serde::Serialize;
use std::fmt::Write;
use tracing::{info, instrument};

/// Rules-engine view of a board.
#[derive(Debug, Clone, Serialize)]
pub struct Analysis {
    board: Board,
    turn: Mark,
    legal_actions: Vec<Action>,
    winner: Option<Mark>,
    terminal: bool,
    utility: i32,
    outcome: Outcome,
}

/// Runs the command selected on the command line.
#[instrument(skip_all)]
pub fn run(cli: &Cli, config: &SolverConfig) -> Result<String> {
    match &cli.command {
        Command::Analyze { board } => analyze(board, *config.format()),
        Command::BestMove { board, no_pruning } => {
            best_move(board, &config.search_for(*no_pruning), *config.format())
        }
        Command::SelfPlay { board, no_pruning } => {
            let start = board.unwrap_or_else(initial_board);
            play(&start, &config.search_for(*no_pruning), *config.format())
        }
    }
}

/// Reports turn, legal actions and result for `board`.
#[instrument(skip(board))]
pub fn analyze(board: &Board, format: OutputFormat) -> Result<String> {
    let analysis = Analysis {
        board: *board,
        turn: turn_to_move(board),
        legal_actions: legal_actions(board),
        winner: winner(board),
        terminal: is_terminal(board),
        utility: utility(board),
        outcome: outcome(board),
    };

    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&analysis)?),
        OutputFormat::Text => {
            let mut out = format!("{}\n\n", analysis.board);
            writeln!(out, "Turn: {}", analysis.turn)?;
            writeln!(out, "Legal actions: {}", join_actions(&analysis.legal_actions))?;
            match analysis.winner {
                Some(mark) => writeln!(out, "Winner: {}", mark)?,
                None => writeln!(out, "Winner: none")?,
            }
            writeln!(out, "Terminal: {}", analysis.terminal)?;
            writeln!(out, "Utility: {}", analysis.utility)?;
            write!(out, "Outcome: {}", analysis.outcome)?;
            Ok(out)
        }
    }
}

/// Searches `board` and reports the optimal action.
#[instrument(skip(board))]
pub fn best_move(board: &Board, search_config: &SearchConfig, format: OutputFormat) -> Result<String> {
    let report = search(board, search_config)?;
    info!(action = ?report.action(), score = report.score(), nodes = report.nodes(), "Best move found");

    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&report)?),
        OutputFormat::Text => {
            let mut out = String::new();
            match report.action() {
                Some(action) => writeln!(
                    out,
                    "Best move for {}: {} {}",
                    turn_to_move(board),
                    action,
                    action.label()
                )?,
                None => writeln!(out, "No move: game is over ({})", outcome(board))?,
            }
            writeln!(out, "Score: {}", report.score())?;
            write!(
                out,
                "Nodes: {} (cutoffs: {})",
                report.nodes(),
                report.cutoffs()
            )?;
            Ok(out)
        }
    }
}

/// Plays the game out from `start` and reports every move.
#[instrument(skip(start))]
pub fn play(start: &Board, search_config: &SearchConfig, format: OutputFormat) -> Result<String> {
    let game = self_play(start, search_config)?;

    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&game)?),
        OutputFormat::Text => {
            let mut out = format!("{}\n", game.start());
            for (n, ply) in game.plies().iter().enumerate() {
                writeln!(
                    out,
                    "\n{}. {} plays {} {}",
                    n + 1,
                    ply.mark(),
                    ply.action(),
                    ply.action().label()
                )?;
                writeln!(out, "{}", ply.board())?;
            }
            write!(out, "\nResult: {}", game.outcome())?;
            Ok(out)
        }
    }
}

fn join_actions(actions: &[Action]) -> String {
    if actions.is_empty() {
        return "none".to_string();
    }
    actions
        .iter()
        .map(|a| a.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
