//! Command-line interface for minimax_solver.

use crate::config::OutputFormat;
use clap::{Parser, Subcommand};
use minimax_tictactoe::Board;

/// Minimax Solver - perfect play for tic-tac-toe positions
///
/// Boards are nine cells in row-major order: `X`, `O`, and `.` for empty.
/// `/`, `|` and spaces may separate rows, e.g. `XX./OO./...`.
#[derive(Parser, Debug)]
#[command(name = "minimax_solver")]
#[command(about = "Perfect-play tic-tac-toe solver", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to solver configuration file (defaults are used if missing)
    #[arg(short, long, default_value = "minimax_solver.toml", global = true)]
    pub config: std::path::PathBuf,

    /// Output format, overriding the configuration file
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<OutputFormat>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Report turn, legal moves and result of a board
    Analyze {
        /// Board to analyze
        #[arg(short, long)]
        board: Board,
    },

    /// Compute the optimal move for the mark to move
    BestMove {
        /// Board to search from
        #[arg(short, long)]
        board: Board,

        /// Disable alpha-beta cutoffs (plain minimax)
        #[arg(long)]
        no_pruning: bool,
    },

    /// Play optimal moves for both sides until the game ends
    SelfPlay {
        /// Starting board (empty if not provided)
        #[arg(short, long)]
        board: Option<Board>,

        /// Disable alpha-beta cutoffs (plain minimax)
        #[arg(long)]
        no_pruning: bool,
    },
}
