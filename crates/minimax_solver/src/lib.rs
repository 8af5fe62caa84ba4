//! Minimax Solver - command-line front end for `minimax_tictactoe`.
//!
//! Analyzes boards, finds optimal moves and plays games out, printing
//! text or JSON. Settings come from a TOML file, overridable by flags.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod commands;
mod config;

pub use cli::{Cli, Command};
pub use commands::{Analysis, analyze, best_move, play, run};
pub use config::{ConfigError, OutputFormat, SolverConfig};
