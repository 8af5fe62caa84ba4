//! Tests for command-line parsing and dispatch.

use clap::Parser;
use minimax_solver::{Cli, Command, OutputFormat, SolverConfig, run};
use minimax_tictactoe::Board;

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(std::iter::once("minimax_solver").chain(args.iter().copied())).unwrap()
}

#[test]
fn test_parses_board_argument() {
    let cli = parse(&["best-move", "--board", "XX./OO./..."]);
    match cli.command {
        Command::BestMove { board, no_pruning } => {
            assert_eq!(board, "XX.OO....".parse::<Board>().unwrap());
            assert!(!no_pruning);
        }
        other => panic!("unexpected command {:?}", other),
    }
}

#[test]
fn test_rejects_invalid_board() {
    let result = Cli::try_parse_from(["minimax_solver", "analyze", "--board", "OO......."]);
    assert!(result.is_err());
}

#[test]
fn test_global_format_flag() {
    let cli = parse(&["self-play", "--format", "json"]);
    assert_eq!(cli.format, Some(OutputFormat::Json));
    assert!(matches!(cli.command, Command::SelfPlay { board: None, .. }));
}

#[test]
fn test_run_best_move_json() {
    let cli = parse(&["--format", "json", "best-move", "-b", "OO./XX./..."]);
    let config = SolverConfig::default().with_format(cli.format);
    let out = run(&cli, &config).unwrap();

    let value: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(value["action"]["row"], 0);
    assert_eq!(value["action"]["col"], 2);
    assert_eq!(value["score"], 1);
}

#[test]
fn test_run_self_play_draws() {
    let cli = parse(&["self-play"]);
    let out = run(&cli, &SolverConfig::default()).unwrap();
    assert!(out.ends_with("Result: draw"));
}
