//! Tests for solver configuration loading.

use minimax_solver::{OutputFormat, SolverConfig};
use std::io::Write;

#[test]
fn test_missing_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = SolverConfig::load(dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, SolverConfig::default());
    assert_eq!(config.log_filter(), "warn");
    assert_eq!(*config.format(), OutputFormat::Text);
    assert!(config.search().pruning());
}

#[test]
fn test_loads_toml_overrides() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
log_filter = "minimax_tictactoe=debug"
format = "json"

[search]
pruning = false
"#
    )
    .unwrap();

    let config = SolverConfig::load(file.path()).unwrap();
    assert_eq!(config.log_filter(), "minimax_tictactoe=debug");
    assert_eq!(*config.format(), OutputFormat::Json);
    assert!(!config.search().pruning());
}

#[test]
fn test_partial_toml_fills_defaults() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "format = \"json\"").unwrap();

    let config = SolverConfig::from_file(file.path()).unwrap();
    assert_eq!(*config.format(), OutputFormat::Json);
    assert_eq!(config.log_filter(), "warn");
    assert!(config.search().pruning());
}

#[test]
fn test_invalid_toml_is_an_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "format = \"yaml\"").unwrap();

    let err = SolverConfig::load(file.path()).unwrap_err();
    assert!(err.message.starts_with("Failed to parse config"));
    assert!(err.to_string().starts_with("Config error:"));
}

#[test]
fn test_flag_overrides_format() {
    let config = SolverConfig::default().with_format(Some(OutputFormat::Json));
    assert_eq!(*config.format(), OutputFormat::Json);

    let config = config.with_format(None);
    assert_eq!(*config.format(), OutputFormat::Json);
}

#[test]
fn test_no_pruning_flag_disables_cutoffs() {
    let config = SolverConfig::default();
    assert!(config.search_for(false).pruning());
    assert!(!config.search_for(true).pruning());
}
