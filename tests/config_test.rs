//! Tests for loading settings from disk.

use std::io::Write;
use tempfile::{NamedTempFile, tempdir};
use tictactoe_minimax::{Mode, Settings};

#[test]
fn test_from_file_reads_every_key() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        "mode = \"two\"\ncomputer_delay_ms = 250\nlog_file = \"session.log\""
    )
    .unwrap();

    let settings = Settings::from_file(file.path()).unwrap();
    assert_eq!(*settings.mode(), Mode::TwoPlayer);
    assert_eq!(*settings.computer_delay_ms(), 250);
    assert_eq!(settings.log_file().to_str(), Some("session.log"));
}

#[test]
fn test_load_or_default_without_file() {
    let dir = tempdir().unwrap();
    let settings = Settings::load_or_default(dir.path().join("missing.toml")).unwrap();
    assert_eq!(settings, Settings::default());
}

#[test]
fn test_load_or_default_prefers_existing_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "computer_delay_ms = 0").unwrap();

    let settings = Settings::load_or_default(file.path()).unwrap();
    assert_eq!(*settings.computer_delay_ms(), 0);
    assert_eq!(*settings.mode(), Mode::SinglePlayer);
}

#[test]
fn test_malformed_file_is_an_error() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "mode = ").unwrap();

    let err = Settings::load_or_default(file.path()).unwrap_err();
    assert!(err.message.contains("Failed to parse config"), "{}", err);
    assert!(err.to_string().starts_with("Config error:"));
}

#[test]
fn test_missing_file_is_an_error_for_from_file() {
    let dir = tempdir().unwrap();
    let err = Settings::from_file(dir.path().join("missing.toml")).unwrap_err();
    assert!(err.message.contains("Failed to read config file"));
}
