//! Tests for list, validate, checksum and completions parsing.

use super::parse;
use crate::cli::CliCommand;
use std::path::PathBuf;

#[test]
fn cli_parse_list_all() {
    match parse(&["binst", "list"]) {
        CliCommand::List { name } => assert!(name.is_none()),
        _ => panic!("expected List"),
    }
}

#[test]
fn cli_parse_list_one() {
    match parse(&["binst", "list", "sy"]) {
        CliCommand::List { name } => assert_eq!(name.as_deref(), Some("sy")),
        _ => panic!("expected List with name"),
    }
}

#[test]
fn cli_parse_validate() {
    match parse(&["binst", "validate", "descriptors/sy-4.0.0.toml"]) {
        CliCommand::Validate { path } => {
            assert_eq!(path, PathBuf::from("descriptors/sy-4.0.0.toml"));
        }
        _ => panic!("expected Validate"),
    }
}

#[test]
fn cli_parse_checksum() {
    match parse(&["binst", "checksum", "/path/to/file.tar.gz"]) {
        CliCommand::Checksum { path } => assert_eq!(path, "/path/to/file.tar.gz"),
        _ => panic!("expected Checksum"),
    }
}

#[test]
fn cli_parse_completions() {
    match parse(&["binst", "completions", "bash"]) {
        CliCommand::Completions { shell } => {
            assert_eq!(shell, clap_complete::Shell::Bash);
        }
        _ => panic!("expected Completions"),
    }
}
