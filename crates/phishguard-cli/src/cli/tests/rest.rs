//! Tests for features, model-info, completions, manpage.

use super::parse;
use crate::cli::{Cli, CliCommand, FormatArg};
use clap::CommandFactory;
use std::path::Path;

#[test]
fn cli_parse_features() {
    match parse(&["phishguard", "features", "https://a.b.c/"]) {
        CliCommand::Features { url, format } => {
            assert_eq!(url, "https://a.b.c/");
            assert!(format.is_none());
        }
        _ => panic!("expected Features"),
    }
}

#[test]
fn cli_parse_features_json() {
    match parse(&["phishguard", "features", "x", "--format", "json"]) {
        CliCommand::Features { format, .. } => assert_eq!(format, Some(FormatArg::Json)),
        _ => panic!("expected Features with --format"),
    }
}

#[test]
fn cli_parse_model_info() {
    match parse(&["phishguard", "model-info", "--model", "/srv/forest.json"]) {
        CliCommand::ModelInfo { model } => {
            assert_eq!(model.as_deref(), Some(Path::new("/srv/forest.json")))
        }
        _ => panic!("expected ModelInfo"),
    }
}

#[test]
fn cli_parse_completions() {
    match parse(&["phishguard", "completions", "bash"]) {
        CliCommand::Completions { shell } => assert_eq!(shell, clap_complete::Shell::Bash),
        _ => panic!("expected Completions"),
    }
}

#[test]
fn cli_parse_manpage() {
    match parse(&["phishguard", "manpage"]) {
        CliCommand::Manpage => {}
        _ => panic!("expected Manpage"),
    }
}

#[test]
fn cli_definition_is_consistent() {
    Cli::command().debug_assert();
}
