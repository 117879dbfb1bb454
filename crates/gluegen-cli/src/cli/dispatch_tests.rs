//! Tests for CLI dispatch logic.

use std::path::PathBuf;

use super::*;
use crate::cli::commands::{check_command, generate_command};

#[test]
fn generate_collects_dumps_in_order() {
    let m = generate_command()
        .try_get_matches_from(["generate", "engine.json", "game.json", "-o", "out"])
        .unwrap();
    let params = GenerateParams::from_matches(&m);

    assert_eq!(
        params.dumps,
        [PathBuf::from("engine.json"), PathBuf::from("game.json")]
    );
    assert_eq!(params.out, PathBuf::from("out"));
    assert_eq!(params.project_dir, PathBuf::from("."));
    assert!(params.policy.is_none());
    assert!(!params.project_plugin);
    assert!(!params.stats);
}

#[test]
fn generate_repeats_game_modules() {
    let m = generate_command()
        .try_get_matches_from([
            "generate",
            "engine.json",
            "--out",
            "out",
            "--game-module",
            "Shooter",
            "--game-module",
            "Lobby",
            "--project-plugin",
            "--stats",
            "--namespace",
            "Game",
        ])
        .unwrap();
    let params = GenerateParams::from_matches(&m);

    assert_eq!(params.game_modules, ["Shooter", "Lobby"]);
    assert!(params.project_plugin);
    assert!(params.stats);
    assert_eq!(params.namespace.as_deref(), Some("Game"));
}

#[test]
fn generate_requires_out() {
    let result = generate_command().try_get_matches_from(["generate", "engine.json"]);
    assert!(result.is_err());
}

#[test]
fn generate_requires_a_dump() {
    let result = generate_command().try_get_matches_from(["generate", "-o", "out"]);
    assert!(result.is_err());
}

#[test]
fn check_rejects_output_flags() {
    let result = check_command().try_get_matches_from(["check", "engine.json", "-o", "out"]);
    assert!(result.is_err());

    let m = check_command()
        .try_get_matches_from(["check", "engine.json", "-p", "policy.json"])
        .unwrap();
    let params = CheckParams::from_matches(&m);
    assert_eq!(params.dumps, [PathBuf::from("engine.json")]);
    assert_eq!(params.policy, Some(PathBuf::from("policy.json")));
}

#[test]
fn help_lists_subcommands() {
    let help = build_cli().render_help().to_string();
    assert!(help.contains("generate"));
    assert!(help.contains("check"));
}
