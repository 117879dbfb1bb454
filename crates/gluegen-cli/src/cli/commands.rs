//! Command builders for the CLI.

use clap::Command;

use super::args::*;

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("gluegen")
        .about("C# binding generator for native reflection dumps")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(generate_command())
        .subcommand(check_command())
}

/// Generate bindings into the output directories.
pub fn generate_command() -> Command {
    Command::new("generate")
        .about("Generate C# bindings from reflection dumps")
        .after_help(
            r#"EXAMPLES:
  gluegen generate engine.json -o Script/Generated
  gluegen generate engine.json game.json -o Generated --game-module Shooter
  gluegen generate engine.json -o Generated -p policy.json --stats"#,
        )
        .arg(dumps_arg())
        .arg(out_arg())
        .arg(project_dir_arg())
        .arg(policy_arg())
        .arg(namespace_arg())
        .arg(project_plugin_arg())
        .arg(game_module_arg())
        .arg(stats_arg())
}

/// Run the pipeline without touching the disk.
pub fn check_command() -> Command {
    Command::new("check")
        .about("Run generation in memory and report what would be written")
        .after_help(
            r#"EXAMPLES:
  gluegen check engine.json
  gluegen check engine.json -p policy.json"#,
        )
        .arg(dumps_arg())
        .arg(policy_arg())
        .arg(namespace_arg())
}
