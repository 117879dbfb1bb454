//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` that can be composed into commands.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// Reflection dumps (positional, one or more).
pub fn dumps_arg() -> Arg {
    Arg::new("dumps")
        .value_name("DUMP")
        .value_parser(value_parser!(PathBuf))
        .num_args(1..)
        .required(true)
        .help("Reflection dumps; the first is the initial scan, each further one a module load")
}

/// Generated-scripts directory (-o/--out).
pub fn out_arg() -> Arg {
    Arg::new("out")
        .short('o')
        .long("out")
        .value_name("DIR")
        .value_parser(value_parser!(PathBuf))
        .required(true)
        .help("Directory for engine-side bindings")
}

/// Consuming project root (--project-dir).
pub fn project_dir_arg() -> Arg {
    Arg::new("project_dir")
        .long("project-dir")
        .value_name("DIR")
        .value_parser(value_parser!(PathBuf))
        .default_value(".")
        .help("Project root; project-owned modules go to <DIR>/Script/obj/Generated")
}

/// Filter policy file (-p/--policy).
pub fn policy_arg() -> Arg {
    Arg::new("policy")
        .short('p')
        .long("policy")
        .value_name("JSON")
        .value_parser(value_parser!(PathBuf))
        .help("Filter policy (exclude/include/relax/internal lists)")
}

/// Root namespace (--namespace).
pub fn namespace_arg() -> Arg {
    Arg::new("namespace")
        .long("namespace")
        .value_name("NAME")
        .help("Root namespace of generated code [default: UnrealSharp]")
}

/// Generator installed inside the project (--project-plugin).
pub fn project_plugin_arg() -> Arg {
    Arg::new("project_plugin")
        .long("project-plugin")
        .action(ArgAction::SetTrue)
        .help("Generator is a project plugin; every module goes to --out")
}

/// Modules owned by the project (--game-module, repeatable).
pub fn game_module_arg() -> Arg {
    Arg::new("game_modules")
        .long("game-module")
        .value_name("NAME")
        .action(ArgAction::Append)
        .help("Module of the consuming project (repeatable)")
}

/// Print rejection counters (--stats).
pub fn stats_arg() -> Arg {
    Arg::new("stats")
        .long("stats")
        .action(ArgAction::SetTrue)
        .help("Print counters of members that could not be translated")
}
