//! Dispatch logic: extract params from ArgMatches and convert to command args.

use std::path::PathBuf;

use clap::ArgMatches;

use crate::commands::check::CheckArgs;
use crate::commands::generate::GenerateArgs;

pub struct GenerateParams {
    pub dumps: Vec<PathBuf>,
    pub out: PathBuf,
    pub project_dir: PathBuf,
    pub policy: Option<PathBuf>,
    pub namespace: Option<String>,
    pub project_plugin: bool,
    pub game_modules: Vec<String>,
    pub stats: bool,
}

impl GenerateParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            dumps: dumps(m),
            out: m.get_one::<PathBuf>("out").cloned().unwrap_or_default(),
            project_dir: m
                .get_one::<PathBuf>("project_dir")
                .cloned()
                .unwrap_or_else(|| PathBuf::from(".")),
            policy: m.get_one::<PathBuf>("policy").cloned(),
            namespace: m.get_one::<String>("namespace").cloned(),
            project_plugin: m.get_flag("project_plugin"),
            game_modules: m
                .get_many::<String>("game_modules")
                .map(|values| values.cloned().collect())
                .unwrap_or_default(),
            stats: m.get_flag("stats"),
        }
    }
}

impl From<GenerateParams> for GenerateArgs {
    fn from(p: GenerateParams) -> Self {
        Self {
            dumps: p.dumps,
            out: p.out,
            project_dir: p.project_dir,
            policy: p.policy,
            namespace: p.namespace,
            project_plugin: p.project_plugin,
            game_modules: p.game_modules,
            stats: p.stats,
        }
    }
}

pub struct CheckParams {
    pub dumps: Vec<PathBuf>,
    pub policy: Option<PathBuf>,
    pub namespace: Option<String>,
}

impl CheckParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            dumps: dumps(m),
            policy: m.get_one::<PathBuf>("policy").cloned(),
            namespace: m.get_one::<String>("namespace").cloned(),
        }
    }
}

impl From<CheckParams> for CheckArgs {
    fn from(p: CheckParams) -> Self {
        Self {
            dumps: p.dumps,
            policy: p.policy,
            namespace: p.namespace,
        }
    }
}

fn dumps(m: &ArgMatches) -> Vec<PathBuf> {
    m.get_many::<PathBuf>("dumps")
        .map(|values| values.cloned().collect())
        .unwrap_or_default()
}
