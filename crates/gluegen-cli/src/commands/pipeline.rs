//! Shared pipeline: dumps in, generation triggers out.
//!
//! The first dump is the initial scan. Every further dump is merged into the
//! graph as a new revision and announced module by module.

use std::path::{Path, PathBuf};

use indexmap::IndexSet;

use gluegen_compiler::{
    Config, FilterPolicy, Generator, ModuleOrigin, Persistence, StaticModuleResolver,
};
use gluegen_core::{RawType, TypeGraph, parse_type_dump};

#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("failed to read `{}`: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("`{}`: {source}", path.display())]
    Input {
        path: PathBuf,
        source: gluegen_compiler::Error,
    },

    #[error(transparent)]
    Generate(#[from] gluegen_compiler::Error),
}

impl PipelineError {
    fn input(path: &Path, source: impl Into<gluegen_compiler::Error>) -> Self {
        Self::Input {
            path: path.to_path_buf(),
            source: source.into(),
        }
    }
}

fn read(path: &Path) -> Result<String, PipelineError> {
    std::fs::read_to_string(path).map_err(|source| PipelineError::Read {
        path: path.to_path_buf(),
        source,
    })
}

pub fn load_policy(path: Option<&Path>) -> Result<FilterPolicy, PipelineError> {
    let Some(path) = path else {
        return Ok(FilterPolicy::default());
    };
    FilterPolicy::from_json(&read(path)?).map_err(|e| PipelineError::input(path, e))
}

pub fn load_dump(path: &Path) -> Result<Vec<RawType>, PipelineError> {
    let raw = parse_type_dump(&read(path)?).map_err(|e| PipelineError::input(path, e))?;
    tracing::info!(dump = %path.display(), types = raw.len(), "loaded dump");
    Ok(raw)
}

pub fn config(namespace: Option<&str>, out: Option<&Path>, project_dir: Option<&Path>) -> Config {
    let mut config = Config::new();
    if let Some(namespace) = namespace {
        config = config.root_namespace(namespace);
    }
    if let Some(out) = out {
        config = config.generated_scripts_dir(out);
    }
    if let Some(project_dir) = project_dir {
        config = config.project_dir(project_dir);
    }
    config
}

pub fn resolver(project_plugin: bool, game_modules: &[String]) -> StaticModuleResolver {
    game_modules
        .iter()
        .fold(StaticModuleResolver::new(), |resolver, module| {
            resolver.module(module, ModuleOrigin::GameModule)
        })
        .project_plugin(project_plugin)
}

/// Feed every dump to the generator. Returns the final graph.
pub fn run<P: Persistence>(
    generator: &mut Generator<P>,
    dumps: &[PathBuf],
) -> Result<TypeGraph, PipelineError> {
    let Some((first, rest)) = dumps.split_first() else {
        return Ok(TypeGraph::new());
    };

    let mut graph = TypeGraph::from_raw(load_dump(first)?).map_err(|e| PipelineError::input(first, e))?;
    generator
        .initial_scan(&graph)
        .map_err(gluegen_compiler::Error::from)?;

    for path in rest {
        let raw = load_dump(path)?;
        let modules: IndexSet<String> = raw.iter().map(|ty| ty.module.clone()).collect();
        graph.merge(raw).map_err(|e| PipelineError::input(path, e))?;
        for module in &modules {
            generator
                .on_module_loaded(&graph, module)
                .map_err(gluegen_compiler::Error::from)?;
        }
    }

    Ok(graph)
}
