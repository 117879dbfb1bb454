//! Module registry: output namespace and directory per native module.

use std::path::{Path, PathBuf};

use indexmap::IndexMap;

use crate::{Config, NameMapper};

/// Packaging of a native module, as reported by the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModuleOrigin {
    /// Owned by an engine (or enterprise) plugin.
    EnginePlugin,
    /// Owned by a plugin of the consuming project.
    ProjectPlugin,
    /// Loadable module of the consuming project.
    GameModule,
    /// Loadable module shipped with the engine.
    EngineModule,
    /// Not known to the host.
    Unknown,
}

/// Host-side module classification.
pub trait ModuleResolver {
    fn classify(&self, module: &str) -> ModuleOrigin;

    /// The generator itself is installed inside the consuming project.
    fn generator_is_project_plugin(&self) -> bool {
        false
    }
}

/// Map-backed resolver.
#[derive(Clone, Debug, Default)]
pub struct StaticModuleResolver {
    origins: IndexMap<String, ModuleOrigin>,
    project_plugin: bool,
}

impl StaticModuleResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn module(mut self, name: impl Into<String>, origin: ModuleOrigin) -> Self {
        self.origins.insert(name.into(), origin);
        self
    }

    pub fn project_plugin(mut self, value: bool) -> Self {
        self.project_plugin = value;
        self
    }
}

impl ModuleResolver for StaticModuleResolver {
    fn classify(&self, module: &str) -> ModuleOrigin {
        self.origins
            .get(module)
            .copied()
            .unwrap_or(ModuleOrigin::Unknown)
    }

    fn generator_is_project_plugin(&self) -> bool {
        self.project_plugin
    }
}

/// A deployment unit of generated code.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModuleDescriptor {
    pub name: String,
    pub namespace: String,
    pub directory: PathBuf,
}

/// Lazily resolved modules, memoized for the session.
#[derive(Debug, Default)]
pub struct ModuleRegistry {
    modules: IndexMap<String, ModuleDescriptor>,
}

impl ModuleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, module: &str) -> Option<&ModuleDescriptor> {
        self.modules.get(module)
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ModuleDescriptor> {
        self.modules.values()
    }

    pub fn find_or_register(
        &mut self,
        module: &str,
        resolver: &dyn ModuleResolver,
        config: &Config,
        names: &NameMapper,
    ) -> &ModuleDescriptor {
        self.modules
            .entry(module.to_string())
            .or_insert_with(|| {
                let directory = resolve_directory(module, resolver, config);
                if directory.as_os_str().is_empty() {
                    tracing::error!(module, "no output directory resolved for module");
                }
                tracing::debug!(module, directory = %directory.display(), "registered module");
                ModuleDescriptor {
                    name: module.to_string(),
                    namespace: names.module_namespace(module),
                    directory,
                }
            })
    }
}

fn resolve_directory(module: &str, resolver: &dyn ModuleResolver, config: &Config) -> PathBuf {
    let scripts: &Path = &config.generated_scripts_dir;
    if resolver.generator_is_project_plugin() {
        return scripts.to_path_buf();
    }
    match resolver.classify(module) {
        ModuleOrigin::EnginePlugin | ModuleOrigin::EngineModule | ModuleOrigin::Unknown => {
            scripts.to_path_buf()
        }
        ModuleOrigin::ProjectPlugin | ModuleOrigin::GameModule => config.project_generated_dir(),
    }
}
