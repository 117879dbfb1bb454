//! Generator configuration.

use std::path::PathBuf;

use indexmap::IndexMap;

/// Configuration for binding generation.
#[derive(Clone, Debug)]
pub struct Config {
    /// Namespace every module namespace is nested under
    pub(crate) root_namespace: String,
    /// Extension of generated files, without the dot
    pub(crate) file_extension: String,
    /// Native type a world-context receiver is typed as
    pub(crate) world_type: String,
    /// Root of the native object hierarchy
    pub(crate) root_object: String,
    /// Classes deriving from this are emitted as interfaces
    pub(crate) interface_root: String,
    /// Destination for engine-side modules
    pub(crate) generated_scripts_dir: PathBuf,
    /// Root of the consuming project
    pub(crate) project_dir: PathBuf,
    /// Native type name -> managed type name
    pub(crate) type_renames: IndexMap<String, String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            root_namespace: "UnrealSharp".to_string(),
            file_extension: "cs".to_string(),
            world_type: "World".to_string(),
            root_object: "Object".to_string(),
            interface_root: "Interface".to_string(),
            generated_scripts_dir: PathBuf::from("Generated"),
            project_dir: PathBuf::from("."),
            type_renames: IndexMap::new(),
        }
    }
}

impl Config {
    /// Create a new Config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn root_namespace(mut self, value: impl Into<String>) -> Self {
        self.root_namespace = value.into();
        self
    }

    pub fn file_extension(mut self, value: impl Into<String>) -> Self {
        self.file_extension = value.into();
        self
    }

    pub fn world_type(mut self, value: impl Into<String>) -> Self {
        self.world_type = value.into();
        self
    }

    pub fn root_object(mut self, value: impl Into<String>) -> Self {
        self.root_object = value.into();
        self
    }

    pub fn interface_root(mut self, value: impl Into<String>) -> Self {
        self.interface_root = value.into();
        self
    }

    pub fn generated_scripts_dir(mut self, value: impl Into<PathBuf>) -> Self {
        self.generated_scripts_dir = value.into();
        self
    }

    pub fn project_dir(mut self, value: impl Into<PathBuf>) -> Self {
        self.project_dir = value.into();
        self
    }

    /// Emit the native type `native` under the managed name `managed`.
    pub fn rename_type(mut self, native: impl Into<String>, managed: impl Into<String>) -> Self {
        self.type_renames.insert(native.into(), managed.into());
        self
    }

    /// `<project>/Script/obj/Generated`, where project-owned modules go.
    pub fn project_generated_dir(&self) -> PathBuf {
        self.project_dir.join("Script").join("obj").join("Generated")
    }

    pub(crate) fn type_file_name(&self, native_name: &str) -> String {
        format!("{native_name}.generated.{}", self.file_extension)
    }

    pub(crate) fn module_file_name(&self, module: &str) -> String {
        format!("{module}Module.{}", self.file_extension)
    }
}
