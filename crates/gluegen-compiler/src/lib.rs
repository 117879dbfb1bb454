//! gluegen compiler: filtering, translation and C# emission.
//!
//! This crate turns a `gluegen_core::TypeGraph` into managed binding code:
//! - `policy` - include/exclude lists that gate types and members
//! - `names` - native to managed identifier mapping
//! - `modules` - per-module namespace and output directory
//! - `translate` - per-kind capability matrix and code fragments
//! - `extension` - extension-method inference for static library functions
//! - `exporter` - the `Generator` that walks batches and emits units
//! - `persist` - change-detecting, commit-on-success file output

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

mod config;
mod exporter;
pub mod extension;
mod modules;
mod names;
mod persist;
mod policy;
pub mod script;
mod session;
pub mod translate;

#[cfg(test)]
mod modules_tests;
#[cfg(test)]
mod names_tests;
#[cfg(test)]
mod policy_tests;
#[cfg(test)]
pub mod test_utils;

pub use config::Config;
pub use exporter::Generator;
pub use extension::ExtensionMethod;
pub use modules::{
    ModuleDescriptor, ModuleOrigin, ModuleRegistry, ModuleResolver, StaticModuleResolver,
};
pub use names::NameMapper;
pub use persist::{GeneratedFileManager, MemoryPersistence, PersistError, Persistence};
pub use policy::{FilterList, FilterPolicy};
pub use script::ScriptBuilder;
pub use session::{ExportedTypeSet, UnhandledStats};

use gluegen_core::GraphError;

/// Errors surfaced to generator hosts.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid JSON input: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Graph(#[from] GraphError),

    #[error(transparent)]
    Persist(#[from] PersistError),
}

/// Result type for generator operations.
pub type Result<T> = std::result::Result<T, Error>;
