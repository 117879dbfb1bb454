//! Fixtures shared by the generator tests.

use std::path::PathBuf;

use gluegen_core::{TypeGraphBuilder, TypeId};

use crate::{Config, FilterPolicy, Generator, MemoryPersistence, StaticModuleResolver};

/// Output directory of every module under the default resolver.
pub const OUT: &str = "Generated";

/// Builder preloaded with the root object and the interface root.
pub fn graph_builder() -> (TypeGraphBuilder, TypeId) {
    let mut b = TypeGraphBuilder::new();
    let object = b.class("Object", "CoreUObject").finish();
    b.class("Interface", "CoreUObject").super_type(object).finish();
    (b, object)
}

pub fn generator() -> Generator<MemoryPersistence> {
    generator_with(FilterPolicy::default())
}

pub fn generator_with(policy: FilterPolicy) -> Generator<MemoryPersistence> {
    Generator::new(
        Config::new(),
        policy,
        StaticModuleResolver::new(),
        MemoryPersistence::new(),
    )
}

pub fn unit_path(native: &str) -> PathBuf {
    PathBuf::from(OUT).join(format!("{native}.generated.cs"))
}

/// Committed unit for a native type, or "" when none was written.
pub fn unit<'a>(generator: &'a Generator<MemoryPersistence>, native: &str) -> &'a str {
    generator.persistence().get(unit_path(native)).unwrap_or_default()
}
