use std::path::PathBuf;

use crate::{Config, ModuleOrigin, ModuleRegistry, ModuleResolver, NameMapper, StaticModuleResolver};

fn config() -> Config {
    Config::new()
        .generated_scripts_dir("/engine/Generated")
        .project_dir("/project")
}

#[test]
fn directory_follows_module_origin() {
    let config = config();
    let names = NameMapper::new(&config);
    let resolver = StaticModuleResolver::new()
        .module("Niagara", ModuleOrigin::EnginePlugin)
        .module("Inventory", ModuleOrigin::ProjectPlugin)
        .module("Shooter", ModuleOrigin::GameModule)
        .module("Engine", ModuleOrigin::EngineModule);
    let mut registry = ModuleRegistry::new();

    let project = PathBuf::from("/project/Script/obj/Generated");
    let engine = PathBuf::from("/engine/Generated");
    let mut dir = |m: &str| {
        registry
            .find_or_register(m, &resolver, &config, &names)
            .directory
            .clone()
    };

    assert_eq!(dir("Niagara"), engine);
    assert_eq!(dir("Inventory"), project);
    assert_eq!(dir("Shooter"), project);
    assert_eq!(dir("Engine"), engine);
    assert_eq!(dir("CoreOnline"), engine);
}

#[test]
fn project_plugin_generator_keeps_everything_together() {
    let config = config();
    let names = NameMapper::new(&config);
    let resolver = StaticModuleResolver::new()
        .module("Shooter", ModuleOrigin::GameModule)
        .project_plugin(true);
    let mut registry = ModuleRegistry::new();

    let module = registry.find_or_register("Shooter", &resolver, &config, &names);
    assert_eq!(module.directory, PathBuf::from("/engine/Generated"));
    assert_eq!(module.namespace, "UnrealSharp.Shooter");
}

struct CountingResolver(std::cell::Cell<usize>);

impl ModuleResolver for CountingResolver {
    fn classify(&self, _module: &str) -> ModuleOrigin {
        self.0.set(self.0.get() + 1);
        ModuleOrigin::GameModule
    }
}

#[test]
fn resolution_is_memoized() {
    let config = config();
    let names = NameMapper::new(&config);
    let resolver = CountingResolver(std::cell::Cell::new(0));
    let mut registry = ModuleRegistry::new();

    registry.find_or_register("Shooter", &resolver, &config, &names);
    registry.find_or_register("Shooter", &resolver, &config, &names);

    assert_eq!(resolver.0.get(), 1);
    assert_eq!(registry.len(), 1);
}

#[test]
fn empty_directory_still_registers() {
    let config = Config::new().generated_scripts_dir("");
    let names = NameMapper::new(&config);
    let mut registry = ModuleRegistry::new();

    let module = registry.find_or_register("Engine", &StaticModuleResolver::new(), &config, &names);
    assert!(module.directory.as_os_str().is_empty());
    assert!(registry.get("Engine").is_some());
}
