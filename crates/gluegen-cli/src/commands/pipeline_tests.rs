use std::fs;
use std::path::{Path, PathBuf};

use gluegen_compiler::{GeneratedFileManager, Generator, MemoryPersistence};
use indoc::indoc;

use super::pipeline::{self, PipelineError};

const ENGINE: &str = indoc! {r#"
    [
        { "name": "Object", "module": "CoreUObject", "kind": "class" },
        { "name": "Interface", "module": "CoreUObject", "kind": "class", "super": "Object" },
        { "name": "Actor", "module": "Engine", "kind": "class", "super": "Object",
          "flags": { "blueprintable": true },
          "properties": [
            { "name": "bHidden", "type": { "kind": "bool" }, "flags": { "blueprint_visible": true } },
            { "name": "Tags", "type": { "kind": "set", "inner": { "kind": "name" } },
              "flags": { "blueprint_visible": true } }
          ] }
    ]
"#};

const GAME: &str = indoc! {r#"
    [
        { "name": "Torch", "module": "Shooter", "kind": "class", "super": "Actor",
          "flags": { "blueprintable": true } }
    ]
"#};

fn write(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn generate_writes_engine_and_project_modules() {
    let dir = tempfile::tempdir().unwrap();
    let engine = write(dir.path(), "engine.json", ENGINE);
    let game = write(dir.path(), "game.json", GAME);
    let out = dir.path().join("Generated");
    let project = dir.path().join("Project");

    let config = pipeline::config(Some("Bindings"), Some(out.as_path()), Some(project.as_path()));
    let resolver = pipeline::resolver(false, &["Shooter".to_string()]);
    let mut generator = Generator::new(
        config,
        pipeline::load_policy(None).unwrap(),
        resolver,
        GeneratedFileManager::new(),
    );

    let graph = pipeline::run(&mut generator, &[engine, game]).unwrap();

    assert_eq!(graph.len(), 4);
    let actor = fs::read_to_string(out.join("Actor.generated.cs")).unwrap();
    assert!(actor.contains("namespace Bindings.Engine;"));
    assert!(actor.contains("public bool Hidden"));
    let torch = project.join("Script/obj/Generated/Torch.generated.cs");
    assert!(fs::read_to_string(torch).unwrap().contains(": Bindings.Engine.Actor"));
    assert!(!out.join("Torch.generated.cs.tmp").exists());
    assert_eq!(generator.stats().properties.get("SetProperty"), Some(&1));
}

#[test]
fn project_plugin_keeps_everything_together() {
    let dir = tempfile::tempdir().unwrap();
    let engine = write(dir.path(), "engine.json", ENGINE);
    let game = write(dir.path(), "game.json", GAME);

    let resolver = pipeline::resolver(true, &["Shooter".to_string()]);
    let mut generator = Generator::new(
        pipeline::config(None, Some(Path::new("Out")), None),
        pipeline::load_policy(None).unwrap(),
        resolver,
        MemoryPersistence::new(),
    );
    pipeline::run(&mut generator, &[engine, game]).unwrap();

    let files = generator.persistence();
    assert!(files.get("Out/Torch.generated.cs").is_some());
    assert!(files.get("Out/Actor.generated.cs").is_some());
}

#[test]
fn policy_file_is_applied() {
    let dir = tempfile::tempdir().unwrap();
    let engine = write(dir.path(), "engine.json", ENGINE);
    let policy = write(
        dir.path(),
        "policy.json",
        r#"{ "exclude": { "members": { "Actor": ["bHidden"] } } }"#,
    );

    let mut generator = Generator::new(
        pipeline::config(None, None, None),
        pipeline::load_policy(Some(policy.as_path())).unwrap(),
        pipeline::resolver(false, &[]),
        MemoryPersistence::new(),
    );
    pipeline::run(&mut generator, &[engine]).unwrap();

    let actor = generator
        .persistence()
        .get("Generated/Actor.generated.cs")
        .unwrap();
    assert!(!actor.contains("Hidden"));
}

#[test]
fn missing_dump_is_reported_with_path() {
    let mut generator = Generator::new(
        pipeline::config(None, None, None),
        pipeline::load_policy(None).unwrap(),
        pipeline::resolver(false, &[]),
        MemoryPersistence::new(),
    );

    let err = pipeline::run(&mut generator, &[PathBuf::from("nope.json")]).unwrap_err();

    assert!(matches!(err, PipelineError::Read { .. }));
    assert!(err.to_string().starts_with("failed to read `nope.json`"));
}

#[test]
fn unresolved_reference_names_the_dump() {
    let dir = tempfile::tempdir().unwrap();
    let engine = write(dir.path(), "engine.json", ENGINE);
    let broken = write(
        dir.path(),
        "broken.json",
        r#"[{ "name": "Lamp", "module": "Game", "kind": "class", "super": "Light" }]"#,
    );
    let mut generator = Generator::new(
        pipeline::config(None, None, None),
        pipeline::load_policy(None).unwrap(),
        pipeline::resolver(false, &[]),
        MemoryPersistence::new(),
    );

    let err = pipeline::run(&mut generator, &[engine, broken]).unwrap_err();

    insta::assert_snapshot!(
        err.to_string().replace(&dir.path().display().to_string(), "<tmp>"),
        @"`<tmp>/broken.json`: unknown type `Light` referenced by `Lamp`"
    );
}
