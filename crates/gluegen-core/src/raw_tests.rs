use indoc::indoc;

use crate::{GraphError, NumericKind, PropertyKind, TypeGraph, TypeVariant, parse_type_dump};

const DUMP: &str = indoc! {r#"
    [
      { "name": "Object", "module": "CoreUObject", "kind": "class" },
      {
        "name": "EColor",
        "module": "Game",
        "kind": "enum",
        "entries": ["EColor::Red", { "name": "EColor::Secret", "hidden": true }, "EColor::MAX"]
      },
      {
        "name": "Lamp",
        "module": "Game",
        "kind": "class",
        "super": "Object",
        "flags": { "blueprintable": true, "abstract": true },
        "properties": [
          { "name": "Color", "type": { "kind": "enum", "enum": "EColor" }, "flags": { "blueprint_visible": true } },
          { "name": "Tags", "type": { "kind": "array", "inner": { "kind": "name" } } },
          { "name": "Weights", "type": { "kind": "float" }, "array_dim": 4 }
        ],
        "functions": [
          {
            "name": "SetBrightness",
            "flags": { "blueprint_callable": true },
            "category": "Lighting",
            "metadata": { "DefaultToSelf": "Target" },
            "params": [
              { "name": "Value", "type": { "kind": "int32" } },
              { "name": "ReturnValue", "type": { "kind": "bool" }, "flags": { "return_value": true } }
            ]
          }
        ]
      }
    ]
"#};

#[test]
fn parse_and_resolve_dump() {
    let raw = parse_type_dump(DUMP).unwrap();
    assert_eq!(raw.len(), 3);

    let graph = TypeGraph::from_raw(raw).unwrap();
    let object = graph.find("Object").unwrap();
    let color = graph.find("EColor").unwrap();
    let lamp = &graph[graph.find("Lamp").unwrap()];

    assert_eq!(lamp.variant, TypeVariant::Class);
    assert_eq!(lamp.super_type, Some(object));
    assert!(lamp.flags.blueprintable);
    assert!(lamp.flags.is_abstract);
    assert_eq!(lamp.properties[0].kind, PropertyKind::Enum(color));
    assert_eq!(
        lamp.properties[1].kind,
        PropertyKind::Array(Box::new(PropertyKind::Name))
    );
    assert_eq!(lamp.properties[2].array_dim, 4);
    assert_eq!(lamp.properties[0].array_dim, 1);

    let f = &lamp.functions[0];
    assert_eq!(f.category.as_deref(), Some("Lighting"));
    assert_eq!(f.metadata("DefaultToSelf"), Some("Target"));
    assert_eq!(
        f.parameters().next().map(|p| &p.kind),
        Some(&PropertyKind::Numeric(NumericKind::Int32))
    );
    assert!(f.return_param().is_some());

    let entries = &graph[color].entries;
    assert_eq!(entries.len(), 3);
    assert!(entries[1].hidden);
}

#[test]
fn unknown_reference_is_an_error() {
    let raw = parse_type_dump(indoc! {r#"
        [{ "name": "A", "module": "M", "kind": "class", "super": "Missing" }]
    "#})
    .unwrap();

    let err = TypeGraph::from_raw(raw).unwrap_err();
    assert_eq!(
        err,
        GraphError::UnknownType {
            name: "Missing".into(),
            referenced_by: "A".into(),
        }
    );
    assert_eq!(err.to_string(), "unknown type `Missing` referenced by `A`");
}

#[test]
fn struct_reference_must_be_a_struct() {
    let raw = parse_type_dump(indoc! {r#"
        [
          { "name": "E", "module": "M", "kind": "enum" },
          {
            "name": "S", "module": "M", "kind": "struct",
            "properties": [{ "name": "Inner", "type": { "kind": "struct", "struct": "E" } }]
          }
        ]
    "#})
    .unwrap();

    let err = TypeGraph::from_raw(raw).unwrap_err();
    assert_eq!(
        err.to_string(),
        "type `E` referenced by `S.Inner` is not a struct"
    );
}

#[test]
fn duplicate_in_batch_is_rejected() {
    let raw = parse_type_dump(indoc! {r#"
        [
          { "name": "A", "module": "M", "kind": "class" },
          { "name": "A", "module": "M", "kind": "class" }
        ]
    "#})
    .unwrap();

    assert_eq!(
        TypeGraph::from_raw(raw).unwrap_err(),
        GraphError::DuplicateType("A".into())
    );
}

#[test]
fn merge_tombstones_reloaded_types() {
    let mut graph = TypeGraph::from_raw(parse_type_dump(DUMP).unwrap()).unwrap();
    let old_lamp = graph.find("Lamp").unwrap();

    let reload = parse_type_dump(indoc! {r#"
        [{ "name": "Lamp", "module": "Game", "kind": "class", "super": "Object" }]
    "#})
    .unwrap();
    let ids = graph.merge(reload).unwrap();

    assert_eq!(ids.len(), 1);
    assert_ne!(ids[0], old_lamp);
    assert!(graph[old_lamp].flags.newer_version_exists);
    assert_eq!(graph.find("Lamp"), Some(ids[0]));
    assert!(graph[ids[0]].properties.is_empty());
}

#[test]
fn failed_merge_leaves_graph_untouched() {
    let mut graph = TypeGraph::from_raw(parse_type_dump(DUMP).unwrap()).unwrap();
    let before = graph.len();

    let bad = parse_type_dump(indoc! {r#"
        [
          { "name": "Lamp", "module": "Game", "kind": "class" },
          { "name": "B", "module": "Game", "kind": "class", "super": "Nope" }
        ]
    "#})
    .unwrap();

    assert!(graph.merge(bad).is_err());
    assert_eq!(graph.len(), before);
    assert!(!graph[graph.find("Lamp").unwrap()].flags.newer_version_exists);
}
