use gluegen_core::FunctionDescriptor;
use indoc::indoc;

use crate::{FilterList, FilterPolicy};

#[test]
fn default_policy_allows_construction_script() {
    let policy = FilterPolicy::default();

    assert!(policy.internal.has_member("Actor", "UserConstructionScript"));
    assert!(policy.exclude.is_empty());
    assert!(policy.include.is_empty());
}

#[test]
fn include_overrides_exclude() {
    let mut policy = FilterPolicy::new();
    policy.exclude.add_type("Lamp").add_member("Door", "Open");
    assert!(policy.rejects_type("Lamp"));
    assert!(policy.rejects_member("Door", "Open"));

    policy.include.add_type("Lamp").add_member("Door", "Open");
    assert!(!policy.rejects_type("Lamp"));
    assert!(!policy.rejects_member("Door", "Open"));
}

#[test]
fn function_matches_by_category() {
    let mut list = FilterList::new();
    list.add_category("MathLibrary", "Math|Vector4");

    let dot = FunctionDescriptor::new("Dot4").category("Math|Vector4");
    let add = FunctionDescriptor::new("Add").category("Math|Float");
    let bare = FunctionDescriptor::new("Dot4");

    assert!(list.has_function("MathLibrary", &dot));
    assert!(!list.has_function("MathLibrary", &add));
    assert!(!list.has_function("MathLibrary", &bare));
    assert!(!list.has_function("OtherLibrary", &dot));
}

#[test]
fn policy_from_json_keeps_missing_defaults() {
    let policy = FilterPolicy::from_json(indoc! {r#"
        {
          "exclude": {
            "types": ["AnimationBlueprintLibrary"],
            "members": { "Actor": ["Tick"] },
            "categories": { "KismetMathLibrary": ["Math|Vector4"] }
          },
          "relax": { "members": { "Actor": ["RootComponent"] } }
        }
    "#})
    .unwrap();

    assert!(policy.exclude.has_type("AnimationBlueprintLibrary"));
    assert!(policy.exclude.has_member("Actor", "Tick"));
    assert!(policy.exclude.has_category("KismetMathLibrary", "Math|Vector4"));
    assert!(policy.relax.has_member("Actor", "RootComponent"));
    assert!(policy.internal.has_member("Actor", "UserConstructionScript"));
}

#[test]
fn policy_from_json_rejects_bad_shape() {
    assert!(FilterPolicy::from_json(r#"{ "exclude": { "types": "Lamp" } }"#).is_err());
}
