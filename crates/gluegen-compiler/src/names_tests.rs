use gluegen_core::{NumericKind, PropertyDescriptor, PropertyKind, TypeGraphBuilder};

use crate::{Config, NameMapper};

#[test]
fn namespaces_nest_under_root() {
    let names = NameMapper::new(&Config::new());
    assert_eq!(names.module_namespace("Engine"), "UnrealSharp.Engine");

    let names = NameMapper::new(&Config::new().root_namespace(""));
    assert_eq!(names.module_namespace("Engine"), "Engine");
}

#[test]
fn interfaces_get_prefix() {
    let mut b = TypeGraphBuilder::new();
    let root = b.class("Interface", "CoreUObject").finish();
    let usable = b.interface("Usable", "Game").finish();
    let marker = b.class("Marker", "Game").super_type(root).finish();
    let lamp = b.class("Lamp", "Game").finish();
    let graph = b.build();
    let names = NameMapper::new(&Config::new());

    assert_eq!(names.type_name(&graph, usable), "IUsable");
    assert_eq!(names.type_name(&graph, marker), "IMarker");
    assert_eq!(names.type_name(&graph, lamp), "Lamp");
    assert_eq!(names.qualified_name(&graph, usable), "UnrealSharp.Game.IUsable");
}

#[test]
fn renames_apply_before_prefix() {
    let mut b = TypeGraphBuilder::new();
    let object = b.class("Object", "CoreUObject").finish();
    let graph = b.build();
    let names = NameMapper::new(&Config::new().rename_type("Object", "UObject"));

    assert_eq!(names.qualified_name(&graph, object), "UnrealSharp.CoreUObject.UObject");
}

#[test]
fn member_names() {
    let mut b = TypeGraphBuilder::new();
    let lamp = b.class("Lamp", "Game").finish();
    let graph = b.build();
    let names = NameMapper::new(&Config::new());

    let hidden = PropertyDescriptor::new("bHidden", PropertyKind::Bool);
    let bounds = PropertyDescriptor::new("bounds", PropertyKind::Bool);
    let keyword = PropertyDescriptor::new("event", PropertyKind::Numeric(NumericKind::Int32));
    let same = PropertyDescriptor::new("Lamp", PropertyKind::String);
    let byte_flag = PropertyDescriptor::new("bMask", PropertyKind::Numeric(NumericKind::UInt8));

    assert_eq!(names.property_name(&graph, lamp, &hidden), "Hidden");
    assert_eq!(names.property_name(&graph, lamp, &bounds), "bounds");
    assert_eq!(names.property_name(&graph, lamp, &keyword), "@event");
    assert_eq!(names.property_name(&graph, lamp, &same), "Lamp_");
    assert_eq!(names.property_name(&graph, lamp, &byte_flag), "bMask");
    assert_eq!(names.function_name(&graph, lamp, "Lamp"), "Lamp_");
}

#[test]
fn parameter_names_are_camel_case() {
    let names = NameMapper::new(&Config::new());

    let target = PropertyDescriptor::new("Target", PropertyKind::String);
    let object = PropertyDescriptor::new("Object", PropertyKind::String);
    let flag = PropertyDescriptor::new("bLoop", PropertyKind::Bool);

    assert_eq!(names.parameter_name(&target), "target");
    assert_eq!(names.parameter_name(&object), "@object");
    assert_eq!(names.parameter_name(&flag), "loop");
}
