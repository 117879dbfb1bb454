//! Native -> managed identifier mapping.

use indexmap::IndexMap;

use gluegen_core::utils::{strip_bool_prefix, to_camel_case};
use gluegen_core::{PropertyDescriptor, PropertyKind, TypeGraph, TypeId, TypeVariant};

use crate::Config;

/// C# keywords that need `@` to be used as identifiers.
const RESERVED: &[&str] = &[
    "abstract", "as", "base", "bool", "break", "byte", "case", "catch", "char", "checked",
    "class", "const", "continue", "decimal", "default", "delegate", "do", "double", "else",
    "enum", "event", "explicit", "extern", "false", "finally", "fixed", "float", "for",
    "foreach", "goto", "if", "implicit", "in", "int", "interface", "internal", "is", "lock",
    "long", "namespace", "new", "null", "object", "operator", "out", "override", "params",
    "private", "protected", "public", "readonly", "ref", "return", "sbyte", "sealed", "short",
    "sizeof", "stackalloc", "static", "string", "struct", "switch", "this", "throw", "true",
    "try", "typeof", "uint", "ulong", "unchecked", "unsafe", "ushort", "using", "virtual",
    "void", "volatile", "while",
];

/// Deterministic mapping from native identifiers to C# identifiers.
#[derive(Clone, Debug)]
pub struct NameMapper {
    root_namespace: String,
    interface_root: String,
    renames: IndexMap<String, String>,
}

impl NameMapper {
    pub fn new(config: &Config) -> Self {
        Self {
            root_namespace: config.root_namespace.clone(),
            interface_root: config.interface_root.clone(),
            renames: config.type_renames.clone(),
        }
    }

    /// Namespace of the code generated for `module`.
    pub fn module_namespace(&self, module: &str) -> String {
        if self.root_namespace.is_empty() {
            return module.to_string();
        }
        format!("{}.{module}", self.root_namespace)
    }

    /// Unqualified managed name of a type.
    pub fn type_name(&self, graph: &TypeGraph, id: TypeId) -> String {
        let ty = &graph[id];
        let base = self.renames.get(&ty.name).unwrap_or(&ty.name);
        if self.is_interface(graph, id) {
            format!("I{base}")
        } else {
            base.clone()
        }
    }

    /// `Namespace.Name` of a type.
    pub fn qualified_name(&self, graph: &TypeGraph, id: TypeId) -> String {
        format!(
            "{}.{}",
            self.module_namespace(&graph[id].module),
            self.type_name(graph, id)
        )
    }

    /// Interfaces, and classes deriving from the interface root.
    pub fn is_interface(&self, graph: &TypeGraph, id: TypeId) -> bool {
        graph[id].variant == TypeVariant::Interface || graph.is_child_of(id, &self.interface_root)
    }

    pub fn property_name(&self, graph: &TypeGraph, owner: TypeId, property: &PropertyDescriptor) -> String {
        let name = match property.kind {
            PropertyKind::Bool => strip_bool_prefix(&property.name),
            _ => property.name.as_str(),
        };
        self.member_name(graph, owner, name)
    }

    pub fn function_name(&self, graph: &TypeGraph, owner: TypeId, function: &str) -> String {
        self.member_name(graph, owner, function)
    }

    pub fn parameter_name(&self, parameter: &PropertyDescriptor) -> String {
        let name = match parameter.kind {
            PropertyKind::Bool => strip_bool_prefix(&parameter.name),
            _ => parameter.name.as_str(),
        };
        escape_keyword(to_camel_case(name))
    }

    fn member_name(&self, graph: &TypeGraph, owner: TypeId, name: &str) -> String {
        // A member may not share the name of its enclosing type.
        if name == self.type_name(graph, owner) {
            return format!("{name}_");
        }
        escape_keyword(name.to_string())
    }
}

fn escape_keyword(name: String) -> String {
    if RESERVED.contains(&name.as_str()) {
        format!("@{name}")
    } else {
        name
    }
}
