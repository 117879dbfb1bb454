//! Programmatic graph construction.
//!
//! Used by hosts that already hold reflection data in memory, and by tests.
//! Types must be declared before they are referenced.

use crate::graph::{EnumEntry, FunctionDescriptor, PropertyDescriptor, TypeFlags};
use crate::{NumericKind, TypeGraph, TypeId, TypeVariant};

/// Incrementally builds a `TypeGraph`.
#[derive(Debug, Default)]
pub struct TypeGraphBuilder {
    graph: TypeGraph,
}

impl TypeGraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Continue building on top of an existing revision.
    pub fn from_graph(graph: TypeGraph) -> Self {
        Self { graph }
    }

    pub fn class(&mut self, name: &str, module: &str) -> TypeBuilder<'_> {
        self.start(name, module, TypeVariant::Class)
    }

    pub fn structure(&mut self, name: &str, module: &str) -> TypeBuilder<'_> {
        self.start(name, module, TypeVariant::Struct)
    }

    pub fn enumeration(&mut self, name: &str, module: &str) -> TypeBuilder<'_> {
        self.start(name, module, TypeVariant::Enum)
    }

    pub fn interface(&mut self, name: &str, module: &str) -> TypeBuilder<'_> {
        self.start(name, module, TypeVariant::Interface)
    }

    /// Reopen a declared node, e.g. to add a field referencing itself.
    pub fn edit(&mut self, id: TypeId) -> TypeBuilder<'_> {
        TypeBuilder {
            graph: &mut self.graph,
            id,
        }
    }

    pub fn find(&self, name: &str) -> Option<TypeId> {
        self.graph.find(name)
    }

    pub fn build(self) -> TypeGraph {
        self.graph
    }

    fn start(&mut self, name: &str, module: &str, variant: TypeVariant) -> TypeBuilder<'_> {
        let id = self.graph.declare(name, module, variant);
        TypeBuilder {
            graph: &mut self.graph,
            id,
        }
    }
}

/// Fills in one declared node.
pub struct TypeBuilder<'a> {
    graph: &'a mut TypeGraph,
    id: TypeId,
}

impl TypeBuilder<'_> {
    pub fn super_type(self, super_type: TypeId) -> Self {
        self.graph.get_mut(self.id).super_type = Some(super_type);
        self
    }

    pub fn implements(self, interface: TypeId) -> Self {
        self.graph.get_mut(self.id).interfaces.push(interface);
        self
    }

    pub fn property(self, property: PropertyDescriptor) -> Self {
        self.graph.get_mut(self.id).properties.push(property);
        self
    }

    pub fn function(self, function: FunctionDescriptor) -> Self {
        self.graph.get_mut(self.id).functions.push(function);
        self
    }

    pub fn entry(self, name: &str) -> Self {
        self.graph.get_mut(self.id).entries.push(EnumEntry::new(name));
        self
    }

    pub fn hidden_entry(self, name: &str) -> Self {
        let mut entry = EnumEntry::new(name);
        entry.hidden = true;
        self.graph.get_mut(self.id).entries.push(entry);
        self
    }

    pub fn underlying(self, numeric: NumericKind) -> Self {
        self.graph.get_mut(self.id).underlying = Some(numeric);
        self
    }

    pub fn flags(self, update: impl FnOnce(&mut TypeFlags)) -> Self {
        update(&mut self.graph.get_mut(self.id).flags);
        self
    }

    pub fn blueprintable(self) -> Self {
        self.flags(|f| f.blueprintable = true)
    }

    pub fn blueprint_type(self) -> Self {
        self.flags(|f| f.blueprint_type = true)
    }

    pub fn function_library(self) -> Self {
        self.flags(|f| f.function_library = true)
    }

    pub fn finish(self) -> TypeId {
        self.id
    }
}
