//! Per-kind property translation.
//!
//! `PropertyKind` is a closed set; every query here matches on it
//! exhaustively. Capability answers come from `supports`, kind-specific
//! constraints from `Translator::can_handle`. Code fragments are emitted by
//! the `Translator` methods in `marshal` (properties) and `function`.

mod function;
mod marshal;


use gluegen_core::{PropertyDescriptor, PropertyKind, TypeGraph, TypeId};

use crate::{FilterPolicy, NameMapper};

/// Position a property occupies in the emitted code.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Role {
    ClassProperty,
    StructField,
    Parameter,
    ReturnValue,
    OverridableParameter,
    OverridableReturnValue,
    /// Fixed-size native array (`array_dim > 1`).
    StaticArray,
}

/// Capability matrix of the translator set.
pub fn supports(kind: &PropertyKind, role: Role) -> bool {
    use PropertyKind as K;
    use Role as R;

    match kind {
        K::Bool
        | K::Numeric(_)
        | K::Enum(_)
        | K::Name
        | K::Object(_)
        | K::Struct(_) => true,
        K::String | K::Class(_) | K::Array(_) => role != R::StaticArray,
        K::Text => matches!(role, R::ClassProperty | R::StructField),
        K::WeakObject(_) | K::SoftObject(_) => matches!(
            role,
            R::ClassProperty | R::StructField | R::Parameter | R::ReturnValue
        ),
        K::Interface(_) => matches!(role, R::ClassProperty | R::Parameter | R::ReturnValue),
        K::Delegate { .. } => matches!(role, R::ClassProperty | R::Parameter),
        K::Set(_) | K::Map(_, _) => false,
    }
}

/// Kinds whose emitted code needs the native property handle.
pub fn needs_native_property(kind: &PropertyKind) -> bool {
    matches!(
        kind,
        PropertyKind::Array(_)
            | PropertyKind::Set(_)
            | PropertyKind::Map(_, _)
            | PropertyKind::Delegate { .. }
    )
}

/// Read-only view over everything the translators consult.
#[derive(Clone, Copy)]
pub struct Translator<'a> {
    pub(crate) graph: &'a TypeGraph,
    pub(crate) names: &'a NameMapper,
    pub(crate) policy: &'a FilterPolicy,
}

impl<'a> Translator<'a> {
    pub fn new(graph: &'a TypeGraph, names: &'a NameMapper, policy: &'a FilterPolicy) -> Self {
        Self {
            graph,
            names,
            policy,
        }
    }

    /// Kind-specific constraints beyond the capability matrix.
    pub fn can_handle(&self, kind: &PropertyKind) -> bool {
        use PropertyKind as K;

        match kind {
            K::Bool | K::Numeric(_) | K::String | K::Name | K::Text | K::Delegate { .. } => true,
            K::Enum(id)
            | K::Object(id)
            | K::WeakObject(id)
            | K::SoftObject(id)
            | K::Class(id)
            | K::Struct(id)
            | K::Interface(id) => !self.policy.rejects_type(&self.graph[*id].name),
            K::Array(inner) => {
                !inner.is_container()
                    && supports(inner, Role::StructField)
                    && self.can_handle(inner)
            }
            K::Set(inner) => !inner.is_container() && self.can_handle(inner),
            K::Map(key, value) => {
                !key.is_container()
                    && !value.is_container()
                    && self.can_handle(key)
                    && self.can_handle(value)
            }
        }
    }

    /// Capability gate for one property in one role.
    ///
    /// Fixed-size arrays are only accepted as class properties.
    pub fn accepts(&self, property: &PropertyDescriptor, role: Role) -> bool {
        let static_array_ok = !property.is_static_array()
            || (role == Role::ClassProperty && supports(&property.kind, Role::StaticArray));
        static_array_ok && supports(&property.kind, role) && self.can_handle(&property.kind)
    }

    pub fn is_blittable(&self, kind: &PropertyKind) -> bool {
        self.is_blittable_guarded(kind, &mut Vec::new())
    }

    /// A struct is blittable iff every exported property is blittable.
    pub fn is_struct_blittable(&self, id: TypeId) -> bool {
        self.is_struct_blittable_guarded(id, &mut Vec::new())
    }

    fn is_blittable_guarded(&self, kind: &PropertyKind, visiting: &mut Vec<TypeId>) -> bool {
        use PropertyKind as K;

        match kind {
            K::Numeric(_) | K::Enum(_) | K::Name => true,
            K::Struct(id) => self.is_struct_blittable_guarded(*id, visiting),
            K::Bool
            | K::String
            | K::Text
            | K::Object(_)
            | K::WeakObject(_)
            | K::SoftObject(_)
            | K::Class(_)
            | K::Array(_)
            | K::Set(_)
            | K::Map(_, _)
            | K::Interface(_)
            | K::Delegate { .. } => false,
        }
    }

    fn is_struct_blittable_guarded(&self, id: TypeId, visiting: &mut Vec<TypeId>) -> bool {
        if visiting.contains(&id) {
            return false;
        }
        visiting.push(id);
        let blittable = self
            .struct_fields(id)
            .all(|p| self.is_blittable_guarded(&p.kind, visiting));
        visiting.pop();
        blittable
    }

    /// Properties of a struct that pass both gates, in declaration order.
    pub fn struct_fields(&self, id: TypeId) -> impl Iterator<Item = &'a PropertyDescriptor> + 'a {
        let this = *self;
        let graph: &'a TypeGraph = self.graph;
        graph[id]
            .properties
            .iter()
            .filter(move |p| this.property_policy(id, p) && this.accepts(p, Role::StructField))
    }

    /// Policy gate for a property; the capability gate is separate.
    pub fn property_policy(&self, owner: TypeId, property: &PropertyDescriptor) -> bool {
        let ty = &self.graph[owner];
        if self.policy.rejects_member(&ty.name, &property.name) {
            return false;
        }
        let visible = property.flags.blueprint_visible && !property.flags.deprecated;
        let forced = self.policy.include.has_member(&ty.name, &property.name)
            || (ty.is_struct() && self.policy.include.has_type(&ty.name));
        visible || forced
    }

    /// Managed type used for a value of `kind`.
    pub fn managed_type(&self, kind: &PropertyKind) -> String {
        use PropertyKind as K;

        match kind {
            K::Bool => "bool".to_string(),
            K::Numeric(n) => n.managed_name().to_string(),
            K::String => "string".to_string(),
            K::Name => "Name".to_string(),
            K::Text => "Text".to_string(),
            K::Enum(id) | K::Object(id) | K::Struct(id) | K::Interface(id) => self.qualified(*id),
            K::WeakObject(id) => format!("WeakObject<{}>", self.qualified(*id)),
            K::SoftObject(id) => format!("SoftObject<{}>", self.qualified(*id)),
            K::Class(id) => format!("SubclassOf<{}>", self.qualified(*id)),
            K::Array(inner) => format!("IList<{}>", self.managed_type(inner)),
            K::Set(inner) => format!("ISet<{}>", self.managed_type(inner)),
            K::Map(key, value) => format!(
                "IDictionary<{}, {}>",
                self.managed_type(key),
                self.managed_type(value)
            ),
            K::Delegate { multicast: false } => "DelegateHandle".to_string(),
            K::Delegate { multicast: true } => "MulticastDelegateHandle".to_string(),
        }
    }

    pub(crate) fn qualified(&self, id: TypeId) -> String {
        self.names.qualified_name(self.graph, id)
    }
}
