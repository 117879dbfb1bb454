//! Analysis layer: the type graph and its descriptors.
//!
//! Nodes are addressed by `TypeId`, a stable index that survives graph
//! revisions. A node is never removed; a reloaded type is appended as a new
//! node and the old one is tombstoned with `newer_version_exists`.

use std::ops::Index;

use indexmap::IndexMap;

use crate::NumericKind;
use crate::PropertyKind;

/// Stable identity of a type node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TypeId(pub u32);

impl TypeId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Type variant of a node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeVariant {
    Class,
    Struct,
    Enum,
    Interface,
}

/// Type-level flags reported by the host.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Deserialize)]
#[serde(default)]
pub struct TypeFlags {
    #[serde(rename = "abstract")]
    pub is_abstract: bool,
    pub deprecated: bool,
    pub transient: bool,
    /// Lives in the scratch package of the host.
    pub transient_package: bool,
    pub compiled_from_blueprint: bool,
    pub generated_by_blueprint: bool,
    pub default_object: bool,
    /// Tombstone: a reloaded revision of this type exists.
    pub newer_version_exists: bool,
    pub blueprintable: bool,
    pub blueprint_type: bool,
    pub function_library: bool,
    pub subsystem: bool,
    pub not_blueprint_implementable: bool,
}

impl TypeFlags {
    /// Skeleton classes hold a blueprint definition before it is compiled.
    pub fn is_skeleton(&self) -> bool {
        self.transient && self.compiled_from_blueprint
    }
}

/// Property-level flags.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Deserialize)]
#[serde(default)]
pub struct PropertyFlags {
    pub deprecated: bool,
    pub blueprint_visible: bool,
    pub read_only: bool,
    pub protected: bool,
    pub private_access: bool,
    pub return_value: bool,
    pub out_param: bool,
    pub const_param: bool,
}

/// A data member of a class or struct, or a function parameter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PropertyDescriptor {
    pub name: String,
    pub kind: PropertyKind,
    /// 1 for scalars, >1 for fixed-size native arrays.
    pub array_dim: u32,
    pub flags: PropertyFlags,
}

impl PropertyDescriptor {
    pub fn new(name: impl Into<String>, kind: PropertyKind) -> Self {
        Self {
            name: name.into(),
            kind,
            array_dim: 1,
            flags: PropertyFlags::default(),
        }
    }

    pub fn visible(mut self) -> Self {
        self.flags.blueprint_visible = true;
        self
    }

    pub fn read_only(mut self) -> Self {
        self.flags.read_only = true;
        self
    }

    pub fn protected(mut self) -> Self {
        self.flags.protected = true;
        self
    }

    pub fn deprecated(mut self) -> Self {
        self.flags.deprecated = true;
        self
    }

    pub fn out(mut self) -> Self {
        self.flags.out_param = true;
        self
    }

    pub fn with_array_dim(mut self, dim: u32) -> Self {
        self.array_dim = dim;
        self
    }

    pub fn is_return(&self) -> bool {
        self.flags.return_value
    }

    /// Written by the callee and read back by the caller.
    pub fn is_out(&self) -> bool {
        self.flags.out_param && !self.flags.const_param && !self.flags.return_value
    }

    pub fn is_static_array(&self) -> bool {
        self.array_dim > 1
    }
}

/// Function-level flags.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Deserialize)]
#[serde(default)]
pub struct FunctionFlags {
    #[serde(rename = "static")]
    pub is_static: bool,
    pub blueprint_callable: bool,
    /// Overridable from managed code.
    pub blueprint_event: bool,
    pub latent: bool,
    pub internal_only: bool,
    pub deprecated: bool,
}

/// A callable member of a class or interface.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FunctionDescriptor {
    pub name: String,
    /// Declaration order; at most one entry is flagged as the return value.
    pub params: Vec<PropertyDescriptor>,
    pub flags: FunctionFlags,
    pub category: Option<String>,
    pub metadata: IndexMap<String, String>,
}

impl FunctionDescriptor {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            params: Vec::new(),
            flags: FunctionFlags::default(),
            category: None,
            metadata: IndexMap::new(),
        }
    }

    pub fn callable(mut self) -> Self {
        self.flags.blueprint_callable = true;
        self
    }

    pub fn event(mut self) -> Self {
        self.flags.blueprint_event = true;
        self
    }

    pub fn static_fn(mut self) -> Self {
        self.flags.is_static = true;
        self
    }

    pub fn latent(mut self) -> Self {
        self.flags.latent = true;
        self
    }

    pub fn internal_only(mut self) -> Self {
        self.flags.internal_only = true;
        self
    }

    pub fn param(mut self, param: PropertyDescriptor) -> Self {
        self.params.push(param);
        self
    }

    pub fn returns(mut self, kind: PropertyKind) -> Self {
        let mut ret = PropertyDescriptor::new("ReturnValue", kind);
        ret.flags.return_value = true;
        self.params.push(ret);
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn meta(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    pub fn return_param(&self) -> Option<&PropertyDescriptor> {
        self.params.iter().find(|p| p.is_return())
    }

    /// Parameters excluding the return value, in declaration order.
    pub fn parameters(&self) -> impl Iterator<Item = &PropertyDescriptor> {
        self.params.iter().filter(|p| !p.is_return())
    }

    /// Number of declared parameters, return value included.
    pub fn num_params(&self) -> usize {
        self.params.len()
    }

    pub fn find_param(&self, name: &str) -> Option<usize> {
        self.params.iter().position(|p| p.name == name)
    }

    pub fn has_metadata(&self, key: &str) -> bool {
        self.metadata.contains_key(key)
    }

    pub fn metadata(&self, key: &str) -> Option<&str> {
        self.metadata.get(key).map(String::as_str)
    }
}

/// One entry of a native enum.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EnumEntry {
    /// Possibly scope-qualified (`EColor::Red`).
    pub name: String,
    pub hidden: bool,
}

impl EnumEntry {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            hidden: false,
        }
    }

    /// Entry name without its `Scope::` qualifier.
    pub fn short_name(&self) -> &str {
        match self.name.find("::") {
            Some(pos) => &self.name[pos + 2..],
            None => &self.name,
        }
    }
}

/// A native type node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypeDescriptor {
    pub id: TypeId,
    pub name: String,
    pub module: String,
    pub variant: TypeVariant,
    pub super_type: Option<TypeId>,
    pub interfaces: Vec<TypeId>,
    pub properties: Vec<PropertyDescriptor>,
    pub functions: Vec<FunctionDescriptor>,
    pub entries: Vec<EnumEntry>,
    pub underlying: Option<NumericKind>,
    pub flags: TypeFlags,
}

impl TypeDescriptor {
    pub(crate) fn declared(id: TypeId, name: &str, module: &str, variant: TypeVariant) -> Self {
        Self {
            id,
            name: name.to_string(),
            module: module.to_string(),
            variant,
            super_type: None,
            interfaces: Vec::new(),
            properties: Vec::new(),
            functions: Vec::new(),
            entries: Vec::new(),
            underlying: None,
            flags: TypeFlags::default(),
        }
    }

    pub fn is_class(&self) -> bool {
        self.variant == TypeVariant::Class
    }

    pub fn is_struct(&self) -> bool {
        self.variant == TypeVariant::Struct
    }

    pub fn find_function(&self, name: &str) -> Option<&FunctionDescriptor> {
        self.functions.iter().find(|f| f.name == name)
    }
}

/// The native type graph: one immutable-per-revision snapshot.
#[derive(Clone, Debug, Default)]
pub struct TypeGraph {
    pub(crate) types: Vec<TypeDescriptor>,
    /// Name -> most recent revision.
    pub(crate) by_name: IndexMap<String, TypeId>,
}

impl TypeGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    pub fn get(&self, id: TypeId) -> Option<&TypeDescriptor> {
        self.types.get(id.index())
    }

    /// Most recent revision of the type with this name.
    pub fn find(&self, name: &str) -> Option<TypeId> {
        self.by_name.get(name).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &TypeDescriptor> {
        self.types.iter()
    }

    pub fn ids(&self) -> impl Iterator<Item = TypeId> + '_ {
        self.types.iter().map(|t| t.id)
    }

    /// All nodes owned by `module`, in graph order.
    pub fn types_in_module(&self, module: &str) -> Vec<TypeId> {
        self.types
            .iter()
            .filter(|t| t.module == module)
            .map(|t| t.id)
            .collect()
    }

    /// Ancestors of `id`, nearest first. Stops on a cycle.
    pub fn super_chain(&self, id: TypeId) -> Vec<TypeId> {
        let mut chain = Vec::new();
        let mut current = self.get(id).and_then(|t| t.super_type);
        while let Some(sup) = current {
            if sup == id || chain.contains(&sup) {
                break;
            }
            chain.push(sup);
            current = self.get(sup).and_then(|t| t.super_type);
        }
        chain
    }

    /// True when `id` is named `ancestor` or derives from a type named `ancestor`.
    pub fn is_child_of(&self, id: TypeId, ancestor: &str) -> bool {
        if self.get(id).is_some_and(|t| t.name == ancestor) {
            return true;
        }
        self.super_chain(id)
            .into_iter()
            .any(|sup| self[sup].name == ancestor)
    }

    /// Append a node, tombstoning any previous revision with the same name.
    pub(crate) fn declare(&mut self, name: &str, module: &str, variant: TypeVariant) -> TypeId {
        let id = TypeId(self.types.len() as u32);
        if let Some(previous) = self.by_name.insert(name.to_string(), id) {
            self.types[previous.index()].flags.newer_version_exists = true;
        }
        self.types
            .push(TypeDescriptor::declared(id, name, module, variant));
        id
    }

    pub(crate) fn get_mut(&mut self, id: TypeId) -> &mut TypeDescriptor {
        &mut self.types[id.index()]
    }
}

impl Index<TypeId> for TypeGraph {
    type Output = TypeDescriptor;

    fn index(&self, id: TypeId) -> &TypeDescriptor {
        self.get(id)
            .unwrap_or_else(|| panic!("TypeGraph: {id:?} does not belong to this graph"))
    }
}
