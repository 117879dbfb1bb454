//! Deserialization layer: 1:1 mapping of the JSON reflection dump.
//!
//! Types reference each other by name here. `TypeGraph::from_raw` and
//! `TypeGraph::merge` resolve names into `TypeId`s.

use std::collections::{HashMap, HashSet};

use indexmap::IndexMap;

use crate::graph::{
    EnumEntry, FunctionDescriptor, FunctionFlags, PropertyDescriptor, PropertyFlags,
    TypeDescriptor, TypeFlags,
};
use crate::{GraphError, NumericKind, PropertyKind, TypeGraph, TypeId, TypeVariant};

/// Raw type definition from a reflection dump.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct RawType {
    pub name: String,
    pub module: String,
    pub kind: TypeVariant,
    #[serde(default, rename = "super")]
    pub super_type: Option<String>,
    #[serde(default)]
    pub interfaces: Vec<String>,
    #[serde(default)]
    pub flags: TypeFlags,
    #[serde(default)]
    pub properties: Vec<RawProperty>,
    #[serde(default)]
    pub functions: Vec<RawFunction>,
    #[serde(default)]
    pub entries: Vec<RawEnumEntry>,
    #[serde(default)]
    pub underlying: Option<NumericKind>,
}

/// Raw property, parameter or return value.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct RawProperty {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: RawPropertyType,
    #[serde(default = "scalar_dim")]
    pub array_dim: u32,
    #[serde(default)]
    pub flags: PropertyFlags,
}

fn scalar_dim() -> u32 {
    1
}

/// Raw property type, tagged by `kind`.
#[derive(Debug, Clone, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RawPropertyType {
    Bool,
    Int8,
    Int16,
    Int32,
    Int64,
    Uint8,
    Uint16,
    Uint32,
    Uint64,
    Float,
    Double,
    Enum {
        #[serde(rename = "enum")]
        enum_type: String,
    },
    String,
    Name,
    Text,
    Object {
        class: String,
    },
    WeakObject {
        class: String,
    },
    SoftObject {
        class: String,
    },
    Class {
        class: String,
    },
    Struct {
        #[serde(rename = "struct")]
        struct_type: String,
    },
    Array {
        inner: Box<RawPropertyType>,
    },
    Set {
        inner: Box<RawPropertyType>,
    },
    Map {
        key: Box<RawPropertyType>,
        value: Box<RawPropertyType>,
    },
    Interface {
        interface: String,
    },
    Delegate {
        #[serde(default)]
        multicast: bool,
    },
}

/// Raw function definition.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct RawFunction {
    pub name: String,
    #[serde(default)]
    pub params: Vec<RawProperty>,
    #[serde(default)]
    pub flags: FunctionFlags,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub metadata: IndexMap<String, String>,
}

/// Enum entry: either a bare name or `{ "name": ..., "hidden": true }`.
#[derive(Debug, Clone, serde::Deserialize)]
#[serde(untagged)]
pub enum RawEnumEntry {
    Name(String),
    Detailed {
        name: String,
        #[serde(default)]
        hidden: bool,
    },
}

/// Parse a reflection dump into raw types.
pub fn parse_type_dump(json: &str) -> Result<Vec<RawType>, serde_json::Error> {
    serde_json::from_str(json)
}

impl TypeGraph {
    /// Build a graph from a full dump.
    pub fn from_raw(raw: Vec<RawType>) -> Result<Self, GraphError> {
        let mut graph = Self::new();
        graph.merge(raw)?;
        Ok(graph)
    }

    /// Append a batch of types as a new revision.
    ///
    /// Names inside the batch shadow existing names; the shadowed nodes are
    /// tombstoned. The graph is left untouched when the batch fails to resolve.
    pub fn merge(&mut self, raw: Vec<RawType>) -> Result<Vec<TypeId>, GraphError> {
        let base = self.types.len() as u32;

        let mut scope: HashMap<&str, (TypeId, TypeVariant)> = self
            .by_name
            .iter()
            .map(|(name, id)| (name.as_str(), (*id, self.types[id.index()].variant)))
            .collect();
        let mut seen = HashSet::new();
        for (i, ty) in raw.iter().enumerate() {
            if !seen.insert(ty.name.as_str()) {
                return Err(GraphError::DuplicateType(ty.name.clone()));
            }
            scope.insert(ty.name.as_str(), (TypeId(base + i as u32), ty.kind));
        }

        let resolver = Resolver { scope: &scope };
        let resolved = raw
            .iter()
            .enumerate()
            .map(|(i, ty)| resolver.resolve_type(TypeId(base + i as u32), ty))
            .collect::<Result<Vec<_>, _>>()?;

        let mut ids = Vec::with_capacity(resolved.len());
        for desc in resolved {
            let id = self.declare(&desc.name, &desc.module, desc.variant);
            *self.get_mut(id) = desc;
            ids.push(id);
        }
        Ok(ids)
    }
}

struct Resolver<'a> {
    scope: &'a HashMap<&'a str, (TypeId, TypeVariant)>,
}

const CLASS_LIKE: &[TypeVariant] = &[TypeVariant::Class, TypeVariant::Interface];

impl Resolver<'_> {
    fn resolve_type(&self, id: TypeId, raw: &RawType) -> Result<TypeDescriptor, GraphError> {
        let owner = raw.name.as_str();

        let super_type = raw
            .super_type
            .as_deref()
            .map(|name| self.lookup(name, owner, &[TypeVariant::Class], "a class"))
            .transpose()?;

        let interfaces = raw
            .interfaces
            .iter()
            .map(|name| self.lookup(name, owner, CLASS_LIKE, "an interface"))
            .collect::<Result<Vec<_>, _>>()?;

        let properties = raw
            .properties
            .iter()
            .map(|p| self.resolve_property(p, owner))
            .collect::<Result<Vec<_>, _>>()?;

        let functions = raw
            .functions
            .iter()
            .map(|f| -> Result<FunctionDescriptor, GraphError> {
                let referenced_by = format!("{owner}.{}", f.name);
                let params = f
                    .params
                    .iter()
                    .map(|p| self.resolve_property(p, &referenced_by))
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(FunctionDescriptor {
                    name: f.name.clone(),
                    params,
                    flags: f.flags.clone(),
                    category: f.category.clone(),
                    metadata: f.metadata.clone(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let entries = raw
            .entries
            .iter()
            .map(|e| match e {
                RawEnumEntry::Name(name) => EnumEntry::new(name.clone()),
                RawEnumEntry::Detailed { name, hidden } => EnumEntry {
                    name: name.clone(),
                    hidden: *hidden,
                },
            })
            .collect();

        Ok(TypeDescriptor {
            id,
            name: raw.name.clone(),
            module: raw.module.clone(),
            variant: raw.kind,
            super_type,
            interfaces,
            properties,
            functions,
            entries,
            underlying: raw.underlying,
            flags: raw.flags.clone(),
        })
    }

    fn resolve_property(
        &self,
        raw: &RawProperty,
        owner: &str,
    ) -> Result<PropertyDescriptor, GraphError> {
        let referenced_by = format!("{owner}.{}", raw.name);
        Ok(PropertyDescriptor {
            name: raw.name.clone(),
            kind: self.resolve_kind(&raw.ty, &referenced_by)?,
            array_dim: raw.array_dim,
            flags: raw.flags.clone(),
        })
    }

    fn resolve_kind(&self, raw: &RawPropertyType, by: &str) -> Result<PropertyKind, GraphError> {
        use RawPropertyType as R;

        let kind = match raw {
            R::Bool => PropertyKind::Bool,
            R::Int8 => PropertyKind::Numeric(NumericKind::Int8),
            R::Int16 => PropertyKind::Numeric(NumericKind::Int16),
            R::Int32 => PropertyKind::Numeric(NumericKind::Int32),
            R::Int64 => PropertyKind::Numeric(NumericKind::Int64),
            R::Uint8 => PropertyKind::Numeric(NumericKind::UInt8),
            R::Uint16 => PropertyKind::Numeric(NumericKind::UInt16),
            R::Uint32 => PropertyKind::Numeric(NumericKind::UInt32),
            R::Uint64 => PropertyKind::Numeric(NumericKind::UInt64),
            R::Float => PropertyKind::Numeric(NumericKind::Float),
            R::Double => PropertyKind::Numeric(NumericKind::Double),
            R::Enum { enum_type } => {
                PropertyKind::Enum(self.lookup(enum_type, by, &[TypeVariant::Enum], "an enum")?)
            }
            R::String => PropertyKind::String,
            R::Name => PropertyKind::Name,
            R::Text => PropertyKind::Text,
            R::Object { class } => PropertyKind::Object(self.lookup(class, by, CLASS_LIKE, "a class")?),
            R::WeakObject { class } => {
                PropertyKind::WeakObject(self.lookup(class, by, CLASS_LIKE, "a class")?)
            }
            R::SoftObject { class } => {
                PropertyKind::SoftObject(self.lookup(class, by, CLASS_LIKE, "a class")?)
            }
            R::Class { class } => PropertyKind::Class(self.lookup(class, by, CLASS_LIKE, "a class")?),
            R::Struct { struct_type } => {
                PropertyKind::Struct(self.lookup(struct_type, by, &[TypeVariant::Struct], "a struct")?)
            }
            R::Array { inner } => PropertyKind::Array(Box::new(self.resolve_kind(inner, by)?)),
            R::Set { inner } => PropertyKind::Set(Box::new(self.resolve_kind(inner, by)?)),
            R::Map { key, value } => PropertyKind::Map(
                Box::new(self.resolve_kind(key, by)?),
                Box::new(self.resolve_kind(value, by)?),
            ),
            R::Interface { interface } => {
                PropertyKind::Interface(self.lookup(interface, by, CLASS_LIKE, "an interface")?)
            }
            R::Delegate { multicast } => PropertyKind::Delegate {
                multicast: *multicast,
            },
        };
        Ok(kind)
    }

    fn lookup(
        &self,
        name: &str,
        referenced_by: &str,
        allowed: &[TypeVariant],
        expected: &'static str,
    ) -> Result<TypeId, GraphError> {
        let Some(&(id, variant)) = self.scope.get(name) else {
            return Err(GraphError::UnknownType {
                name: name.to_string(),
                referenced_by: referenced_by.to_string(),
            });
        };
        if !allowed.contains(&variant) {
            return Err(GraphError::KindMismatch {
                name: name.to_string(),
                referenced_by: referenced_by.to_string(),
                expected,
            });
        }
        Ok(id)
    }
}
