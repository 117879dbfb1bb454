//! Property kinds of the native reflection model.
//!
//! The set is closed: every consumer matches on it exhaustively, so adding a
//! kind is a compile-time checked change across the generator.

use crate::TypeId;

/// Fixed-width numeric storage.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NumericKind {
    Int8,
    Int16,
    Int32,
    Int64,
    UInt8,
    UInt16,
    UInt32,
    UInt64,
    Float,
    Double,
}

impl NumericKind {
    /// C# keyword for this numeric type.
    pub fn managed_name(self) -> &'static str {
        match self {
            Self::Int8 => "sbyte",
            Self::Int16 => "short",
            Self::Int32 => "int",
            Self::Int64 => "long",
            Self::UInt8 => "byte",
            Self::UInt16 => "ushort",
            Self::UInt32 => "uint",
            Self::UInt64 => "ulong",
            Self::Float => "float",
            Self::Double => "double",
        }
    }

    pub fn is_integer(self) -> bool {
        !matches!(self, Self::Float | Self::Double)
    }
}

/// Declared kind of a property, parameter or return value.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum PropertyKind {
    Bool,
    Numeric(NumericKind),
    /// Enum-typed value; the id points at an `Enum` type.
    Enum(TypeId),
    String,
    Name,
    Text,
    /// Strong object reference to an instance of the given class.
    Object(TypeId),
    WeakObject(TypeId),
    SoftObject(TypeId),
    /// Class reference constrained to subclasses of the given class.
    Class(TypeId),
    /// Struct stored by value.
    Struct(TypeId),
    Array(Box<PropertyKind>),
    Set(Box<PropertyKind>),
    Map(Box<PropertyKind>, Box<PropertyKind>),
    Interface(TypeId),
    Delegate { multicast: bool },
}

impl PropertyKind {
    /// Stable diagnostic name, used to tally unsupported kinds.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Bool => "BoolProperty",
            Self::Numeric(n) => match n {
                NumericKind::Int8 => "Int8Property",
                NumericKind::Int16 => "Int16Property",
                NumericKind::Int32 => "IntProperty",
                NumericKind::Int64 => "Int64Property",
                NumericKind::UInt8 => "ByteProperty",
                NumericKind::UInt16 => "UInt16Property",
                NumericKind::UInt32 => "UInt32Property",
                NumericKind::UInt64 => "UInt64Property",
                NumericKind::Float => "FloatProperty",
                NumericKind::Double => "DoubleProperty",
            },
            Self::Enum(_) => "EnumProperty",
            Self::String => "StrProperty",
            Self::Name => "NameProperty",
            Self::Text => "TextProperty",
            Self::Object(_) => "ObjectProperty",
            Self::WeakObject(_) => "WeakObjectProperty",
            Self::SoftObject(_) => "SoftObjectProperty",
            Self::Class(_) => "ClassProperty",
            Self::Struct(_) => "StructProperty",
            Self::Array(_) => "ArrayProperty",
            Self::Set(_) => "SetProperty",
            Self::Map(_, _) => "MapProperty",
            Self::Interface(_) => "InterfaceProperty",
            Self::Delegate { multicast: false } => "DelegateProperty",
            Self::Delegate { multicast: true } => "MulticastDelegateProperty",
        }
    }

    pub fn is_container(&self) -> bool {
        matches!(self, Self::Array(_) | Self::Set(_) | Self::Map(_, _))
    }
}
