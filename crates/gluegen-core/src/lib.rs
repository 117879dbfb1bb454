#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core data structures for native reflection metadata.
//!
//! Two layers:
//! - **Deserialization layer** (`raw`): 1:1 mapping of a JSON reflection dump
//! - **Analysis layer** (`graph`): `TypeId`-indexed nodes for lookups
//!
//! `TypeGraphBuilder` constructs the analysis layer directly, for hosts that
//! already hold reflection data in memory.

mod builder;
mod error;
mod graph;
mod kind;
mod raw;
pub mod utils;

#[cfg(test)]
mod raw_tests;
#[cfg(test)]
mod utils_tests;

pub use builder::{TypeBuilder, TypeGraphBuilder};
pub use error::GraphError;
pub use graph::{
    EnumEntry, FunctionDescriptor, FunctionFlags, PropertyDescriptor, PropertyFlags,
    TypeDescriptor, TypeFlags, TypeGraph, TypeId, TypeVariant,
};
pub use kind::{NumericKind, PropertyKind};
pub use raw::{
    RawEnumEntry, RawFunction, RawProperty, RawPropertyType, RawType, parse_type_dump,
};
