//! Session state accumulated across generation triggers.

use std::fmt;

use indexmap::{IndexMap, IndexSet};

use gluegen_core::TypeId;

use crate::ModuleRegistry;
use crate::extension::ExtensionMethod;
use crate::translate::Role;

/// Every type whose export has begun.
#[derive(Debug, Default)]
pub struct ExportedTypeSet {
    types: IndexSet<TypeId>,
}

impl ExportedTypeSet {
    pub fn contains(&self, id: TypeId) -> bool {
        self.types.contains(&id)
    }

    /// Returns false if `id` was already present.
    pub(crate) fn insert(&mut self, id: TypeId) -> bool {
        self.types.insert(id)
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// In export order.
    pub fn iter(&self) -> impl Iterator<Item = TypeId> + '_ {
        self.types.iter().copied()
    }
}

/// Rejected members, tallied per property kind name.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UnhandledStats {
    pub properties: IndexMap<&'static str, usize>,
    pub parameters: IndexMap<&'static str, usize>,
    pub return_values: IndexMap<&'static str, usize>,
    pub overridable_parameters: IndexMap<&'static str, usize>,
    pub overridable_return_values: IndexMap<&'static str, usize>,
}

impl UnhandledStats {
    pub(crate) fn record(&mut self, role: Role, kind_name: &'static str) {
        let counter = match role {
            Role::ClassProperty | Role::StructField | Role::StaticArray => &mut self.properties,
            Role::Parameter => &mut self.parameters,
            Role::ReturnValue => &mut self.return_values,
            Role::OverridableParameter => &mut self.overridable_parameters,
            Role::OverridableReturnValue => &mut self.overridable_return_values,
        };
        *counter.entry(kind_name).or_default() += 1;
    }

    fn counters(&self) -> [(&'static str, &IndexMap<&'static str, usize>); 5] {
        [
            ("properties", &self.properties),
            ("parameters", &self.parameters),
            ("return values", &self.return_values),
            ("overridable parameters", &self.overridable_parameters),
            ("overridable return values", &self.overridable_return_values),
        ]
    }

    pub fn total(&self) -> usize {
        self.counters()
            .into_iter()
            .flat_map(|(_, counter)| counter.values())
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

impl fmt::Display for UnhandledStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (label, counter) in self.counters() {
            if counter.is_empty() {
                continue;
            }
            writeln!(f, "unhandled {label}:")?;
            for (kind, count) in counter {
                writeln!(f, "  {kind}: {count}")?;
            }
        }
        Ok(())
    }
}

/// State owned by a `Generator`. Never reset mid-session.
#[derive(Debug, Default)]
pub struct Session {
    pub(crate) exported: ExportedTypeSet,
    pub(crate) modules: ModuleRegistry,
    /// Module name -> extension methods, in discovery order.
    pub(crate) extensions: IndexMap<String, Vec<ExtensionMethod>>,
    /// Modules that gained extension methods during the current batch.
    pub(crate) dirty_modules: IndexSet<String>,
    pub(crate) stats: UnhandledStats,
    pub(crate) units_written: usize,
}
