//! Layered inclusion/exclusion lists.
//!
//! Four independent lists make up a `FilterPolicy`:
//! - `exclude` (blacklist): types and members that must not be exported
//! - `include` (whitelist): overrides `exclude` and the visibility rules
//! - `relax` (greylist): protected members emitted as public
//! - `internal`: latent or internal-only functions that may still be exported
//!
//! A policy is a plain value owned by the generator. It loads from JSON:
//!
//! ```json
//! {
//!   "exclude": {
//!     "types": ["AnimationBlueprintLibrary"],
//!     "categories": { "KismetMathLibrary": ["Math|Vector4"] }
//!   },
//!   "include": { "types": ["SpringArmComponent"] }
//! }
//! ```

use indexmap::{IndexMap, IndexSet};

use gluegen_core::FunctionDescriptor;

/// One list of the policy, keyed by type, member and category.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Deserialize)]
#[serde(default)]
pub struct FilterList {
    pub types: IndexSet<String>,
    /// Type name -> member names.
    pub members: IndexMap<String, IndexSet<String>>,
    /// Type name -> function category labels.
    pub categories: IndexMap<String, IndexSet<String>>,
}

impl FilterList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_type(&mut self, ty: impl Into<String>) -> &mut Self {
        self.types.insert(ty.into());
        self
    }

    pub fn add_member(&mut self, ty: impl Into<String>, member: impl Into<String>) -> &mut Self {
        self.members
            .entry(ty.into())
            .or_default()
            .insert(member.into());
        self
    }

    pub fn add_category(&mut self, ty: impl Into<String>, category: impl Into<String>) -> &mut Self {
        self.categories
            .entry(ty.into())
            .or_default()
            .insert(category.into());
        self
    }

    pub fn has_type(&self, ty: &str) -> bool {
        self.types.contains(ty)
    }

    pub fn has_member(&self, ty: &str, member: &str) -> bool {
        self.members.get(ty).is_some_and(|m| m.contains(member))
    }

    pub fn has_category(&self, ty: &str, category: &str) -> bool {
        self.categories.get(ty).is_some_and(|c| c.contains(category))
    }

    /// Listed by name, or through its category label.
    pub fn has_function(&self, ty: &str, function: &FunctionDescriptor) -> bool {
        self.has_member(ty, &function.name)
            || function
                .category
                .as_deref()
                .is_some_and(|category| self.has_category(ty, category))
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty() && self.members.is_empty() && self.categories.is_empty()
    }
}

/// The four lists consulted during traversal.
#[derive(Clone, Debug, PartialEq, Eq, serde::Deserialize)]
#[serde(default)]
pub struct FilterPolicy {
    pub exclude: FilterList,
    pub include: FilterList,
    pub relax: FilterList,
    pub internal: FilterList,
}

impl Default for FilterPolicy {
    fn default() -> Self {
        let mut internal = FilterList::new();
        internal.add_member("Actor", "UserConstructionScript");
        Self {
            exclude: FilterList::new(),
            include: FilterList::new(),
            relax: FilterList::new(),
            internal,
        }
    }
}

impl FilterPolicy {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a policy file. Lists that are absent keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Excluded and not force-included.
    pub fn rejects_type(&self, ty: &str) -> bool {
        self.exclude.has_type(ty) && !self.include.has_type(ty)
    }

    pub fn rejects_member(&self, ty: &str, member: &str) -> bool {
        self.exclude.has_member(ty, member) && !self.include.has_member(ty, member)
    }

    pub fn rejects_function(&self, ty: &str, function: &FunctionDescriptor) -> bool {
        self.exclude.has_function(ty, function) && !self.include.has_function(ty, function)
    }
}
