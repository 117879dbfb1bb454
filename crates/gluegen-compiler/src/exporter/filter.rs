//! Type-level export decisions and member collection.
//!
//! Member gates tally every capability rejection into `UnhandledStats`.

use gluegen_core::{FunctionDescriptor, PropertyDescriptor, TypeDescriptor, TypeGraph, TypeId};

use super::Generator;
use crate::persist::Persistence;
use crate::session::UnhandledStats;
use crate::translate::{Role, Translator};

/// Members of one type that passed both gates.
pub(super) struct Members<'g> {
    pub properties: Vec<&'g PropertyDescriptor>,
    /// With their index in the owner's function list.
    pub functions: Vec<(usize, &'g FunctionDescriptor)>,
    /// Own events first, then inherited interface events.
    pub overridable: Vec<&'g FunctionDescriptor>,
}

impl<P: Persistence> Generator<P> {
    /// Not excluded, and derivable or a subsystem.
    pub(super) fn should_export_class(&self, graph: &TypeGraph, id: TypeId) -> bool {
        let ty = &graph[id];
        if self.policy.rejects_type(&ty.name) {
            return false;
        }
        let flags = &ty.flags;
        let creatable = !flags.deprecated && !flags.newer_version_exists && !flags.generated_by_blueprint;
        let eligible =
            flags.blueprintable || self.policy.include.has_type(&ty.name) || flags.function_library;
        flags.subsystem || (creatable && eligible)
    }

    pub(super) fn should_export_struct(&self, ty: &TypeDescriptor) -> bool {
        !self.policy.rejects_type(&ty.name)
            && (ty.flags.blueprint_type || self.policy.include.has_type(&ty.name))
    }

    pub(super) fn should_export_enum(&self, ty: &TypeDescriptor) -> bool {
        self.policy.include.has_type(&ty.name) || !self.policy.exclude.has_type(&ty.name)
    }
}

pub(super) fn collect_members<'g>(
    tr: &Translator<'g>,
    stats: &mut UnhandledStats,
    owner: TypeId,
) -> Members<'g> {
    let (functions, overridable) = exported_functions(tr, stats, owner);
    Members {
        properties: exported_properties(tr, stats, owner),
        functions,
        overridable,
    }
}

pub(super) fn exported_properties<'g>(
    tr: &Translator<'g>,
    stats: &mut UnhandledStats,
    owner: TypeId,
) -> Vec<&'g PropertyDescriptor> {
    let graph: &'g TypeGraph = tr.graph;
    let ty = &graph[owner];
    let role = if ty.is_struct() {
        Role::StructField
    } else {
        Role::ClassProperty
    };

    ty.properties
        .iter()
        .filter(|p| tr.property_policy(owner, p))
        .filter(|p| {
            let accepted = tr.accepts(p, role);
            if !accepted {
                stats.record(role, p.kind.kind_name());
            }
            accepted
        })
        .collect()
}

#[allow(clippy::type_complexity)]
pub(super) fn exported_functions<'g>(
    tr: &Translator<'g>,
    stats: &mut UnhandledStats,
    owner: TypeId,
) -> (Vec<(usize, &'g FunctionDescriptor)>, Vec<&'g FunctionDescriptor>) {
    let graph: &'g TypeGraph = tr.graph;
    let ty = &graph[owner];
    let mut functions = Vec::new();
    let mut overridable: Vec<&'g FunctionDescriptor> = Vec::new();

    for (index, function) in ty.functions.iter().enumerate() {
        if !can_export_function(tr, stats, owner, function) {
            continue;
        }
        if function.flags.blueprint_event {
            overridable.push(function);
        } else {
            functions.push((index, function));
        }
    }

    for &interface in &ty.interfaces {
        for function in &graph[interface].functions {
            if !can_export_function(tr, stats, owner, function) || !function.flags.blueprint_event {
                continue;
            }
            if overridable.iter().any(|f| f.name == function.name) {
                continue;
            }
            overridable.push(function);
        }
    }

    (functions, overridable)
}

pub(super) fn can_export_function(
    tr: &Translator<'_>,
    stats: &mut UnhandledStats,
    owner: TypeId,
    function: &FunctionDescriptor,
) -> bool {
    let owner_name = &tr.graph[owner].name;
    let flags = &function.flags;

    if tr.policy.rejects_function(owner_name, function) {
        return false;
    }
    if !(flags.blueprint_callable || flags.blueprint_event) || flags.deprecated {
        return false;
    }
    if (flags.latent || flags.internal_only) && !tr.policy.internal.has_function(owner_name, function)
    {
        return false;
    }

    let (param_role, return_role) = if flags.blueprint_event {
        (Role::OverridableParameter, Role::OverridableReturnValue)
    } else {
        (Role::Parameter, Role::ReturnValue)
    };
    let mut gate = |param: &PropertyDescriptor, role: Role| {
        let accepted = param.array_dim == 1 && tr.accepts(param, role);
        if !accepted {
            stats.record(role, param.kind.kind_name());
        }
        accepted
    };

    if let Some(ret) = function.return_param()
        && !gate(ret, return_role)
    {
        return false;
    }
    function.parameters().all(|p| gate(p, param_role))
}
