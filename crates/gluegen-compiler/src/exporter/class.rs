use indexmap::IndexSet;

use gluegen_core::{TypeGraph, TypeId};

use super::Generator;
use super::filter::collect_members;
use super::static_ctor::emit_static_constructor;
use crate::extension::resolve_extension_method;
use crate::persist::Persistence;
use crate::script::TypeDecl;
use crate::translate::Translator;
use crate::ScriptBuilder;

/// Managed base of the root object.
pub(crate) const RUNTIME_OBJECT: &str = "UnrealSharpObject";

impl<P: Persistence> Generator<P> {
    pub(super) fn export_class(&mut self, graph: &TypeGraph, id: TypeId, b: &mut ScriptBuilder) {
        if !self.session.exported.insert(id) {
            tracing::error!(ty = %graph[id].name, "class exported twice");
            return;
        }
        let ty = &graph[id];

        b.append_line("// This file is automatically generated");

        if let Some(super_type) = ty.super_type {
            self.export_type(graph, super_type, true);
        }

        let namespace = self.register_module(&ty.module).namespace.clone();

        let mut interfaces = Vec::new();
        let mut directives = IndexSet::new();
        for &interface in &ty.interfaces {
            if graph[interface].flags.not_blueprint_implementable {
                continue;
            }
            interfaces.push(self.names.type_name(graph, interface));
            let interface_namespace = self.register_module(&graph[interface].module).namespace.clone();
            if directives.insert(interface_namespace.clone()) {
                b.declare_directive(&interface_namespace);
            }
        }

        let tr = Translator::new(graph, &self.names, &self.policy);
        let members = collect_members(&tr, &mut self.session.stats, id);

        let name = self.names.type_name(graph, id);
        let base = match ty.super_type {
            Some(super_type) if ty.name != self.config.root_object => tr.qualified(super_type),
            _ => RUNTIME_OBJECT.to_string(),
        };

        b.generate_script_skeleton(&namespace);
        b.append_line("[UClass]");
        b.declare_type(
            TypeDecl::new("class", &name)
                .base(&base)
                .is_abstract(ty.flags.is_abstract)
                .partial()
                .interfaces(&interfaces),
        );

        if emit_static_constructor(
            &tr,
            b,
            id,
            &members.properties,
            &members.functions,
            &members.overridable,
        ) {
            b.blank_line();
        }

        b.append_line(format!("protected {name}(IntPtr nativeObject) : base(nativeObject)"));
        b.open_brace();
        b.close_brace();

        for property in &members.properties {
            b.blank_line();
            tr.emit_wrapper_property(
                b,
                id,
                property,
                self.policy.relax.has_member(&ty.name, &property.name),
                self.policy.include.has_member(&ty.name, &property.name),
            );
        }

        for &(index, function) in &members.functions {
            if function.flags.is_static && ty.flags.function_library {
                let extension =
                    resolve_extension_method(id, index, function, &self.config.world_type);
                if let Some(extension) = extension {
                    tracing::debug!(function = %function.name, "extension method");
                    self.session
                        .extensions
                        .entry(ty.module.clone())
                        .or_default()
                        .push(extension);
                    self.session.dirty_modules.insert(ty.module.clone());
                }
            }
            b.blank_line();
            tr.emit_function(b, id, function);
        }

        for function in &members.overridable {
            b.blank_line();
            tr.emit_overridable_function(b, id, function);
        }

        b.close_brace();
    }
}
