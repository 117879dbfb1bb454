//! Module-level extension surfaces: `{Module}Module.cs`.

use gluegen_core::TypeGraph;

use super::Generator;
use crate::extension::ExtensionMethod;
use crate::persist::Persistence;
use crate::translate::Translator;
use crate::ScriptBuilder;

impl<P: Persistence> Generator<P> {
    /// Rewrite the surface of every module that gained extension methods
    /// during this batch.
    pub(super) fn export_extension_surfaces(&mut self, graph: &TypeGraph) {
        let dirty: Vec<String> = self.session.dirty_modules.drain(..).collect();
        for module in dirty {
            let descriptor = self.register_module(&module);
            let namespace = descriptor.namespace.clone();
            let directory = descriptor.directory.clone();

            let tr = Translator::new(graph, &self.names, &self.policy);
            let methods = self.session.extensions.get(&module).map(Vec::as_slice).unwrap_or_default();

            let mut b = ScriptBuilder::new();
            b.append_line("// This file is automatically generated");
            b.generate_script_skeleton(&namespace);
            b.append_line(format!("public static class {module}Extensions"));
            b.open_brace();
            for (i, method) in methods.iter().enumerate() {
                if i > 0 {
                    b.blank_line();
                }
                emit_extension_method(&tr, &mut b, method);
            }
            b.close_brace();

            let file_name = self.config.module_file_name(&module);
            self.save_glue(&directory, &file_name, &b.finish());
        }
    }
}

/// Forwarding method with the receiver moved to a `this` parameter.
fn emit_extension_method(tr: &Translator<'_>, b: &mut ScriptBuilder, method: &ExtensionMethod) {
    let owner = &tr.graph[method.owner];
    let function = &owner.functions[method.function];
    let receiver = &function.params[method.self_param];

    let receiver_type = match &method.receiver_override {
        Some(native) => tr
            .graph
            .find(native)
            .map(|id| tr.qualified(id))
            .unwrap_or_else(|| native.clone()),
        None => tr.managed_type(&receiver.kind),
    };
    let receiver_name = tr.names.parameter_name(receiver);

    let mut params = vec![format!("this {receiver_type} {receiver_name}")];
    let mut args = Vec::new();
    for (index, param) in function.params.iter().enumerate() {
        if param.is_return() {
            continue;
        }
        let name = tr.names.parameter_name(param);
        if index != method.self_param {
            params.push(tr.parameter_decl(param));
        }
        args.push(if param.is_out() { format!("out {name}") } else { name });
    }

    let managed = tr.names.function_name(tr.graph, method.owner, &function.name);
    b.append_line(format!(
        "public static {} {managed}({})",
        tr.return_type(function),
        params.join(", ")
    ));
    b.open_brace();
    let call = format!("{}.{managed}({})", tr.qualified(method.owner), args.join(", "));
    if function.return_param().is_some() {
        b.append_line(format!("return {call};"));
    } else {
        b.append_line(format!("{call};"));
    }
    b.close_brace();
}
