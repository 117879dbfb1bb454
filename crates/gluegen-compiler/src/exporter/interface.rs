use gluegen_core::{TypeGraph, TypeId};

use super::Generator;
use super::filter::exported_functions;
use crate::persist::Persistence;
use crate::script::TypeDecl;
use crate::translate::Translator;
use crate::ScriptBuilder;

impl<P: Persistence> Generator<P> {
    /// Interface declaration holding only the overridable functions.
    pub(super) fn export_interface(&mut self, graph: &TypeGraph, id: TypeId, b: &mut ScriptBuilder) {
        self.session.exported.insert(id);
        let ty = &graph[id];
        let namespace = self.register_module(&ty.module).namespace.clone();

        let tr = Translator::new(graph, &self.names, &self.policy);
        let (_, overridable) = exported_functions(&tr, &mut self.session.stats, id);
        let name = self.names.type_name(graph, id);

        b.generate_script_skeleton(&namespace);
        b.declare_type(TypeDecl::new("interface", &name));
        for function in overridable {
            tr.emit_interface_function(b, id, function);
        }
        b.close_brace();
    }
}
