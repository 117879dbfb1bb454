use gluegen_core::{TypeGraph, TypeId};

use super::Generator;
use crate::persist::Persistence;
use crate::script::TypeDecl;
use crate::ScriptBuilder;

impl<P: Persistence> Generator<P> {
    /// Entries keep their native ordinal; rejected entries leave a gap and a
    /// trailing `MAX` sentinel is dropped.
    pub(super) fn export_enum(&mut self, graph: &TypeGraph, id: TypeId, b: &mut ScriptBuilder) {
        self.session.exported.insert(id);
        let ty = &graph[id];
        let namespace = self.register_module(&ty.module).namespace.clone();
        let name = self.names.type_name(graph, id);
        let underlying = ty
            .underlying
            .filter(|n| n.is_integer())
            .map_or("byte", |n| n.managed_name());

        b.generate_script_skeleton(&namespace);
        b.append_line("[UEnum]");
        b.declare_type(TypeDecl::new("enum", &name).base(underlying));

        let last = ty.entries.len().saturating_sub(1);
        let mut values = Vec::with_capacity(ty.entries.len());
        for (ordinal, entry) in ty.entries.iter().enumerate() {
            let short = entry.short_name();
            if entry.hidden || self.policy.rejects_member(&ty.name, short) {
                values.push(None);
                continue;
            }
            if ordinal == last && short.ends_with("MAX") {
                continue;
            }
            values.push(Some(short));
        }

        for (ordinal, value) in values.into_iter().enumerate() {
            if let Some(value) = value {
                b.append_line(format!("{value}={ordinal},"));
            }
        }
        b.close_brace();
    }
}
