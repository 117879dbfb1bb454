use gluegen_core::{PropertyDescriptor, TypeGraph, TypeId};

use super::Generator;
use super::class::RUNTIME_OBJECT;
use super::filter::exported_properties;
use super::static_ctor::emit_static_constructor;
use crate::persist::Persistence;
use crate::script::TypeDecl;
use crate::translate::Translator;
use crate::ScriptBuilder;

impl<P: Persistence> Generator<P> {
    /// Blittable structs are plain field layouts. Everything else marshals
    /// field by field through offsets and gets a companion marshaller.
    pub(super) fn export_struct(&mut self, graph: &TypeGraph, id: TypeId, b: &mut ScriptBuilder) {
        self.session.exported.insert(id);
        let ty = &graph[id];
        let namespace = self.register_module(&ty.module).namespace.clone();

        let tr = Translator::new(graph, &self.names, &self.policy);
        let properties = exported_properties(&tr, &mut self.session.stats, id);
        let blittable = tr.is_struct_blittable(id);
        let name = self.names.type_name(graph, id);

        b.generate_script_skeleton(&namespace);
        if blittable {
            b.append_line("[UStruct(IsBlittable = true)]");
        } else {
            b.append_line("[UStruct]");
        }
        b.declare_type(TypeDecl::new("struct", &name));

        for property in &properties {
            let greylisted = self.policy.relax.has_member(&ty.name, &property.name);
            tr.emit_mirror_property(b, id, property, greylisted, blittable);
        }

        if !blittable {
            b.blank_line();
            emit_static_constructor(&tr, b, id, &properties, &[], &[]);
            b.blank_line();
            emit_mirror_marshalling(&tr, b, id, &name, &properties);
        }

        b.close_brace();

        if !blittable {
            emit_struct_marshaller(b, &name);
        }
    }
}

fn emit_mirror_marshalling(
    tr: &Translator<'_>,
    b: &mut ScriptBuilder,
    owner: TypeId,
    name: &str,
    properties: &[&PropertyDescriptor],
) {
    b.append_line("// Construct by marshalling from a native buffer.");
    b.append_line(format!("public {name}(IntPtr InNativeStruct)"));
    b.open_brace();
    b.begin_unsafe_block();
    for property in properties {
        let managed = tr.names.property_name(tr.graph, owner, property);
        tr.emit_marshal_from_native_buffer(
            b,
            &property.kind,
            "null",
            &property.name,
            &format!("{managed} ="),
            "InNativeStruct",
            &format!("{}_Offset", property.name),
        );
    }
    b.end_unsafe_block();
    b.close_brace();

    b.blank_line();
    b.append_line("// Marshal into a preallocated native buffer.");
    b.append_line("public void ToNative(IntPtr Buffer)");
    b.open_brace();
    b.begin_unsafe_block();
    for property in properties {
        let managed = tr.names.property_name(tr.graph, owner, property);
        tr.emit_marshal_to_native_buffer(
            b,
            &property.kind,
            "null",
            &property.name,
            "Buffer",
            &format!("{}_Offset", property.name),
            &managed,
        );
    }
    b.end_unsafe_block();
    b.close_brace();
}

/// Element access for arrays of this struct.
fn emit_struct_marshaller(b: &mut ScriptBuilder, name: &str) {
    b.blank_line();
    b.append_line(format!("public static class {name}Marshaler"));
    b.open_brace();

    b.append_line(format!(
        "public static {name} FromNative(IntPtr nativeBuffer, int arrayIndex, {RUNTIME_OBJECT} owner)"
    ));
    b.open_brace();
    b.append_line(format!(
        "return new {name}(nativeBuffer + arrayIndex * GetNativeDataSize());"
    ));
    b.close_brace();

    b.blank_line();
    b.append_line(format!(
        "public static void ToNative(IntPtr nativeBuffer, int arrayIndex, {RUNTIME_OBJECT} owner, {name} obj)"
    ));
    b.open_brace();
    b.append_line("obj.ToNative(nativeBuffer + arrayIndex * GetNativeDataSize());");
    b.close_brace();

    b.blank_line();
    b.append_line("public static int GetNativeDataSize()");
    b.open_brace();
    b.append_line(format!("return {name}.NativeDataSize;"));
    b.close_brace();

    b.close_brace();
}
