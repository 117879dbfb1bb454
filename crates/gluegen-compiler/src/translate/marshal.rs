//! Property fragments: field declarations, offset lookups, buffer access.

use gluegen_core::{PropertyDescriptor, PropertyKind, TypeId};

use super::{Translator, needs_native_property};
use crate::ScriptBuilder;

const PROPERTY_CALLBACKS: &str = "FPropertyCallbacks";

impl Translator<'_> {
    /// Marshaller expression for `kind`. `handle` names the native property
    /// field for kinds that need one.
    pub fn marshaller(&self, kind: &PropertyKind, handle: Option<&str>) -> String {
        use PropertyKind as K;

        let handle = handle.unwrap_or("IntPtr.Zero");
        match kind {
            K::Bool => "BoolMarshaller".to_string(),
            K::Numeric(n) => format!("BlittableMarshaller<{}>", n.managed_name()),
            K::Name => "BlittableMarshaller<Name>".to_string(),
            K::Enum(id) => format!("EnumMarshaller<{}>", self.qualified(*id)),
            K::String => "StringMarshaller".to_string(),
            K::Text => "TextMarshaller".to_string(),
            K::Object(id) => format!("ObjectMarshaller<{}>", self.qualified(*id)),
            K::WeakObject(id) => format!("WeakObjectMarshaller<{}>", self.qualified(*id)),
            K::SoftObject(id) => format!("SoftObjectMarshaller<{}>", self.qualified(*id)),
            K::Class(id) => format!("SubclassOfMarshaller<{}>", self.qualified(*id)),
            K::Struct(id) if self.is_struct_blittable(*id) => {
                format!("BlittableMarshaller<{}>", self.qualified(*id))
            }
            K::Struct(id) => format!("{}Marshaler", self.qualified(*id)),
            K::Interface(id) => format!("InterfaceMarshaller<{}>", self.qualified(*id)),
            K::Array(inner) => {
                let element = self.marshaller(inner, None);
                format!(
                    "new ArrayMarshaller<{}>({handle}, {element}.FromNative, {element}.ToNative)",
                    self.managed_type(inner)
                )
            }
            K::Set(inner) => format!("new SetMarshaller<{}>({handle})", self.managed_type(inner)),
            K::Map(key, value) => format!(
                "new MapMarshaller<{}, {}>({handle})",
                self.managed_type(key),
                self.managed_type(value)
            ),
            K::Delegate { multicast: false } => format!("new DelegateMarshaller({handle})"),
            K::Delegate { multicast: true } => format!("new MulticastDelegateMarshaller({handle})"),
        }
    }

    /// Marshaller for a field whose handle lives in `{prefix}_NativeProperty`.
    pub(crate) fn slot_marshaller(&self, kind: &PropertyKind, prefix: &str) -> String {
        if needs_native_property(kind) {
            self.marshaller(kind, Some(&format!("{prefix}_NativeProperty")))
        } else {
            self.marshaller(kind, None)
        }
    }

    /// `static readonly` fields holding the offset (and handle) of a slot.
    pub fn emit_slot_fields(&self, b: &mut ScriptBuilder, kind: &PropertyKind, prefix: &str) {
        b.append_line(format!("static readonly int {prefix}_Offset;"));
        if needs_native_property(kind) {
            b.append_line(format!("static readonly IntPtr {prefix}_NativeProperty;"));
        }
    }

    /// Offset lookup of a class or struct property, inside the static constructor.
    pub fn emit_property_static_construction(
        &self,
        b: &mut ScriptBuilder,
        property: &PropertyDescriptor,
        native_name: &str,
    ) {
        self.emit_offset_lookup(b, "NativeClassPtr", native_name, native_name, &property.kind);
    }

    /// Offset lookup of a function parameter, inside the static constructor.
    pub fn emit_parameter_static_construction(
        &self,
        b: &mut ScriptBuilder,
        function: &str,
        parameter: &PropertyDescriptor,
    ) {
        let prefix = format!("{function}_{}", parameter.name);
        let owner = format!("{function}_NativeFunction");
        self.emit_offset_lookup(b, &owner, &prefix, &parameter.name, &parameter.kind);
    }

    fn emit_offset_lookup(
        &self,
        b: &mut ScriptBuilder,
        owner: &str,
        prefix: &str,
        native_name: &str,
        kind: &PropertyKind,
    ) {
        if needs_native_property(kind) {
            b.append_line(format!(
                "{prefix}_NativeProperty = {PROPERTY_CALLBACKS}.CallGetNativePropertyFromName({owner}, \"{native_name}\");"
            ));
            b.append_line(format!(
                "{prefix}_Offset = {PROPERTY_CALLBACKS}.CallGetPropertyOffset({prefix}_NativeProperty);"
            ));
        } else {
            b.append_line(format!(
                "{prefix}_Offset = {PROPERTY_CALLBACKS}.CallGetPropertyOffsetFromName({owner}, \"{native_name}\");"
            ));
        }
    }

    /// Class property backed by the native object.
    ///
    /// Greylisted properties are public even when protected natively;
    /// whitelisted read-only properties keep their setter.
    pub fn emit_wrapper_property(
        &self,
        b: &mut ScriptBuilder,
        owner: TypeId,
        property: &PropertyDescriptor,
        greylisted: bool,
        whitelisted: bool,
    ) {
        let name = &property.name;
        let managed = self.names.property_name(self.graph, owner, property);
        let ty = self.managed_type(&property.kind);
        let marshaller = self.slot_marshaller(&property.kind, name);
        let hidden = property.flags.protected || property.flags.private_access;
        let visibility = if hidden && !greylisted { "protected" } else { "public" };

        b.append_line(format!("// {name}"));
        self.emit_slot_fields(b, &property.kind, name);

        if property.is_static_array() {
            let dim = property.array_dim;
            b.append_line(format!("{visibility} StaticArray<{ty}> {managed}"));
            b.open_brace();
            b.append_line("get");
            b.open_brace();
            b.append_line(format!(
                "return new StaticArray<{ty}>(this, NativeObject + {name}_Offset, {dim}, {marshaller}.FromNative, {marshaller}.ToNative);"
            ));
            b.close_brace();
            b.close_brace();
            return;
        }

        b.append_line(format!("{visibility} {ty} {managed}"));
        b.open_brace();
        b.append_line("get");
        b.open_brace();
        b.append_line(format!(
            "return {marshaller}.FromNative(NativeObject + {name}_Offset, 0, this);"
        ));
        b.close_brace();
        if !property.flags.read_only || whitelisted {
            b.append_line("set");
            b.open_brace();
            b.append_line(format!(
                "{marshaller}.ToNative(NativeObject + {name}_Offset, 0, this, value);"
            ));
            b.close_brace();
        }
        b.close_brace();
    }

    /// Plain struct field; offsets are only declared for non-blittable structs.
    pub fn emit_mirror_property(
        &self,
        b: &mut ScriptBuilder,
        owner: TypeId,
        property: &PropertyDescriptor,
        greylisted: bool,
        suppress_offsets: bool,
    ) {
        let managed = self.names.property_name(self.graph, owner, property);
        let ty = self.managed_type(&property.kind);
        let hidden = property.flags.protected || property.flags.private_access;
        let visibility = if hidden && !greylisted { "internal" } else { "public" };

        if !suppress_offsets {
            self.emit_slot_fields(b, &property.kind, &property.name);
        }
        b.append_line(format!("{visibility} {ty} {managed};"));
    }

    /// `<assign> <marshaller>.FromNative(<buffer> + <offset>, 0, <owner>);`
    #[allow(clippy::too_many_arguments)]
    pub fn emit_marshal_from_native_buffer(
        &self,
        b: &mut ScriptBuilder,
        kind: &PropertyKind,
        owner: &str,
        prefix: &str,
        assign: &str,
        buffer: &str,
        offset: &str,
    ) {
        let marshaller = self.slot_marshaller(kind, prefix);
        b.append_line(format!(
            "{assign} {marshaller}.FromNative({buffer} + {offset}, 0, {owner});"
        ));
    }

    /// `<marshaller>.ToNative(<buffer> + <offset>, 0, <owner>, <value>);`
    #[allow(clippy::too_many_arguments)]
    pub fn emit_marshal_to_native_buffer(
        &self,
        b: &mut ScriptBuilder,
        kind: &PropertyKind,
        owner: &str,
        prefix: &str,
        buffer: &str,
        offset: &str,
        value: &str,
    ) {
        let marshaller = self.slot_marshaller(kind, prefix);
        b.append_line(format!(
            "{marshaller}.ToNative({buffer} + {offset}, 0, {owner}, {value});"
        ));
    }
}
