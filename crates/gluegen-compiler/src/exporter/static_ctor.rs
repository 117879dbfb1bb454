//! Static constructor: caches native handles, offsets and sizes.

use indexmap::IndexSet;

use gluegen_core::{FunctionDescriptor, PropertyDescriptor, TypeId};

use crate::ScriptBuilder;
use crate::translate::Translator;

const OBJECT_CALLBACKS: &str = "CoreUObjectCallbacks";
const CLASS_CALLBACKS: &str = "UClassCallbacks";
const FUNCTION_CALLBACKS: &str = "UFunctionCallbacks";
const STRUCT_CALLBACKS: &str = "UScriptStructCallbacks";

/// Returns false when there was nothing to emit.
pub(super) fn emit_static_constructor(
    tr: &Translator<'_>,
    b: &mut ScriptBuilder,
    owner: TypeId,
    properties: &[&PropertyDescriptor],
    functions: &[(usize, &FunctionDescriptor)],
    overridable: &[&FunctionDescriptor],
) -> bool {
    let ty = &tr.graph[owner];
    let is_struct = ty.is_struct();
    if !is_struct && properties.is_empty() && functions.is_empty() && overridable.is_empty() {
        return false;
    }

    let has_static_functions = functions.iter().any(|(_, f)| f.flags.is_static);
    if has_static_functions {
        b.append_line("static readonly IntPtr NativeClassPtr;");
    }
    if is_struct {
        b.append_line("public static readonly int NativeDataSize;");
    }

    b.append_line(format!("static {}()", tr.names.type_name(tr.graph, owner)));
    b.open_brace();

    let local = if has_static_functions { "" } else { "IntPtr " };
    let what = if is_struct { "Struct" } else { "Class" };
    b.append_line(format!(
        "{local}NativeClassPtr = {OBJECT_CALLBACKS}.CallGetNative{what}FromName(\"{}\");",
        ty.name
    ));

    // The first property to claim a managed name owns the static entry.
    let mut claimed = IndexSet::new();
    let mut first = true;
    for property in properties {
        if !claimed.insert(tr.names.property_name(tr.graph, owner, property)) {
            continue;
        }
        if std::mem::take(&mut first) {
            b.blank_line();
        }
        tr.emit_property_static_construction(b, property, &property.name);
    }

    for (_, function) in functions {
        b.blank_line();
        emit_function_lookup(tr, b, function, false);
    }

    for function in overridable {
        if function.num_params() == 0 {
            continue;
        }
        b.blank_line();
        emit_function_lookup(tr, b, function, true);
    }

    if is_struct {
        b.blank_line();
        b.append_line(format!(
            "NativeDataSize = {STRUCT_CALLBACKS}.CallGetNativeStructSize(NativeClassPtr);"
        ));
    }

    b.close_brace();
    true
}

/// Handle, parameter block size and parameter offsets of one function.
/// Overridable functions keep the handle in a local.
fn emit_function_lookup(
    tr: &Translator<'_>,
    b: &mut ScriptBuilder,
    function: &FunctionDescriptor,
    local: bool,
) {
    let name = &function.name;
    let decl = if local { "IntPtr " } else { "" };
    b.append_line(format!(
        "{decl}{name}_NativeFunction = {CLASS_CALLBACKS}.CallGetNativeFunctionFromClassAndName(NativeClassPtr, \"{name}\");"
    ));
    if function.num_params() > 0 {
        b.append_line(format!(
            "{name}_ParamsSize = {FUNCTION_CALLBACKS}.CallGetNativeFunctionParamsSize({name}_NativeFunction);"
        ));
    }
    for param in &function.params {
        tr.emit_parameter_static_construction(b, name, param);
    }
}
