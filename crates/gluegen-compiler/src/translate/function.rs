//! Function fragments: wrappers, overridable stubs and interface signatures.

use gluegen_core::{FunctionDescriptor, PropertyDescriptor, TypeId};

use super::Translator;
use crate::ScriptBuilder;

const OBJECT_CALLBACKS: &str = "CoreUObjectCallbacks";

impl Translator<'_> {
    pub fn return_type(&self, function: &FunctionDescriptor) -> String {
        function
            .return_param()
            .map(|p| self.managed_type(&p.kind))
            .unwrap_or_else(|| "void".to_string())
    }

    /// `int count, out string label`
    pub fn parameter_list(&self, function: &FunctionDescriptor) -> String {
        function
            .parameters()
            .map(|p| self.parameter_decl(p))
            .collect::<Vec<_>>()
            .join(", ")
    }

    pub(crate) fn parameter_decl(&self, parameter: &PropertyDescriptor) -> String {
        let modifier = if parameter.is_out() { "out " } else { "" };
        format!(
            "{modifier}{} {}",
            self.managed_type(&parameter.kind),
            self.names.parameter_name(parameter)
        )
    }

    fn emit_parameter_fields(&self, b: &mut ScriptBuilder, function: &FunctionDescriptor) {
        if function.num_params() == 0 {
            return;
        }
        b.append_line(format!("static readonly int {}_ParamsSize;", function.name));
        for param in &function.params {
            let prefix = format!("{}_{}", function.name, param.name);
            self.emit_slot_fields(b, &param.kind, &prefix);
        }
    }

    /// Callable wrapper: packs arguments into a stack buffer and invokes the
    /// native function.
    pub fn emit_function(&self, b: &mut ScriptBuilder, owner: TypeId, function: &FunctionDescriptor) {
        let native = &function.name;
        let managed = self.names.function_name(self.graph, owner, native);
        let is_static = function.flags.is_static;
        let marshal_owner = if is_static { "null" } else { "this" };

        b.append_line(format!("// {native}"));
        b.append_line(format!("static readonly IntPtr {native}_NativeFunction;"));
        self.emit_parameter_fields(b, function);

        let modifier = if is_static { "static " } else { "" };
        b.append_line(format!(
            "public {modifier}{} {managed}({})",
            self.return_type(function),
            self.parameter_list(function)
        ));
        b.open_brace();

        let invoke = |buffer: &str| {
            if is_static {
                format!("{OBJECT_CALLBACKS}.CallInvokeNativeStaticFunction(NativeClassPtr, {native}_NativeFunction, {buffer});")
            } else {
                format!("{OBJECT_CALLBACKS}.CallInvokeNativeFunction(NativeObject, {native}_NativeFunction, {buffer});")
            }
        };

        if function.num_params() == 0 {
            b.append_line(invoke("IntPtr.Zero"));
            b.close_brace();
            return;
        }

        b.begin_unsafe_block();
        b.append_line(format!(
            "byte* ParamsBufferAllocation = stackalloc byte[{native}_ParamsSize];"
        ));
        b.append_line("IntPtr ParamsBuffer = (IntPtr) ParamsBufferAllocation;");
        for param in function.parameters().filter(|p| !p.is_out()) {
            let prefix = format!("{native}_{}", param.name);
            self.emit_marshal_to_native_buffer(
                b,
                &param.kind,
                marshal_owner,
                &prefix,
                "ParamsBuffer",
                &format!("{prefix}_Offset"),
                &self.names.parameter_name(param),
            );
        }
        b.blank_line();
        b.append_line(invoke("ParamsBuffer"));

        let outs: Vec<_> = function.parameters().filter(|p| p.is_out()).collect();
        if !outs.is_empty() || function.return_param().is_some() {
            b.blank_line();
        }
        for param in outs {
            let prefix = format!("{native}_{}", param.name);
            self.emit_marshal_from_native_buffer(
                b,
                &param.kind,
                marshal_owner,
                &prefix,
                &format!("{} =", self.names.parameter_name(param)),
                "ParamsBuffer",
                &format!("{prefix}_Offset"),
            );
        }
        if let Some(ret) = function.return_param() {
            let prefix = format!("{native}_{}", ret.name);
            self.emit_marshal_from_native_buffer(
                b,
                &ret.kind,
                marshal_owner,
                &prefix,
                "return",
                "ParamsBuffer",
                &format!("{prefix}_Offset"),
            );
        }
        b.end_unsafe_block();
        b.close_brace();
    }

    /// Overridable stub plus the `Invoke_<Name>` thunk the native side calls.
    pub fn emit_overridable_function(
        &self,
        b: &mut ScriptBuilder,
        owner: TypeId,
        function: &FunctionDescriptor,
    ) {
        let native = &function.name;
        let managed = self.names.function_name(self.graph, owner, native);
        let ret = function.return_param();

        b.append_line(format!("// {native}"));
        self.emit_parameter_fields(b, function);
        b.append_line(format!(
            "protected virtual {} {managed}({})",
            self.return_type(function),
            self.parameter_list(function)
        ));
        b.open_brace();
        for param in function.parameters().filter(|p| p.is_out()) {
            b.append_line(format!("{} = default;", self.names.parameter_name(param)));
        }
        if ret.is_some() {
            b.append_line("return default;");
        }
        b.close_brace();

        b.blank_line();
        b.append_line(format!("void Invoke_{native}(IntPtr Buffer, IntPtr ReturnBuffer)"));
        b.open_brace();

        let args = function
            .parameters()
            .map(|p| {
                let name = self.names.parameter_name(p);
                if p.is_out() { format!("out {name}") } else { name }
            })
            .collect::<Vec<_>>()
            .join(", ");
        let call = match ret {
            Some(ret) => format!(
                "{} returnValue = {managed}({args});",
                self.managed_type(&ret.kind)
            ),
            None => format!("{managed}({args});"),
        };

        if function.num_params() == 0 {
            b.append_line(call);
            b.close_brace();
            return;
        }

        b.begin_unsafe_block();
        for param in function.parameters() {
            let name = self.names.parameter_name(param);
            let ty = self.managed_type(&param.kind);
            if param.is_out() {
                b.append_line(format!("{ty} {name};"));
                continue;
            }
            let prefix = format!("{native}_{}", param.name);
            self.emit_marshal_from_native_buffer(
                b,
                &param.kind,
                "this",
                &prefix,
                &format!("{ty} {name} ="),
                "Buffer",
                &format!("{prefix}_Offset"),
            );
        }
        b.append_line(call);
        for param in function.parameters().filter(|p| p.is_out()) {
            let prefix = format!("{native}_{}", param.name);
            self.emit_marshal_to_native_buffer(
                b,
                &param.kind,
                "this",
                &prefix,
                "Buffer",
                &format!("{prefix}_Offset"),
                &self.names.parameter_name(param),
            );
        }
        if let Some(ret) = ret {
            let prefix = format!("{native}_{}", ret.name);
            self.emit_marshal_to_native_buffer(
                b,
                &ret.kind,
                "this",
                &prefix,
                "ReturnBuffer",
                "0",
                "returnValue",
            );
        }
        b.end_unsafe_block();
        b.close_brace();
    }

    /// Signature only.
    pub fn emit_interface_function(
        &self,
        b: &mut ScriptBuilder,
        owner: TypeId,
        function: &FunctionDescriptor,
    ) {
        b.append_line(format!(
            "{} {}({});",
            self.return_type(function),
            self.names.function_name(self.graph, owner, &function.name),
            self.parameter_list(function)
        ));
    }
}
