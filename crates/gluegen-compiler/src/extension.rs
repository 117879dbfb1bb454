//! Extension-method inference for static library functions.
//!
//! Receiver precedence: `ScriptMethod` marker, then the `DefaultToSelf` hint,
//! then the `WorldContext` hint, then a parameter conventionally named as a
//! world context. A receiver that ends up a world context is typed as the
//! configured world type.

use gluegen_core::{FunctionDescriptor, TypeId};

pub const SCRIPT_METHOD: &str = "ScriptMethod";
pub const DEFAULT_TO_SELF: &str = "DefaultToSelf";
pub const WORLD_CONTEXT: &str = "WorldContext";
pub const WORLD_CONTEXT_OBJECT: &str = "WorldContextObject";

/// A static function exposed as an instance-style call on its receiver.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExtensionMethod {
    /// Function library declaring the function.
    pub owner: TypeId,
    /// Index into the owner's functions.
    pub function: usize,
    /// Index into the function's params.
    pub self_param: usize,
    /// Native type name the receiver is typed as, instead of its declared type.
    pub receiver_override: Option<String>,
}

impl ExtensionMethod {
    pub fn is_world_context(&self) -> bool {
        self.receiver_override.is_some()
    }
}

/// Decide whether `function` (declared by `owner` at `index`) is an
/// extension method, and on which parameter.
pub fn resolve_extension_method(
    owner: TypeId,
    index: usize,
    function: &FunctionDescriptor,
    world_type: &str,
) -> Option<ExtensionMethod> {
    let mut receiver = None;
    let mut world_context = false;

    if function.has_metadata(SCRIPT_METHOD) {
        receiver = function.params.iter().position(|p| !p.is_return());
    }

    if receiver.is_none() {
        receiver = function
            .metadata(DEFAULT_TO_SELF)
            .and_then(|name| function.find_param(name));
    }

    if let Some(hint) = function.metadata(WORLD_CONTEXT) {
        match receiver {
            Some(index) => world_context = function.params[index].name == hint,
            None => {
                receiver = function.find_param(hint);
                world_context = true;
            }
        }
    }

    if receiver.is_none() {
        receiver = function
            .find_param(WORLD_CONTEXT)
            .or_else(|| function.find_param(WORLD_CONTEXT_OBJECT));
        world_context = receiver.is_some();
    }

    let self_param = receiver?;

    if !world_context {
        let name = function.params[self_param].name.as_str();
        world_context = name == WORLD_CONTEXT || name == WORLD_CONTEXT_OBJECT;
    }

    Some(ExtensionMethod {
        owner,
        function: index,
        self_param,
        receiver_override: world_context.then(|| world_type.to_string()),
    })
}
