//! The orchestrator: walks type batches and emits one unit per eligible type.

mod class;
mod enumeration;
mod extensions;
mod filter;
mod interface;
mod static_ctor;
mod structure;


use std::path::Path;

use gluegen_core::{TypeDescriptor, TypeGraph, TypeId, TypeVariant};

use crate::extension::ExtensionMethod;
use crate::persist::{PersistError, Persistence};
use crate::session::{ExportedTypeSet, Session, UnhandledStats};
use crate::{
    Config, FilterPolicy, ModuleDescriptor, ModuleRegistry, ModuleResolver, NameMapper,
    ScriptBuilder,
};

/// Binding generator session.
///
/// Owns the policy and every session cache. State accumulates across
/// `initial_scan` and `on_module_loaded` and is never reset.
pub struct Generator<P> {
    config: Config,
    policy: FilterPolicy,
    names: NameMapper,
    resolver: Box<dyn ModuleResolver>,
    persistence: P,
    session: Session,
}

impl<P: Persistence> Generator<P> {
    pub fn new(
        config: Config,
        policy: FilterPolicy,
        resolver: impl ModuleResolver + 'static,
        persistence: P,
    ) -> Self {
        Self {
            names: NameMapper::new(&config),
            config,
            policy,
            resolver: Box::new(resolver),
            persistence,
            session: Session::default(),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn policy(&self) -> &FilterPolicy {
        &self.policy
    }

    pub fn names(&self) -> &NameMapper {
        &self.names
    }

    pub fn exported(&self) -> &ExportedTypeSet {
        &self.session.exported
    }

    pub fn modules(&self) -> &ModuleRegistry {
        &self.session.modules
    }

    pub fn stats(&self) -> &UnhandledStats {
        &self.session.stats
    }

    /// Extension methods discovered so far for `module`.
    pub fn extension_methods(&self, module: &str) -> &[ExtensionMethod] {
        self.session
            .extensions
            .get(module)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Units handed to persistence with changed content.
    pub fn units_written(&self) -> usize {
        self.session.units_written
    }

    pub fn persistence(&self) -> &P {
        &self.persistence
    }

    pub fn into_persistence(self) -> P {
        self.persistence
    }

    /// Startup trigger: the interface root and the root object first, then
    /// every type of the graph.
    pub fn initial_scan(&mut self, graph: &TypeGraph) -> Result<(), PersistError> {
        let roots = [
            self.config.interface_root.clone(),
            self.config.root_object.clone(),
        ];
        for root in &roots {
            match graph.find(root) {
                Some(id) => self.export_type(graph, id, true),
                None => tracing::warn!(root = %root, "root type missing from graph"),
            }
        }
        self.generate_batch(graph, graph.ids())
    }

    /// Incremental trigger for one newly loaded module.
    pub fn on_module_loaded(&mut self, graph: &TypeGraph, module: &str) -> Result<(), PersistError> {
        tracing::debug!(module, "module loaded");
        self.generate_batch(graph, graph.types_in_module(module))
    }

    /// Export every type of the batch, write extension surfaces, commit.
    pub fn generate_batch(
        &mut self,
        graph: &TypeGraph,
        ids: impl IntoIterator<Item = TypeId>,
    ) -> Result<(), PersistError> {
        let rejected_before = self.session.stats.total();

        for id in ids {
            self.export_type(graph, id, false);
        }
        self.export_extension_surfaces(graph);

        let rejected = self.session.stats.total() - rejected_before;
        if rejected > 0 {
            tracing::warn!(rejected, "omitted members the translators cannot handle");
        }

        self.persistence.commit()
    }

    /// Export one type. Produces zero or one unit.
    pub fn export_type(&mut self, graph: &TypeGraph, id: TypeId, force: bool) {
        if self.session.exported.contains(id) {
            return;
        }
        let Some(ty) = graph.get(id) else {
            tracing::warn!(?id, "type id does not belong to the graph");
            return;
        };
        if let Some(reason) = skip_reason(ty) {
            tracing::debug!(ty = %ty.name, reason, "skipped");
            return;
        }

        self.register_module(&ty.module);

        let mut builder = ScriptBuilder::new();
        match ty.variant {
            _ if self.names.is_interface(graph, id) => {
                self.export_interface(graph, id, &mut builder);
            }
            TypeVariant::Class | TypeVariant::Interface => {
                if force || self.should_export_class(graph, id) {
                    self.export_class(graph, id, &mut builder);
                }
            }
            TypeVariant::Struct => {
                if force || self.should_export_struct(ty) {
                    self.export_struct(graph, id, &mut builder);
                }
            }
            TypeVariant::Enum => {
                if force || self.should_export_enum(ty) {
                    self.export_enum(graph, id, &mut builder);
                }
            }
        }

        if builder.is_empty() {
            return;
        }
        tracing::debug!(ty = %ty.name, "exported");
        self.save_type_glue(ty, builder.finish());
    }

    fn register_module(&mut self, module: &str) -> &ModuleDescriptor {
        self.session.modules.find_or_register(
            module,
            self.resolver.as_ref(),
            &self.config,
            &self.names,
        )
    }

    fn save_type_glue(&mut self, ty: &TypeDescriptor, text: String) {
        let directory = self.register_module(&ty.module).directory.clone();
        let file_name = self.config.type_file_name(&ty.name);
        self.save_glue(&directory, &file_name, &text);
    }

    fn save_glue(&mut self, directory: &Path, file_name: &str, text: &str) {
        if let Err(err) = self.persistence.create_dir_all(directory) {
            tracing::error!(%err, "could not create output directory");
            return;
        }
        let path = directory.join(file_name);
        match self.persistence.save_if_changed(&path, text) {
            Ok(true) => self.session.units_written += 1,
            Ok(false) => tracing::debug!(path = %path.display(), "unchanged"),
            Err(err) => tracing::error!(%err, "could not save generated file"),
        }
    }
}

/// Intermediate or stale artifacts never produce output.
fn skip_reason(ty: &TypeDescriptor) -> Option<&'static str> {
    let flags = &ty.flags;
    if flags.transient_package {
        Some("transient package")
    } else if flags.default_object {
        Some("default object")
    } else if flags.is_skeleton() {
        Some("skeleton")
    } else if flags.newer_version_exists {
        Some("newer version exists")
    } else if ty.name.contains("TRASH_") {
        Some("trash")
    } else if ty.name.contains("REINST_") {
        Some("reinstanced")
    } else {
        None
    }
}
