use splitpack_common::{EntryPoint, EntryPointKind, Module, ModuleIdx};

use super::IndexModules;

#[derive(Debug)]
pub struct ModuleGraph {
  pub modules: IndexModules,
  /// User defined entries in config order, vendor roots, then dynamic imports by stable id.
  pub entry_points: Vec<EntryPoint>,
  /// Modules by `exec_order`.
  pub sorted_modules: Vec<ModuleIdx>,
  pub warnings: Vec<anyhow::Error>,
}

impl ModuleGraph {
  pub fn module_by_stable_id(&self, stable_id: &str) -> Option<&Module> {
    self.modules.iter().find(|module| module.stable_id == stable_id)
  }

  pub fn entry_points_of(&self, kind: EntryPointKind) -> impl Iterator<Item = &EntryPoint> {
    self.entry_points.iter().filter(move |entry| entry.kind == kind)
  }
}
