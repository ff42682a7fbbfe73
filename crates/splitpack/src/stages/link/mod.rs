mod sort_modules;

use tracing::instrument;

use splitpack_common::{EntryPoint, ModuleIdx};

use crate::types::{module_graph::ModuleGraph, IndexModules};

use super::scan::ScanStageOutput;

#[derive(Debug)]
pub struct LinkStage {
  pub modules: IndexModules,
  pub entry_points: Vec<EntryPoint>,
  pub sorted_modules: Vec<ModuleIdx>,
  pub warnings: Vec<anyhow::Error>,
}

impl LinkStage {
  pub fn new(scan_stage_output: ScanStageOutput) -> Self {
    let ScanStageOutput { modules, entry_points } = scan_stage_output;
    Self { modules, entry_points, sorted_modules: Vec::new(), warnings: Vec::new() }
  }

  #[instrument(skip_all)]
  pub fn link(mut self) -> ModuleGraph {
    self.sort_modules();
    tracing::debug!("sorted {} modules", self.sorted_modules.len());

    ModuleGraph {
      modules: self.modules,
      entry_points: self.entry_points,
      sorted_modules: self.sorted_modules,
      warnings: self.warnings,
    }
  }
}
