mod module_task;
pub mod task_context;

use std::{collections::hash_map::Entry, sync::Arc};

use arcstr::ArcStr;
use itertools::Itertools;
use oxc_index::IndexVec;
use rustc_hash::{FxHashMap, FxHashSet};
use tokio::sync::mpsc::Receiver;

use splitpack_common::{
  EntryPoint, EntryPointKind, ImportKind, ImportRecordIdx, Module, ModuleIdx, ModuleLoaderMsg,
  NormalModuleTaskResult, ResolvedId,
};
use splitpack_error::BuildResult;
use splitpack_fs::FileSystem;

use module_task::{ModuleTask, ModuleTaskOwner};
use task_context::TaskContext;

use crate::types::{IndexModules, SharedOptions, SharedResolver};

pub struct IntermediateNormalModules {
  pub modules: IndexVec<ModuleIdx, Option<Module>>,
  pub importers: IndexVec<ModuleIdx, Vec<(ImportKind, ModuleIdx)>>,
}

impl IntermediateNormalModules {
  pub fn new() -> Self {
    Self { modules: IndexVec::new(), importers: IndexVec::new() }
  }

  pub fn alloc_module_idx(&mut self) -> ModuleIdx {
    self.modules.push(None);
    self.importers.push(Vec::new())
  }
}

/// The only writer of the module table. Module tasks run concurrently and report back over a
/// channel, each resolved path is spawned at most once.
pub struct ModuleLoader<F: FileSystem + Clone + 'static> {
  rx: Receiver<ModuleLoaderMsg>,
  remaining: u32,
  shared_context: Arc<TaskContext<F>>,
  inm: IntermediateNormalModules,
  visited: FxHashMap<ArcStr, ModuleIdx>,
}

#[derive(Debug)]
pub struct ModuleLoaderOutput {
  pub modules: IndexModules,
  // User defined entries, vendor roots, then dynamic import entries
  pub entry_points: Vec<EntryPoint>,
}

impl<F: FileSystem + Clone + 'static> ModuleLoader<F> {
  pub fn new(fs: F, options: SharedOptions, resolver: SharedResolver<F>) -> Self {
    // 1024 should be enough for most cases
    // over 1024 pending tasks are insane
    let (tx, rx) = tokio::sync::mpsc::channel(1024);

    let shared_context = Arc::new(TaskContext { fs, resolver, options, tx });

    Self {
      rx,
      remaining: 0,
      shared_context,
      inm: IntermediateNormalModules::new(),
      visited: FxHashMap::default(),
    }
  }

  pub async fn fetch_all_modules(
    mut self,
    user_defined_entries: Vec<(Option<ArcStr>, ResolvedId)>,
    vendor_entries: Vec<ResolvedId>,
  ) -> BuildResult<ModuleLoaderOutput> {
    let entries_count = user_defined_entries.len() + vendor_entries.len();
    self.inm.modules.reserve(entries_count);

    let mut user_defined_entry_ids = FxHashSet::default();

    let mut entry_points = user_defined_entries
      .into_iter()
      .map(|(name, info)| {
        let idx = self.try_spawn_new_task(info, None, true);
        user_defined_entry_ids.insert(idx);
        EntryPoint { idx, name, kind: EntryPointKind::UserDefined }
      })
      .collect::<Vec<_>>();

    let vendor_entry_ids = vendor_entries
      .into_iter()
      .map(|info| self.try_spawn_new_task(info, None, false))
      .unique()
      .filter(|idx| !user_defined_entry_ids.contains(idx))
      .collect::<Vec<_>>();

    entry_points.extend(
      vendor_entry_ids
        .into_iter()
        .map(|idx| EntryPoint { idx, name: None, kind: EntryPointKind::Vendor }),
    );

    let mut dynamic_import_entry_ids: FxHashSet<ModuleIdx> = FxHashSet::default();

    while self.remaining > 0 {
      let Some(msg) = self.rx.recv().await else {
        break;
      };

      match msg {
        ModuleLoaderMsg::NormalModuleDone(task_result) => {
          let NormalModuleTaskResult { mut module, resolved_deps, raw_import_records } =
            task_result;

          let import_records = raw_import_records
            .into_iter()
            .zip(resolved_deps)
            .map(|(raw_rec, info)| {
              let owner = ModuleTaskOwner::new(module.stable_id.clone());
              let idx = self.try_spawn_new_task(info, Some(owner), false);
              self.inm.importers[idx].push((raw_rec.kind, module.idx));
              // Dynamic imported module will be considered as an entry
              if matches!(raw_rec.kind, ImportKind::DynamicImport)
                && !user_defined_entry_ids.contains(&idx)
              {
                dynamic_import_entry_ids.insert(idx);
              }
              raw_rec.into_resolved(idx)
            })
            .collect::<IndexVec<ImportRecordIdx, _>>();

          module.import_records = import_records;

          let module_idx = module.idx;
          self.inm.modules[module_idx] = Some(module);
          self.remaining -= 1;
        }
        ModuleLoaderMsg::BuildErrors(errors) => {
          // Fail fast, tasks still in flight finish on their own.
          tracing::debug!("module loading failed with {} errors", errors.len());
          return Err(errors.into());
        }
      }
    }

    let mut modules: IndexModules = self
      .inm
      .modules
      .into_iter()
      .map(|module| module.expect("Module tasks did't complete as expected"))
      .collect();

    for (idx, importers) in self.inm.importers.into_iter_enumerated() {
      let (mut importers, mut dynamic_importers): (Vec<_>, Vec<_>) =
        importers.into_iter().partition_map(|(kind, importer)| {
          if kind.is_static() {
            itertools::Either::Left(importer)
          } else {
            itertools::Either::Right(importer)
          }
        });
      for list in [&mut importers, &mut dynamic_importers] {
        list.sort_unstable_by(|a, b| modules[*a].stable_id.cmp(&modules[*b].stable_id));
        list.dedup();
      }
      modules[idx].importers = importers;
      modules[idx].dynamic_importers = dynamic_importers;
    }

    let mut dynamic_import_entry_ids = dynamic_import_entry_ids.into_iter().collect::<Vec<_>>();
    dynamic_import_entry_ids
      .sort_unstable_by(|a, b| modules[*a].stable_id.cmp(&modules[*b].stable_id));

    entry_points.extend(
      dynamic_import_entry_ids
        .into_iter()
        .map(|idx| EntryPoint { idx, name: None, kind: EntryPointKind::DynamicImport }),
    );

    tracing::debug!("loaded {} modules, {} entry points", modules.len(), entry_points.len());

    Ok(ModuleLoaderOutput { modules, entry_points })
  }

  fn try_spawn_new_task(
    &mut self,
    resolved_id: ResolvedId,
    owner: Option<ModuleTaskOwner>,
    is_user_defined_entry: bool,
  ) -> ModuleIdx {
    match self.visited.entry(ArcStr::clone(&resolved_id.id)) {
      Entry::Occupied(visited) => *visited.get(),
      Entry::Vacant(not_visited) => {
        let idx = self.inm.alloc_module_idx();
        self.remaining += 1;

        let task = ModuleTask::new(
          Arc::clone(&self.shared_context),
          idx,
          owner,
          resolved_id,
          is_user_defined_entry,
        );

        tokio::spawn(task.run());

        *not_visited.insert(idx)
      }
    }
  }
}
