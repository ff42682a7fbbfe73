use std::iter;

use rustc_hash::{FxHashMap, FxHashSet};

use splitpack_common::ModuleIdx;
use splitpack_error::CycleWarning;
use splitpack_utils::indexmap::FxIndexSet;

use super::LinkStage;

#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
enum Status {
  ToBeExecuted(ModuleIdx),
  WaitForExit(ModuleIdx),
}

impl LinkStage {
  /// Assigns `exec_order` by a post-order walk of static imports, starting from the entry points
  /// in order, and reports every cycle found on the way.
  pub(crate) fn sort_modules(&mut self) {
    let mut execution_stack = self
      .entry_points
      .iter()
      .rev()
      .map(|entry| Status::ToBeExecuted(entry.idx))
      .collect::<Vec<_>>();

    let mut executed_ids = FxHashSet::default();
    executed_ids.reserve(self.modules.len());
    let mut stack_indexes_of_executing_id = FxHashMap::default();

    let mut next_exec_order = 0;
    // Keeps cycles in the order they were found.
    let mut circular_dependencies = FxIndexSet::default();
    let mut sorted_modules = Vec::with_capacity(self.modules.len());

    while let Some(status) = execution_stack.pop() {
      match status {
        Status::ToBeExecuted(id) => {
          if executed_ids.contains(&id) {
            // Try to check if there is a circular dependency
            if let Some(index) = stack_indexes_of_executing_id.get(&id).copied() {
              // Executing
              let cycles = execution_stack[index..]
                .iter()
                .filter_map(|action| match action {
                  // Only modules with `Status::WaitForExit` are on the execution chain
                  Status::ToBeExecuted(_) => None,
                  Status::WaitForExit(id) => Some(*id),
                })
                .chain(iter::once(id))
                .collect::<Box<[_]>>();
              circular_dependencies.insert(cycles);
            }
          } else {
            executed_ids.insert(id);
            execution_stack.push(Status::WaitForExit(id));
            stack_indexes_of_executing_id.insert(id, execution_stack.len() - 1);

            let dependencies = self.modules[id].static_dependencies().collect::<Vec<_>>();
            execution_stack.extend(dependencies.into_iter().rev().map(Status::ToBeExecuted));
          }
        }
        Status::WaitForExit(id) => {
          sorted_modules.push(id);
          self.modules[id].exec_order = next_exec_order;
          next_exec_order += 1;
          stack_indexes_of_executing_id.remove(&id);
        }
      }
    }

    for cycle in circular_dependencies {
      let cycle = cycle.iter().map(|id| self.modules[*id].stable_id.clone()).collect::<Vec<_>>();
      let warning = CycleWarning { cycle };
      tracing::warn!("{warning}");
      self.warnings.push(warning.into());
    }

    self.sorted_modules = sorted_modules;
  }
}
