use oxc_index::IndexVec;
use rustc_hash::FxHashSet;

use splitpack_common::{ChunkIdx, ModuleIdx};
use splitpack_utils::indexmap::FxIndexSet;

use crate::types::{chunk_graph::ChunkGraph, IndexModules};

/// Fills `Chunk::imports` and `Chunk::dynamic_imports` from the import records of each chunk's
/// modules. A module bundled into the chunk itself never produces a link.
pub fn compute_cross_chunk_links(chunk_graph: &mut ChunkGraph, modules: &IndexModules) {
  let members: IndexVec<ChunkIdx, FxHashSet<ModuleIdx>> = chunk_graph
    .chunk_table
    .iter()
    .map(|chunk| chunk.modules.iter().copied().collect())
    .collect();

  let links = chunk_graph
    .chunk_table
    .iter_enumerated()
    .map(|(chunk_idx, chunk)| {
      let mut imports = FxIndexSet::default();
      let mut dynamic_imports = FxIndexSet::default();

      for rec in chunk.modules.iter().flat_map(|idx| modules[*idx].import_records.iter()) {
        let target = rec.resolved_module();
        if members[chunk_idx].contains(&target) {
          continue;
        }
        let Some(target_chunk) = chunk_graph.module_to_chunk[target] else {
          continue;
        };
        if rec.kind.is_static() {
          imports.insert(target_chunk);
        } else {
          dynamic_imports.insert(target_chunk);
        }
      }

      let mut imports = imports.into_iter().collect::<Vec<_>>();
      let mut dynamic_imports = dynamic_imports.into_iter().collect::<Vec<_>>();
      imports.sort_unstable();
      dynamic_imports.sort_unstable();
      (imports, dynamic_imports)
    })
    .collect::<Vec<_>>();

  for (chunk, (imports, dynamic_imports)) in chunk_graph.chunk_table.iter_mut().zip(links) {
    chunk.imports = imports;
    chunk.dynamic_imports = dynamic_imports;
  }
}
