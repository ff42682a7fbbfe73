use oxc_index::{index_vec, IndexVec};
use splitpack_common::{Chunk, ChunkIdx, ModuleIdx};

use super::IndexModules;

#[derive(Debug)]
pub struct ChunkGraph {
  /// In chunk order: entries, vendor, commons, async chunks.
  pub chunk_table: IndexVec<ChunkIdx, Chunk>,
  /// The chunk a module was first placed in. Duplicated modules are also listed by other chunks.
  pub module_to_chunk: IndexVec<ModuleIdx, Option<ChunkIdx>>,
}

impl ChunkGraph {
  pub fn new(modules: &IndexModules) -> Self {
    Self { chunk_table: IndexVec::default(), module_to_chunk: index_vec![None; modules.len()] }
  }

  pub fn add_chunk(&mut self, chunk: Chunk) -> ChunkIdx {
    let chunk_idx = self.chunk_table.next_idx();
    for &module_idx in &chunk.modules {
      self.module_to_chunk[module_idx].get_or_insert(chunk_idx);
    }
    self.chunk_table.push(chunk)
  }
}
