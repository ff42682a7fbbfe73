pub mod chunk_kind;

use arcstr::ArcStr;

use crate::{ChunkIdx, ChunkKind, FilenameTemplate, ModuleIdx, NormalizedBundlerOptions};

#[derive(Debug)]
pub struct Chunk {
  pub name: ArcStr,
  pub kind: ChunkKind,
  /// Sorted by `Module::exec_order`.
  pub modules: Vec<ModuleIdx>,
  /// Chunks that must be loaded before this one, in chunk order.
  pub imports: Vec<ChunkIdx>,
  /// Chunks this one loads on demand, in chunk order.
  pub dynamic_imports: Vec<ChunkIdx>,
}

impl Chunk {
  pub fn new(name: ArcStr, kind: ChunkKind, modules: Vec<ModuleIdx>) -> Self {
    Self { name, kind, modules, imports: Vec::new(), dynamic_imports: Vec::new() }
  }

  pub fn filename_template(&self, options: &NormalizedBundlerOptions) -> FilenameTemplate {
    let ret = if self.kind.is_async() {
      options.chunk_filenames.clone()
    } else {
      options.entry_filenames.clone()
    };

    FilenameTemplate::new(ret)
  }
}
