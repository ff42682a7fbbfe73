mod bundler_options;
mod chunk;
mod module;
mod module_loader;
mod transform;
mod types;

pub use bundler_options::{
  build_mode::BuildMode,
  chunk_split_options::ChunkSplitOptions,
  es_target::ESTarget,
  filename_template::FilenameTemplate,
  input_item::InputItem,
  normalized_bundler_options::NormalizedBundlerOptions,
  resolve_options::ResolveOptions,
  BundlerOptions,
};

pub use crate::{
  chunk::{chunk_kind::ChunkKind, Chunk},
  module::{module_id::ModuleId, Module},
  module_loader::{task_result::NormalModuleTaskResult, ModuleLoaderMsg},
  transform::{
    module_filter::ModuleFilter, pipeline::TransformPipeline, Transform, TransformContext,
    TransformFn,
  },
  types::{
    entry_point::{EntryPoint, EntryPointKind},
    import_kind::ImportKind,
    import_record::{ImportRecord, RawImportRecord, ResolvedImportRecord},
    manifest::{Manifest, ManifestEntry},
    module_type::ModuleType,
    output_chunk::OutputChunk,
    raw_idx::{ChunkIdx, ImportRecordIdx, ModuleIdx},
    resolved_id::ResolvedId,
  },
};
