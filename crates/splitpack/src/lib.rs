mod bundler;
mod module_loader;
mod stages;
mod types;
mod utils;

pub use crate::{
  bundler::Bundler,
  stages::partition::partition,
  types::{bundle_output::BundleOutput, chunk_graph::ChunkGraph, module_graph::ModuleGraph},
};

pub use splitpack_common::*;
pub use splitpack_error::{
  BuildError, BuildResult, CycleWarning, ResolutionError, TransformError, WriteError,
};
pub use splitpack_fs::{FileSystem, OsFileSystem};
