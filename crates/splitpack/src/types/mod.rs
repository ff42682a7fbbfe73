pub mod bundle_output;
pub mod chunk_graph;
pub mod module_graph;

use std::sync::Arc;

use oxc_index::IndexVec;
use splitpack_common::{Module, ModuleIdx, NormalizedBundlerOptions};
use splitpack_resolver::Resolver;

pub type IndexModules = IndexVec<ModuleIdx, Module>;

pub type SharedResolver<F> = Arc<Resolver<F>>;
pub type SharedOptions = Arc<NormalizedBundlerOptions>;
