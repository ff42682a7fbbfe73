mod compute_cross_chunk_links;
mod make_unique_name;

use arcstr::ArcStr;
use itertools::Itertools;
use rustc_hash::{FxHashMap, FxHashSet};
use sugar_path::SugarPath;
use tracing::instrument;

use splitpack_common::{
  Chunk, ChunkKind, EntryPoint, EntryPointKind, ModuleIdx, NormalizedBundlerOptions,
};
use splitpack_utils::sanitize_file_name::sanitize_file_name;

use crate::types::{chunk_graph::ChunkGraph, module_graph::ModuleGraph, IndexModules};

use compute_cross_chunk_links::compute_cross_chunk_links;
use make_unique_name::create_make_unique_name;

/// Groups the modules of `graph` into entry, vendor, commons and async chunks.
///
/// - The vendor chunk holds the static closure of all vendor roots.
/// - Each user defined entry reaches its static closure, stopping at vendor modules and other
///   entries. Modules reached by several entries move to the commons chunk. With
///   `allow_duplication`, only modules reached by at least `min_share_count` entries do and the
///   others are copied into every entry chunk reaching them.
/// - Every dynamic import target that isn't placed yet starts an async chunk with the part of
///   its static closure that isn't placed yet.
#[instrument(skip_all)]
pub fn partition(graph: &ModuleGraph, options: &NormalizedBundlerOptions) -> ChunkGraph {
  let modules = &graph.modules;
  let mut chunk_graph = ChunkGraph::new(modules);
  let mut make_unique_name = create_make_unique_name(FxHashMap::default());

  let user_entries =
    graph.entry_points_of(EntryPointKind::UserDefined).collect::<Vec<&EntryPoint>>();
  let user_entry_ids = user_entries.iter().map(|entry| entry.idx).collect::<FxHashSet<_>>();

  let vendor_roots =
    graph.entry_points_of(EntryPointKind::Vendor).map(|entry| entry.idx).collect::<Vec<_>>();
  let vendor_modules =
    collect_static_closure(modules, &vendor_roots, |idx| !user_entry_ids.contains(&idx));
  let vendor_ids = vendor_modules.iter().copied().collect::<FxHashSet<_>>();

  let reaches = user_entries
    .iter()
    .map(|entry| {
      collect_static_closure(modules, &[entry.idx], |idx| {
        !vendor_ids.contains(&idx) && !user_entry_ids.contains(&idx)
      })
    })
    .collect::<Vec<_>>();

  let mut share_counts: FxHashMap<ModuleIdx, u32> = FxHashMap::default();
  for idx in reaches.iter().flatten() {
    *share_counts.entry(*idx).or_default() += 1;
  }

  let commons_threshold = if options.allow_duplication { options.min_share_count } else { 2 };
  let goes_to_commons = |idx: &ModuleIdx| {
    !user_entry_ids.contains(idx) && share_counts.get(idx).is_some_and(|n| *n >= commons_threshold)
  };

  for (entry, reach) in user_entries.iter().zip(&reaches) {
    let name = entry.name.clone().unwrap_or_else(|| {
      let path = modules[entry.idx].id.as_path();
      let stem = path.file_stem().map(|stem| stem.to_string_lossy()).unwrap_or_default();
      ArcStr::from(sanitize_file_name(&stem))
    });
    let chunk_modules = reach.iter().copied().filter(|idx| !goes_to_commons(idx)).collect();
    chunk_graph.add_chunk(Chunk::new(
      make_unique_name(&name),
      ChunkKind::Entry { module: entry.idx },
      chunk_modules,
    ));
  }

  if !vendor_modules.is_empty() {
    let name = ArcStr::from(options.vendor_chunk_name.as_str());
    chunk_graph.add_chunk(Chunk::new(make_unique_name(&name), ChunkKind::Vendor, vendor_modules));
  }

  let commons_modules = share_counts.keys().copied().filter(goes_to_commons).collect::<Vec<_>>();
  if !commons_modules.is_empty() {
    let name = ArcStr::from(options.commons_chunk_name.as_str());
    chunk_graph.add_chunk(Chunk::new(make_unique_name(&name), ChunkKind::Commons, commons_modules));
  }

  for entry in graph.entry_points_of(EntryPointKind::DynamicImport) {
    if chunk_graph.module_to_chunk[entry.idx].is_some() {
      // Already loaded along with another chunk.
      continue;
    }
    let chunk_modules = collect_static_closure(modules, &[entry.idx], |idx| {
      chunk_graph.module_to_chunk[idx].is_none()
    });
    let name = ArcStr::from(sanitize_file_name(&modules[entry.idx].repr_name));
    chunk_graph.add_chunk(Chunk::new(
      make_unique_name(&name),
      ChunkKind::Async { module: entry.idx },
      chunk_modules,
    ));
  }

  for chunk in chunk_graph.chunk_table.iter_mut() {
    chunk.modules.sort_unstable_by_key(|idx| modules[*idx].exec_order);
  }

  compute_cross_chunk_links(&mut chunk_graph, modules);

  tracing::debug!(
    "partitioned {} modules into chunks [{}]",
    modules.len(),
    chunk_graph.chunk_table.iter().map(|chunk| chunk.name.as_str()).join(", ")
  );

  chunk_graph
}

/// Modules statically reachable from `roots` in import order. Only modules passing `include` are
/// entered, the roots always are.
fn collect_static_closure(
  modules: &IndexModules,
  roots: &[ModuleIdx],
  include: impl Fn(ModuleIdx) -> bool,
) -> Vec<ModuleIdx> {
  let mut visited = FxHashSet::default();
  let mut ret = vec![];
  let mut stack = roots.iter().rev().copied().collect::<Vec<_>>();

  while let Some(idx) = stack.pop() {
    if !visited.insert(idx) {
      continue;
    }
    ret.push(idx);
    let dependencies = modules[idx]
      .static_dependencies()
      .filter(|dep| !visited.contains(dep) && include(*dep))
      .collect::<Vec<_>>();
    stack.extend(dependencies.into_iter().rev());
  }

  ret
}
