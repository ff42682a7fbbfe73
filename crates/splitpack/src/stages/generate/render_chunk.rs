use std::fmt::Write as _;

use splitpack_common::{Chunk, Module};

use crate::types::{chunk_graph::ChunkGraph, IndexModules};

/// Called by the emitted code to load a split chunk: `__splitpack_load__(chunkName, moduleId)`.
/// The page runtime maps the chunk name to a file through the manifest.
pub const LOAD_CHUNK_FN: &str = "__splitpack_load__";

pub fn render_chunk(
  chunk: &Chunk,
  modules: &IndexModules,
  chunk_graph: &ChunkGraph,
) -> anyhow::Result<String> {
  let mut ret = String::new();
  for (index, module_idx) in chunk.modules.iter().enumerate() {
    let module = &modules[*module_idx];
    if index > 0 {
      ret.push('\n');
    }
    writeln!(ret, "//#region {}", module.stable_id)?;
    let code = render_module(module, modules, chunk_graph)?;
    let code = code.trim_end();
    if !code.is_empty() {
      ret.push_str(code);
      ret.push('\n');
    }
    ret.push_str("//#endregion\n");
  }
  Ok(ret)
}

/// Rewrites static specifiers to the stable id of the imported module and literal dynamic imports
/// to chunk loads.
fn render_module(
  module: &Module,
  modules: &IndexModules,
  chunk_graph: &ChunkGraph,
) -> anyhow::Result<String> {
  let code = module.code.as_str();
  let mut records = module.import_records.iter().collect::<Vec<_>>();
  records.sort_by_key(|rec| rec.span.start);

  let mut ret = String::with_capacity(code.len());
  let mut last_end = 0;
  for rec in records {
    let (start, end) = (rec.span.start as usize, rec.span.end as usize);
    if start < last_end {
      continue;
    }
    ret.push_str(&code[last_end..start]);

    let importee = &modules[rec.resolved_module()];
    let stable_id = serde_json::to_string(&importee.stable_id)?;
    if rec.kind.is_static() {
      ret.push_str(&stable_id);
    } else {
      let chunk_name = chunk_graph.module_to_chunk[importee.idx]
        .map_or("", |chunk_idx| chunk_graph.chunk_table[chunk_idx].name.as_str());
      write!(ret, "{LOAD_CHUNK_FN}({}, {stable_id})", serde_json::to_string(chunk_name)?)?;
    }
    last_end = end;
  }
  ret.push_str(&code[last_end..]);

  Ok(ret)
}
