mod compress;
mod render_chunk;
pub mod write_output;

use arcstr::ArcStr;
use oxc_index::IndexVec;
use rustc_hash::FxHashMap;
use tracing::instrument;

use splitpack_common::{ChunkIdx, Manifest, ManifestEntry, NormalizedBundlerOptions, OutputChunk};
use splitpack_error::BuildResult;
use splitpack_utils::{
  rayon::{IntoParallelRefIterator, ParallelIterator},
  xxhash::content_hash,
};

use crate::types::{chunk_graph::ChunkGraph, module_graph::ModuleGraph};

use render_chunk::render_chunk;

pub struct GenerateStage<'a> {
  graph: &'a ModuleGraph,
  chunk_graph: &'a ChunkGraph,
  options: &'a NormalizedBundlerOptions,
}

impl<'a> GenerateStage<'a> {
  pub fn new(
    graph: &'a ModuleGraph,
    chunk_graph: &'a ChunkGraph,
    options: &'a NormalizedBundlerOptions,
  ) -> Self {
    Self { graph, chunk_graph, options }
  }

  /// Renders, hashes and names every chunk. Nothing touches the file system here.
  #[instrument(skip_all)]
  pub fn generate(&self) -> BuildResult<(Vec<OutputChunk>, Manifest)> {
    let rendered = self
      .chunk_graph
      .chunk_table
      .par_iter()
      .map(|chunk| -> anyhow::Result<(String, String)> {
        let code = render_chunk(chunk, &self.graph.modules, self.chunk_graph)?;
        let hash = content_hash(code.as_bytes());
        Ok((code, hash))
      })
      .collect::<anyhow::Result<Vec<_>>>()?;
    let rendered: IndexVec<ChunkIdx, (String, String)> = IndexVec::from_vec(rendered);

    let mut filename_owners: FxHashMap<ArcStr, &ArcStr> = FxHashMap::default();
    let filenames = self
      .chunk_graph
      .chunk_table
      .iter_enumerated()
      .map(|(chunk_idx, chunk)| -> BuildResult<ArcStr> {
        let hash = &rendered[chunk_idx].1;
        let filename = ArcStr::from(chunk.filename_template(self.options).render(&chunk.name, hash));
        if let Some(owner) = filename_owners.insert(ArcStr::clone(&filename), &chunk.name) {
          return Err(
            anyhow::anyhow!(
              "Chunks {owner:?} and {:?} would both be written to {filename:?}, add [name] or [chunkhash] to the filename template",
              chunk.name.as_str()
            )
            .into(),
          );
        }
        Ok(filename)
      })
      .collect::<BuildResult<IndexVec<ChunkIdx, _>>>()?;

    let mut manifest = Manifest::default();
    let chunks = self
      .chunk_graph
      .chunk_table
      .iter_enumerated()
      .zip(rendered)
      .map(|((chunk_idx, chunk), (code, hash))| {
        manifest.insert(
          chunk.name.as_str(),
          ManifestEntry {
            filename: format!("{}{}", self.options.public_path, filenames[chunk_idx]),
            hash: hash.clone(),
          },
        );
        OutputChunk {
          name: ArcStr::clone(&chunk.name),
          filename: ArcStr::clone(&filenames[chunk_idx]),
          code,
          hash,
          is_entry: chunk.kind.is_entry(),
          is_vendor: chunk.kind.is_vendor(),
          is_commons: chunk.kind.is_commons(),
          is_async: chunk.kind.is_async(),
          modules: chunk
            .modules
            .iter()
            .map(|idx| self.graph.modules[*idx].stable_id.clone())
            .collect(),
          imports: chunk.imports.iter().map(|idx| ArcStr::clone(&filenames[*idx])).collect(),
          dynamic_imports: chunk
            .dynamic_imports
            .iter()
            .map(|idx| ArcStr::clone(&filenames[*idx]))
            .collect(),
        }
      })
      .collect::<Vec<_>>();

    tracing::debug!("generated {} chunks", chunks.len());

    Ok((chunks, manifest))
  }
}
