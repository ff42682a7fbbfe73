pub mod build_mode;
pub mod chunk_split_options;
pub mod es_target;
pub mod filename_template;
pub mod input_item;
pub mod normalized_bundler_options;
pub mod resolve_options;

use std::path::PathBuf;

use serde::Deserialize;

use crate::{BuildMode, ChunkSplitOptions, ESTarget, InputItem, ResolveOptions, Transform};

#[derive(Default, Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct BundlerOptions {
  // --- Input
  pub input: Option<Vec<InputItem>>,
  /// Bare specifiers whose static closure forms the vendor chunk, e.g. `["react", "react-dom"]`.
  pub vendor: Option<Vec<String>>,
  pub cwd: Option<PathBuf>,

  // --- Output
  pub dir: Option<String>,
  pub entry_filenames: Option<String>,
  pub chunk_filenames: Option<String>,
  pub manifest_filename: Option<String>,
  /// Prefix of the filenames listed in the manifest, e.g. `/scripts/`.
  pub public_path: Option<String>,
  /// Also write `.gz` copies of large chunks. Defaults to on in production.
  pub compress: Option<bool>,

  // --- Transform
  pub mode: Option<BuildMode>,
  pub target: Option<ESTarget>,
  /// Run after the built-in loaders and before minification.
  #[serde(skip)]
  pub transforms: Option<Vec<Transform>>,

  // --- Resolve
  pub resolve: Option<ResolveOptions>,

  // --- Split
  pub split: Option<ChunkSplitOptions>,
}
