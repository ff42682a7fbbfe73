use arcstr::ArcStr;

#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone)]
pub struct OutputChunk {
  pub name: ArcStr,
  /// Relative to the output directory.
  pub filename: ArcStr,
  pub code: String,
  /// Full content hash of `code`.
  pub hash: String,
  pub is_entry: bool,
  pub is_vendor: bool,
  pub is_commons: bool,
  pub is_async: bool,
  /// Stable ids of the bundled modules in execution order.
  pub modules: Vec<String>,
  /// Filenames of the chunks this one statically depends on.
  pub imports: Vec<ArcStr>,
  pub dynamic_imports: Vec<ArcStr>,
}
