use std::path::PathBuf;

use crate::{BuildMode, ESTarget, InputItem, TransformPipeline};

#[derive(Debug)]
pub struct NormalizedBundlerOptions {
  // --- Input
  pub input: Vec<InputItem>,
  pub vendor: Vec<String>,
  pub cwd: PathBuf,

  // --- Output
  pub dir: String,
  pub entry_filenames: String,
  pub chunk_filenames: String,
  pub manifest_filename: Option<String>,
  pub public_path: String,
  pub compress: bool,

  // --- Transform
  pub mode: BuildMode,
  pub target: ESTarget,
  pub transform_pipeline: TransformPipeline,

  // --- Split
  pub vendor_chunk_name: String,
  pub commons_chunk_name: String,
  pub min_share_count: u32,
  pub allow_duplication: bool,
}

impl NormalizedBundlerOptions {
  pub fn out_dir(&self) -> PathBuf {
    self.cwd.join(&self.dir)
  }
}
