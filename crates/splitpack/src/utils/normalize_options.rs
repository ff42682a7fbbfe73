use sugar_path::SugarPath;

use splitpack_common::{
  BuildMode, BundlerOptions, NormalizedBundlerOptions, ResolveOptions, TransformPipeline,
};

pub struct NormalizeOptionsReturn {
  pub options: NormalizedBundlerOptions,
  pub resolve_options: ResolveOptions,
}

pub fn normalize_options(mut raw_options: BundlerOptions) -> NormalizeOptionsReturn {
  let raw_resolve = std::mem::take(&mut raw_options.resolve).unwrap_or_default();
  let raw_split = std::mem::take(&mut raw_options.split).unwrap_or_default();

  let mode = raw_options.mode.unwrap_or_default();
  let target = raw_options.target.unwrap_or_default();
  let transform_pipeline = TransformPipeline::for_mode(mode, target)
    .with_user_transforms(raw_options.transforms.unwrap_or_default());

  let cwd = raw_options
    .cwd
    .unwrap_or_else(|| std::env::current_dir().expect("Failed to get current dir"))
    .absolutize();

  let normalized = NormalizedBundlerOptions {
    input: raw_options.input.unwrap_or_default(),
    vendor: raw_options.vendor.unwrap_or_default(),
    cwd,
    dir: raw_options.dir.unwrap_or_else(|| "dist".to_string()),
    entry_filenames: raw_options
      .entry_filenames
      .unwrap_or_else(|| "[name].[chunkhash].js".to_string()),
    chunk_filenames: raw_options
      .chunk_filenames
      .unwrap_or_else(|| "[name].[chunkhash].chunk.js".to_string()),
    manifest_filename: raw_options.manifest_filename,
    public_path: raw_options.public_path.unwrap_or_default(),
    compress: raw_options.compress.unwrap_or(mode == BuildMode::Production),
    mode,
    target,
    transform_pipeline,
    vendor_chunk_name: raw_split.vendor_name.unwrap_or_else(|| "vendor".to_string()),
    commons_chunk_name: raw_split.commons_name.unwrap_or_else(|| "commons".to_string()),
    // A module shared by a single entry isn't shared at all.
    min_share_count: raw_split.min_share_count.unwrap_or(2).max(2),
    allow_duplication: raw_split.allow_duplication.unwrap_or(false),
  };

  NormalizeOptionsReturn { options: normalized, resolve_options: raw_resolve }
}
