use std::sync::Arc;

use tracing::instrument;

use splitpack_common::{BundlerOptions, NormalizedBundlerOptions};
use splitpack_error::BuildResult;
use splitpack_fs::{FileSystem, OsFileSystem};
use splitpack_resolver::Resolver;

use crate::{
  stages::{
    generate::{write_output::write_output, GenerateStage},
    link::LinkStage,
    partition::partition,
    scan::ScanStage,
  },
  types::{bundle_output::BundleOutput, module_graph::ModuleGraph, SharedOptions, SharedResolver},
  utils::{
    normalize_options::{normalize_options, NormalizeOptionsReturn},
    validate_options::validate_options,
  },
};

pub struct Bundler<F: FileSystem + Clone + 'static = OsFileSystem> {
  fs: F,
  options: SharedOptions,
  resolver: SharedResolver<F>,
}

impl Bundler {
  pub fn new(options: BundlerOptions) -> Self {
    Self::with_file_system(options, OsFileSystem)
  }
}

impl<F: FileSystem + Clone + 'static> Bundler<F> {
  pub fn with_file_system(options: BundlerOptions, fs: F) -> Self {
    let NormalizeOptionsReturn { options, resolve_options } = normalize_options(options);

    let resolver: SharedResolver<F> =
      Resolver::new(resolve_options, options.cwd.clone(), fs.clone()).into();

    Self { fs, options: Arc::new(options), resolver }
  }

  pub fn options(&self) -> &NormalizedBundlerOptions {
    &self.options
  }

  /// Loads, transforms and orders every module reachable from the entries.
  #[instrument(level = "debug", skip_all)]
  pub async fn scan(&self) -> BuildResult<ModuleGraph> {
    validate_options(&self.options)?;

    let scan_stage_output = ScanStage::new(
      self.fs.clone(),
      SharedOptions::clone(&self.options),
      SharedResolver::clone(&self.resolver),
    )
    .scan()
    .await?;

    Ok(LinkStage::new(scan_stage_output).link())
  }

  /// Builds every chunk in memory without writing anything.
  pub async fn generate(&self) -> BuildResult<BundleOutput> {
    let graph = self.scan().await?;
    let chunk_graph = partition(&graph, &self.options);
    let (chunks, manifest) = GenerateStage::new(&graph, &chunk_graph, &self.options).generate()?;

    Ok(BundleOutput { chunks, manifest, warnings: graph.warnings })
  }

  /// Same as [`Bundler::generate`], then writes the chunks and the manifest to `cwd/dir`.
  /// Nothing is written if the build fails.
  pub async fn write(&self) -> BuildResult<BundleOutput> {
    let output = self.generate().await?;
    write_output(&self.fs, &self.options, &output.chunks, &output.manifest)?;

    tracing::info!(
      "wrote {} chunks to {}",
      output.chunks.len(),
      self.options.out_dir().display()
    );

    Ok(output)
  }
}
