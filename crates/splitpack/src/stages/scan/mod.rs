use arcstr::ArcStr;
use rustc_hash::FxHashMap;
use tracing::instrument;

use splitpack_common::ResolvedId;
use splitpack_error::BuildResult;
use splitpack_fs::FileSystem;

use crate::{
  module_loader::{ModuleLoader, ModuleLoaderOutput},
  types::{SharedOptions, SharedResolver},
  utils::resolve_id::resolve_id,
};

pub type ScanStageOutput = ModuleLoaderOutput;

pub struct ScanStage<F: FileSystem + Clone + 'static> {
  fs: F,
  options: SharedOptions,
  resolver: SharedResolver<F>,
}

impl<F: FileSystem + Clone + 'static> ScanStage<F> {
  pub fn new(fs: F, options: SharedOptions, resolver: SharedResolver<F>) -> Self {
    Self { fs, options, resolver }
  }

  #[instrument(skip_all)]
  pub async fn scan(&self) -> BuildResult<ScanStageOutput> {
    let user_entries = self.resolve_user_defined_entries()?;
    let vendor_entries = self.resolve_vendor_entries()?;

    let module_loader = ModuleLoader::new(
      self.fs.clone(),
      SharedOptions::clone(&self.options),
      SharedResolver::clone(&self.resolver),
    );
    module_loader.fetch_all_modules(user_entries, vendor_entries).await
  }

  fn resolve_user_defined_entries(&self) -> BuildResult<Vec<(Option<ArcStr>, ResolvedId)>> {
    let mut ret = Vec::with_capacity(self.options.input.len());
    let mut errors = vec![];
    let mut seen: FxHashMap<ArcStr, &str> = FxHashMap::default();

    for input_item in &self.options.input {
      match resolve_id(&self.resolver, &input_item.import, None, "<entry>", true) {
        Ok(resolved_id) => {
          if let Some(previous) = seen.insert(ArcStr::clone(&resolved_id.id), &input_item.import) {
            errors.push(anyhow::anyhow!(
              "Entries {previous:?} and {:?} resolve to the same module",
              input_item.import
            ));
            continue;
          }
          ret.push((input_item.name.as_deref().map(ArcStr::from), resolved_id));
        }
        Err(err) => errors.push(err),
      }
    }

    if !errors.is_empty() {
      return Err(errors.into());
    }

    Ok(ret)
  }

  fn resolve_vendor_entries(&self) -> BuildResult<Vec<ResolvedId>> {
    let mut ret = Vec::with_capacity(self.options.vendor.len());
    let mut errors = vec![];

    for specifier in &self.options.vendor {
      match resolve_id(&self.resolver, specifier, None, "<vendor>", false) {
        Ok(resolved_id) => ret.push(resolved_id),
        Err(err) => errors.push(err),
      }
    }

    if !errors.is_empty() {
      return Err(errors.into());
    }

    Ok(ret)
  }
}
