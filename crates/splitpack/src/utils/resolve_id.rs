use std::path::Path;

use splitpack_common::ResolvedId;
use splitpack_error::ResolutionError;
use splitpack_fs::FileSystem;
use splitpack_resolver::{ResolveError, Resolver};

/// `importer_label` names the importer in errors: a stable id, `<entry>` or `<vendor>`.
pub fn resolve_id<F: FileSystem>(
  resolver: &Resolver<F>,
  specifier: &str,
  importer: Option<&Path>,
  importer_label: &str,
  is_user_defined_entry: bool,
) -> anyhow::Result<ResolvedId> {
  match resolver.resolve(importer, specifier, is_user_defined_entry) {
    Ok(resolved) => Ok(ResolvedId::new(resolved.path)),
    Err(ResolveError::NotFound(_)) => Err(ResolutionError::new(importer_label, specifier).into()),
    Err(err) => Err(err.into()),
  }
}
