use rustc_hash::FxHashSet;

use splitpack_common::NormalizedBundlerOptions;
use splitpack_error::{BuildError, BuildResult};

pub fn validate_options(options: &NormalizedBundlerOptions) -> BuildResult<()> {
  let mut errors = vec![];

  if options.input.is_empty() {
    errors.push(anyhow::anyhow!("You must supply options.input to splitpack"));
  }

  let mut seen_names = FxHashSet::default();
  for name in options.input.iter().filter_map(|item| item.name.as_deref()) {
    if !seen_names.insert(name) {
      errors.push(anyhow::anyhow!("Duplicate entry name {name:?} in options.input"));
    }
    if !is_valid_chunk_name(name) {
      errors.push(anyhow::anyhow!(
        "Entry name {name:?} in options.input must be a plain file name without path separators"
      ));
    }
  }

  for (option, name) in [
    ("split.vendorName", &options.vendor_chunk_name),
    ("split.commonsName", &options.commons_chunk_name),
  ] {
    if !is_valid_chunk_name(name) {
      errors.push(anyhow::anyhow!(
        "options.{option} {name:?} must be a plain file name without path separators"
      ));
    }
  }

  for (option, template) in
    [("entryFilenames", &options.entry_filenames), ("chunkFilenames", &options.chunk_filenames)]
  {
    if template.trim().is_empty() {
      errors.push(anyhow::anyhow!("options.{option} must not be empty"));
    }
  }

  if options.manifest_filename.as_deref().is_some_and(|name| name.trim().is_empty()) {
    errors.push(anyhow::anyhow!("options.manifestFilename must not be empty"));
  }

  if errors.is_empty() {
    Ok(())
  } else {
    Err(BuildError::from(errors))
  }
}

/// Chunk names end up in `[name]`, so they must stay inside the output directory.
fn is_valid_chunk_name(name: &str) -> bool {
  !name.is_empty() && name != "." && name != ".." && !name.contains(['/', '\\'])
}
