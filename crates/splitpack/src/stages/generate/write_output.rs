use std::{borrow::Cow, path::PathBuf};

use splitpack_common::{Manifest, NormalizedBundlerOptions, OutputChunk};
use splitpack_error::{BuildResult, WriteError};
use splitpack_fs::FileSystem;

use super::compress::gzip_copy;

/// Writes every chunk and its gzip copy when compression is on, then the manifest if one is
/// configured. If any write fails, the files written so far are removed again.
pub fn write_output<F: FileSystem>(
  fs: &F,
  options: &NormalizedBundlerOptions,
  chunks: &[OutputChunk],
  manifest: &Manifest,
) -> BuildResult<()> {
  let out_dir = options.out_dir();

  let mut files: Vec<(PathBuf, Cow<'_, [u8]>)> = Vec::with_capacity(chunks.len() * 2 + 1);
  for chunk in chunks {
    let path = out_dir.join(chunk.filename.as_str());
    let compressed = if options.compress {
      gzip_copy(&chunk.filename, chunk.code.as_bytes())?
    } else {
      None
    };
    files.push((path.clone(), Cow::Borrowed(chunk.code.as_bytes())));
    if let Some(compressed) = compressed {
      let mut gz_path = path.into_os_string();
      gz_path.push(".gz");
      files.push((PathBuf::from(gz_path), Cow::Owned(compressed)));
    }
  }

  if let Some(manifest_filename) = &options.manifest_filename {
    let json = manifest.to_json_pretty().map_err(anyhow::Error::from)?;
    files.push((out_dir.join(manifest_filename), Cow::Owned(json.into_bytes())));
  }

  let mut written: Vec<&PathBuf> = Vec::with_capacity(files.len());
  for (path, content) in &files {
    let ret = match path.parent() {
      Some(dir) => fs.create_dir_all(dir),
      None => Ok(()),
    }
    .and_then(|()| fs.write(path, content));

    if let Err(source) = ret {
      for written_path in written.iter().rev() {
        if let Err(err) = fs.remove_file(written_path) {
          tracing::warn!("Failed to remove {}: {err}", written_path.display());
        }
      }
      return Err(WriteError { path: path.clone(), source }.into());
    }

    tracing::trace!("wrote {}", path.display());
    written.push(path);
  }

  Ok(())
}
