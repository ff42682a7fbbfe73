use std::{io, path::Path};

use oxc_resolver::FileSystem as OxcResolverFileSystem;

/// The only way the bundler touches the disk. Resolution goes through the `oxc_resolver` half,
/// loading and emitting through the rest, so a build can run against an in-memory tree.
pub trait FileSystem: OxcResolverFileSystem + Send + Sync {
  fn read(&self, path: &Path) -> io::Result<Vec<u8>>;

  fn is_file(&self, path: &Path) -> bool;

  fn is_dir(&self, path: &Path) -> bool;

  fn create_dir_all(&self, path: &Path) -> io::Result<()>;

  fn write(&self, path: &Path, content: &[u8]) -> io::Result<()>;

  fn remove_file(&self, path: &Path) -> io::Result<()>;
}
