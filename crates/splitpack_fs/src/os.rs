use std::{
  io,
  path::{Path, PathBuf},
};

use oxc_resolver::{FileMetadata, FileSystem as OxcResolverFileSystem};

use crate::file_system::FileSystem;

#[derive(Debug, Default, Clone, Copy)]
pub struct OsFileSystem;

impl FileSystem for OsFileSystem {
  fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
    std::fs::read(path)
  }

  fn is_file(&self, path: &Path) -> bool {
    std::fs::metadata(path).is_ok_and(|meta| meta.is_file())
  }

  fn is_dir(&self, path: &Path) -> bool {
    std::fs::metadata(path).is_ok_and(|meta| meta.is_dir())
  }

  fn create_dir_all(&self, path: &Path) -> io::Result<()> {
    std::fs::create_dir_all(path)
  }

  fn write(&self, path: &Path, content: &[u8]) -> io::Result<()> {
    std::fs::write(path, content)
  }

  fn remove_file(&self, path: &Path) -> io::Result<()> {
    std::fs::remove_file(path)
  }
}

impl OxcResolverFileSystem for OsFileSystem {
  fn read_to_string(&self, path: &Path) -> io::Result<String> {
    std::fs::read_to_string(path)
  }

  fn metadata(&self, path: &Path) -> io::Result<FileMetadata> {
    std::fs::metadata(path).map(|meta| FileMetadata::new(meta.is_file(), meta.is_dir(), false))
  }

  fn symlink_metadata(&self, path: &Path) -> io::Result<FileMetadata> {
    std::fs::symlink_metadata(path)
      .map(|meta| FileMetadata::new(meta.is_file(), meta.is_dir(), meta.is_symlink()))
  }

  fn read_link(&self, path: &Path) -> io::Result<PathBuf> {
    std::fs::read_link(path)
  }
}
