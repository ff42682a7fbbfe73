use std::{
  io::{self, Read, Write},
  path::{Component, Path, PathBuf},
};

use oxc_resolver::{FileMetadata, FileSystem as OxcResolverFileSystem};
use vfs::{MemoryFS, VfsPath};

use crate::file_system::FileSystem;

/// In-memory tree backed by `vfs`. Paths are absolute and unix-like, e.g. `/project/src/a.js`.
#[derive(Debug, Clone)]
pub struct MemoryFileSystem {
  root: VfsPath,
}

impl Default for MemoryFileSystem {
  fn default() -> Self {
    Self { root: VfsPath::new(MemoryFS::new()) }
  }
}

impl MemoryFileSystem {
  /// Creates a file system pre-populated with `files`, creating parent directories as needed.
  pub fn new<P: AsRef<Path>, C: AsRef<[u8]>>(files: impl IntoIterator<Item = (P, C)>) -> Self {
    let fs = Self::default();
    for (path, content) in files {
      let path = path.as_ref();
      if let Some(parent) = path.parent() {
        fs.create_dir_all(parent).expect("Failed to create directory in memory");
      }
      fs.write(path, content.as_ref()).expect("Failed to write file in memory");
    }
    fs
  }

  fn vfs_path(&self, path: &Path) -> io::Result<VfsPath> {
    let segments = path
      .components()
      .filter_map(|component| match component {
        Component::Normal(segment) => Some(segment.to_string_lossy()),
        _ => None,
      })
      .collect::<Vec<_>>();

    if segments.is_empty() {
      return Ok(self.root.clone());
    }

    self.root.join(segments.join("/")).map_err(into_io_error)
  }
}

fn into_io_error(err: vfs::VfsError) -> io::Error {
  io::Error::other(err.to_string())
}

fn not_found(path: &Path) -> io::Error {
  io::Error::new(io::ErrorKind::NotFound, format!("{} does not exist", path.display()))
}

impl FileSystem for MemoryFileSystem {
  fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
    let vfs_path = self.vfs_path(path)?;
    if !vfs_path.is_file().unwrap_or(false) {
      return Err(not_found(path));
    }
    let mut file = vfs_path.open_file().map_err(into_io_error)?;
    let mut buf = Vec::new();
    file.read_to_end(&mut buf)?;
    Ok(buf)
  }

  fn is_file(&self, path: &Path) -> bool {
    self.vfs_path(path).is_ok_and(|p| p.is_file().unwrap_or(false))
  }

  fn is_dir(&self, path: &Path) -> bool {
    self.vfs_path(path).is_ok_and(|p| p.is_dir().unwrap_or(false))
  }

  fn create_dir_all(&self, path: &Path) -> io::Result<()> {
    self.vfs_path(path)?.create_dir_all().map_err(into_io_error)
  }

  fn write(&self, path: &Path, content: &[u8]) -> io::Result<()> {
    let mut file = self.vfs_path(path)?.create_file().map_err(into_io_error)?;
    file.write_all(content)?;
    file.flush()
  }

  fn remove_file(&self, path: &Path) -> io::Result<()> {
    self.vfs_path(path)?.remove_file().map_err(into_io_error)
  }
}

// No symlinks in memory.
impl OxcResolverFileSystem for MemoryFileSystem {
  fn read_to_string(&self, path: &Path) -> io::Result<String> {
    let bytes = self.read(path)?;
    String::from_utf8(bytes).map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))
  }

  fn metadata(&self, path: &Path) -> io::Result<FileMetadata> {
    let is_file = self.is_file(path);
    let is_dir = self.is_dir(path);
    if !is_file && !is_dir {
      return Err(not_found(path));
    }
    Ok(FileMetadata::new(is_file, is_dir, false))
  }

  fn symlink_metadata(&self, path: &Path) -> io::Result<FileMetadata> {
    self.metadata(path)
  }

  fn read_link(&self, path: &Path) -> io::Result<PathBuf> {
    Err(io::Error::new(
      io::ErrorKind::InvalidInput,
      format!("{} is not a symlink", path.display()),
    ))
  }
}
