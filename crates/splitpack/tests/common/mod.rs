#![allow(dead_code)]

use std::path::PathBuf;

use splitpack::{Bundler, BundlerOptions, InputItem};
use splitpack_fs::MemoryFileSystem;

pub const CWD: &str = "/project";

pub fn options(input: &[(&str, &str)]) -> BundlerOptions {
  BundlerOptions {
    input: Some(input.iter().copied().map(InputItem::from).collect()),
    cwd: Some(PathBuf::from(CWD)),
    ..Default::default()
  }
}

/// `files` are relative to `/project`.
pub fn memory_fs(files: &[(&str, &str)]) -> MemoryFileSystem {
  MemoryFileSystem::new(files.iter().map(|(path, content)| (format!("{CWD}/{path}"), *content)))
}

pub fn bundler(files: &[(&str, &str)], options: BundlerOptions) -> Bundler<MemoryFileSystem> {
  Bundler::with_file_system(options, memory_fs(files))
}
