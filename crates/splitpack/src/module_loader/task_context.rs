use splitpack_common::ModuleLoaderMsg;
use splitpack_fs::FileSystem;

use crate::types::{SharedOptions, SharedResolver};

/// Used to store common data shared between all tasks.
pub struct TaskContext<F: FileSystem> {
  pub fs: F,
  pub options: SharedOptions,
  pub resolver: SharedResolver<F>,
  pub tx: tokio::sync::mpsc::Sender<ModuleLoaderMsg>,
}
