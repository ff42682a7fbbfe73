use std::path::Path;

use arcstr::ArcStr;
use splitpack_utils::path_ext::PathExt;
use sugar_path::SugarPath;

/// `ModuleId` is the absolute path of a module and identifies it for the whole build.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone)]
pub struct ModuleId(ArcStr);

impl ModuleId {
  pub fn new(value: impl Into<ArcStr>) -> Self {
    Self(value.into())
  }

  /// Relative to `cwd` with forward slashes, so it is the same on every machine and os.
  pub fn stabilize(&self, cwd: &Path) -> String {
    self.as_path().stabilize(cwd)
  }
}

impl std::ops::Deref for ModuleId {
  type Target = str;

  fn deref(&self) -> &Self::Target {
    &self.0
  }
}

impl AsRef<str> for ModuleId {
  fn as_ref(&self) -> &str {
    self
  }
}

impl From<ArcStr> for ModuleId {
  fn from(value: ArcStr) -> Self {
    Self::new(value)
  }
}
