use crate::ModuleIdx;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChunkKind {
  /// Built from a user defined entry.
  Entry { module: ModuleIdx },
  Vendor,
  Commons,
  /// Split off at a dynamic import of `module`.
  Async { module: ModuleIdx },
}

impl ChunkKind {
  pub fn is_entry(&self) -> bool {
    matches!(self, Self::Entry { .. })
  }

  pub fn is_vendor(&self) -> bool {
    matches!(self, Self::Vendor)
  }

  pub fn is_commons(&self) -> bool {
    matches!(self, Self::Commons)
  }

  pub fn is_async(&self) -> bool {
    matches!(self, Self::Async { .. })
  }
}
