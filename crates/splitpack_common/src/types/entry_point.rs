use arcstr::ArcStr;

use crate::ModuleIdx;

#[derive(Debug)]
pub struct EntryPoint {
  pub idx: ModuleIdx,
  pub name: Option<ArcStr>,
  pub kind: EntryPointKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryPointKind {
  UserDefined,
  /// A root of the vendor chunk.
  Vendor,
  DynamicImport,
}
