pub mod module_id;

use arcstr::ArcStr;
use oxc_index::IndexVec;

use crate::{ImportRecordIdx, ModuleId, ModuleIdx, ModuleType, ResolvedImportRecord};

#[derive(Debug)]
pub struct Module {
  pub idx: ModuleIdx,
  pub id: ModuleId,
  /// `stable_id` is calculated based on `id` to be stable across machine and os.
  pub stable_id: String,
  /// File stem, or the parent directory name for `index` files.
  pub repr_name: String,
  pub module_type: ModuleType,
  pub is_user_defined_entry: bool,
  /// Bytes as read from disk.
  pub source: Vec<u8>,
  /// Output of the transform pipeline, the text import records point into.
  pub code: ArcStr,
  /// Content hash of `code`.
  pub hash: String,
  pub import_records: IndexVec<ImportRecordIdx, ResolvedImportRecord>,
  /// Sorted by stable id.
  pub importers: Vec<ModuleIdx>,
  /// Sorted by stable id.
  pub dynamic_importers: Vec<ModuleIdx>,
  pub exec_order: u32,
}

impl Module {
  pub fn static_dependencies(&self) -> impl Iterator<Item = ModuleIdx> + '_ {
    self
      .import_records
      .iter()
      .filter(|rec| rec.kind.is_static())
      .map(crate::ResolvedImportRecord::resolved_module)
  }
}
