use oxc_index::IndexVec;

use crate::{ImportRecordIdx, Module, RawImportRecord, ResolvedId};

pub struct NormalModuleTaskResult {
  /// `import_records` is still empty, the loader fills it from the fields below.
  pub module: Module,
  pub resolved_deps: IndexVec<ImportRecordIdx, ResolvedId>,
  pub raw_import_records: IndexVec<ImportRecordIdx, RawImportRecord>,
}
