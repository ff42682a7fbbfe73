use std::sync::Arc;

use arcstr::ArcStr;
use oxc_index::IndexVec;
use sugar_path::SugarPath;

use splitpack_common::{
  ImportRecordIdx, Module, ModuleId, ModuleIdx, ModuleLoaderMsg, ModuleType,
  NormalModuleTaskResult, RawImportRecord, ResolvedId, TransformContext,
};
use splitpack_ecmascript::scan_imports;
use splitpack_error::{BuildResult, TransformError};
use splitpack_fs::FileSystem;
use splitpack_utils::{
  path_ext::PathExt, sanitize_file_name::sanitize_file_name, xxhash::content_hash,
};

use crate::utils::resolve_id::resolve_id;

use super::task_context::TaskContext;

pub struct ModuleTaskOwner {
  importer_id: String,
}

impl ModuleTaskOwner {
  pub fn new(importer_id: String) -> Self {
    ModuleTaskOwner { importer_id }
  }
}

pub struct ModuleTask<F: FileSystem> {
  ctx: Arc<TaskContext<F>>,
  idx: ModuleIdx,
  owner: Option<ModuleTaskOwner>,
  resolved_id: ResolvedId,
  is_user_defined_entry: bool,
}

impl<F: FileSystem> ModuleTask<F> {
  pub fn new(
    ctx: Arc<TaskContext<F>>,
    idx: ModuleIdx,
    owner: Option<ModuleTaskOwner>,
    resolved_id: ResolvedId,
    is_user_defined_entry: bool,
  ) -> Self {
    Self { ctx, idx, owner, resolved_id, is_user_defined_entry }
  }

  pub async fn run(self) {
    if let Err(errs) = self.run_inner().await {
      // The loader stops listening after the first failure, later sends have no receiver.
      let _ = self.ctx.tx.send(ModuleLoaderMsg::BuildErrors(errs.0)).await;
    }
  }

  async fn run_inner(&self) -> BuildResult<()> {
    let id = ModuleId::new(ArcStr::clone(&self.resolved_id.id));
    let path = self.resolved_id.id.as_path();
    let stable_id = id.stabilize(&self.ctx.options.cwd);
    tracing::trace!("loading {stable_id}");

    let source = self.ctx.fs.read(path).map_err(|err| {
      anyhow::anyhow!(
        "Could not load {stable_id}{} - {err}.",
        self
          .owner
          .as_ref()
          .map(|owner| format!(" (imported by {})", owner.importer_id))
          .unwrap_or_default(),
      )
    })?;

    let module_type = ModuleType::from_path(path);
    let transform_ctx =
      TransformContext { path, stable_id: &stable_id, module_type: &module_type };
    let pipeline = &self.ctx.options.transform_pipeline;
    let code = pipeline.run(&transform_ctx, source.clone())?;
    let output_type = pipeline.output_module_type(&transform_ctx);

    let source_type = output_type.source_type().ok_or_else(|| {
      TransformError::new(
        &stable_id,
        "scan",
        format!("no transform turns `{output_type}` modules into JavaScript"),
      )
    })?;
    let code =
      String::from_utf8(code).map_err(|err| TransformError::new(&stable_id, "scan", err))?;
    let raw_import_records = scan_imports(&code, source_type)
      .map_err(|err| TransformError::new(&stable_id, "scan", format!("{err:#}")))?
      .into_iter()
      .map(RawImportRecord::from)
      .collect::<IndexVec<ImportRecordIdx, _>>();

    let resolved_deps = raw_import_records
      .iter()
      .map(|rec| resolve_id(&self.ctx.resolver, &rec.specifier, Some(path), &stable_id, false))
      .collect::<anyhow::Result<IndexVec<ImportRecordIdx, _>>>()?;

    let repr_name = sanitize_file_name(&path.representative_file_name());
    let hash = content_hash(code.as_bytes());
    tracing::trace!("loaded {stable_id} with {} imports", raw_import_records.len());

    let result = ModuleLoaderMsg::NormalModuleDone(NormalModuleTaskResult {
      module: Module {
        idx: self.idx,
        id,
        stable_id,
        repr_name,
        module_type,
        is_user_defined_entry: self.is_user_defined_entry,
        source,
        code: code.into(),
        hash,
        import_records: IndexVec::default(),
        importers: Vec::new(),
        dynamic_importers: Vec::new(),
        exec_order: u32::MAX,
      },
      resolved_deps,
      raw_import_records,
    });

    let _ = self.ctx.tx.send(result).await;

    Ok(())
  }
}
