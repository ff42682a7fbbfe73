use splitpack_error::TransformError;

use crate::{BuildMode, ESTarget, ModuleType, Transform, TransformContext};

/// Ordered transforms every module runs through before its imports are scanned.
#[derive(Debug, Clone, Default)]
pub struct TransformPipeline {
  transforms: Vec<Transform>,
}

impl TransformPipeline {
  pub fn new(transforms: Vec<Transform>) -> Self {
    Self { transforms }
  }

  /// The loaders every build has, plus minification in production.
  pub fn for_mode(mode: BuildMode, target: ESTarget) -> Self {
    let mut transforms = vec![Transform::lower(target), Transform::json(), Transform::css()];
    match mode {
      BuildMode::Development => {}
      BuildMode::Production => transforms.push(Transform::minify()),
    }
    Self { transforms }
  }

  /// Inserts `transforms` after the loaders and before minification.
  #[must_use]
  pub fn with_user_transforms(mut self, transforms: Vec<Transform>) -> Self {
    let at = self.transforms.iter().position(Transform::is_minify).unwrap_or(self.transforms.len());
    self.transforms.splice(at..at, transforms);
    self
  }

  pub fn transforms(&self) -> &[Transform] {
    &self.transforms
  }

  pub fn run(&self, ctx: &TransformContext, code: Vec<u8>) -> anyhow::Result<Vec<u8>> {
    let mut module_type = ctx.module_type.clone();
    let mut code = code;
    for transform in self.transforms.iter().filter(|transform| transform.filter().matches(ctx)) {
      tracing::trace!("{} -> {}", transform.name(), ctx.stable_id);
      code = transform
        .apply(ctx, &module_type, code)
        .map_err(|err| TransformError::new(ctx.stable_id, transform.name(), format!("{err:#}")))?;
      module_type = transform.output_module_type(&module_type);
    }
    Ok(code)
  }

  /// The type of the code `run` produces for this module.
  pub fn output_module_type(&self, ctx: &TransformContext) -> ModuleType {
    self
      .transforms
      .iter()
      .filter(|transform| transform.filter().matches(ctx))
      .fold(ctx.module_type.clone(), |module_type, transform| {
        transform.output_module_type(&module_type)
      })
  }
}
