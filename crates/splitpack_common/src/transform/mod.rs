mod css;
mod json;
pub mod module_filter;
pub mod pipeline;

use std::path::Path;

use splitpack_ecmascript::EcmaCompiler;

use crate::{ESTarget, ModuleFilter, ModuleType};

/// What a transform knows about the module it runs on.
#[derive(Debug, Clone, Copy)]
pub struct TransformContext<'a> {
  pub path: &'a Path,
  pub stable_id: &'a str,
  /// Type of the module as read from disk.
  pub module_type: &'a ModuleType,
}

pub type TransformFn = fn(&TransformContext, Vec<u8>) -> anyhow::Result<Vec<u8>>;

/// One step of the per-module pipeline. Each step receives the output of the previous one.
#[derive(Debug, Clone)]
pub enum Transform {
  /// `export default <json>;`
  Json { filter: ModuleFilter },
  /// `import "<dep>";` per `@import` rule, then `export default "<stylesheet>";`
  Css { filter: ModuleFilter },
  /// Strips TypeScript and JSX and lowers syntax to `target`.
  Lower { filter: ModuleFilter, target: ESTarget },
  Minify { filter: ModuleFilter },
  Custom { name: String, filter: ModuleFilter, run: TransformFn },
}

impl Transform {
  pub fn json() -> Self {
    Self::Json { filter: ModuleFilter::json() }
  }

  pub fn css() -> Self {
    Self::Css { filter: ModuleFilter::css() }
  }

  pub fn lower(target: ESTarget) -> Self {
    Self::Lower { filter: ModuleFilter::script(), target }
  }

  pub fn minify() -> Self {
    Self::Minify { filter: ModuleFilter::any() }
  }

  pub fn custom(name: impl Into<String>, filter: ModuleFilter, run: TransformFn) -> Self {
    Self::Custom { name: name.into(), filter, run }
  }

  pub fn name(&self) -> &str {
    match self {
      Self::Json { .. } => "json",
      Self::Css { .. } => "css",
      Self::Lower { .. } => "lower",
      Self::Minify { .. } => "minify",
      Self::Custom { name, .. } => name,
    }
  }

  pub fn filter(&self) -> &ModuleFilter {
    match self {
      Self::Json { filter }
      | Self::Css { filter }
      | Self::Lower { filter, .. }
      | Self::Minify { filter }
      | Self::Custom { filter, .. } => filter,
    }
  }

  pub fn is_minify(&self) -> bool {
    matches!(self, Self::Minify { .. })
  }

  /// The type of the code this transform emits for an input of `module_type`.
  pub fn output_module_type(&self, module_type: &ModuleType) -> ModuleType {
    match self {
      Self::Json { .. } | Self::Css { .. } | Self::Lower { .. } => ModuleType::Js,
      Self::Minify { .. } | Self::Custom { .. } => module_type.clone(),
    }
  }

  /// `current_type` is the type of `code`, which differs from `ctx.module_type` once an earlier
  /// transform has turned the module into JavaScript.
  pub fn apply(
    &self,
    ctx: &TransformContext,
    current_type: &ModuleType,
    code: Vec<u8>,
  ) -> anyhow::Result<Vec<u8>> {
    match self {
      Self::Json { .. } => json::to_esm(&String::from_utf8(code)?).map(String::into_bytes),
      Self::Css { .. } => css::to_esm(&String::from_utf8(code)?).map(String::into_bytes),
      Self::Lower { target, .. } => {
        let source_type = current_type.source_type().ok_or_else(|| {
          anyhow::anyhow!("`{current_type}` modules can't be parsed as JavaScript")
        })?;
        let code = String::from_utf8(code)?;
        EcmaCompiler::lower(&code, ctx.path, source_type, (*target).into()).map(String::into_bytes)
      }
      Self::Minify { .. } => {
        EcmaCompiler::minify(&String::from_utf8(code)?).map(String::into_bytes)
      }
      Self::Custom { run, .. } => run(ctx, code),
    }
  }
}
