use std::{
  path::{Path, PathBuf},
  sync::LazyLock,
};

use regex::Regex;
use sugar_path::SugarPath;

use crate::TransformContext;

static SCRIPT: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"\.(m?js|jsx|ts|tsx)$").expect("script regex should be valid"));
static JSON: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"\.json$").expect("json regex should be valid"));
static CSS: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"\.css$").expect("css regex should be valid"));
static NODE_MODULES: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"(^|/)node_modules/").expect("node_modules regex should be valid"));
static ANY: LazyLock<Regex> = LazyLock::new(|| Regex::new("").expect("empty regex should be valid"));

/// Decides which modules a transform applies to. Regexes run against the module path with
/// forward slashes.
#[derive(Debug, Clone)]
pub struct ModuleFilter {
  pub test: Regex,
  pub exclude: Option<Regex>,
  /// Directory the module must live in. Relative directories are relative to `cwd`.
  pub include: Option<PathBuf>,
}

impl ModuleFilter {
  pub fn new(test: Regex) -> Self {
    Self { test, exclude: None, include: None }
  }

  pub fn any() -> Self {
    Self::new(ANY.clone())
  }

  /// JavaScript, JSX and TypeScript outside of `node_modules`.
  pub fn script() -> Self {
    Self::new(SCRIPT.clone()).with_exclude(NODE_MODULES.clone())
  }

  pub fn json() -> Self {
    Self::new(JSON.clone())
  }

  pub fn css() -> Self {
    Self::new(CSS.clone())
  }

  #[must_use]
  pub fn with_exclude(mut self, exclude: Regex) -> Self {
    self.exclude = Some(exclude);
    self
  }

  #[must_use]
  pub fn with_include(mut self, include: impl Into<PathBuf>) -> Self {
    self.include = Some(include.into());
    self
  }

  pub fn matches(&self, ctx: &TransformContext) -> bool {
    let path = ctx.path.to_slash_lossy();
    if !self.test.is_match(&path) {
      return false;
    }
    if self.exclude.as_ref().is_some_and(|exclude| exclude.is_match(&path)) {
      return false;
    }
    match &self.include {
      Some(dir) if dir.is_absolute() => ctx.path.starts_with(dir),
      Some(dir) => Path::new(ctx.stable_id).starts_with(dir),
      None => true,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::ModuleType;

  fn matches(filter: &ModuleFilter, path: &str) -> bool {
    let stable_id = path.trim_start_matches("/project/");
    let module_type = ModuleType::from_path(Path::new(path));
    filter.matches(&TransformContext { path: Path::new(path), stable_id, module_type: &module_type })
  }

  #[test]
  fn script_skips_node_modules() {
    let filter = ModuleFilter::script();
    assert!(matches(&filter, "/project/src/app.tsx"));
    assert!(matches(&filter, "/project/src/app.mjs"));
    assert!(!matches(&filter, "/project/node_modules/react/index.js"));
    assert!(!matches(&filter, "/project/src/data.json"));
  }

  #[test]
  fn include_directory() {
    let filter = ModuleFilter::any().with_include("src/legacy");
    assert!(matches(&filter, "/project/src/legacy/a.js"));
    assert!(!matches(&filter, "/project/src/a.js"));

    let filter = ModuleFilter::any().with_include("/project/src");
    assert!(matches(&filter, "/project/src/a.js"));
    assert!(!matches(&filter, "/project/lib/a.js"));
  }
}
