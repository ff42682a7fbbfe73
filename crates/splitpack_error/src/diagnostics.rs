use std::{io, path::PathBuf};

/// An import specifier that none of the resolution steps could map to a file.
#[derive(Debug, thiserror::Error)]
#[error("Could not resolve {specifier:?} (imported by {importer})")]
pub struct ResolutionError {
  pub importer: String,
  pub specifier: String,
}

impl ResolutionError {
  pub fn new(importer: impl Into<String>, specifier: impl Into<String>) -> Self {
    Self { importer: importer.into(), specifier: specifier.into() }
  }
}

#[derive(Debug, thiserror::Error)]
#[error("Failed to transform {path} with `{transform}`: {reason}")]
pub struct TransformError {
  pub path: String,
  pub transform: String,
  pub reason: String,
}

impl TransformError {
  pub fn new(
    path: impl Into<String>,
    transform: impl Into<String>,
    reason: impl std::fmt::Display,
  ) -> Self {
    Self { path: path.into(), transform: transform.into(), reason: reason.to_string() }
  }
}

#[derive(Debug, thiserror::Error)]
#[error("Failed to write {}: {source}", path.display())]
pub struct WriteError {
  pub path: PathBuf,
  #[source]
  pub source: io::Error,
}

/// Modules that import each other. Cycles are legal, this is informational only.
#[derive(Debug, thiserror::Error)]
#[error("Circular dependency: {}.", cycle.join(" -> "))]
pub struct CycleWarning {
  pub cycle: Vec<String>,
}

#[test]
fn messages() {
  let err = ResolutionError::new("src/a.js", "./missing");
  assert_eq!(err.to_string(), r#"Could not resolve "./missing" (imported by src/a.js)"#);

  let warning = CycleWarning { cycle: vec!["a.js".into(), "b.js".into(), "a.js".into()] };
  assert_eq!(warning.to_string(), "Circular dependency: a.js -> b.js -> a.js.");
}
