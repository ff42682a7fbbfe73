mod ecma_compiler;
mod import_scanner;

pub use crate::{
  ecma_compiler::EcmaCompiler,
  import_scanner::{scan_imports, ScannedImport, ScannedImportKind},
};

pub use oxc::{
  span::{SourceType, Span},
  transformer::ESTarget as OxcESTarget,
};
