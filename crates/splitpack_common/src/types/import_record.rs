use std::fmt::Debug;

use arcstr::ArcStr;
use splitpack_ecmascript::{ScannedImport, ScannedImportKind, Span};

use crate::{ImportKind, ModuleIdx};

pub type RawImportRecord = ImportRecord<()>;
pub type ResolvedImportRecord = ImportRecord<ModuleIdx>;

#[derive(Debug, Clone)]
pub struct ImportRecord<State: Debug> {
  pub state: State,
  /// `./lib.js` in `import { foo } from './lib.js';`
  pub specifier: ArcStr,
  pub kind: ImportKind,
  /// The quoted specifier of a static import, the whole `import(...)` expression of a dynamic one.
  /// Points into the module's transformed code.
  pub span: Span,
}

impl RawImportRecord {
  pub fn new(specifier: ArcStr, kind: ImportKind, span: Span) -> Self {
    Self { state: (), specifier, kind, span }
  }

  pub fn into_resolved(self, resolved_module: ModuleIdx) -> ResolvedImportRecord {
    ResolvedImportRecord {
      state: resolved_module,
      specifier: self.specifier,
      kind: self.kind,
      span: self.span,
    }
  }
}

impl ResolvedImportRecord {
  pub fn resolved_module(&self) -> ModuleIdx {
    self.state
  }
}

impl From<ScannedImport> for RawImportRecord {
  fn from(value: ScannedImport) -> Self {
    // `require('x')` pulls the module in just like a static import.
    let kind = match value.kind {
      ScannedImportKind::Static | ScannedImportKind::Require => ImportKind::Import,
      ScannedImportKind::Dynamic => ImportKind::DynamicImport,
    };
    Self::new(value.specifier.into(), kind, value.span)
  }
}
