#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum ImportKind {
  /// `import foo from 'foo'`, `export * from 'foo'` or `require('foo')`
  Import,
  /// `import('foo')`
  DynamicImport,
}

impl ImportKind {
  pub fn is_static(&self) -> bool {
    matches!(self, Self::Import)
  }
}
