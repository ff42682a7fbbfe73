use oxc::{
  allocator::Allocator,
  ast::ast,
  ast_visit::{walk, Visit},
  parser::Parser,
  span::{GetSpan, SourceType, Span},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScannedImportKind {
  /// `import ... from 'x'`, `export ... from 'x'`
  Static,
  /// `require('x')`
  Require,
  /// `import('x')`
  Dynamic,
}

#[derive(Debug, Clone)]
pub struct ScannedImport {
  pub specifier: String,
  pub kind: ScannedImportKind,
  /// The quoted specifier for static imports and `require`, the whole `import(...)` expression for
  /// dynamic imports.
  pub span: Span,
}

/// Parses `source` and returns its import requests in source order.
pub fn scan_imports(source: &str, source_type: SourceType) -> anyhow::Result<Vec<ScannedImport>> {
  let allocator = Allocator::default();
  let ret = Parser::new(&allocator, source, source_type).parse();
  if !ret.errors.is_empty() {
    anyhow::bail!("{:?}", ret.errors);
  }

  let mut scanner = ImportScanner::default();
  scanner.visit_program(&ret.program);
  Ok(scanner.records)
}

#[derive(Default)]
struct ImportScanner {
  records: Vec<ScannedImport>,
}

impl ImportScanner {
  fn add_import_record(&mut self, specifier: &str, kind: ScannedImportKind, span: Span) {
    self.records.push(ScannedImport { specifier: specifier.to_string(), kind, span });
  }
}

impl<'a> Visit<'a> for ImportScanner {
  fn visit_import_declaration(&mut self, decl: &ast::ImportDeclaration<'a>) {
    self.add_import_record(decl.source.value.as_str(), ScannedImportKind::Static, decl.source.span);
  }

  fn visit_export_named_declaration(&mut self, decl: &ast::ExportNamedDeclaration<'a>) {
    if let Some(source) = &decl.source {
      self.add_import_record(source.value.as_str(), ScannedImportKind::Static, source.span);
    }
    walk::walk_export_named_declaration(self, decl);
  }

  fn visit_export_all_declaration(&mut self, decl: &ast::ExportAllDeclaration<'a>) {
    self.add_import_record(decl.source.value.as_str(), ScannedImportKind::Static, decl.source.span);
  }

  fn visit_import_expression(&mut self, expr: &ast::ImportExpression<'a>) {
    if let ast::Expression::StringLiteral(request) = &expr.source {
      self.add_import_record(request.value.as_str(), ScannedImportKind::Dynamic, expr.span);
    } else {
      tracing::debug!("skipping non-literal dynamic import at {:?}", expr.source.span());
    }
    walk::walk_import_expression(self, expr);
  }

  fn visit_call_expression(&mut self, expr: &ast::CallExpression<'a>) {
    if let ast::Expression::Identifier(callee) = &expr.callee {
      if callee.name.as_str() == "require" && expr.arguments.len() == 1 {
        if let ast::Argument::StringLiteral(request) = &expr.arguments[0] {
          self.add_import_record(request.value.as_str(), ScannedImportKind::Require, request.span);
        }
      }
    }
    walk::walk_call_expression(self, expr);
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn scan(source: &str) -> Vec<(String, ScannedImportKind, String)> {
    scan_imports(source, SourceType::mjs())
      .unwrap()
      .into_iter()
      .map(|rec| {
        let text = source[rec.span.start as usize..rec.span.end as usize].to_string();
        (rec.specifier, rec.kind, text)
      })
      .collect()
  }

  #[test]
  fn collects_in_source_order() {
    let records = scan(
      r#"import a from "./a";
export { b } from './b';
export * from "./c";
const d = require("./d");
function load() { return import("./e"); }
"#,
    );

    assert_eq!(
      records,
      vec![
        ("./a".into(), ScannedImportKind::Static, r#""./a""#.into()),
        ("./b".into(), ScannedImportKind::Static, "'./b'".into()),
        ("./c".into(), ScannedImportKind::Static, r#""./c""#.into()),
        ("./d".into(), ScannedImportKind::Require, r#""./d""#.into()),
        ("./e".into(), ScannedImportKind::Dynamic, r#"import("./e")"#.into()),
      ]
    );
  }

  #[test]
  fn ignores_non_literal_requests() {
    let records = scan("const name = 'x'; import(name); require(name); export const y = 1;");
    assert!(records.is_empty());
  }

  #[test]
  fn syntax_error() {
    assert!(scan_imports("import from;", SourceType::mjs()).is_err());
  }
}
