use std::path::Path;

use oxc::{
  allocator::Allocator,
  codegen::{Codegen, CodegenOptions},
  minifier::{CompressOptions, MangleOptions, Minifier, MinifierOptions},
  parser::Parser,
  semantic::SemanticBuilder,
  span::SourceType,
  transformer::{ESTarget, JsxOptions, JsxRuntime, TransformOptions, Transformer},
};

pub struct EcmaCompiler;

impl EcmaCompiler {
  /// Parses `source`, lowers its syntax to `target` and strips TypeScript and JSX.
  pub fn lower(
    source: &str,
    source_path: &Path,
    source_type: SourceType,
    target: ESTarget,
  ) -> anyhow::Result<String> {
    let allocator = Allocator::default();
    let ret = Parser::new(&allocator, source, source_type).parse();
    if !ret.errors.is_empty() {
      anyhow::bail!("{:?}", ret.errors);
    }
    let mut program = ret.program;

    let semantic_ret = SemanticBuilder::new().build(&program);
    if !semantic_ret.errors.is_empty() {
      anyhow::bail!("{:?}", semantic_ret.errors);
    }
    let scoping = semantic_ret.semantic.into_scoping();

    // JSX compiles to `React.createElement` calls.
    let transform_options = TransformOptions {
      jsx: JsxOptions { runtime: JsxRuntime::Classic, ..JsxOptions::enable() },
      ..TransformOptions::from(target)
    };
    let transformer_return = Transformer::new(&allocator, source_path, &transform_options)
      .build_with_scoping(scoping, &mut program);
    if !transformer_return.errors.is_empty() {
      anyhow::bail!("{:?}", transformer_return.errors);
    }

    Ok(Codegen::new().build(&program).code)
  }

  pub fn minify(source_text: &str) -> anyhow::Result<String> {
    let allocator = Allocator::default();
    let ret = Parser::new(&allocator, source_text, SourceType::mjs()).parse();
    if !ret.errors.is_empty() {
      anyhow::bail!("{:?}", ret.errors);
    }
    let program = allocator.alloc(ret.program);

    let ret = Minifier::new(MinifierOptions {
      mangle: Some(MangleOptions::default()),
      compress: Some(CompressOptions::default()),
    })
    .build(&allocator, program);

    let ret = Codegen::new()
      .with_options(CodegenOptions::minify())
      .with_scoping(ret.scoping)
      .build(program);

    Ok(ret.code)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn lower_strips_types() {
    let code = EcmaCompiler::lower(
      "const a: number = 1;\nexport { a };",
      Path::new("a.ts"),
      SourceType::ts(),
      ESTarget::ESNext,
    )
    .unwrap();
    assert!(!code.contains("number"));
    assert!(code.contains("const a = 1;"));
  }

  #[test]
  fn lower_compiles_jsx_in_js() {
    let code = EcmaCompiler::lower(
      "import React from 'react';\nexport const App = () => <div className=\"app\">{title}</div>;\n",
      Path::new("app.js"),
      SourceType::mjs().with_jsx(true),
      ESTarget::ESNext,
    )
    .unwrap();
    assert!(code.contains("React.createElement(\"div\""), "{code}");
    assert!(!code.contains("<div"));
  }

  #[test]
  fn lower_reports_syntax_errors() {
    let err =
      EcmaCompiler::lower("const = ;", Path::new("a.js"), SourceType::mjs(), ESTarget::ESNext);
    assert!(err.is_err());
  }

  #[test]
  fn minify_shrinks() {
    let source = "export function add(first, second) {\n  return first + second;\n}\n";
    let code = EcmaCompiler::minify(&format!("// adds two numbers\n{source}")).unwrap();
    assert!(code.len() < source.len());
    assert!(!code.contains("adds two numbers"));
  }
}
