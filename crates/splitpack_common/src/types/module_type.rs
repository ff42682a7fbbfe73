use std::{fmt::Display, path::Path};

use splitpack_ecmascript::SourceType;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModuleType {
  Js,
  Jsx,
  Ts,
  Tsx,
  Json,
  Css,
  /// Any other extension, only bundleable if a custom transform turns it into JavaScript.
  Custom(String),
}

impl ModuleType {
  pub fn from_path(path: &Path) -> Self {
    let ext = path.extension().map(|ext| ext.to_string_lossy()).unwrap_or_default();
    match &*ext {
      "js" | "mjs" | "cjs" => Self::Js,
      "ts" | "mts" | "cts" => Self::Ts,
      "jsx" => Self::Jsx,
      "tsx" => Self::Tsx,
      "json" => Self::Json,
      "css" => Self::Css,
      _ => Self::Custom(ext.into_owned()),
    }
  }

  /// How to parse a module of this type, `None` if it isn't JavaScript. Plain `.js` may
  /// contain JSX.
  pub fn source_type(&self) -> Option<SourceType> {
    match self {
      Self::Js => Some(SourceType::mjs().with_jsx(true)),
      Self::Jsx => Some(SourceType::jsx()),
      Self::Ts => Some(SourceType::ts()),
      Self::Tsx => Some(SourceType::tsx()),
      Self::Json | Self::Css | Self::Custom(_) => None,
    }
  }
}

impl Display for ModuleType {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::Js => write!(f, "js"),
      Self::Jsx => write!(f, "jsx"),
      Self::Ts => write!(f, "ts"),
      Self::Tsx => write!(f, "tsx"),
      Self::Json => write!(f, "json"),
      Self::Css => write!(f, "css"),
      Self::Custom(ext) => write!(f, "{ext}"),
    }
  }
}

#[test]
fn from_path() {
  assert_eq!(ModuleType::from_path(Path::new("/a/b.mjs")), ModuleType::Js);
  assert_eq!(ModuleType::from_path(Path::new("/a/b.tsx")), ModuleType::Tsx);
  assert_eq!(ModuleType::from_path(Path::new("/a/b.css")), ModuleType::Css);
  assert_eq!(ModuleType::from_path(Path::new("/a/b.svg")), ModuleType::Custom("svg".into()));
  assert_eq!(ModuleType::from_path(Path::new("/a/LICENSE")), ModuleType::Custom(String::new()));
  assert!(ModuleType::Css.source_type().is_none());
  assert!(ModuleType::Js.source_type().is_some_and(|source_type| source_type.is_jsx()));
}
