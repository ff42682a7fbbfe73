use std::{
  path::{Path, PathBuf},
  sync::Arc,
};

use arcstr::ArcStr;
use itertools::Itertools;
use sugar_path::SugarPath;

use oxc_resolver::{
  AliasValue, FsCache, ResolveError, ResolveOptions as OxcResolverOptions, ResolverGeneric,
};

use splitpack_common::ResolveOptions;
use splitpack_fs::{FileSystem, OsFileSystem};

#[derive(Debug)]
pub struct Resolver<F: FileSystem = OsFileSystem> {
  cwd: PathBuf,
  import_resolver: ResolverGeneric<FsCache<F>>,
}

#[derive(Debug)]
pub struct ResolveReturn {
  pub path: ArcStr,
}

impl<F: FileSystem> Resolver<F> {
  pub fn new(resolve_options: ResolveOptions, cwd: PathBuf, fs: F) -> Self {
    let extensions = resolve_options
      .extensions
      .unwrap_or_else(|| vec![".js".to_string(), ".json".to_string()])
      .into_iter()
      .map(|ext| if ext.starts_with('.') { ext } else { format!(".{ext}") })
      .unique()
      .collect();

    // Targets are relative to `cwd`, keys match whole path segments.
    let alias = resolve_options
      .alias
      .unwrap_or_default()
      .into_iter()
      .map(|(key, target)| {
        let target = cwd.join(target).normalize().to_string_lossy().into_owned();
        (key, vec![AliasValue::Path(target)])
      })
      .collect();

    let main_fields = resolve_options.main_fields.unwrap_or_else(|| {
      vec!["browser".to_string(), "module".to_string(), "main".to_string()]
    });

    let resolve_options = OxcResolverOptions {
      alias,
      alias_fields: vec![vec!["browser".to_string()]],
      condition_names: vec!["import".to_string(), "browser".to_string(), "default".to_string()],
      extensions,
      main_fields,
      ..Default::default()
    };

    let import_resolver =
      ResolverGeneric::new_with_cache(Arc::new(FsCache::new(fs)), resolve_options);

    Self { cwd, import_resolver }
  }

  pub fn resolve(
    &self,
    importer: Option<&Path>,
    specifier: &str,
    is_user_defined_entry: bool,
  ) -> Result<ResolveReturn, ResolveError> {
    let resolver = &self.import_resolver;

    let dir = importer
      .and_then(|importer| importer.parent())
      .filter(|inner| inner.components().next().is_some())
      .unwrap_or(self.cwd.as_path());

    let mut resolution = resolver.resolve(dir, specifier);

    // Handle `{ input: 'src/main' }` -> `<CWD>/src/main.js`
    if resolution.is_err() && is_user_defined_entry && !is_path_like(specifier) {
      let normalized_specifier = self.cwd.join(specifier).normalize();
      let result = resolver.resolve(dir, &normalized_specifier.to_string_lossy());
      if result.is_ok() {
        resolution = result;
      }
    }

    let resolution = resolution?;
    tracing::trace!("resolved {specifier:?} -> {}", resolution.full_path().display());

    Ok(ResolveReturn { path: resolution.full_path().to_string_lossy().as_ref().into() })
  }
}

fn is_path_like(specifier: &str) -> bool {
  specifier.starts_with('.') || Path::new(specifier).is_absolute()
}

#[cfg(test)]
mod tests {
  use splitpack_fs::MemoryFileSystem;

  use super::*;

  fn resolver(files: &[(&str, &str)], options: ResolveOptions) -> Resolver<MemoryFileSystem> {
    Resolver::new(options, PathBuf::from("/project"), MemoryFileSystem::new(files.iter().copied()))
  }

  fn resolve(resolver: &Resolver<MemoryFileSystem>, importer: &str, specifier: &str) -> String {
    resolver.resolve(Some(Path::new(importer)), specifier, false).unwrap().path.to_string()
  }

  #[test]
  fn exact_then_extensions_then_index() {
    let r = resolver(
      &[
        ("/project/src/a.js", ""),
        ("/project/src/b.json", "{}"),
        ("/project/src/lib/index.js", ""),
        ("/project/src/c", ""),
        ("/project/src/c.js", ""),
      ],
      ResolveOptions::default(),
    );

    assert_eq!(resolve(&r, "/project/src/main.js", "./a.js"), "/project/src/a.js");
    assert_eq!(resolve(&r, "/project/src/main.js", "./a"), "/project/src/a.js");
    assert_eq!(resolve(&r, "/project/src/main.js", "./b"), "/project/src/b.json");
    assert_eq!(resolve(&r, "/project/src/main.js", "./lib"), "/project/src/lib/index.js");
    // The exact path wins over path + extension.
    assert_eq!(resolve(&r, "/project/src/main.js", "./c"), "/project/src/c");
    assert_eq!(resolve(&r, "/project/src/lib/x.js", "../a"), "/project/src/a.js");
  }

  #[test]
  fn extension_order_is_respected() {
    let r = resolver(
      &[("/project/src/a.ts", ""), ("/project/src/a.js", "")],
      ResolveOptions { extensions: Some(vec!["ts".into(), ".js".into()]), ..Default::default() },
    );
    assert_eq!(resolve(&r, "/project/src/main.js", "./a"), "/project/src/a.ts");
  }

  #[test]
  fn node_modules_and_main_fields() {
    let r = resolver(
      &[
        ("/project/node_modules/react/package.json", r#"{ "main": "cjs/react.js" }"#),
        ("/project/node_modules/react/cjs/react.js", ""),
        (
          "/project/node_modules/lodash/package.json",
          r#"{ "browser": { "./a.js": false }, "module": "es/lodash.js", "main": "lodash.js" }"#,
        ),
        ("/project/node_modules/lodash/es/lodash.js", ""),
        ("/project/node_modules/lodash/fp/index.js", ""),
        ("/project/node_modules/tiny/index.js", ""),
      ],
      ResolveOptions::default(),
    );

    assert_eq!(
      resolve(&r, "/project/src/deep/main.js", "react"),
      "/project/node_modules/react/cjs/react.js"
    );
    assert_eq!(resolve(&r, "/project/src/main.js", "lodash"), "/project/node_modules/lodash/es/lodash.js");
    assert_eq!(
      resolve(&r, "/project/src/main.js", "lodash/fp"),
      "/project/node_modules/lodash/fp/index.js"
    );
    assert_eq!(resolve(&r, "/project/src/main.js", "tiny"), "/project/node_modules/tiny/index.js");
  }

  #[test]
  fn alias() {
    let r = resolver(
      &[("/project/src/components/button.js", ""), ("/project/src/index.js", "")],
      ResolveOptions {
        alias: Some([("app".to_string(), "./src".to_string())].into_iter().collect()),
        ..Default::default()
      },
    );

    assert_eq!(
      resolve(&r, "/project/other/main.js", "app/components/button"),
      "/project/src/components/button.js"
    );
    assert_eq!(resolve(&r, "/project/other/main.js", "app"), "/project/src/index.js");
    // Only whole path segments match an alias key.
    assert!(r.resolve(Some(Path::new("/project/other/main.js")), "application", false).is_err());
  }

  #[test]
  fn user_defined_entry_falls_back_to_cwd() {
    let r = resolver(&[("/project/src/app.js", "")], ResolveOptions::default());
    assert!(r.resolve(None, "src/app", false).is_err());
    assert_eq!(r.resolve(None, "src/app", true).unwrap().path.as_str(), "/project/src/app.js");
  }

  #[test]
  fn not_found() {
    let r = resolver(&[("/project/src/a.js", "")], ResolveOptions::default());
    let err = r.resolve(Some(Path::new("/project/src/a.js")), "./missing", false).unwrap_err();
    assert!(matches!(err, ResolveError::NotFound(ref specifier) if specifier == "./missing"));
  }

  #[test]
  fn invalid_package_json() {
    let r = resolver(
      &[("/project/node_modules/broken/package.json", "{ nope"), ("/project/node_modules/broken/index.js", "")],
      ResolveOptions::default(),
    );
    let err = r.resolve(Some(Path::new("/project/src/a.js")), "broken", false).unwrap_err();
    assert!(!matches!(err, ResolveError::NotFound(_)));
  }
}
