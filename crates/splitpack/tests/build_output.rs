mod common;

use std::{
  io::{self, Read},
  path::{Path, PathBuf},
};

use flate2::read::GzDecoder;
use splitpack::{
  BuildMode, Bundler, BundlerOptions, FileSystem, Manifest, ResolutionError, ResolveOptions,
  TransformError, WriteError,
};
use splitpack_fs::{FileMetadata, MemoryFileSystem, OxcResolverFileSystem};
use splitpack_utils::xxhash::content_hash;

use common::{bundler, memory_fs, options};

const APP: [(&str, &str); 3] = [
  ("src/x.js", "import { a } from './a.js';\nexport const load = () => import('./y.js');\nconsole.log(a);\n"),
  ("src/a.js", "export const a = 'a';\n"),
  ("src/y.js", "export default 'y';\n"),
];

#[tokio::test]
async fn output_is_deterministic() {
  let first = bundler(&APP, options(&[("x", "./src/x.js")])).generate().await.unwrap();

  let mut reversed = APP;
  reversed.reverse();
  let second = bundler(&reversed, options(&[("x", "./src/x.js")])).generate().await.unwrap();

  assert_eq!(first.chunks.len(), second.chunks.len());
  for (a, b) in first.chunks.iter().zip(&second.chunks) {
    assert_eq!(a.filename, b.filename);
    assert_eq!(a.code, b.code);
  }
  assert_eq!(first.manifest, second.manifest);
}

/// Three entries over a shared pool of modules, each with a lazy chunk.
fn wide_app() -> Vec<(String, String)> {
  let mut files = vec![];
  for entry in 0..3 {
    let imports: String =
      (0..16).filter(|n| n % 3 != entry).map(|n| format!("import './m{n}.js';\n")).collect();
    files.push((
      format!("src/entry{entry}.js"),
      format!("{imports}export const load = () => import('./lazy{entry}.js');\n"),
    ));
    files.push((
      format!("src/lazy{entry}.js"),
      format!("import './m{entry}.js';\nexport default {entry};\n"),
    ));
  }
  for n in 0..16 {
    let leaf = n % 4;
    files.push((
      format!("src/m{n}.js"),
      format!("import './leaf{leaf}.js';\nexport const m{n} = {n};\n"),
    ));
  }
  for n in 0..4 {
    files.push((format!("src/leaf{n}.js"), format!("export const leaf{n} = {n};\n")));
  }
  files
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn output_is_stable_across_task_schedules() {
  let files = wide_app();
  let files = files.iter().map(|(path, code)| (path.as_str(), code.as_str())).collect::<Vec<_>>();
  let input =
    [("entry0", "./src/entry0.js"), ("entry1", "./src/entry1.js"), ("entry2", "./src/entry2.js")];

  let mut builds = vec![];
  for _ in 0..8 {
    let output = bundler(&files, options(&input)).generate().await.unwrap();
    let chunks = output
      .chunks
      .iter()
      .map(|chunk| (chunk.name.clone(), chunk.filename.clone(), chunk.modules.clone()))
      .collect::<Vec<_>>();
    builds.push(chunks);
  }

  assert_eq!(builds[0].len(), 7, "{:?}", builds[0]);
  for build in &builds[1..] {
    assert_eq!(build, &builds[0]);
  }
}

#[tokio::test]
async fn content_hash_follows_content() {
  let before = bundler(&APP, options(&[("x", "./src/x.js")])).generate().await.unwrap();

  let mut changed = APP;
  changed[2] = ("src/y.js", "export default 'why';\n");
  let after = bundler(&changed, options(&[("x", "./src/x.js")])).generate().await.unwrap();

  // `x` loads `y` by chunk name, so only `y` changes.
  assert_eq!(before.chunk("x").unwrap().filename, after.chunk("x").unwrap().filename);
  assert_ne!(before.chunk("y").unwrap().hash, after.chunk("y").unwrap().hash);
  assert_ne!(before.chunk("y").unwrap().filename, after.chunk("y").unwrap().filename);

  let y = after.chunk("y").unwrap();
  assert_eq!(y.filename.as_str(), format!("y.{}.chunk.js", &y.hash[..8]));
}

#[tokio::test]
async fn write_emits_chunks_and_manifest() {
  let fs = memory_fs(&APP);
  let bundler = Bundler::with_file_system(
    BundlerOptions {
      manifest_filename: Some("manifest.json".to_string()),
      ..options(&[("x", "./src/x.js")])
    },
    fs.clone(),
  );
  let output = bundler.write().await.unwrap();

  let manifest = fs.read_to_string(Path::new("/project/dist/manifest.json")).unwrap();
  let manifest: Manifest = serde_json::from_str(&manifest).unwrap();
  assert_eq!(manifest, output.manifest);
  assert_eq!(manifest.iter().map(|(name, _)| name.as_str()).collect::<Vec<_>>(), ["x", "y"]);

  for chunk in &output.chunks {
    let path = PathBuf::from("/project/dist").join(chunk.filename.as_str());
    let written = fs.read(&path).unwrap();
    assert_eq!(written, chunk.code.as_bytes());

    let entry = manifest.get(&chunk.name).unwrap();
    assert_eq!(entry.filename, chunk.filename.as_str());
    assert_eq!(entry.hash, content_hash(&written));
  }
  // Development builds don't compress.
  let gz = format!("/project/dist/{}.gz", output.chunks[0].filename);
  assert!(!fs.is_file(Path::new(&gz)));
}

#[tokio::test]
async fn public_path_prefixes_manifest_filenames() {
  let output = bundler(
    &APP,
    BundlerOptions {
      public_path: Some("/scripts/".to_string()),
      ..options(&[("x", "./src/x.js")])
    },
  )
  .generate()
  .await
  .unwrap();

  let x = output.chunk("x").unwrap();
  assert_eq!(output.manifest.get("x").unwrap().filename, format!("/scripts/{}", x.filename));
  assert!(!x.filename.starts_with('/'));
}

#[tokio::test]
async fn large_chunks_get_a_gzip_copy() {
  let big = format!("export const text = \"{}\";\n", "splitpack ".repeat(2000));
  let files = [("src/big.js", big.as_str()), ("src/small.js", "export const small = 1;\n")];
  let fs = memory_fs(&files);
  let output = Bundler::with_file_system(
    BundlerOptions {
      compress: Some(true),
      ..options(&[("big", "./src/big.js"), ("small", "./src/small.js")])
    },
    fs.clone(),
  )
  .write()
  .await
  .unwrap();

  let dist = PathBuf::from("/project/dist");
  let big = output.chunk("big").unwrap();
  let compressed = fs.read(&dist.join(format!("{}.gz", big.filename))).unwrap();
  let mut decoded = String::new();
  GzDecoder::new(compressed.as_slice()).read_to_string(&mut decoded).unwrap();
  assert_eq!(decoded, big.code);

  let small = output.chunk("small").unwrap();
  assert!(fs.is_file(&dist.join(small.filename.as_str())));
  assert!(!fs.is_file(&dist.join(format!("{}.gz", small.filename))));
}

#[tokio::test]
async fn jsx_in_js_modules() {
  let files = [
    (
      "src/app.js",
      "import React from 'react';\nimport { title } from './title.js';\nexport const App = () => <div className=\"app\">{title}</div>;\n",
    ),
    ("src/title.js", "export const title = 'splitpack';\n"),
    ("node_modules/react/package.json", r#"{ "name": "react", "main": "index.js" }"#),
    ("node_modules/react/index.js", "export default { createElement() {} };\n"),
  ];
  let output = bundler(&files, options(&[("app", "./src/app.js")])).generate().await.unwrap();

  let app = output.chunk("app").unwrap();
  assert_eq!(app.modules, ["node_modules/react/index.js", "src/title.js", "src/app.js"]);
  assert!(app.code.contains("React.createElement(\"div\""), "{}", app.code);
  assert!(!app.code.contains("<div"));
}

#[tokio::test]
async fn unresolved_import_fails_without_writing() {
  let fs = memory_fs(&[("src/a.js", "import './missing';\n")]);
  let bundler = Bundler::with_file_system(options(&[("a", "./src/a.js")]), fs.clone());

  let err = bundler.write().await.unwrap_err();
  let resolution = err.find::<ResolutionError>().unwrap();
  assert_eq!(resolution.specifier, "./missing");
  assert_eq!(resolution.importer, "src/a.js");
  assert_eq!(resolution.to_string(), r#"Could not resolve "./missing" (imported by src/a.js)"#);

  assert!(!fs.is_dir(Path::new("/project/dist")));
}

#[tokio::test]
async fn unresolved_entry() {
  let err = bundler(&[], options(&[("a", "./src/a.js")])).generate().await.unwrap_err();
  let resolution = err.find::<ResolutionError>().unwrap();
  assert_eq!(resolution.specifier, "./src/a.js");
  assert_eq!(resolution.importer, "<entry>");
}

#[tokio::test]
async fn syntax_error_names_module_and_transform() {
  let err = bundler(&[("src/a.js", "export const = ;\n")], options(&[("a", "./src/a.js")]))
    .generate()
    .await
    .unwrap_err();
  let transform = err.find::<TransformError>().unwrap();
  assert_eq!(transform.path, "src/a.js");
  assert_eq!(transform.transform, "lower");
}

#[tokio::test]
async fn clashing_filenames_are_rejected() {
  let files = [("src/a.js", ""), ("src/b.js", "")];
  let err = bundler(
    &files,
    BundlerOptions {
      entry_filenames: Some("bundle.js".to_string()),
      ..options(&[("a", "./src/a.js"), ("b", "./src/b.js")])
    },
  )
  .generate()
  .await
  .unwrap_err();
  assert!(err[0].to_string().contains("bundle.js"), "{}", err[0]);
}

#[tokio::test]
async fn json_and_css_modules() {
  let files = [
    ("src/app.js", "import data from './data.json';\nimport './style.css';\nconsole.log(data);\n"),
    ("src/data.json", r#"{ "answer": 42 }"#),
    ("src/style.css", "@import './base.css';\nbody { color: red; }\n"),
    ("src/base.css", "html { margin: 0; }\n"),
  ];
  let output = bundler(&files, options(&[("app", "./src/app.js")])).generate().await.unwrap();

  let app = output.chunk("app").unwrap();
  assert_eq!(app.modules, ["src/data.json", "src/base.css", "src/style.css", "src/app.js"]);
  assert!(app.code.contains(r#"export default {"answer":42};"#), "{}", app.code);
  assert!(app.code.contains(r#"import "src/base.css";"#), "{}", app.code);
  assert!(app.code.contains(r#"export default "body { color: red; }\n";"#), "{}", app.code);
}

#[tokio::test]
async fn production_minifies() {
  let files = [(
    "src/app.js",
    "// a comment that goes away\nexport function greet(name) {\n  const message = 'hello ' + name;\n  return message;\n}\n",
  )];
  let development = bundler(&files, options(&[("app", "./src/app.js")])).generate().await.unwrap();
  let production = bundler(
    &files,
    BundlerOptions { mode: Some(BuildMode::Production), ..options(&[("app", "./src/app.js")]) },
  )
  .generate()
  .await
  .unwrap();

  let development = &development.chunk("app").unwrap().code;
  let production = &production.chunk("app").unwrap().code;
  assert!(!production.contains("a comment that goes away"));
  assert!(production.len() < development.len());
  assert!(production.starts_with("//#region src/app.js\n"));
}

#[tokio::test]
async fn alias_and_extensions() {
  let files = [
    ("src/main.ts", "import { double } from '@/math';\nconsole.log(double(2));\n"),
    ("src/math.ts", "export const double = (n: number): number => n * 2;\n"),
    ("src/math.js", "export const double = () => 0;\n"),
  ];
  let output = bundler(
    &files,
    BundlerOptions {
      resolve: Some(ResolveOptions {
        extensions: Some(vec![".ts".to_string(), ".js".to_string()]),
        alias: Some([("@".to_string(), "./src".to_string())].into_iter().collect()),
        ..Default::default()
      }),
      ..options(&[("main", "./src/main.ts")])
    },
  )
  .generate()
  .await
  .unwrap();

  let main = output.chunk("main").unwrap();
  assert_eq!(main.modules, ["src/math.ts", "src/main.ts"]);
  assert!(main.code.contains(r#"from "src/math.ts""#), "{}", main.code);
  assert!(!main.code.contains(": number"));
}

/// Fails every write whose path contains `fail_on`.
#[derive(Debug, Clone)]
struct FailingFileSystem {
  inner: MemoryFileSystem,
  fail_on: &'static str,
}

impl FileSystem for FailingFileSystem {
  fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
    self.inner.read(path)
  }

  fn is_file(&self, path: &Path) -> bool {
    self.inner.is_file(path)
  }

  fn is_dir(&self, path: &Path) -> bool {
    self.inner.is_dir(path)
  }

  fn create_dir_all(&self, path: &Path) -> io::Result<()> {
    self.inner.create_dir_all(path)
  }

  fn write(&self, path: &Path, content: &[u8]) -> io::Result<()> {
    if path.to_string_lossy().contains(self.fail_on) {
      return Err(io::Error::new(io::ErrorKind::PermissionDenied, "read-only"));
    }
    self.inner.write(path, content)
  }

  fn remove_file(&self, path: &Path) -> io::Result<()> {
    self.inner.remove_file(path)
  }
}

impl OxcResolverFileSystem for FailingFileSystem {
  fn read_to_string(&self, path: &Path) -> io::Result<String> {
    self.inner.read_to_string(path)
  }

  fn metadata(&self, path: &Path) -> io::Result<FileMetadata> {
    self.inner.metadata(path)
  }

  fn symlink_metadata(&self, path: &Path) -> io::Result<FileMetadata> {
    self.inner.symlink_metadata(path)
  }

  fn read_link(&self, path: &Path) -> io::Result<PathBuf> {
    self.inner.read_link(path)
  }
}

#[tokio::test]
async fn failed_write_removes_written_files() {
  let inner = memory_fs(&APP);
  let fs = FailingFileSystem { inner: inner.clone(), fail_on: "manifest" };
  let bundler = Bundler::with_file_system(
    BundlerOptions {
      manifest_filename: Some("manifest.json".to_string()),
      ..options(&[("x", "./src/x.js")])
    },
    fs,
  );

  let err = bundler.write().await.unwrap_err();
  let write_error = err.find::<WriteError>().unwrap();
  assert_eq!(write_error.path, Path::new("/project/dist/manifest.json"));

  let output = bundler.generate().await.unwrap();
  for chunk in &output.chunks {
    assert!(!inner.is_file(&PathBuf::from("/project/dist").join(chunk.filename.as_str())));
  }
}
