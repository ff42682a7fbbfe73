use std::{borrow::Cow, ffi::OsStr, path::Path};

use sugar_path::SugarPath;

pub trait PathExt {
  fn representative_file_name(&self) -> Cow<str>;

  /// `self` relative to `cwd` with forward slashes, or `self` unchanged if it is not absolute.
  fn stabilize(&self, cwd: &Path) -> String;
}

impl PathExt for Path {
  /// It doesn't ensure the file name is a valid identifier in JS.
  fn representative_file_name(&self) -> Cow<str> {
    let file_name =
      self.file_stem().map_or_else(|| self.to_string_lossy(), |stem| stem.to_string_lossy());

    let file_name = match &*file_name {
      // "index": Node.js use `index` as a special name for directory import.
      // "mod": https://docs.deno.com/runtime/manual/references/contributing/style_guide#do-not-use-the-filename-indextsindexjs.
      "index" | "mod" => self
        .parent()
        .and_then(Self::file_stem)
        .map(OsStr::to_string_lossy)
        .map_or(file_name, |parent_dir_name| parent_dir_name),
      _ => file_name,
    };

    file_name
  }

  fn stabilize(&self, cwd: &Path) -> String {
    if self.is_absolute() {
      self.relative(cwd).to_slash_lossy().into_owned()
    } else {
      self.to_slash_lossy().into_owned()
    }
  }
}

#[test]
fn test_representative_file_name() {
  let cwd = Path::new(".").join("project");
  let path = cwd.join("src").join("vue.js");
  assert_eq!(path.representative_file_name(), "vue");

  let path = cwd.join("vue").join("index.js");
  assert_eq!(path.representative_file_name(), "vue");

  let path = cwd.join("vue").join("mod.ts");
  assert_eq!(path.representative_file_name(), "vue");
}

#[test]
fn test_stabilize() {
  let cwd = Path::new("/project");
  assert_eq!(Path::new("/project/src/a.js").stabilize(cwd), "src/a.js");
  assert_eq!(Path::new("/project/node_modules/react/index.js").stabilize(cwd), "node_modules/react/index.js");
  assert_eq!(Path::new("/other/b.js").stabilize(cwd), "../other/b.js");
}
