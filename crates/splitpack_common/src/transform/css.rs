use std::fmt::Write as _;

use css_module_lexer::{collect_dependencies, Dependency, Mode};

/// Lowers a stylesheet to a module that imports its `@import` dependencies and exports the
/// remaining css text.
pub fn to_esm(source: &str) -> anyhow::Result<String> {
  let (dependencies, warnings) = collect_dependencies(source, Mode::Css);
  for warning in warnings {
    tracing::warn!("{warning}");
  }

  let mut requests = vec![];
  let mut stylesheet = String::with_capacity(source.len());
  let mut last_end = 0;

  for dependency in dependencies {
    if let Dependency::Import { request, range, .. } = dependency {
      let (start, mut end) = (range.start as usize, range.end as usize);
      if source.is_char_boundary(end) {
        if source[end..].starts_with("\r\n") {
          end += 2;
        } else if source[end..].starts_with('\n') {
          end += 1;
        }
      }
      stylesheet.push_str(&source[last_end..start]);
      last_end = end;
      requests.push(normalize_request(request));
    }
  }
  stylesheet.push_str(&source[last_end..]);

  let mut ret = String::new();
  for request in requests {
    writeln!(ret, "import {};", serde_json::to_string(&request)?)?;
  }
  writeln!(ret, "export default {};", serde_json::to_string(&stylesheet)?)?;
  Ok(ret)
}

/// `@import "a.css"` is relative in css, `@import "~pkg/a.css"` refers to a package.
fn normalize_request(request: &str) -> String {
  if let Some(package) = request.strip_prefix('~') {
    return package.to_string();
  }
  if request.starts_with('.') || request.starts_with('/') {
    request.to_string()
  } else {
    format!("./{request}")
  }
}
