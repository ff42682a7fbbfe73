use std::sync::LazyLock;

use regex::{Captures, Regex};

/// Matches `[name]`, `[hash]`, `[chunkhash]` and their `[hash:N]` forms.
static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
  Regex::new(r"\[(name|hash|chunkhash)(?::(\d+))?\]").expect("placeholder regex should be valid")
});

const DEFAULT_HASH_LEN: usize = 8;

#[derive(Debug, Clone)]
pub struct FilenameTemplate {
  template: String,
}

impl FilenameTemplate {
  pub fn new(template: String) -> Self {
    Self { template }
  }

  /// `hash` is the full content hash, placeholders take a prefix of it.
  pub fn render(&self, name: &str, hash: &str) -> String {
    PLACEHOLDER
      .replace_all(&self.template, |caps: &Captures| {
        if &caps[1] == "name" {
          return name.to_string();
        }
        let len = caps
          .get(2)
          .and_then(|len| len.as_str().parse::<usize>().ok())
          .unwrap_or(DEFAULT_HASH_LEN)
          .min(hash.len());
        hash[..len].to_string()
      })
      .into_owned()
  }
}

impl From<String> for FilenameTemplate {
  fn from(template: String) -> Self {
    Self::new(template)
  }
}
