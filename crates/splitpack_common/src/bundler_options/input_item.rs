use std::borrow::Cow;

use serde::Deserialize;

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InputItem {
  /// The entry chunk name. Defaults to the file stem of the resolved entry.
  pub name: Option<String>,
  pub import: String,
}

impl From<&str> for InputItem {
  fn from(value: &str) -> Self {
    Self { name: None, import: value.to_string() }
  }
}

impl From<Cow<'_, str>> for InputItem {
  fn from(value: Cow<'_, str>) -> Self {
    Self { name: None, import: value.to_string() }
  }
}

impl From<(&str, &str)> for InputItem {
  fn from((name, import): (&str, &str)) -> Self {
    Self { name: Some(name.to_string()), import: import.to_string() }
  }
}
