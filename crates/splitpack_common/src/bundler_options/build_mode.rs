use std::str::FromStr;

use serde::Deserialize;

/// Selects the mode-gated part of the transform pipeline.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildMode {
  #[default]
  Development,
  /// Appends minification to every module's pipeline.
  Production,
}

impl FromStr for BuildMode {
  type Err = String;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "development" => Ok(Self::Development),
      "production" => Ok(Self::Production),
      _ => Err(format!("Invalid mode \"{s}\".")),
    }
  }
}
