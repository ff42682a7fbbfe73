use indexmap::IndexMap;
use serde::Deserialize;

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ResolveOptions {
  /// Tried in order after the exact path. Defaults to `[".js", ".json"]`.
  pub extensions: Option<Vec<String>>,
  /// Specifier prefix -> path relative to `cwd`. The first matching key wins.
  pub alias: Option<IndexMap<String, String>>,
  /// `package.json` fields naming a package entry. Defaults to `["browser", "module", "main"]`.
  pub main_fields: Option<Vec<String>>,
}
