use serde::Deserialize;

#[derive(Debug, Default, Clone, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ChunkSplitOptions {
  pub vendor_name: Option<String>,
  pub commons_name: Option<String>,
  /// Only used with `allow_duplication`: modules shared by fewer entries are copied into each of them.
  pub min_share_count: Option<u32>,
  pub allow_duplication: Option<bool>,
}
