use serde::{Deserialize, Serialize};
use splitpack_utils::indexmap::FxIndexMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestEntry {
  pub filename: String,
  pub hash: String,
}

/// Chunk name -> emitted file, in chunk order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Manifest {
  entries: FxIndexMap<String, ManifestEntry>,
}

impl Manifest {
  pub fn insert(&mut self, name: impl Into<String>, entry: ManifestEntry) {
    self.entries.insert(name.into(), entry);
  }

  pub fn get(&self, name: &str) -> Option<&ManifestEntry> {
    self.entries.get(name)
  }

  pub fn iter(&self) -> impl Iterator<Item = (&String, &ManifestEntry)> {
    self.entries.iter()
  }

  pub fn len(&self) -> usize {
    self.entries.len()
  }

  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }

  pub fn to_json_pretty(&self) -> serde_json::Result<String> {
    serde_json::to_string_pretty(self)
  }
}

#[test]
fn serialize_keeps_order() {
  let mut manifest = Manifest::default();
  manifest.insert("b", ManifestEntry { filename: "b.1.js".into(), hash: "1".into() });
  manifest.insert("a", ManifestEntry { filename: "a.2.js".into(), hash: "2".into() });

  let json = serde_json::to_string(&manifest).unwrap();
  assert_eq!(
    json,
    r#"{"b":{"filename":"b.1.js","hash":"1"},"a":{"filename":"a.2.js","hash":"2"}}"#
  );
  assert_eq!(serde_json::from_str::<Manifest>(&json).unwrap(), manifest);
}
