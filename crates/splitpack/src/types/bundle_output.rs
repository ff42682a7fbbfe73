use splitpack_common::{Manifest, OutputChunk};

#[derive(Debug, Default)]
pub struct BundleOutput {
  /// In chunk order: entries, vendor, commons, async chunks.
  pub chunks: Vec<OutputChunk>,
  pub manifest: Manifest,
  pub warnings: Vec<anyhow::Error>,
}

impl BundleOutput {
  pub fn chunk(&self, name: &str) -> Option<&OutputChunk> {
    self.chunks.iter().find(|chunk| chunk.name.as_str() == name)
  }
}
