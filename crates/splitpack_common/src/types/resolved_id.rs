use arcstr::ArcStr;

#[derive(Debug, Clone)]
pub struct ResolvedId {
  /// Absolute path of the resolved file.
  pub id: ArcStr,
}

impl ResolvedId {
  pub fn new(id: impl Into<ArcStr>) -> Self {
    Self { id: id.into() }
  }
}
