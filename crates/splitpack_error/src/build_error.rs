use std::ops::{Deref, DerefMut};

#[derive(Debug)]
pub struct BuildError(pub Vec<anyhow::Error>);

impl BuildError {
  /// Finds the first error of type `E`, if any of the collected errors is one.
  pub fn find<E>(&self) -> Option<&E>
  where
    E: std::fmt::Display + std::fmt::Debug + Send + Sync + 'static,
  {
    self.0.iter().find_map(|err| err.downcast_ref::<E>())
  }
}

impl Deref for BuildError {
  type Target = Vec<anyhow::Error>;

  fn deref(&self) -> &Self::Target {
    &self.0
  }
}

impl DerefMut for BuildError {
  fn deref_mut(&mut self) -> &mut Self::Target {
    &mut self.0
  }
}

impl From<anyhow::Error> for BuildError {
  fn from(error: anyhow::Error) -> Self {
    Self(vec![error])
  }
}

impl From<Vec<anyhow::Error>> for BuildError {
  fn from(errors: Vec<anyhow::Error>) -> Self {
    Self(errors)
  }
}

macro_rules! impl_from_diagnostic {
  ($($ty:ty),*) => {
    $(
      impl From<$ty> for BuildError {
        fn from(error: $ty) -> Self {
          Self(vec![anyhow::Error::new(error)])
        }
      }
    )*
  };
}

impl_from_diagnostic!(
  crate::ResolutionError,
  crate::TransformError,
  crate::WriteError
);

pub type BuildResult<T> = anyhow::Result<T, BuildError>;

#[test]
fn find_typed_error() {
  let err = BuildError::from(vec![
    anyhow::anyhow!("unrelated"),
    anyhow::Error::new(crate::ResolutionError::new("src/a.js", "./missing")),
  ]);
  let found = err.find::<crate::ResolutionError>().unwrap();
  assert_eq!(found.specifier, "./missing");
  assert!(err.find::<crate::WriteError>().is_none());
}
