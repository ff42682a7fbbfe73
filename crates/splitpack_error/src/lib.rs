mod build_error;
mod diagnostics;

pub use crate::{
  build_error::{BuildError, BuildResult},
  diagnostics::{CycleWarning, ResolutionError, TransformError, WriteError},
};
