// A wrapper around `oxc_resolver` that applies splitpack's resolve options: alias, extensions
// and `package.json` main fields.

mod resolver;

pub use crate::resolver::{ResolveReturn, Resolver};

pub use oxc_resolver::ResolveError;
pub use splitpack_common::ResolveOptions;
