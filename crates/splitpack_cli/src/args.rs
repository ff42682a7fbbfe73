use std::path::PathBuf;

use clap::Args;

use splitpack::{BuildMode, ESTarget};

#[derive(Args)]
pub struct InputArgs {
  /// JSON file with bundler options. Flags override its values.
  #[clap(long, short = 'c')]
  pub config: Option<PathBuf>,

  #[clap(long)]
  pub cwd: Option<PathBuf>,

  /// An entry, either `path` or `name=path`. Repeatable.
  #[clap(long, short = 'i', action = clap::ArgAction::Append)]
  pub input: Option<Vec<String>>,

  /// A package that goes to the vendor chunk. Repeatable.
  #[clap(long, action = clap::ArgAction::Append)]
  pub vendor: Option<Vec<String>>,
}

#[derive(Args)]
pub struct OutputArgs {
  #[clap(long, short = 'd')]
  pub dir: Option<String>,

  #[clap(long)]
  pub entry_filenames: Option<String>,

  #[clap(long)]
  pub chunk_filenames: Option<String>,

  /// Writes a manifest of every chunk under this name.
  #[clap(long)]
  pub manifest: Option<String>,

  /// Prefixes the filenames in the manifest, e.g. `/scripts/`.
  #[clap(long)]
  pub public_path: Option<String>,
}

#[derive(Args)]
pub struct EnhanceArgs {
  /// `development` or `production`.
  #[clap(long, short = 'm')]
  pub mode: Option<BuildMode>,

  /// `es5`, `es2015` ... `es2024` or `esnext`.
  #[clap(long, default_missing_value = "esnext")]
  pub target: Option<ESTarget>,

  /// Only print errors.
  #[clap(long, short = 's')]
  pub silent: bool,
}
