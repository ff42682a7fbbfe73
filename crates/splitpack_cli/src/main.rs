mod args;

use std::{path::Path, process::ExitCode, time::Instant};

use ansi_term::Colour;
use anyhow::Context;
use args::{EnhanceArgs, InputArgs, OutputArgs};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use splitpack::{Bundler, BundlerOptions, InputItem, OutputChunk};

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Commands {
  #[clap(flatten)]
  input: InputArgs,

  #[clap(flatten)]
  output: OutputArgs,

  #[clap(flatten)]
  enhance: EnhanceArgs,
}

fn load_config(path: &Path) -> anyhow::Result<BundlerOptions> {
  let content = std::fs::read_to_string(path)
    .with_context(|| format!("Failed to read config {}", path.display()))?;
  serde_json::from_str(&content).with_context(|| format!("Invalid config {}", path.display()))
}

fn parse_input_item(value: &str) -> InputItem {
  match value.split_once('=') {
    Some((name, import)) => InputItem::from((name, import)),
    None => InputItem::from(value),
  }
}

fn bundler_options(args: Commands) -> anyhow::Result<BundlerOptions> {
  let mut options = match &args.input.config {
    Some(path) => load_config(path)?,
    None => BundlerOptions::default(),
  };

  let InputArgs { config: _, cwd, input, vendor } = args.input;
  if let Some(input) = input {
    options.input = Some(input.iter().map(|item| parse_input_item(item)).collect());
  }
  if vendor.is_some() {
    options.vendor = vendor;
  }
  if cwd.is_some() {
    options.cwd = cwd;
  }

  let OutputArgs { dir, entry_filenames, chunk_filenames, manifest, public_path } = args.output;
  options.dir = dir.or(options.dir);
  options.entry_filenames = entry_filenames.or(options.entry_filenames);
  options.chunk_filenames = chunk_filenames.or(options.chunk_filenames);
  options.manifest_filename = manifest.or(options.manifest_filename);
  options.public_path = public_path.or(options.public_path);

  let EnhanceArgs { mode, target, .. } = args.enhance;
  options.mode = mode.or(options.mode);
  options.target = target.or(options.target);

  Ok(options)
}

fn print_output_chunks(chunks: &[OutputChunk]) {
  let mut left = 0;
  let mut right = 0;

  let mut rows = Vec::with_capacity(chunks.len());

  for chunk in chunks {
    #[allow(clippy::cast_precision_loss)]
    let size = format!("{:.2}", chunk.code.len() as f64 / 1024.0);

    if size.len() > right {
      right = size.len();
    }

    if chunk.filename.len() > left {
      left = chunk.filename.len();
    }

    let kind = if chunk.is_entry {
      "entry"
    } else if chunk.is_vendor {
      "vendor"
    } else if chunk.is_commons {
      "commons"
    } else {
      "async"
    };

    rows.push((chunk.filename.as_str(), kind, size));
  }

  let dim = Colour::White.dimmed();
  let color = Colour::Cyan;

  for (filename, kind, size) in rows {
    println!(
      "{}{}{:left$} {}{}{:right$}{} kB",
      dim.paint("<DIR>/"),
      color.paint(filename),
      "",
      dim.paint(format!("{kind:7}")),
      dim.paint(" │ size: "),
      "",
      size,
      left = left - filename.len(),
      right = right - size.len()
    );
  }
}

#[tokio::main]
async fn main() -> ExitCode {
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::try_from_env("SPLITPACK_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
    )
    .with_writer(std::io::stderr)
    .without_time()
    .init();

  let args = Commands::parse();
  let silent = args.enhance.silent;

  let options = match bundler_options(args) {
    Ok(options) => options,
    Err(err) => {
      eprintln!("{} {err:#}", Colour::Red.paint("Error:"));
      return ExitCode::FAILURE;
    }
  };

  let bundler = Bundler::new(options);

  let start = Instant::now();
  match bundler.write().await {
    Ok(output) => {
      if !silent {
        for warning in &output.warnings {
          println!("{} {}", Colour::Yellow.paint("Warning:"), warning);
        }

        if !output.chunks.is_empty() {
          print_output_chunks(&output.chunks);
        }

        let elapsed = format!("{:.2} ms", start.elapsed().as_secs_f64() * 1000.0);
        println!(
          "\n{} Finished in {}",
          Colour::Green.paint("✔"),
          Colour::White.bold().paint(elapsed)
        );
      }
      ExitCode::SUCCESS
    }
    Err(errors) => {
      for error in &*errors {
        eprintln!("{} {error:#}", Colour::Red.paint("Error:"));
      }
      ExitCode::FAILURE
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn input_item_with_name() {
    let item = parse_input_item("app=./src/app.js");
    assert_eq!(item.name.as_deref(), Some("app"));
    assert_eq!(item.import, "./src/app.js");

    let item = parse_input_item("./src/app.js");
    assert_eq!(item.name, None);
    assert_eq!(item.import, "./src/app.js");
  }

  #[test]
  fn flags_override_config() {
    let args = Commands::parse_from([
      "splitpack",
      "--input",
      "main=./src/main.js",
      "--vendor",
      "react",
      "--mode",
      "production",
      "--dir",
      "out",
      "--public-path",
      "/scripts/",
    ]);
    let options = bundler_options(args).unwrap();

    let input = options.input.unwrap();
    assert_eq!(input.len(), 1);
    assert_eq!(input[0].name.as_deref(), Some("main"));
    assert_eq!(options.vendor.unwrap(), ["react"]);
    assert_eq!(options.mode, Some(splitpack::BuildMode::Production));
    assert_eq!(options.dir.as_deref(), Some("out"));
    assert_eq!(options.public_path.as_deref(), Some("/scripts/"));
    assert!(options.entry_filenames.is_none());
  }
}
