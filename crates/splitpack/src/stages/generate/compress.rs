use std::io::Write;

use flate2::{write::GzEncoder, Compression};

/// Files smaller than this aren't worth a compressed copy.
const MIN_SIZE: usize = 10240;

const COMPRESSIBLE_EXTENSIONS: [&str; 3] = [".js", ".css", ".html"];

/// The gzip copy of `content`, `None` unless `filename` is compressible, `content` is at least
/// `MIN_SIZE` bytes and the copy is below 80% of its size.
pub fn gzip_copy(filename: &str, content: &[u8]) -> anyhow::Result<Option<Vec<u8>>> {
  if content.len() < MIN_SIZE || !COMPRESSIBLE_EXTENSIONS.iter().any(|ext| filename.ends_with(ext))
  {
    return Ok(None);
  }

  let mut encoder = GzEncoder::new(Vec::new(), Compression::best());
  encoder.write_all(content)?;
  let compressed = encoder.finish()?;

  if compressed.len() * 5 >= content.len() * 4 {
    tracing::trace!("skipped gzip copy of {filename}, ratio too low");
    return Ok(None);
  }
  Ok(Some(compressed))
}

#[cfg(test)]
mod tests {
  use std::io::Read;

  use flate2::read::GzDecoder;

  use super::*;

  #[test]
  fn large_repetitive_chunks_are_compressed() {
    let content = "console.log('splitpack');\n".repeat(1000);
    let compressed = gzip_copy("app.1234.js", content.as_bytes()).unwrap().unwrap();

    let mut decoded = String::new();
    GzDecoder::new(compressed.as_slice()).read_to_string(&mut decoded).unwrap();
    assert_eq!(decoded, content);
  }

  #[test]
  fn small_or_unlisted_files_are_skipped() {
    let content = "a".repeat(MIN_SIZE);
    assert!(gzip_copy("app.js", &content.as_bytes()[1..]).unwrap().is_none());
    assert!(gzip_copy("manifest.json", content.as_bytes()).unwrap().is_none());
    assert!(gzip_copy("app.js", content.as_bytes()).unwrap().is_some());
  }

  #[test]
  fn incompressible_content_is_skipped() {
    // xorshift noise barely compresses.
    let mut state = 0x2545_f491_u32;
    let content = (0..MIN_SIZE * 2)
      .map(|_| {
        state ^= state << 13;
        state ^= state >> 17;
        state ^= state << 5;
        state.to_le_bytes()[0]
      })
      .collect::<Vec<_>>();
    assert!(gzip_copy("noise.js", &content).unwrap().is_none());
  }
}
