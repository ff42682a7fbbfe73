use base_encode::to_string;
use xxhash_rust::xxh3::xxh3_128;

const CHARACTERS: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_";

/// xxh3-128 of `input`, written in base `base` with a filename-safe alphabet.
pub fn xxhash_with_base(input: &[u8], base: u8) -> String {
  let hash = xxh3_128(input).to_le_bytes();
  to_string(&hash, base, CHARACTERS).expect("base should be in 2..=64")
}

/// Content hash used for emitted artifacts and modules.
pub fn content_hash(input: &[u8]) -> String {
  xxhash_with_base(input, 64)
}

#[test]
fn test_xxhash_with_base() {
  assert_eq!(&xxhash_with_base(b"hello", 64), "YOFJeqs95x38-Gwetwem1");
  assert_eq!(&xxhash_with_base(b"hello", 36), "BPWLIfKgMQMaGIJajMXRHjNPJ");
}

#[test]
fn test_content_hash_is_stable() {
  assert_eq!(content_hash(b"hello"), "YOFJeqs95x38-Gwetwem1");
  assert_eq!(content_hash(b"hello"), content_hash(b"hello"));
  assert_ne!(content_hash(b"hello"), content_hash(b"hello!"));
}
