/// Validates `source` and exposes it as the default export.
pub fn to_esm(source: &str) -> anyhow::Result<String> {
  let value: serde_json::Value = serde_json::from_str(source)?;
  Ok(format!("export default {};\n", serde_json::to_string(&value)?))
}

#[test]
fn lower_json() {
  assert_eq!(to_esm("{ \"a\": [1, 2] }\n").unwrap(), "export default {\"a\":[1,2]};\n");
  assert!(to_esm("{ a: 1 }").is_err());
}
