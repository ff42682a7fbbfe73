use std::collections::hash_map::Entry;

use arcstr::ArcStr;
use rustc_hash::FxHashMap;

/// Returns `name` the first time it is seen, then `name2`, `name3` and so on.
pub fn create_make_unique_name(
  mut used_name_counts: FxHashMap<ArcStr, u32>,
) -> impl FnMut(&ArcStr) -> ArcStr {
  move |name: &ArcStr| {
    let mut candidate = name.clone();
    loop {
      match used_name_counts.entry(candidate.clone()) {
        Entry::Occupied(mut occ) => {
          // This name is already used
          let next_count = *occ.get();
          occ.insert(next_count + 1);
          let mut buffer = itoa::Buffer::new();
          candidate = ArcStr::from(format!("{name}{}", buffer.format(next_count)));
        }
        Entry::Vacant(vac) => {
          // This is the first time we see this name
          let name = vac.key().clone();
          vac.insert(2);
          break name;
        }
      };
    }
  }
}

#[test]
fn numeric_suffix() {
  let mut make_unique_name = create_make_unique_name(FxHashMap::default());
  let index = arcstr::literal!("index");
  assert_eq!(make_unique_name(&index).as_str(), "index");
  assert_eq!(make_unique_name(&index).as_str(), "index2");
  assert_eq!(make_unique_name(&arcstr::literal!("index2")).as_str(), "index22");
  assert_eq!(make_unique_name(&index).as_str(), "index3");
}
