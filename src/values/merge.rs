use serde_yaml_ng::{Mapping, Value};

/// Deep-merges `src` into `dest`.
///
/// Keys missing from `dest` are inserted. When both sides hold a mapping the
/// two are merged recursively; any other value in `src` overwrites.
pub fn merge_values(dest: &mut Mapping, src: Mapping) {
    for (key, value) in src {
        if let Value::Mapping(incoming) = value {
            if let Some(Value::Mapping(existing)) = dest.get_mut(&key) {
                merge_values(existing, incoming);
                continue;
            }
            dest.insert(key, Value::Mapping(incoming));
        } else {
            dest.insert(key, value);
        }
    }
}
