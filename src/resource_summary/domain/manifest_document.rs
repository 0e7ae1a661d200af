use serde::Deserialize;
use serde_yaml_ng::{Mapping, Value};

/// One parsed manifest document.
///
/// The content is kept as a schema-less YAML tree; fields are probed on
/// demand. A fragment that fails to parse, or whose root is not a mapping,
/// becomes an empty document.
#[derive(Debug, Clone, PartialEq)]
pub struct ManifestDocument {
    root: Value,
}

impl ManifestDocument {
    /// Parses one fragment. When the fragment holds several YAML documents
    /// only the first is used. Merge keys (`<<: *anchor`) are resolved.
    pub fn parse(fragment: &str) -> Self {
        serde_yaml_ng::Deserializer::from_str(fragment)
            .next()
            .and_then(|document| Value::deserialize(document).ok())
            .and_then(|mut value| value.apply_merge().ok().map(|()| value))
            .filter(Value::is_mapping)
            .map(|root| Self { root })
            .unwrap_or_else(Self::empty)
    }

    pub fn empty() -> Self {
        Self {
            root: Value::Mapping(Mapping::new()),
        }
    }

    pub fn root(&self) -> &Value {
        &self.root
    }

    /// The declared `kind`, when it is a string
    pub fn kind(&self) -> Option<&str> {
        lookup(&self.root, "kind").and_then(Value::as_str)
    }

}

/// Walks a dot-separated path through nested mappings.
///
/// Returns `None` when any segment is missing, when an intermediate value is
/// not a mapping, or when the final value is `null`.
pub fn lookup<'a>(value: &'a Value, path: &str) -> Option<&'a Value> {
    path.split('.')
        .try_fold(value, |current, key| current.as_mapping()?.get(key))
        .filter(|found| !found.is_null())
}

/// Short name of a value's shape for error messages
pub fn shape_of(value: Option<&Value>) -> &'static str {
    match value {
        None | Some(Value::Null) => "missing",
        Some(Value::Bool(_)) => "bool",
        Some(Value::Number(_)) => "number",
        Some(Value::String(_)) => "string",
        Some(Value::Sequence(_)) => "sequence",
        Some(Value::Mapping(_)) => "mapping",
        Some(Value::Tagged(_)) => "tagged value",
    }
}
