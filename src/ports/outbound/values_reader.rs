use crate::shared::Result;
use serde_yaml_ng::Mapping;
use std::path::Path;

/// ValuesReader port for loading chart value files
pub trait ValuesReader {
    /// Reads one values file as a YAML mapping
    ///
    /// An empty file yields an empty mapping.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The file cannot be read
    /// - The content is not valid YAML or its root is not a mapping
    fn read_values(&self, path: &Path) -> Result<Mapping>;
}
