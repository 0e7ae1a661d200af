use helm_res::prelude::*;
use serde_yaml_ng::Mapping;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Mock ValuesReader serving values files from memory
#[derive(Default)]
pub struct MockValuesReader {
    pub files: HashMap<PathBuf, String>,
}

impl MockValuesReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, path: &str, yaml: &str) -> Self {
        self.files.insert(PathBuf::from(path), yaml.to_string());
        self
    }
}

impl ValuesReader for MockValuesReader {
    fn read_values(&self, path: &Path) -> Result<Mapping> {
        match self.files.get(path) {
            Some(yaml) => Ok(serde_yaml_ng::from_str(yaml)?),
            None => anyhow::bail!("Mock values file not found: {}", path.display()),
        }
    }
}
