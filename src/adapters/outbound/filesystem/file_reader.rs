use crate::ports::outbound::ValuesReader;
use crate::shared::error::ResError;
use crate::shared::security::read_regular_file;
use crate::shared::Result;
use serde_yaml_ng::{Mapping, Value};
use std::path::Path;

/// FileSystemReader adapter for reading values files from the file system
///
/// Files go through the shared security checks (no symlinks, regular files
/// only, size cap) before being parsed.
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl ValuesReader for FileSystemReader {
    fn read_values(&self, path: &Path) -> Result<Mapping> {
        if !path.exists() && std::fs::symlink_metadata(path).is_err() {
            return Err(ResError::FileReadError {
                path: path.to_path_buf(),
                details: "values file does not exist".to_string(),
            }
            .into());
        }

        let content = read_regular_file(path, "values file").map_err(|e| {
            ResError::FileReadError {
                path: path.to_path_buf(),
                details: e.to_string(),
            }
        })?;

        parse_values(&content).map_err(|details| {
            ResError::ValuesParseError {
                path: path.to_path_buf(),
                details,
            }
            .into()
        })
    }
}

fn parse_values(content: &str) -> std::result::Result<Mapping, String> {
    if content.trim().is_empty() {
        return Ok(Mapping::new());
    }

    match serde_yaml_ng::from_str::<Value>(content).map_err(|e| e.to_string())? {
        Value::Null => Ok(Mapping::new()),
        Value::Mapping(mapping) => Ok(mapping),
        other => Err(format!(
            "expected a mapping at the top level, found {}",
            describe(&other)
        )),
    }
}

fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a sequence",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}
