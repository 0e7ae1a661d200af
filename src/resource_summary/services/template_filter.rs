use std::path::Path;

/// Base name of the chart's usage notes template
const NOTES_FILE_NAME: &str = "NOTES.txt";

/// Prefix marking helper/partial templates that render no manifests
const PARTIAL_PREFIX: char = '_';

/// TemplateFilter - Decides which rendered templates are summarized
///
/// Skips `NOTES.txt` unless notes were requested, and any template whose
/// base name starts with `_`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TemplateFilter {
    include_notes: bool,
}

impl TemplateFilter {
    pub fn new(include_notes: bool) -> Self {
        Self { include_notes }
    }

    /// True when the template at `key` should be left out
    pub fn is_excluded(&self, key: &str) -> bool {
        let base_name = base_name(key);

        if !self.include_notes && base_name == NOTES_FILE_NAME {
            return true;
        }

        base_name.starts_with(PARTIAL_PREFIX)
    }
}

fn base_name(key: &str) -> &str {
    Path::new(key)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(key)
}
