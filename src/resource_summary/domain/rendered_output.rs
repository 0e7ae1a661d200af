use std::collections::BTreeMap;

/// Rendered templates keyed by their path inside the chart.
///
/// Iteration is always in lexicographic key order, whatever order the
/// renderer produced the entries in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderedOutput {
    templates: BTreeMap<String, String>,
}

impl RenderedOutput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a template, replacing any previous text under the same key
    pub fn insert(&mut self, key: impl Into<String>, text: impl Into<String>) {
        self.templates.insert(key.into(), text.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.templates.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// (key, text) pairs in sorted key order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.templates
            .iter()
            .map(|(key, text)| (key.as_str(), text.as_str()))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.templates.keys().map(String::as_str)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for RenderedOutput {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut output = RenderedOutput::new();
        for (key, text) in iter {
            output.insert(key, text);
        }
        output
    }
}

/// Raw text of one rendered template, returned in passthrough mode
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawTemplate {
    pub key: String,
    pub text: String,
}
