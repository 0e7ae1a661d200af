/// Literal line separating documents in rendered output
const DOCUMENT_SEPARATOR: &str = "\n---\n";

/// DocumentSplitter - Splits rendered template text into documents
///
/// The split is purely textual: a `---` line inside a block scalar is
/// treated as a separator too.
pub struct DocumentSplitter;

impl DocumentSplitter {
    /// Splits `bundle` on `\n---\n`, dropping empty fragments
    pub fn split(bundle: &str) -> Vec<&str> {
        bundle
            .split(DOCUMENT_SEPARATOR)
            .filter(|fragment| !fragment.is_empty())
            .collect()
    }
}
