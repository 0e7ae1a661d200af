use crate::application::read_models::SummaryReadModel;
use crate::shared::Result;

/// SummaryFormatter port for rendering the resource summary
///
/// This port abstracts the formatting logic for the different output
/// formats (tab-separated table, JSON, Markdown).
pub trait SummaryFormatter {
    /// Formats the summary read model
    ///
    /// # Errors
    /// Returns an error if formatting or serialization fails
    fn format(&self, model: &SummaryReadModel) -> Result<String>;
}
