use crate::application::dto::{SummaryRequest, SummaryResponse};
use crate::shared::Result;

/// ResourceSummaryPort - Inbound port for the resource summary use case
///
/// This port defines the interface that external adapters (CLI, etc.)
/// use to summarize the resources a chart declares.
pub trait ResourceSummaryPort {
    /// Renders the chart and aggregates its declared resources
    ///
    /// # Errors
    /// Returns an error if:
    /// - A values file cannot be read or a `--set` expression is invalid
    /// - The chart cannot be rendered
    /// - A manifest holds an invalid quantity or is malformed (strict mode)
    fn summarize(&self, request: SummaryRequest) -> Result<SummaryResponse>;
}
