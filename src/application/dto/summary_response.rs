use crate::resource_summary::domain::SummaryMetadata;
use crate::resource_summary::services::Summary;
use serde_yaml_ng::Mapping;

/// SummaryResponse - Internal response DTO from the resource summary use case
///
/// Holds the aggregation result; adapters format it for presentation.
#[derive(Debug, Clone)]
pub struct SummaryResponse {
    /// Values the chart was rendered with
    pub values: Mapping,
    /// Summary rows, or the selected templates in passthrough mode
    pub summary: Summary,
    pub metadata: SummaryMetadata,
}

impl SummaryResponse {
    pub fn new(values: Mapping, summary: Summary, metadata: SummaryMetadata) -> Self {
        Self {
            values,
            summary,
            metadata,
        }
    }
}
