use crate::ports::outbound::ReleaseOptions;
use crate::resource_summary::services::AggregationOptions;
use std::path::PathBuf;

/// SummaryRequest - Internal request DTO for the resource summary use case
#[derive(Debug, Clone)]
pub struct SummaryRequest {
    /// Chart to render, or the pre-rendered manifest location
    pub chart: PathBuf,
    /// Values files, merged left to right
    pub value_files: Vec<PathBuf>,
    /// `--set` expressions, applied after the values files
    pub set_values: Vec<String>,
    pub release: ReleaseOptions,
    pub options: AggregationOptions,
}

impl SummaryRequest {
    pub fn new(
        chart: PathBuf,
        value_files: Vec<PathBuf>,
        set_values: Vec<String>,
        release: ReleaseOptions,
        options: AggregationOptions,
    ) -> Self {
        Self {
            chart,
            value_files,
            set_values,
            release,
            options,
        }
    }
}
