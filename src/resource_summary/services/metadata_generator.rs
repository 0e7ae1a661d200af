use crate::resource_summary::domain::SummaryMetadata;
use chrono::Utc;

/// MetadataGenerator service for summary run metadata
pub struct MetadataGenerator;

impl MetadataGenerator {
    /// Generates metadata stamped with the current time
    pub fn generate_metadata(
        tool_name: &str,
        tool_version: &str,
        release: &str,
        namespace: &str,
        chart: &str,
    ) -> SummaryMetadata {
        SummaryMetadata::new(
            Utc::now().to_rfc3339(),
            tool_name.to_string(),
            tool_version.to_string(),
            release.to_string(),
            namespace.to_string(),
            chart.to_string(),
        )
    }

    /// Generates metadata with this tool's name and compile-time version
    pub fn generate_default_metadata(release: &str, namespace: &str, chart: &str) -> SummaryMetadata {
        Self::generate_metadata(
            env!("CARGO_PKG_NAME"),
            env!("CARGO_PKG_VERSION"),
            release,
            namespace,
            chart,
        )
    }
}
