/// SummaryMetadata value object describing one summary run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryMetadata {
    timestamp: String,
    tool_name: String,
    tool_version: String,
    release: String,
    namespace: String,
    chart: String,
}

impl SummaryMetadata {
    pub fn new(
        timestamp: String,
        tool_name: String,
        tool_version: String,
        release: String,
        namespace: String,
        chart: String,
    ) -> Self {
        Self {
            timestamp,
            tool_name,
            tool_version,
            release,
            namespace,
            chart,
        }
    }

    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    pub fn tool_name(&self) -> &str {
        &self.tool_name
    }

    pub fn tool_version(&self) -> &str {
        &self.tool_version
    }

    pub fn release(&self) -> &str {
        &self.release
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Chart location, or the pre-rendered manifest path
    pub fn chart(&self) -> &str {
        &self.chart
    }
}
