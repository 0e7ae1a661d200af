use crate::application::read_models::{
    CapacityTotalsView, ClaimView, SummaryMetadataView, SummaryReadModel, WorkloadView,
};
use crate::ports::outbound::SummaryFormatter;
use crate::shared::Result;

/// Markdown table header for workloads
const WORKLOAD_TABLE_HEADER: &str =
    "| Kind | Name | Replicas | CPU Request (m) | CPU Limit (m) | Memory Request (Mi) | Memory Limit (Mi) | Storage | Source |\n";

/// Markdown table separator line for workloads
const WORKLOAD_TABLE_SEPARATOR: &str =
    "|------|------|---------:|----------------:|--------------:|--------------------:|------------------:|---------|--------|\n";

/// Markdown table header for standalone claims
const CLAIM_TABLE_HEADER: &str = "| Name | Storage | Source |\n";

/// Markdown table separator line for standalone claims
const CLAIM_TABLE_SEPARATOR: &str = "|------|---------|--------|\n";

/// MarkdownFormatter adapter for a human-readable capacity report
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Escapes pipe characters and newlines for safe Markdown table rendering
    fn escape_markdown_table_cell(text: &str) -> String {
        text.replace('|', "\\|").replace('\n', " ")
    }

    fn or_dash(text: &str) -> String {
        if text.is_empty() {
            "-".to_string()
        } else {
            Self::escape_markdown_table_cell(text)
        }
    }
}

/// Helper methods for rendering sections
impl MarkdownFormatter {
    fn render_header(&self, output: &mut String, metadata: &SummaryMetadataView) {
        output.push_str("# Resource Summary\n\n");
        output.push_str(&format!("- **Chart**: {}\n", metadata.chart));
        output.push_str(&format!("- **Release**: {}\n", metadata.release));
        output.push_str(&format!("- **Namespace**: {}\n", metadata.namespace));
        output.push_str(&format!(
            "- **Generated**: {} by {} {}\n\n",
            metadata.timestamp, metadata.tool_name, metadata.tool_version
        ));
    }

    fn render_workloads(&self, output: &mut String, workloads: &[WorkloadView]) {
        output.push_str("## Workloads\n\n");
        output.push_str("Per-pod requests and limits, summed over each pod's containers.\n\n");

        if workloads.is_empty() {
            output.push_str("*No workloads*\n\n");
            return;
        }

        output.push_str(WORKLOAD_TABLE_HEADER);
        output.push_str(WORKLOAD_TABLE_SEPARATOR);
        for workload in workloads {
            output.push_str(&format!(
                "| {} | {} | {} | {} | {} | {} | {} | {} | {} |\n",
                Self::escape_markdown_table_cell(&workload.kind),
                Self::escape_markdown_table_cell(&workload.name),
                workload.replicas,
                workload.cpu_request_milli,
                workload.cpu_limit_milli,
                workload.memory_request_mib,
                workload.memory_limit_mib,
                Self::or_dash(&workload.storage),
                Self::escape_markdown_table_cell(&workload.source),
            ));
        }
        output.push('\n');
    }

    fn render_claims(&self, output: &mut String, claims: &[ClaimView]) {
        output.push_str("## Persistent Volume Claims\n\n");

        if claims.is_empty() {
            output.push_str("*No standalone claims*\n\n");
            return;
        }

        output.push_str(CLAIM_TABLE_HEADER);
        output.push_str(CLAIM_TABLE_SEPARATOR);
        for claim in claims {
            output.push_str(&format!(
                "| {} | {} | {} |\n",
                Self::escape_markdown_table_cell(&claim.name),
                Self::or_dash(&claim.storage),
                Self::escape_markdown_table_cell(&claim.source),
            ));
        }
        output.push('\n');
    }

    fn render_totals(&self, output: &mut String, totals: &CapacityTotalsView) {
        output.push_str("## Totals\n\n");
        output.push_str("Each per-pod value multiplied by the workload's replicas.\n\n");
        output.push_str("| Workloads | Claims | Pods | CPU Request (m) | CPU Limit (m) | Memory Request (Mi) | Memory Limit (Mi) |\n");
        output.push_str("|----------:|-------:|-----:|----------------:|--------------:|--------------------:|------------------:|\n");
        output.push_str(&format!(
            "| {} | {} | {} | {} | {} | {} | {} |\n",
            totals.workload_count,
            totals.claim_count,
            totals.replicas,
            totals.cpu_request_milli,
            totals.cpu_limit_milli,
            totals.memory_request_mib,
            totals.memory_limit_mib,
        ));
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl SummaryFormatter for MarkdownFormatter {
    fn format(&self, model: &SummaryReadModel) -> Result<String> {
        let mut output = String::new();

        self.render_header(&mut output, &model.metadata);
        self.render_workloads(&mut output, &model.workloads);
        self.render_claims(&mut output, &model.claims);
        self.render_totals(&mut output, &model.totals);

        Ok(output)
    }
}
