use crate::application::read_models::{ClaimView, SummaryReadModel, WorkloadView};
use crate::ports::outbound::SummaryFormatter;
use crate::shared::Result;

/// Column header of the tab-separated summary
pub const TABLE_HEADER: &str =
    "KIND\tREPLICA\tCPUREQ(m)\tCPULIM(m)\tMEMREQ(Mi)\tMEMLIM(Mi)\tSTORAGE\tNAME";

/// TableFormatter adapter for the default tab-separated output
///
/// One line per workload, then one `PVC` line per standalone claim with the
/// five numeric columns left empty. Pipe it through `column -t` for alignment.
pub struct TableFormatter;

impl TableFormatter {
    pub fn new() -> Self {
        Self
    }

    fn workload_line(workload: &WorkloadView) -> String {
        format!(
            "{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}",
            workload.kind,
            workload.replicas,
            workload.cpu_request_milli,
            workload.cpu_limit_milli,
            workload.memory_request_mib,
            workload.memory_limit_mib,
            workload.storage,
            workload.name
        )
    }

    fn claim_line(claim: &ClaimView) -> String {
        format!("PVC\t\t\t\t\t\t{}\t{}", claim.storage, claim.name)
    }
}

impl Default for TableFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl SummaryFormatter for TableFormatter {
    fn format(&self, model: &SummaryReadModel) -> Result<String> {
        let mut output = String::new();
        output.push_str(TABLE_HEADER);
        output.push('\n');

        for workload in &model.workloads {
            output.push_str(&Self::workload_line(workload));
            output.push('\n');
        }
        for claim in &model.claims {
            output.push_str(&Self::claim_line(claim));
            output.push('\n');
        }

        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::outbound::formatters::test_support::sample_model;

    #[test]
    fn test_header_and_rows() {
        let output = TableFormatter::new().format(&sample_model()).unwrap();
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], TABLE_HEADER);
        assert_eq!(lines[1], "Deployment\t3\t250\t500\t128\t256\t\tweb");
        assert_eq!(lines[2], "StatefulSet\t1\t1000\t0\t1024\t0\t10Gi\tdb");
        assert_eq!(lines[3], "PVC\t\t\t\t\t\t5Gi\tshared-data");
    }

    #[test]
    fn test_every_line_has_eight_columns() {
        let output = TableFormatter::new().format(&sample_model()).unwrap();
        for line in output.lines() {
            assert_eq!(line.split('\t').count(), 8, "{:?}", line);
        }
    }

    #[test]
    fn test_empty_model_prints_header_only() {
        let mut model = sample_model();
        model.workloads.clear();
        model.claims.clear();

        let output = TableFormatter::new().format(&model).unwrap();
        assert_eq!(output, format!("{}\n", TABLE_HEADER));
    }
}
