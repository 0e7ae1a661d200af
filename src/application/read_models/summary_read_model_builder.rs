//! Builder for constructing SummaryReadModel from domain objects

use super::summary_read_model::{
    CapacityTotalsView, ClaimView, SummaryMetadataView, SummaryReadModel, WorkloadView,
};
use crate::resource_summary::domain::{ClaimRow, SummaryMetadata, WorkloadRow};
use crate::resource_summary::services::AggregationReport;

/// Builder for constructing SummaryReadModel from domain objects
pub struct SummaryReadModelBuilder;

impl SummaryReadModelBuilder {
    /// Builds the read model for an aggregation report
    pub fn build(report: &AggregationReport, metadata: &SummaryMetadata) -> SummaryReadModel {
        SummaryReadModel {
            metadata: Self::build_metadata(metadata),
            workloads: report.workloads.iter().map(Self::build_workload).collect(),
            claims: report.claims.iter().map(Self::build_claim).collect(),
            totals: Self::build_totals(&report.workloads, &report.claims),
        }
    }

    fn build_metadata(metadata: &SummaryMetadata) -> SummaryMetadataView {
        SummaryMetadataView {
            timestamp: metadata.timestamp().to_string(),
            tool_name: metadata.tool_name().to_string(),
            tool_version: metadata.tool_version().to_string(),
            release: metadata.release().to_string(),
            namespace: metadata.namespace().to_string(),
            chart: metadata.chart().to_string(),
        }
    }

    fn build_workload(row: &WorkloadRow) -> WorkloadView {
        WorkloadView {
            kind: row.kind.to_string(),
            name: row.name.clone(),
            replicas: row.replicas,
            cpu_request_milli: row.totals.cpu_request_milli,
            cpu_limit_milli: row.totals.cpu_limit_milli,
            memory_request_mib: row.totals.mem_request_mib,
            memory_limit_mib: row.totals.mem_limit_mib,
            storage: row.storage.clone(),
            source: row.source.clone(),
        }
    }

    fn build_claim(row: &ClaimRow) -> ClaimView {
        ClaimView {
            name: row.name.clone(),
            storage: row.storage.clone(),
            source: row.source.clone(),
        }
    }

    /// Sums replicas x per-pod values; saturates rather than overflowing
    fn build_totals(workloads: &[WorkloadRow], claims: &[ClaimRow]) -> CapacityTotalsView {
        workloads.iter().fold(
            CapacityTotalsView {
                workload_count: workloads.len(),
                claim_count: claims.len(),
                ..CapacityTotalsView::default()
            },
            |mut totals, row| {
                let scaled = row.totals.scaled(row.replicas);
                totals.replicas = totals.replicas.saturating_add(row.replicas);
                totals.cpu_request_milli =
                    totals.cpu_request_milli.saturating_add(scaled.cpu_request_milli);
                totals.cpu_limit_milli = totals.cpu_limit_milli.saturating_add(scaled.cpu_limit_milli);
                totals.memory_request_mib =
                    totals.memory_request_mib.saturating_add(scaled.mem_request_mib);
                totals.memory_limit_mib =
                    totals.memory_limit_mib.saturating_add(scaled.mem_limit_mib);
                totals
            },
        )
    }
}
