use super::workload::{ClaimRecord, ResourceTotals, WorkloadKind, WorkloadRecord};
use serde::Serialize;

/// One workload line of the summary
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorkloadRow {
    pub kind: WorkloadKind,
    pub replicas: u64,
    #[serde(flatten)]
    pub totals: ResourceTotals,
    pub storage: String,
    pub name: String,
    /// Rendered template the row came from
    pub source: String,
}

impl WorkloadRow {
    pub fn from_record(record: WorkloadRecord, source: &str) -> Self {
        Self {
            kind: record.kind,
            replicas: record.replicas,
            totals: record.totals,
            storage: record.storage,
            name: record.name,
            source: source.to_string(),
        }
    }
}

/// One standalone PersistentVolumeClaim line of the summary
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClaimRow {
    pub storage: String,
    pub name: String,
    pub source: String,
}

impl ClaimRow {
    pub fn from_record(record: ClaimRecord, source: &str) -> Self {
        Self {
            storage: record.storage,
            name: record.name,
            source: source.to_string(),
        }
    }
}

/// A summary row, either kind
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SummaryRow {
    Workload(WorkloadRow),
    Claim(ClaimRow),
}

impl SummaryRow {
    pub fn name(&self) -> &str {
        match self {
            SummaryRow::Workload(row) => &row.name,
            SummaryRow::Claim(row) => &row.name,
        }
    }

    pub fn source(&self) -> &str {
        match self {
            SummaryRow::Workload(row) => &row.source,
            SummaryRow::Claim(row) => &row.source,
        }
    }
}
