//! Summary read model for query operations
//!
//! This module provides the read model the formatters consume: run metadata,
//! one view per row and capacity totals.

use serde::Serialize;

/// Main read model for a resource summary
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryReadModel {
    pub metadata: SummaryMetadataView,
    /// Workload rows in output order
    pub workloads: Vec<WorkloadView>,
    /// Standalone PersistentVolumeClaim rows in output order
    pub claims: Vec<ClaimView>,
    pub totals: CapacityTotalsView,
}

/// View representation of run metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryMetadataView {
    /// RFC 3339 time the summary was generated
    pub timestamp: String,
    pub tool_name: String,
    pub tool_version: String,
    pub release: String,
    pub namespace: String,
    pub chart: String,
}

/// View representation of one workload row
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorkloadView {
    pub kind: String,
    pub name: String,
    pub replicas: u64,
    /// Per-pod values, summed over containers
    pub cpu_request_milli: u64,
    pub cpu_limit_milli: u64,
    pub memory_request_mib: u64,
    pub memory_limit_mib: u64,
    /// Volume claim template storage, empty when there is none
    pub storage: String,
    pub source: String,
}

/// View representation of one standalone claim
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClaimView {
    pub name: String,
    pub storage: String,
    pub source: String,
}

/// Declared capacity across all workloads, each pod value times its replicas
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CapacityTotalsView {
    pub workload_count: usize,
    pub claim_count: usize,
    pub replicas: u64,
    pub cpu_request_milli: u64,
    pub cpu_limit_milli: u64,
    pub memory_request_mib: u64,
    pub memory_limit_mib: u64,
}
