use serde::Serialize;
use std::fmt;

/// Manifest kinds that carry resource declarations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum WorkloadKind {
    Deployment,
    StatefulSet,
    DaemonSet,
    PersistentVolumeClaim,
}

impl WorkloadKind {
    /// Classifies a `kind` value. Matching is exact; any other kind is ignored.
    pub fn from_kind(kind: &str) -> Option<Self> {
        match kind {
            "Deployment" => Some(WorkloadKind::Deployment),
            "StatefulSet" => Some(WorkloadKind::StatefulSet),
            "DaemonSet" => Some(WorkloadKind::DaemonSet),
            "PersistentVolumeClaim" => Some(WorkloadKind::PersistentVolumeClaim),
            _ => None,
        }
    }

    /// True for kinds that own a pod template with containers
    pub fn owns_pod_template(self) -> bool {
        !matches!(self, WorkloadKind::PersistentVolumeClaim)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            WorkloadKind::Deployment => "Deployment",
            WorkloadKind::StatefulSet => "StatefulSet",
            WorkloadKind::DaemonSet => "DaemonSet",
            WorkloadKind::PersistentVolumeClaim => "PersistentVolumeClaim",
        }
    }
}

impl fmt::Display for WorkloadKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Requests and limits summed over every container of a pod template
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ResourceTotals {
    pub cpu_request_milli: u64,
    pub cpu_limit_milli: u64,
    pub mem_request_mib: u64,
    pub mem_limit_mib: u64,
}

impl ResourceTotals {
    pub fn new(
        cpu_request_milli: u64,
        cpu_limit_milli: u64,
        mem_request_mib: u64,
        mem_limit_mib: u64,
    ) -> Self {
        Self {
            cpu_request_milli,
            cpu_limit_milli,
            mem_request_mib,
            mem_limit_mib,
        }
    }

    /// Component-wise sum, `None` on overflow
    pub fn checked_add(self, other: ResourceTotals) -> Option<ResourceTotals> {
        Some(ResourceTotals {
            cpu_request_milli: self.cpu_request_milli.checked_add(other.cpu_request_milli)?,
            cpu_limit_milli: self.cpu_limit_milli.checked_add(other.cpu_limit_milli)?,
            mem_request_mib: self.mem_request_mib.checked_add(other.mem_request_mib)?,
            mem_limit_mib: self.mem_limit_mib.checked_add(other.mem_limit_mib)?,
        })
    }

    /// Every component multiplied by `factor`, saturating
    pub fn scaled(self, factor: u64) -> ResourceTotals {
        ResourceTotals {
            cpu_request_milli: self.cpu_request_milli.saturating_mul(factor),
            cpu_limit_milli: self.cpu_limit_milli.saturating_mul(factor),
            mem_request_mib: self.mem_request_mib.saturating_mul(factor),
            mem_limit_mib: self.mem_limit_mib.saturating_mul(factor),
        }
    }
}

/// A container left out of the totals in lenient mode
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedContainer {
    /// Position in `spec.template.spec.containers`
    pub index: usize,
    pub name: Option<String>,
    pub reason: String,
}

/// Resources declared by a Deployment, StatefulSet or DaemonSet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkloadRecord {
    pub kind: WorkloadKind,
    pub name: String,
    pub replicas: u64,
    pub totals: ResourceTotals,
    /// Volume claim template storage, empty when there are no templates
    pub storage: String,
    pub skipped_containers: Vec<SkippedContainer>,
}

/// Storage declared by a standalone PersistentVolumeClaim
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClaimRecord {
    pub name: String,
    pub storage: String,
}

/// What the extractor found in one document
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtractedRecord {
    Workload(WorkloadRecord),
    Claim(ClaimRecord),
}

impl ExtractedRecord {
    pub fn kind(&self) -> WorkloadKind {
        match self {
            ExtractedRecord::Workload(workload) => workload.kind,
            ExtractedRecord::Claim(_) => WorkloadKind::PersistentVolumeClaim,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            ExtractedRecord::Workload(workload) => &workload.name,
            ExtractedRecord::Claim(claim) => &claim.name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_kind_recognized() {
        assert_eq!(
            WorkloadKind::from_kind("Deployment"),
            Some(WorkloadKind::Deployment)
        );
        assert_eq!(
            WorkloadKind::from_kind("StatefulSet"),
            Some(WorkloadKind::StatefulSet)
        );
        assert_eq!(
            WorkloadKind::from_kind("DaemonSet"),
            Some(WorkloadKind::DaemonSet)
        );
        assert_eq!(
            WorkloadKind::from_kind("PersistentVolumeClaim"),
            Some(WorkloadKind::PersistentVolumeClaim)
        );
    }

    #[test]
    fn test_from_kind_is_exact() {
        assert_eq!(WorkloadKind::from_kind("deployment"), None);
        assert_eq!(WorkloadKind::from_kind("ConfigMap"), None);
        assert_eq!(WorkloadKind::from_kind("Job"), None);
        assert_eq!(WorkloadKind::from_kind(""), None);
    }

    #[test]
    fn test_owns_pod_template() {
        assert!(WorkloadKind::Deployment.owns_pod_template());
        assert!(WorkloadKind::StatefulSet.owns_pod_template());
        assert!(WorkloadKind::DaemonSet.owns_pod_template());
        assert!(!WorkloadKind::PersistentVolumeClaim.owns_pod_template());
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(WorkloadKind::StatefulSet.to_string(), "StatefulSet");
    }

    #[test]
    fn test_totals_checked_add() {
        let a = ResourceTotals::new(250, 500, 64, 128);
        let b = ResourceTotals::new(250, 0, 64, 0);
        assert_eq!(a.checked_add(b), Some(ResourceTotals::new(500, 500, 128, 128)));

        let max = ResourceTotals::new(u64::MAX, 0, 0, 0);
        assert_eq!(max.checked_add(ResourceTotals::new(1, 0, 0, 0)), None);
    }

    #[test]
    fn test_totals_scaled() {
        let per_pod = ResourceTotals::new(100, 200, 64, 128);
        assert_eq!(per_pod.scaled(3), ResourceTotals::new(300, 600, 192, 384));
        assert_eq!(per_pod.scaled(0), ResourceTotals::default());
    }
}
