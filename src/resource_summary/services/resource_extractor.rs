use crate::resource_summary::domain::manifest_document::{lookup, shape_of};
use crate::resource_summary::domain::{
    normalize_cpu, normalize_memory, ClaimRecord, ExtractedRecord, ManifestDocument,
    ResourceTotals, SkippedContainer, WorkloadKind, WorkloadRecord,
};
use crate::resource_summary::policies::{ErrorPolicy, StoragePolicy};
use crate::shared::error::ManifestError;
use crate::shared::ManifestResult;
use serde_yaml_ng::{Mapping, Value};
use std::borrow::Cow;

const CONTAINERS_FIELD: &str = "spec.template.spec.containers";
const CLAIM_TEMPLATES_FIELD: &str = "spec.volumeClaimTemplates";

/// ResourceExtractor - Reads declared resources out of one manifest
///
/// Mandatory fields of a recognized kind (`metadata.name`, `spec`, the pod
/// template's `containers`, claim storage) must be present with the right
/// shape or extraction fails with `MalformedManifest`. Optional fields
/// (`resources`, `requests`, `limits`, individual quantities,
/// `volumeClaimTemplates`, `replicas`) fall back to zero, empty or 1.
#[derive(Debug, Clone, Copy, Default)]
pub struct ResourceExtractor {
    storage_policy: StoragePolicy,
    error_policy: ErrorPolicy,
}

impl ResourceExtractor {
    pub fn new(storage_policy: StoragePolicy, error_policy: ErrorPolicy) -> Self {
        Self {
            storage_policy,
            error_policy,
        }
    }

    /// Extracts a record from `document`, or `None` when its kind carries no
    /// resources this tool summarizes.
    ///
    /// # Errors
    /// - `QuantityParse` when a CPU/memory quantity is invalid (in lenient
    ///   mode the offending container is skipped instead)
    /// - `MalformedManifest` when a mandatory field is missing or mis-shaped
    pub fn extract(&self, document: &ManifestDocument) -> ManifestResult<Option<ExtractedRecord>> {
        match document.kind().and_then(WorkloadKind::from_kind) {
            Some(kind) => self.extract_kind(document, kind).map(Some),
            None => Ok(None),
        }
    }

    fn extract_kind(
        &self,
        document: &ManifestDocument,
        kind: WorkloadKind,
    ) -> ManifestResult<ExtractedRecord> {
        let root = document.root();
        if kind.owns_pod_template() {
            self.extract_workload(root, kind).map(ExtractedRecord::Workload)
        } else {
            self.extract_claim(root).map(ExtractedRecord::Claim)
        }
    }

    fn extract_workload(&self, root: &Value, kind: WorkloadKind) -> ManifestResult<WorkloadRecord> {
        let mut probe = Probe::new(kind);
        let name = probe.identify(root)?;

        probe.require_mapping(lookup(root, "spec"), "spec")?;
        probe.require_mapping(lookup(root, "spec.template"), "spec.template")?;
        probe.require_mapping(lookup(root, "spec.template.spec"), "spec.template.spec")?;
        let containers = probe.require_sequence(lookup(root, CONTAINERS_FIELD), CONTAINERS_FIELD)?;

        let (totals, skipped_containers) = self.sum_containers(&probe, containers)?;
        let replicas = probe.replicas(lookup(root, "spec.replicas"))?;
        let storage = self.claim_template_storage(&probe, root)?;

        Ok(WorkloadRecord {
            kind,
            name: name.to_string(),
            replicas,
            totals,
            storage,
            skipped_containers,
        })
    }

    fn extract_claim(&self, root: &Value) -> ManifestResult<ClaimRecord> {
        let mut probe = Probe::new(WorkloadKind::PersistentVolumeClaim);
        let name = probe.identify(root)?;
        let storage = probe.storage_request(root, "")?;

        Ok(ClaimRecord {
            name: name.to_string(),
            storage,
        })
    }

    fn sum_containers<'a>(
        &self,
        probe: &Probe<'a>,
        containers: &'a [Value],
    ) -> ManifestResult<(ResourceTotals, Vec<SkippedContainer>)> {
        let mut totals = ResourceTotals::default();
        let mut skipped = Vec::new();

        for (index, container) in containers.iter().enumerate() {
            let field = format!("{}[{}]", CONTAINERS_FIELD, index);
            probe.require_mapping(Some(container), &field)?;

            match probe.container_totals(container, &field) {
                Ok(container_totals) => {
                    totals = totals.checked_add(container_totals).ok_or_else(|| {
                        ManifestError::quantity(&field, "summed resources exceed the supported range")
                    })?;
                }
                Err(err) if err.is_quantity_parse() && self.error_policy.is_lenient() => {
                    skipped.push(SkippedContainer {
                        index,
                        name: lookup(container, "name")
                            .and_then(Value::as_str)
                            .map(String::from),
                        reason: err.to_string(),
                    });
                }
                Err(err) => return Err(err),
            }
        }

        Ok((totals, skipped))
    }

    fn claim_template_storage<'a>(&self, probe: &Probe<'a>, root: &'a Value) -> ManifestResult<String> {
        let Some(templates) =
            probe.optional_sequence(lookup(root, CLAIM_TEMPLATES_FIELD), CLAIM_TEMPLATES_FIELD)?
        else {
            return Ok(String::new());
        };

        let mut requests = Vec::with_capacity(templates.len());
        for (index, template) in templates.iter().enumerate() {
            let field = format!("{}[{}]", CLAIM_TEMPLATES_FIELD, index);
            probe.require_mapping(Some(template), &field)?;
            requests.push(probe.storage_request(template, &field)?);
        }

        self.storage_policy.select(&requests)
    }
}

/// Typed field access for one manifest; failures name the manifest's kind,
/// its name once known, and the field path from the document root.
struct Probe<'a> {
    kind: WorkloadKind,
    name: Option<&'a str>,
}

impl<'a> Probe<'a> {
    fn new(kind: WorkloadKind) -> Self {
        Self { kind, name: None }
    }

    /// Reads `metadata.name` and remembers it for later errors
    fn identify(&mut self, root: &'a Value) -> ManifestResult<&'a str> {
        self.require_mapping(lookup(root, "metadata"), "metadata")?;
        let name = self.require_string(lookup(root, "metadata.name"), "metadata.name")?;
        self.name = Some(name);
        Ok(name)
    }

    fn malformed(&self, field: &str, expected: &'static str, found: Option<&Value>) -> ManifestError {
        ManifestError::MalformedManifest {
            kind: self.kind.to_string(),
            name: self.name.map(String::from),
            field: field.to_string(),
            expected,
            found: shape_of(found),
        }
    }

    fn require_mapping(&self, at: Option<&'a Value>, field: &str) -> ManifestResult<&'a Mapping> {
        match at {
            Some(Value::Mapping(mapping)) => Ok(mapping),
            other => Err(self.malformed(field, "mapping", other)),
        }
    }

    fn optional_mapping(
        &self,
        at: Option<&'a Value>,
        field: &str,
    ) -> ManifestResult<Option<&'a Mapping>> {
        match at {
            None => Ok(None),
            Some(Value::Mapping(mapping)) => Ok(Some(mapping)),
            other => Err(self.malformed(field, "mapping", other)),
        }
    }

    fn require_sequence(&self, at: Option<&'a Value>, field: &str) -> ManifestResult<&'a [Value]> {
        match at {
            Some(Value::Sequence(items)) => Ok(items.as_slice()),
            other => Err(self.malformed(field, "sequence", other)),
        }
    }

    fn optional_sequence(
        &self,
        at: Option<&'a Value>,
        field: &str,
    ) -> ManifestResult<Option<&'a [Value]>> {
        match at {
            None => Ok(None),
            Some(Value::Sequence(items)) => Ok(Some(items.as_slice())),
            other => Err(self.malformed(field, "sequence", other)),
        }
    }

    fn require_string(&self, at: Option<&'a Value>, field: &str) -> ManifestResult<&'a str> {
        match at {
            Some(Value::String(text)) => Ok(text.as_str()),
            other => Err(self.malformed(field, "string", other)),
        }
    }

    /// A quantity is normally a string; plain YAML numbers are taken by
    /// their textual form.
    fn quantity(&self, at: Option<&'a Value>, field: &str) -> ManifestResult<Option<Cow<'a, str>>> {
        match at {
            None => Ok(None),
            Some(Value::String(text)) => Ok(Some(Cow::Borrowed(text.as_str()))),
            Some(Value::Number(number)) => Ok(Some(Cow::Owned(number.to_string()))),
            other => Err(self.malformed(field, "quantity", other)),
        }
    }

    /// `spec.replicas`, 1 when absent; fractional numbers are truncated
    fn replicas(&self, at: Option<&Value>) -> ManifestResult<u64> {
        const FIELD: &str = "spec.replicas";
        const EXPECTED: &str = "non-negative number";

        match at {
            None => Ok(1),
            Some(Value::Number(number)) => number
                .as_u64()
                .or_else(|| {
                    number
                        .as_f64()
                        .filter(|value| value.is_finite() && *value >= 0.0)
                        .map(|value| value.trunc() as u64)
                })
                .ok_or_else(|| self.malformed(FIELD, EXPECTED, at)),
            other => Err(self.malformed(FIELD, EXPECTED, other)),
        }
    }

    fn container_totals(&self, container: &'a Value, field: &str) -> ManifestResult<ResourceTotals> {
        let at = |path: &str| (lookup(container, path), format!("{}.{}", field, path));

        let (resources, resources_field) = at("resources");
        if self.optional_mapping(resources, &resources_field)?.is_none() {
            return Ok(ResourceTotals::default());
        }
        for section in ["resources.requests", "resources.limits"] {
            let (value, section_field) = at(section);
            self.optional_mapping(value, &section_field)?;
        }

        let quantity = |path: &str| {
            let (value, quantity_field) = at(path);
            self.quantity(value, &quantity_field)
        };

        Ok(ResourceTotals {
            cpu_request_milli: normalize_cpu(quantity("resources.requests.cpu")?.as_deref())?,
            cpu_limit_milli: normalize_cpu(quantity("resources.limits.cpu")?.as_deref())?,
            mem_request_mib: normalize_memory(quantity("resources.requests.memory")?.as_deref())?,
            mem_limit_mib: normalize_memory(quantity("resources.limits.memory")?.as_deref())?,
        })
    }

    /// `spec.resources.requests.storage` of a claim or claim template, all mandatory
    fn storage_request(&self, owner: &'a Value, prefix: &str) -> ManifestResult<String> {
        let field = |path: &str| {
            if prefix.is_empty() {
                path.to_string()
            } else {
                format!("{}.{}", prefix, path)
            }
        };

        for path in ["spec", "spec.resources", "spec.resources.requests"] {
            self.require_mapping(lookup(owner, path), &field(path))?;
        }

        let storage_field = field("spec.resources.requests.storage");
        match self.quantity(lookup(owner, "spec.resources.requests.storage"), &storage_field)? {
            Some(storage) => Ok(storage.into_owned()),
            None => Err(self.malformed(&storage_field, "quantity", None)),
        }
    }
}
