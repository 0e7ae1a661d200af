use super::{DocumentSplitter, ResourceExtractor, TemplateFilter};
use crate::resource_summary::domain::{
    ClaimRow, ExtractedRecord, ManifestDocument, RawTemplate, RenderedOutput, SummaryRow,
    WorkloadKind, WorkloadRecord, WorkloadRow,
};
use crate::resource_summary::policies::{ErrorPolicy, StoragePolicy};
use crate::shared::ManifestResult;
use std::collections::BTreeSet;

/// Immutable options for one aggregation run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AggregationOptions {
    /// Also summarize `NOTES.txt` templates
    pub include_notes: bool,
    pub storage_policy: StoragePolicy,
    pub error_policy: ErrorPolicy,
    /// Non-empty switches to raw passthrough of exactly these keys
    pub selected_paths: BTreeSet<String>,
}

/// Something left out of the summary in lenient mode
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregationWarning {
    pub source: String,
    /// 1-based position of the document within its template
    pub index: usize,
    pub message: String,
}

/// Rows of a normal run: workloads first, then standalone claims
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AggregationReport {
    pub workloads: Vec<WorkloadRow>,
    pub claims: Vec<ClaimRow>,
    pub warnings: Vec<AggregationWarning>,
}

impl AggregationReport {
    /// All rows in output order
    pub fn rows(&self) -> Vec<SummaryRow> {
        self.workloads
            .iter()
            .cloned()
            .map(SummaryRow::Workload)
            .chain(self.claims.iter().cloned().map(SummaryRow::Claim))
            .collect()
    }

    fn push_workload(&mut self, record: WorkloadRecord, source: &str, index: usize) {
        for skipped in &record.skipped_containers {
            let container = skipped
                .name
                .clone()
                .unwrap_or_else(|| format!("#{}", skipped.index));
            self.warnings.push(AggregationWarning {
                source: source.to_string(),
                index,
                message: format!(
                    "skipped container {} of {} {}: {}",
                    container, record.kind, record.name, skipped.reason
                ),
            });
        }
        self.workloads.push(WorkloadRow::from_record(record, source));
    }
}

/// Raw templates selected by key
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Passthrough {
    pub templates: Vec<RawTemplate>,
    /// Selected keys with no rendered template
    pub unmatched: Vec<String>,
}

/// Result of an aggregation run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Summary {
    Rows(AggregationReport),
    Passthrough(Passthrough),
}

/// A parsed document remembered with where it came from
struct SourcedDocument<'a> {
    source: &'a str,
    index: usize,
    kind: WorkloadKind,
    document: ManifestDocument,
}

/// ResourceAggregator - Turns rendered templates into ordered summary rows
///
/// Templates are visited in sorted key order. Workload rows from every
/// template come before any PersistentVolumeClaim row.
#[derive(Debug, Clone)]
pub struct ResourceAggregator {
    options: AggregationOptions,
    extractor: ResourceExtractor,
    filter: TemplateFilter,
}

impl ResourceAggregator {
    pub fn new(options: AggregationOptions) -> Self {
        let extractor = ResourceExtractor::new(options.storage_policy, options.error_policy);
        let filter = TemplateFilter::new(options.include_notes);
        Self {
            options,
            extractor,
            filter,
        }
    }

    pub fn options(&self) -> &AggregationOptions {
        &self.options
    }

    /// Summarizes `outputs`, or returns the selected templates verbatim when
    /// `selected_paths` is non-empty.
    ///
    /// # Errors
    /// In strict mode the first quantity or malformed-manifest error aborts
    /// the run; it is wrapped with the template key and document index.
    pub fn aggregate(&self, outputs: &RenderedOutput) -> ManifestResult<Summary> {
        self.aggregate_observed(outputs, |_| {})
    }

    /// Same as [`aggregate`](Self::aggregate), calling `on_template` once per
    /// template that is read.
    pub fn aggregate_observed<F>(
        &self,
        outputs: &RenderedOutput,
        mut on_template: F,
    ) -> ManifestResult<Summary>
    where
        F: FnMut(&str),
    {
        if !self.options.selected_paths.is_empty() {
            return Ok(Summary::Passthrough(self.passthrough(outputs)));
        }

        let (workloads, claims): (Vec<_>, Vec<_>) = self
            .collect_documents(outputs, &mut on_template)
            .into_iter()
            .partition(|sourced| sourced.kind.owns_pod_template());

        let mut report = AggregationReport::default();
        for sourced in workloads.iter().chain(claims.iter()) {
            match self.extractor.extract(&sourced.document) {
                Ok(Some(ExtractedRecord::Workload(record))) => {
                    report.push_workload(record, sourced.source, sourced.index)
                }
                Ok(Some(ExtractedRecord::Claim(record))) => {
                    report.claims.push(ClaimRow::from_record(record, sourced.source))
                }
                Ok(None) => {}
                Err(err) if self.options.error_policy.is_lenient() => {
                    report.warnings.push(AggregationWarning {
                        source: sourced.source.to_string(),
                        index: sourced.index,
                        message: format!("skipped document: {}", err),
                    });
                }
                Err(err) => return Err(err.in_document(sourced.source, sourced.index)),
            }
        }

        Ok(Summary::Rows(report))
    }

    /// Parses every non-excluded template, keeping only documents of a
    /// summarized kind.
    fn collect_documents<'a, F>(
        &self,
        outputs: &'a RenderedOutput,
        on_template: &mut F,
    ) -> Vec<SourcedDocument<'a>>
    where
        F: FnMut(&str),
    {
        let mut documents = Vec::new();

        for (source, text) in outputs.iter() {
            if self.filter.is_excluded(source) {
                continue;
            }
            on_template(source);

            for (position, fragment) in DocumentSplitter::split(text).into_iter().enumerate() {
                let document = ManifestDocument::parse(fragment);
                let Some(kind) = document.kind().and_then(WorkloadKind::from_kind) else {
                    continue;
                };
                documents.push(SourcedDocument {
                    source,
                    index: position + 1,
                    kind,
                    document,
                });
            }
        }

        documents
    }

    fn passthrough(&self, outputs: &RenderedOutput) -> Passthrough {
        let mut passthrough = Passthrough::default();

        for key in &self.options.selected_paths {
            match outputs.get(key) {
                Some(text) => passthrough.templates.push(RawTemplate {
                    key: key.clone(),
                    text: text.to_string(),
                }),
                None => passthrough.unmatched.push(key.clone()),
            }
        }

        passthrough
    }
}
