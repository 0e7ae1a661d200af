pub mod manifest_document;
pub mod quantity;
pub mod rendered_output;
pub mod summary_metadata;
pub mod summary_row;
pub mod workload;

pub use manifest_document::ManifestDocument;
pub use quantity::{format_bytes, normalize_bytes, normalize_cpu, normalize_memory, Quantity};
pub use rendered_output::{RawTemplate, RenderedOutput};
pub use summary_metadata::SummaryMetadata;
pub use summary_row::{ClaimRow, SummaryRow, WorkloadRow};
pub use workload::{
    ClaimRecord, ExtractedRecord, ResourceTotals, SkippedContainer, WorkloadKind, WorkloadRecord,
};
