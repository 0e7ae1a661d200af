//! helm-res - capacity summary for Helm charts
//!
//! This library renders a chart (or reads manifests rendered ahead of time)
//! and reports the CPU, memory and storage its workloads declare, without
//! talking to a cluster. It follows hexagonal architecture and Domain-Driven
//! Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`resource_summary`): manifest splitting, quantity
//!   normalization, resource extraction and aggregation
//! - **Values** (`values`): values file merging and `--set` overlays
//! - **Application Layer** (`application`): Use cases, DTOs and read models
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use helm_res::prelude::*;
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<()> {
//! // Create adapters
//! let renderer = HelmCliRenderer::default();
//! let values_reader = FileSystemReader::new();
//! let progress_reporter = StderrProgressReporter::new();
//!
//! // Create use case
//! let use_case = SummarizeResourcesUseCase::new(renderer, values_reader, progress_reporter);
//!
//! // Execute
//! let request = SummaryRequest::new(
//!     PathBuf::from("./charts/web"),
//!     vec![PathBuf::from("./charts/web/values-prod.yaml")],
//!     vec!["replicaCount=3".to_string()],
//!     ReleaseOptions::default(),
//!     AggregationOptions::default(),
//! );
//! let response = use_case.execute(request)?;
//!
//! // Format output
//! if let Summary::Rows(report) = &response.summary {
//!     let read_model = SummaryReadModelBuilder::build(report, &response.metadata);
//!     println!("{}", TableFormatter::new().format(&read_model)?);
//! }
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod ports;
pub mod resource_summary;
pub mod shared;
pub mod values;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemReader, FileSystemWriter, PrerenderedManifestReader, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{
        JsonFormatter, MarkdownFormatter, PassthroughFormatter, TableFormatter,
    };
    pub use crate::adapters::outbound::helm::HelmCliRenderer;
    pub use crate::application::dto::{OutputFormat, SummaryRequest, SummaryResponse};
    pub use crate::application::read_models::{SummaryReadModel, SummaryReadModelBuilder};
    pub use crate::application::use_cases::SummarizeResourcesUseCase;
    pub use crate::ports::inbound::ResourceSummaryPort;
    pub use crate::ports::outbound::{
        ChartRenderer, OutputPresenter, ProgressReporter, ReleaseOptions, RenderRequest,
        SummaryFormatter, ValuesReader,
    };
    pub use crate::resource_summary::domain::{
        ClaimRow, ManifestDocument, RawTemplate, RenderedOutput, ResourceTotals, SummaryMetadata,
        SummaryRow, WorkloadKind, WorkloadRow,
    };
    pub use crate::resource_summary::policies::{ErrorPolicy, StoragePolicy};
    pub use crate::resource_summary::services::{
        AggregationOptions, AggregationReport, AggregationWarning, Passthrough, ResourceAggregator,
        ResourceExtractor, Summary,
    };
    pub use crate::shared::error::{ManifestError, ResError};
    pub use crate::shared::Result;
}
