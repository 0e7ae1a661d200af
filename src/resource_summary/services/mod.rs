mod aggregator;
mod document_splitter;
mod metadata_generator;
mod resource_extractor;
mod template_filter;

pub use aggregator::{
    AggregationOptions, AggregationReport, AggregationWarning, Passthrough, ResourceAggregator,
    Summary,
};
pub use document_splitter::DocumentSplitter;
pub use metadata_generator::MetadataGenerator;
pub use resource_extractor::ResourceExtractor;
pub use template_filter::TemplateFilter;
