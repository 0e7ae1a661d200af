//! Read models for CQRS-lite pattern
//!
//! This module contains view-optimized structs that provide
//! a denormalized representation of summary data for the formatters.

pub mod summary_read_model;
pub mod summary_read_model_builder;

pub use summary_read_model::{
    CapacityTotalsView, ClaimView, SummaryMetadataView, SummaryReadModel, WorkloadView,
};
pub use summary_read_model_builder::SummaryReadModelBuilder;
