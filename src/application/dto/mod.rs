/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the domain layer isolated.
mod output_format;
mod summary_request;
mod summary_response;

pub use output_format::OutputFormat;
pub use summary_request::SummaryRequest;
pub use summary_response::SummaryResponse;
