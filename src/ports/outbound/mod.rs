/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (helm, file system, console, etc.).
pub mod chart_renderer;
pub mod formatter;
pub mod output_presenter;
pub mod progress_reporter;
pub mod values_reader;

pub use chart_renderer::{
    ChartRenderer, ReleaseOptions, RenderRequest, DEFAULT_NAMESPACE, DEFAULT_RELEASE_NAME,
};
pub use formatter::SummaryFormatter;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
pub use values_reader::ValuesReader;
