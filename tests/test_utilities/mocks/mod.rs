/// Mock implementations for testing
mod mock_chart_renderer;
mod mock_progress_reporter;
mod mock_values_reader;

pub use mock_chart_renderer::MockChartRenderer;
pub use mock_progress_reporter::MockProgressReporter;
pub use mock_values_reader::MockValuesReader;
