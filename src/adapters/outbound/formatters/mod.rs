/// Formatter adapters for the summary output formats
mod json_formatter;
mod markdown_formatter;
mod passthrough_formatter;
mod table_formatter;

pub use json_formatter::JsonFormatter;
pub use markdown_formatter::MarkdownFormatter;
pub use passthrough_formatter::PassthroughFormatter;
pub use table_formatter::{TableFormatter, TABLE_HEADER};
