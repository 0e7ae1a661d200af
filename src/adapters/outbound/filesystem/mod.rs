/// Filesystem adapters: values files, pre-rendered manifests and output files
mod file_reader;
mod file_writer;
mod prerendered_reader;

pub use file_reader::FileSystemReader;
pub use file_writer::{FileSystemWriter, StdoutPresenter};
pub use prerendered_reader::{PrerenderedManifestReader, STDIN_LOCATION};
