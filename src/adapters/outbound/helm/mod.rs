/// Helm adapters: the `helm template` renderer and its output format
mod helm_cli_renderer;
mod source_markers;

pub use helm_cli_renderer::{HelmCliRenderer, DEFAULT_HELM_BIN};
pub use source_markers::split_by_source;
