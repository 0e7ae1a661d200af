use crate::resource_summary::domain::RenderedOutput;
use crate::shared::Result;
use serde_yaml_ng::Mapping;
use std::path::PathBuf;

/// Release name used when none is given
pub const DEFAULT_RELEASE_NAME: &str = "RELEASE-NAME";

/// Namespace used when none is given
pub const DEFAULT_NAMESPACE: &str = "NAMESPACE";

/// Release context handed to the templating engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseOptions {
    pub name: String,
    pub namespace: String,
}

impl ReleaseOptions {
    pub fn new(name: impl Into<String>, namespace: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            namespace: namespace.into(),
        }
    }
}

impl Default for ReleaseOptions {
    fn default() -> Self {
        Self::new(DEFAULT_RELEASE_NAME, DEFAULT_NAMESPACE)
    }
}

/// Everything needed to render a chart once
#[derive(Debug, Clone)]
pub struct RenderRequest {
    /// Chart directory or archive, or a pre-rendered manifest location
    pub chart: PathBuf,
    /// Merged values the chart is rendered with
    pub values: Mapping,
    pub release: ReleaseOptions,
}

/// ChartRenderer port for turning a chart into rendered templates
///
/// Implementations return a map from template key
/// (e.g. `mychart/templates/deployment.yaml`) to the rendered text.
pub trait ChartRenderer {
    /// Renders the chart described by `request`
    ///
    /// # Errors
    /// Returns an error if the chart cannot be located or rendering fails
    fn render(&self, request: &RenderRequest) -> Result<RenderedOutput>;
}

impl<T: ChartRenderer + ?Sized> ChartRenderer for Box<T> {
    fn render(&self, request: &RenderRequest) -> Result<RenderedOutput> {
        (**self).render(request)
    }
}
