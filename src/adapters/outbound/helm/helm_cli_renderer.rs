use super::split_by_source;
use crate::ports::outbound::{ChartRenderer, RenderRequest};
use crate::resource_summary::domain::RenderedOutput;
use crate::shared::error::ResError;
use crate::shared::Result;
use std::io::Write;
use std::path::PathBuf;
use std::process::Command;
use tempfile::NamedTempFile;

/// Helm executable looked up on PATH when none is configured
pub const DEFAULT_HELM_BIN: &str = "helm";

/// HelmCliRenderer adapter rendering charts with `helm template`
///
/// The merged values are written to a temporary file and passed with
/// `--values`, so `--set` parsing stays on this side. Nothing is sent to a
/// cluster.
pub struct HelmCliRenderer {
    helm_bin: PathBuf,
}

impl HelmCliRenderer {
    pub fn new(helm_bin: impl Into<PathBuf>) -> Self {
        Self {
            helm_bin: helm_bin.into(),
        }
    }

    fn build_command(&self, request: &RenderRequest, values_path: &std::path::Path) -> Command {
        let mut command = Command::new(&self.helm_bin);
        command
            .arg("template")
            .arg(&request.release.name)
            .arg(&request.chart)
            .arg("--namespace")
            .arg(&request.release.namespace)
            .arg("--values")
            .arg(values_path);
        command
    }

    fn write_values(&self, request: &RenderRequest) -> Result<NamedTempFile> {
        let render_error = |details: String| ResError::RenderError {
            chart: request.chart.display().to_string(),
            details,
        };

        let yaml = serde_yaml_ng::to_string(&request.values)
            .map_err(|e| render_error(format!("Failed to serialize values: {}", e)))?;

        let mut file = NamedTempFile::new()
            .map_err(|e| render_error(format!("Failed to create values file: {}", e)))?;
        file.write_all(yaml.as_bytes())
            .map_err(|e| render_error(format!("Failed to write values file: {}", e)))?;

        Ok(file)
    }
}

impl Default for HelmCliRenderer {
    fn default() -> Self {
        Self::new(DEFAULT_HELM_BIN)
    }
}

impl ChartRenderer for HelmCliRenderer {
    fn render(&self, request: &RenderRequest) -> Result<RenderedOutput> {
        let chart = request.chart.display().to_string();
        let values_file = self.write_values(request)?;

        let output = self
            .build_command(request, values_file.path())
            .output()
            .map_err(|e| ResError::RenderError {
                chart: chart.clone(),
                details: format!("Failed to run {}: {}", self.helm_bin.display(), e),
            })?;

        if !output.status.success() {
            return Err(ResError::RenderError {
                chart,
                details: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            }
            .into());
        }

        let stdout = String::from_utf8(output.stdout).map_err(|e| ResError::RenderError {
            chart: chart.clone(),
            details: format!("helm produced non UTF-8 output: {}", e),
        })?;

        Ok(split_by_source(&stdout).unwrap_or_default())
    }
}
