use crate::adapters::outbound::helm::split_by_source;
use crate::ports::outbound::{ChartRenderer, RenderRequest};
use crate::resource_summary::domain::RenderedOutput;
use crate::shared::error::ResError;
use crate::shared::security::{read_capped, read_regular_file, validate_not_symlink, MAX_FILE_SIZE};
use crate::shared::Result;
use anyhow::Context;
use std::fs;
use std::io;
use std::path::Path;

/// Location meaning "read the manifests from standard input"
pub const STDIN_LOCATION: &str = "-";

/// PrerenderedManifestReader adapter for manifests rendered ahead of time
///
/// Stands in for the templating engine: the request's chart location is read
/// as-is and the values in the request are ignored.
///
/// - `-` reads standard input
/// - a file is split on `# Source:` markers, or kept whole under its file name
/// - a directory contributes every regular file below it, keyed by its
///   `/`-separated relative path
pub struct PrerenderedManifestReader;

impl PrerenderedManifestReader {
    pub fn new() -> Self {
        Self
    }

    fn read_stdin(&self) -> Result<RenderedOutput> {
        let content = read_capped(io::stdin().lock(), "standard input", MAX_FILE_SIZE)?;
        Ok(split_or_whole(&content, "stdin"))
    }

    fn read_file(&self, path: &Path) -> Result<RenderedOutput> {
        let content = read_regular_file(path, "rendered manifest")?;
        let fallback_key = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Ok(split_or_whole(&content, &fallback_key))
    }

    fn read_directory(&self, root: &Path) -> Result<RenderedOutput> {
        let mut output = RenderedOutput::default();
        self.walk(root, "", &mut output)?;
        Ok(output)
    }

    fn walk(&self, dir: &Path, prefix: &str, output: &mut RenderedOutput) -> Result<()> {
        let mut entries = fs::read_dir(dir)
            .with_context(|| format!("Failed to read directory {}", dir.display()))?
            .collect::<io::Result<Vec<_>>>()
            .with_context(|| format!("Failed to read directory {}", dir.display()))?;
        entries.sort_by_key(|entry| entry.file_name());

        for entry in entries {
            let path = entry.path();
            let key = format!("{}{}", prefix, entry.file_name().to_string_lossy());
            validate_not_symlink(&path, "read").map_err(|e| ResError::SecurityError {
                path: path.clone(),
                reason: e.to_string(),
                hint: "Copy the rendered manifests into place instead of linking them".to_string(),
            })?;

            if path.is_dir() {
                self.walk(&path, &format!("{}/", key), output)?;
            } else {
                output.insert(key, read_regular_file(&path, "rendered manifest")?);
            }
        }
        Ok(())
    }
}

impl Default for PrerenderedManifestReader {
    fn default() -> Self {
        Self::new()
    }
}

impl ChartRenderer for PrerenderedManifestReader {
    fn render(&self, request: &RenderRequest) -> Result<RenderedOutput> {
        let location = request.chart.as_path();
        if location == Path::new(STDIN_LOCATION) {
            return self.read_stdin();
        }

        let metadata = fs::symlink_metadata(location).map_err(|_| ResError::ChartNotFound {
            path: location.to_path_buf(),
            suggestion: "Pass a rendered manifest file, a directory of manifests, or '-' for standard input".to_string(),
        })?;

        if metadata.is_symlink() {
            return Err(ResError::SecurityError {
                path: location.to_path_buf(),
                reason: "Rendered manifest location is a symbolic link".to_string(),
                hint: "Pass the real path of the manifests".to_string(),
            }
            .into());
        }

        if metadata.is_dir() {
            self.read_directory(location)
        } else if metadata.is_file() {
            self.read_file(location)
        } else {
            Err(ResError::InvalidPath {
                path: location.to_path_buf(),
                reason: "Not a regular file or directory".to_string(),
            }
            .into())
        }
    }
}

fn split_or_whole(content: &str, fallback_key: &str) -> RenderedOutput {
    split_by_source(content).unwrap_or_else(|| {
        let mut output = RenderedOutput::default();
        output.insert(fallback_key.to_string(), content.to_string());
        output
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::outbound::ReleaseOptions;
    use serde_yaml_ng::Mapping;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn request(chart: impl Into<PathBuf>) -> RenderRequest {
        RenderRequest {
            chart: chart.into(),
            values: Mapping::new(),
            release: ReleaseOptions::default(),
        }
    }

    #[test]
    fn test_file_without_markers_uses_file_name() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("all.yaml");
        fs::write(&path, "kind: Service\n").unwrap();

        let output = PrerenderedManifestReader::new().render(&request(&path)).unwrap();

        assert_eq!(output.len(), 1);
        assert_eq!(output.get("all.yaml"), Some("kind: Service\n"));
    }

    #[test]
    fn test_file_with_source_markers() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("rendered.yaml");
        fs::write(
            &path,
            "---\n# Source: web/templates/a.yaml\nkind: A\n---\n# Source: web/templates/b.yaml\nkind: B\n",
        )
        .unwrap();

        let output = PrerenderedManifestReader::new().render(&request(&path)).unwrap();

        let keys: Vec<_> = output.keys().collect();
        assert_eq!(keys, vec!["web/templates/a.yaml", "web/templates/b.yaml"]);
        assert_eq!(output.get("web/templates/b.yaml"), Some("kind: B"));
    }

    #[test]
    fn test_directory_keys_are_relative() {
        let temp_dir = TempDir::new().unwrap();
        let templates = temp_dir.path().join("templates");
        fs::create_dir(&templates).unwrap();
        fs::write(templates.join("deployment.yaml"), "kind: Deployment\n").unwrap();
        fs::write(temp_dir.path().join("NOTES.txt"), "notes\n").unwrap();

        let output = PrerenderedManifestReader::new()
            .render(&request(temp_dir.path()))
            .unwrap();

        let keys: Vec<_> = output.keys().collect();
        assert_eq!(keys, vec!["NOTES.txt", "templates/deployment.yaml"]);
    }

    #[test]
    fn test_missing_location_is_chart_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let err = PrerenderedManifestReader::new()
            .render(&request(temp_dir.path().join("missing")))
            .unwrap_err();

        assert!(matches!(
            err.downcast_ref::<ResError>(),
            Some(ResError::ChartNotFound { .. })
        ));
    }

    #[cfg(unix)]
    #[test]
    fn test_symlink_inside_directory_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("real.yaml");
        fs::write(&target, "kind: Service\n").unwrap();
        let rendered = temp_dir.path().join("rendered");
        fs::create_dir(&rendered).unwrap();
        std::os::unix::fs::symlink(&target, rendered.join("link.yaml")).unwrap();

        let err = PrerenderedManifestReader::new()
            .render(&request(&rendered))
            .unwrap_err();

        assert!(matches!(
            err.downcast_ref::<ResError>(),
            Some(ResError::SecurityError { .. })
        ));
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinked_location_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("real.yaml");
        fs::write(&target, "kind: Service\n").unwrap();
        let link = temp_dir.path().join("link.yaml");
        std::os::unix::fs::symlink(&target, &link).unwrap();

        let err = PrerenderedManifestReader::new().render(&request(&link)).unwrap_err();
        assert!(err.to_string().contains("Security violation"));
    }

    #[cfg(unix)]
    #[test]
    fn test_socket_location_is_invalid_path() {
        let temp_dir = TempDir::new().unwrap();
        let socket = temp_dir.path().join("rendered.sock");
        let _listener = std::os::unix::net::UnixListener::bind(&socket).unwrap();

        let err = PrerenderedManifestReader::new()
            .render(&request(&socket))
            .unwrap_err();

        assert!(matches!(
            err.downcast_ref::<ResError>(),
            Some(ResError::InvalidPath { .. })
        ));
    }
}
