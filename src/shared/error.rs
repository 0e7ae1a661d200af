use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow scripts to distinguish argument mistakes from
/// failures while rendering or summarizing a chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Summary (or passthrough output) was produced
    Success = 0,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (render failure, malformed manifest, file I/O error, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Failures raised by the manifest extraction core.
///
/// Unknown kinds and absent optional fields are never errors; only a bad
/// quantity or a missing/mis-shaped mandatory field ends up here.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ManifestError {
    #[error("Invalid resource quantity {value:?}: {reason}")]
    QuantityParse { value: String, reason: String },

    #[error(
        "Malformed {kind} manifest {}: `{field}` must be a {expected}, found {found}",
        .name.as_deref().unwrap_or("<unnamed>")
    )]
    MalformedManifest {
        kind: String,
        name: Option<String>,
        field: String,
        expected: &'static str,
        found: &'static str,
    },

    /// Wraps a failure with the rendered template and document it came from
    #[error("Failed to summarize {path} (document #{index})")]
    InDocument {
        path: String,
        index: usize,
        #[source]
        source: Box<ManifestError>,
    },
}

impl ManifestError {
    pub(crate) fn quantity(value: &str, reason: impl Into<String>) -> Self {
        ManifestError::QuantityParse {
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    pub(crate) fn in_document(self, path: &str, index: usize) -> Self {
        ManifestError::InDocument {
            path: path.to_string(),
            index,
            source: Box::new(self),
        }
    }

    /// Returns the underlying error, looking through document context.
    pub fn root(&self) -> &ManifestError {
        match self {
            ManifestError::InDocument { source, .. } => source.root(),
            other => other,
        }
    }

    /// Returns true if a quantity string did not match the quantity grammar.
    pub fn is_quantity_parse(&self) -> bool {
        matches!(self.root(), ManifestError::QuantityParse { .. })
    }

    /// Returns true if a mandatory field was missing or had the wrong shape.
    pub fn is_malformed_manifest(&self) -> bool {
        matches!(self.root(), ManifestError::MalformedManifest { .. })
    }
}

/// Application-specific errors for the CLI and its adapters.
///
/// Uses thiserror to derive Display and Error traits automatically,
/// reducing boilerplate while maintaining user-friendly error messages.
#[derive(Debug, Error)]
pub enum ResError {
    #[error("Chart not found: {path}\n\n💡 Hint: {suggestion}")]
    ChartNotFound { path: PathBuf, suggestion: String },

    #[error("Failed to parse values file: {path}\nDetails: {details}\n\n💡 Hint: Values files must contain a YAML mapping at the top level")]
    ValuesParseError { path: PathBuf, details: String },

    #[error("Failed to parse --set data {expression:?}\nDetails: {reason}\n\n💡 Hint: Use key=value pairs, e.g. --set image.tag=1.2.3,replicaCount=2")]
    SetParseError { expression: String, reason: String },

    #[error("Failed to render chart: {chart}\nDetails: {details}\n\n💡 Hint: Check that helm is installed, or pass already-rendered manifests with --rendered")]
    RenderError { chart: String, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Invalid path: {path}\nReason: {reason}\n\n💡 Hint: Please specify an existing chart directory or rendered manifest")]
    InvalidPath { path: PathBuf, reason: String },

    /// Validation error for option values
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Security violation: {path}\nReason: {reason}\n\n💡 Hint: {hint}")]
    SecurityError {
        path: PathBuf,
        reason: String,
        hint: String,
    },
}
