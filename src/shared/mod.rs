/// Shared kernel - Common utilities and types
///
/// Contains cross-cutting concerns used by every layer: error types,
/// result aliases and filesystem security checks.
pub mod error;
pub mod result;
pub mod security;

pub use result::{ManifestResult, Result};
