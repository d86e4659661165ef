//! Structured error types for showcase-core.
//!
//! The binary crate (showcase-cli) wraps these in `anyhow` with context;
//! library callers get a matchable enum.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShowcaseError {
    /// I/O operation failed
    #[error("I/O error at {path:?}: {source}")]
    Io { path: PathBuf, source: io::Error },

    /// JSON serialization failed
    #[error("JSON error while writing {bundle}: {source}")]
    Json {
        bundle: String,
        source: serde_json::Error,
    },

    /// Config file exists but could not be parsed
    #[error("Invalid config file {path:?}: {source}")]
    ConfigParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// Config could not be rendered back to TOML
    #[error("Failed to render config: {0}")]
    ConfigRender(#[from] toml::ser::Error),

    /// Unknown feature id (string form did not match the registry)
    #[error("Unknown feature id '{0}'")]
    UnknownFeature(String),
}

/// Result type alias for showcase-core operations
pub type Result<T> = std::result::Result<T, ShowcaseError>;

impl ShowcaseError {
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn json(bundle: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Json {
            bundle: bundle.into(),
            source,
        }
    }
}
