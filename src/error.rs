//! The single error type shared by every pipeline stage.
//!
//! Every fallible public operation in this crate returns [`IngestError`]:
//! one structured type carrying the failing stage as an [`ErrorKind`], a
//! human-readable message, and the originating cause as `source`. Nothing
//! is retried or recovered internally; errors propagate to the caller of
//! the orchestrator.

use thiserror::Error;

/// Stage discriminant for programmatic handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Configuration missing or invalid.
    Config,
    /// Connecting to or reading from the source collection failed.
    Collection,
    /// Persisting the feature store failed.
    FeatureStore,
    /// Partitioning or writing the train/test files failed.
    Split,
}

impl ErrorKind {
    /// Short lowercase label, stable across releases.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Config => "config",
            Self::Collection => "collection",
            Self::FeatureStore => "feature-store",
            Self::Split => "split",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error raised by any stage of an ingestion run.
#[derive(Debug, Error)]
#[error("{kind}: {message}")]
pub struct IngestError {
    kind: ErrorKind,
    message: String,
    #[source]
    source: Option<Box<dyn std::error::Error + Send + Sync + 'static>>,
}

impl IngestError {
    pub(crate) fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
        }
    }

    pub(crate) fn wrap(
        kind: ErrorKind,
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            kind,
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// The stage this error originated from.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, IngestError>;
