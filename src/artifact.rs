//! Result record returned by a completed ingestion run.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Immutable pair of output paths produced by one ingestion run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngestionArtifact {
    training_path: PathBuf,
    testing_path: PathBuf,
}

impl IngestionArtifact {
    /// Record the two split-file paths.
    #[must_use]
    pub fn new(training_path: impl Into<PathBuf>, testing_path: impl Into<PathBuf>) -> Self {
        Self {
            training_path: training_path.into(),
            testing_path: testing_path.into(),
        }
    }

    /// Path of the training subset file.
    #[must_use]
    pub fn training_path(&self) -> &Path {
        &self.training_path
    }

    /// Path of the testing subset file.
    #[must_use]
    pub fn testing_path(&self) -> &Path {
        &self.testing_path
    }
}
