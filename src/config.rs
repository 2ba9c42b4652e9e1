//! Ingestion run configuration.
//!
//! [`IngestionConfig`] is an explicit value object: the connection string
//! is a field like any other, never read from ambient process environment
//! by the library. Configurations deserialize from TOML and are validated
//! before a pipeline accepts them.

use crate::error::{ErrorKind, IngestError, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Fraction of rows allocated to the test subset when none is configured.
pub const DEFAULT_SPLIT_RATIO: f64 = 0.2;

/// Shuffle seed used when none is configured.
pub const DEFAULT_SEED: u64 = 42;

/// Everything one ingestion run needs: source coordinates, the three
/// destination paths, and the partition parameters.
#[derive(Debug, Clone, Deserialize)]
pub struct IngestionConfig {
    /// MongoDB connection string. TLS is governed by the URI; the driver
    /// verifies server certificates against the platform trust anchors.
    pub mongo_uri: String,
    /// Source database name.
    pub database: String,
    /// Source collection name.
    pub collection: String,
    /// Destination of the full feature store file.
    pub feature_store_path: PathBuf,
    /// Destination of the training subset.
    pub training_path: PathBuf,
    /// Destination of the testing subset.
    pub testing_path: PathBuf,
    /// Fraction of rows in the test subset, in (0, 1).
    #[serde(default = "default_split_ratio")]
    pub split_ratio: f64,
    /// Shuffle seed. Same table + ratio + seed reproduces the partition.
    #[serde(default = "default_seed")]
    pub seed: u64,
}

fn default_split_ratio() -> f64 {
    DEFAULT_SPLIT_RATIO
}

fn default_seed() -> u64 {
    DEFAULT_SEED
}

impl IngestionConfig {
    /// Parse a configuration from a TOML document and validate it.
    ///
    /// # Errors
    /// Returns a config error if the document does not parse or fails
    /// [`validate`](Self::validate).
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        let cfg: Self = toml::from_str(raw)
            .map_err(|e| IngestError::wrap(ErrorKind::Config, "parse TOML configuration", e))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Load a configuration from a TOML file.
    ///
    /// # Errors
    /// Returns a config error if the file cannot be read, does not parse,
    /// or fails validation.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)
            .map_err(|e| IngestError::wrap(ErrorKind::Config, format!("read {}", path.display()), e))?;
        Self::from_toml_str(&raw)
    }

    /// Check the invariants a pipeline relies on.
    ///
    /// # Errors
    /// Returns a config error naming the first violated field: empty
    /// connection string, database, or collection name, or a split ratio
    /// outside the open interval (0, 1).
    pub fn validate(&self) -> Result<()> {
        if self.mongo_uri.is_empty() {
            return Err(IngestError::new(ErrorKind::Config, "mongo_uri must not be empty"));
        }
        if self.database.is_empty() {
            return Err(IngestError::new(ErrorKind::Config, "database must not be empty"));
        }
        if self.collection.is_empty() {
            return Err(IngestError::new(ErrorKind::Config, "collection must not be empty"));
        }
        // The comparison is written to also reject NaN.
        if !(self.split_ratio > 0.0 && self.split_ratio < 1.0) {
            return Err(IngestError::new(
                ErrorKind::Config,
                format!("split_ratio must be in (0, 1), got {}", self.split_ratio),
            ));
        }
        Ok(())
    }
}
