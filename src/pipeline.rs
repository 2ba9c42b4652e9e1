//! Pipeline orchestration: reader → feature store writer → splitter.

use crate::artifact::IngestionArtifact;
use crate::config::IngestionConfig;
use crate::error::Result;
use crate::feature_store::export_to_feature_store;
use crate::reader::CollectionReader;
use crate::splitter::export_train_test;

/// Lifecycle of one ingestion run.
///
/// `Failed` is terminal for the run; the error is surfaced verbatim to the
/// caller with the original cause attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunState {
    /// No run has been attempted yet.
    #[default]
    NotStarted,
    /// A run is executing its stages.
    InProgress,
    /// The last run returned an artifact.
    Completed,
    /// The last run aborted; earlier outputs remain on disk.
    Failed,
}

/// Runs the three ingestion stages in strict sequence.
///
/// One call does one full pass: fetch the collection, persist the feature
/// store, write the train/test files. If any stage fails the whole run
/// fails; there is no retry and no cleanup of files written by earlier
/// stages. Concurrent runs against the same configured paths are not
/// supported.
#[derive(Debug)]
pub struct DataIngestion {
    config: IngestionConfig,
    state: RunState,
}

impl DataIngestion {
    /// Create a pipeline for `config`.
    ///
    /// # Errors
    /// Returns a config error if the configuration fails validation.
    pub fn new(config: IngestionConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            state: RunState::NotStarted,
        })
    }

    /// Current lifecycle state.
    #[must_use]
    pub fn state(&self) -> RunState {
        self.state
    }

    /// The configuration this pipeline was built with.
    #[must_use]
    pub fn config(&self) -> &IngestionConfig {
        &self.config
    }

    /// Execute the full ingestion pass and return the artifact naming the
    /// two split-file paths.
    ///
    /// # Errors
    /// The first failing stage aborts the run with its wrapped error;
    /// files written by earlier stages in the same run remain on disk.
    pub fn run(&mut self) -> Result<IngestionArtifact> {
        tracing::info!("starting data ingestion");
        self.state = RunState::InProgress;
        match self.execute() {
            Ok(artifact) => {
                self.state = RunState::Completed;
                tracing::info!("data ingestion completed");
                Ok(artifact)
            }
            Err(e) => {
                self.state = RunState::Failed;
                tracing::error!(error = %e, "data ingestion failed");
                Err(e)
            }
        }
    }

    fn execute(&self) -> Result<IngestionArtifact> {
        let cfg = &self.config;

        let reader = CollectionReader::new(&cfg.mongo_uri);
        let table = reader.export_collection(&cfg.database, &cfg.collection)?;
        let table = export_to_feature_store(&table, &cfg.feature_store_path)?;
        export_train_test(
            table,
            cfg.split_ratio,
            cfg.seed,
            &cfg.training_path,
            &cfg.testing_path,
        )?;

        Ok(IngestionArtifact::new(
            cfg.training_path.clone(),
            cfg.testing_path.clone(),
        ))
    }
}
