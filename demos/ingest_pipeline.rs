//! End-to-end ingestion run against a live MongoDB deployment.
//!
//! The connection string is resolved from the `MONGO_DB_URL` environment
//! variable *here*, in the binary, and passed into the library explicitly.
//!
//! Run with: MONGO_DB_URL='mongodb+srv://...' cargo run --example ingest_pipeline

use anyhow::{Context, Result};
use mongoflow::{DataIngestion, IngestionConfig};

fn main() -> Result<()> {
    tracing_subscriber::fmt().init();

    let mongo_uri =
        std::env::var("MONGO_DB_URL").context("MONGO_DB_URL environment variable not set")?;

    let config = IngestionConfig {
        mongo_uri,
        database: "networksecurity".into(),
        collection: "phishing_data".into(),
        feature_store_path: "artifacts/feature_store/data.csv".into(),
        training_path: "artifacts/ingested/train.csv".into(),
        testing_path: "artifacts/ingested/test.csv".into(),
        split_ratio: 0.2,
        seed: 42,
    };

    let mut pipeline = DataIngestion::new(config)?;
    let artifact = pipeline.run()?;

    println!("ingestion complete");
    println!("  train: {}", artifact.training_path().display());
    println!("  test:  {}", artifact.testing_path().display());
    Ok(())
}
