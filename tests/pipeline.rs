use anyhow::Result;
use mongodb::bson::doc;
use mongoflow::{
    DataIngestion, ErrorKind, FeatureTable, IngestionArtifact, IngestionConfig, RunState,
    export_to_feature_store, export_train_test,
};
use std::fs;
use std::path::Path;

fn line_count(path: &Path) -> Result<usize> {
    Ok(fs::read_to_string(path)?.lines().count())
}

#[test]
fn full_pass_from_documents_to_split_files() -> Result<()> {
    // Ten documents, one carrying the literal missing token.
    let mut docs: Vec<_> = (0..9).map(|i: i32| doc! { "x": i, "label": i % 2 }).collect();
    docs.push(doc! { "x": "na", "label": 1 });

    let dir = tempfile::tempdir()?;
    let store = dir.path().join("feature_store.csv");
    let train = dir.path().join("train.csv");
    let test = dir.path().join("test.csv");

    let table = FeatureTable::from_documents(docs);
    assert_eq!(table.len(), 10);

    let table = export_to_feature_store(&table, &store)?;
    export_train_test(table, 0.2, 42, &train, &test)?;

    assert_eq!(line_count(&store)?, 11); // header + 10 rows
    assert_eq!(line_count(&train)?, 9); // header + 8 rows
    assert_eq!(line_count(&test)?, 3); // header + 2 rows

    // The missing token is persisted as the empty field.
    let contents = fs::read_to_string(&store)?;
    assert!(contents.lines().any(|line| line.starts_with(',')));
    Ok(())
}

#[test]
fn artifact_names_the_configured_paths() {
    let artifact = IngestionArtifact::new("out/train.csv", "out/test.csv");
    assert_eq!(artifact.training_path(), Path::new("out/train.csv"));
    assert_eq!(artifact.testing_path(), Path::new("out/test.csv"));
}

#[test]
fn invalid_config_is_rejected_at_construction() {
    let config = IngestionConfig {
        mongo_uri: "mongodb://localhost:27017".into(),
        database: "db".into(),
        collection: "coll".into(),
        feature_store_path: "out/store.csv".into(),
        training_path: "out/train.csv".into(),
        testing_path: "out/test.csv".into(),
        split_ratio: 1.5,
        seed: 42,
    };

    let err = DataIngestion::new(config).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Config);
}

#[test]
fn failed_read_leaves_no_output_files() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let store = dir.path().join("feature_store.csv");
    let train = dir.path().join("train.csv");
    let test = dir.path().join("test.csv");

    // Nothing listens on this port; keep the driver timeouts short so the
    // failure surfaces quickly.
    let config = IngestionConfig {
        mongo_uri: "mongodb://127.0.0.1:9/?serverSelectionTimeoutMS=200&connectTimeoutMS=200&directConnection=true"
            .into(),
        database: "db".into(),
        collection: "coll".into(),
        feature_store_path: store.clone(),
        training_path: train.clone(),
        testing_path: test.clone(),
        split_ratio: 0.2,
        seed: 42,
    };

    let mut pipeline = DataIngestion::new(config)?;
    assert_eq!(pipeline.state(), RunState::NotStarted);

    let err = pipeline.run().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Collection);
    assert_eq!(pipeline.state(), RunState::Failed);
    assert!(!store.exists());
    assert!(!train.exists());
    assert!(!test.exists());
    Ok(())
}
