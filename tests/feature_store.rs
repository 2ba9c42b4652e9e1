use anyhow::Result;
use mongodb::bson::doc;
use mongoflow::{FeatureTable, export_to_feature_store};
use std::fs;

#[test]
fn writes_header_and_rows() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("store.csv");
    let table = FeatureTable::from_documents(vec![
        doc! { "x": 1, "y": "hello" },
        doc! { "x": 2 },
    ]);

    export_to_feature_store(&table, &path)?;

    let contents = fs::read_to_string(&path)?;
    assert_eq!(contents, "x,y\n1,hello\n2,\n");
    Ok(())
}

#[test]
fn creates_parent_directories() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("feature_store").join("nested").join("store.csv");
    let table = FeatureTable::from_documents(vec![doc! { "x": 1 }]);

    export_to_feature_store(&table, &path)?;

    assert!(path.exists());
    Ok(())
}

#[test]
fn replaces_existing_file() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("store.csv");

    let first = FeatureTable::from_documents(vec![doc! { "x": 1 }, doc! { "x": 2 }]);
    export_to_feature_store(&first, &path)?;

    let second = FeatureTable::from_documents(vec![doc! { "y": "only" }]);
    export_to_feature_store(&second, &path)?;

    assert_eq!(fs::read_to_string(&path)?, "y\nonly\n");
    Ok(())
}

#[test]
fn returns_the_same_table_for_chaining() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("store.csv");
    let table = FeatureTable::from_documents(vec![doc! { "x": 1 }]);

    let out = export_to_feature_store(&table, &path)?;

    assert!(std::ptr::eq(out, &table));
    Ok(())
}

#[test]
fn empty_table_touches_an_empty_file() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("store.csv");
    let table = FeatureTable::from_documents(Vec::new());

    export_to_feature_store(&table, &path)?;

    assert_eq!(fs::read_to_string(&path)?, "");
    Ok(())
}

#[test]
fn nested_values_render_as_compact_json() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("store.csv");
    let table = FeatureTable::from_documents(vec![
        doc! { "tags": ["a", "b"], "meta": { "k": 1 } },
    ]);

    export_to_feature_store(&table, &path)?;

    let mut rdr = csv::Reader::from_path(&path)?;
    let record = rdr.records().next().expect("one data row")?;
    assert_eq!(&record[0], r#"["a","b"]"#);
    assert_eq!(&record[1], r#"{"k":1}"#);
    Ok(())
}
