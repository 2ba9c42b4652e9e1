//! Feature store persistence: delimited text with a header row.
//!
//! The writer always replaces any existing file at the target path and
//! creates the parent directory tree as needed. It returns the same table
//! borrow unchanged so calls can be chained.

use crate::error::{ErrorKind, IngestError, Result};
use crate::table::FeatureTable;
use csv::WriterBuilder;
use serde_json::Value;
use std::fs::{File, create_dir_all};
use std::path::Path;

/// Persist `table` at `path` and hand the same borrow back for chaining.
///
/// Writes CSV with a header row. Any existing file at `path` is replaced.
///
/// # Errors
/// Filesystem and serialization failures are wrapped with the
/// feature-store kind; nothing is retried.
pub fn export_to_feature_store<'a>(
    table: &'a FeatureTable,
    path: impl AsRef<Path>,
) -> Result<&'a FeatureTable> {
    let path = path.as_ref();
    write_table(table, path, ErrorKind::FeatureStore)?;
    tracing::info!(path = %path.display(), rows = table.len(), "feature store written");
    Ok(table)
}

/// Write a table as CSV with a header row, wrapping failures as `kind`.
///
/// A table with no columns has no header to emit; the file is created
/// empty so the output path still exists.
pub(crate) fn write_table(table: &FeatureTable, path: &Path, kind: ErrorKind) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        create_dir_all(parent)
            .map_err(|e| IngestError::wrap(kind, format!("mkdir -p {}", parent.display()), e))?;
    }

    if table.columns().is_empty() {
        File::create(path)
            .map_err(|e| IngestError::wrap(kind, format!("create {}", path.display()), e))?;
        return Ok(());
    }

    let mut wtr = WriterBuilder::new()
        .from_path(path)
        .map_err(|e| IngestError::wrap(kind, format!("create {}", path.display()), e))?;
    wtr.write_record(table.columns())
        .map_err(|e| IngestError::wrap(kind, format!("write CSV header to {}", path.display()), e))?;
    for (i, row) in table.rows().iter().enumerate() {
        wtr.write_record(row.iter().map(render_cell))
            .map_err(|e| IngestError::wrap(kind, format!("write CSV row #{}", i + 1), e))?;
    }
    wtr.flush()
        .map_err(|e| IngestError::wrap(kind, format!("flush {}", path.display()), e))?;
    Ok(())
}

/// CSV rendering for one cell. Missing values become the empty field;
/// nested arrays and objects are rendered as compact JSON text.
fn render_cell(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        nested => nested.to_string(),
    }
}
