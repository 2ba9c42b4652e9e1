//! In-memory tabular form of a document collection.
//!
//! A [`FeatureTable`] is the full record set coerced into rows and columns:
//! - the column set is the **union of keys** across all documents, in
//!   first-seen order; no fixed schema is enforced;
//! - the per-document identifier column is dropped if present;
//! - the literal token `"na"` is normalized to the missing-value marker.

use mongodb::bson::{Bson, Document};
use serde_json::Value;

/// Column name MongoDB assigns to the per-document identifier.
pub const ID_COLUMN: &str = "_id";

/// Literal cell value normalized to the missing-value marker.
pub const MISSING_TOKEN: &str = "na";

/// A flattened collection: named columns and JSON-valued rows.
///
/// Each row holds exactly one cell per column; [`Value::Null`] is the
/// missing-value marker, used both for keys absent from a document and for
/// cells that held the literal `"na"`.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureTable {
    columns: Vec<String>,
    rows: Vec<Vec<Value>>,
}

impl FeatureTable {
    /// Build a table from raw collection documents.
    ///
    /// Values are carried over through relaxed Extended JSON conversion;
    /// apart from the `"na"` normalization nothing is rewritten.
    #[must_use]
    pub fn from_documents<I>(documents: I) -> Self
    where
        I: IntoIterator<Item = Document>,
    {
        let documents: Vec<Document> = documents.into_iter().collect();

        // Union of keys in first-seen order; `_id` never becomes a column.
        let mut columns: Vec<String> = Vec::new();
        for doc in &documents {
            for key in doc.keys() {
                if key != ID_COLUMN && !columns.iter().any(|c| c == key) {
                    columns.push(key.clone());
                }
            }
        }

        let rows = documents
            .into_iter()
            .map(|mut doc| {
                columns
                    .iter()
                    .map(|col| match doc.remove(col) {
                        None | Some(Bson::Null) => Value::Null,
                        Some(bson) => normalize(bson.into_relaxed_extjson()),
                    })
                    .collect()
            })
            .collect();

        Self { columns, rows }
    }

    /// Column names in first-seen order.
    #[must_use]
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Rows, one [`Value`] cell per column.
    #[must_use]
    pub fn rows(&self) -> &[Vec<Value>] {
        &self.rows
    }

    /// Number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table holds no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// New table holding the rows at `indices`, in the given order.
    pub(crate) fn select(&self, indices: &[usize]) -> Self {
        Self {
            columns: self.columns.clone(),
            rows: indices.iter().map(|&i| self.rows[i].clone()).collect(),
        }
    }
}

/// `"na"` becomes missing; every other value is unchanged.
fn normalize(value: Value) -> Value {
    match value {
        Value::String(s) if s == MISSING_TOKEN => Value::Null,
        other => other,
    }
}
