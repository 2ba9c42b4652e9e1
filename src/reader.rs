//! Blocking MongoDB collection reader.

use crate::error::{ErrorKind, IngestError, Result};
use crate::table::FeatureTable;
use mongodb::bson::Document;
use mongodb::sync::Client;

/// Reads one named collection into a [`FeatureTable`].
///
/// The connection string is supplied explicitly at construction. TLS is
/// governed by the URI; the driver verifies server certificates against
/// the platform trust anchors. The connection is opened and used within
/// the call; there is no pooling or reuse across calls.
#[derive(Debug, Clone)]
pub struct CollectionReader {
    uri: String,
}

impl CollectionReader {
    /// Create a reader for the given connection string.
    #[must_use]
    pub fn new(uri: impl Into<String>) -> Self {
        Self { uri: uri.into() }
    }

    /// Materialize every document of `database`.`collection` into a table.
    ///
    /// The per-document identifier column is dropped and literal `"na"`
    /// cells are normalized to the missing-value marker; see
    /// [`FeatureTable::from_documents`].
    ///
    /// # Errors
    /// Any connection, authentication, or transfer failure is wrapped into
    /// a single collection error carrying the driver error as cause. No
    /// retry, no partial results.
    pub fn export_collection(&self, database: &str, collection: &str) -> Result<FeatureTable> {
        tracing::info!(database, collection, "exporting collection");

        let client = Client::with_uri_str(&self.uri)
            .map_err(|e| IngestError::wrap(ErrorKind::Collection, "connect to MongoDB", e))?;
        let coll = client.database(database).collection::<Document>(collection);

        let cursor = coll.find(Document::new()).run().map_err(|e| {
            IngestError::wrap(ErrorKind::Collection, format!("query {database}.{collection}"), e)
        })?;

        let mut documents = Vec::new();
        for doc in cursor {
            let doc = doc.map_err(|e| {
                IngestError::wrap(
                    ErrorKind::Collection,
                    format!("read document from {database}.{collection}"),
                    e,
                )
            })?;
            documents.push(doc);
        }

        let table = FeatureTable::from_documents(documents);
        tracing::info!(
            rows = table.len(),
            columns = table.columns().len(),
            "collection exported"
        );
        Ok(table)
    }
}
