//! MongoDB client and collection wrapper
//!
//! Typed collection access with schema-declared indexes and automatic
//! timestamp stamping on insert and upsert.

use bson::{doc, Document};
use chrono::{DateTime, Utc};
use mongodb::{
    options::{FindOptions, IndexOptions, ReplaceOptions, UpdateModifications},
    results::UpdateResult,
    Client, Collection, IndexModel,
};
use serde::{de::DeserializeOwned, Serialize};
use tracing::{error, info};

use crate::types::VitrineError;

/// Trait for schemas that provide index definitions
pub trait IntoIndexes {
    fn into_indices() -> Vec<(Document, Option<IndexOptions>)>;
}

/// Trait for schemas carrying `createdAt`/`updatedAt` stamps
///
/// Append-only schemas may map both setters onto a single timestamp field.
pub trait Timestamped {
    fn set_created_at(&mut self, at: DateTime<Utc>);
    fn set_updated_at(&mut self, at: DateTime<Utc>);
}

/// MongoDB client wrapper
#[derive(Clone)]
pub struct MongoClient {
    client: Client,
    db_name: String,
}

impl MongoClient {
    /// Create a new MongoDB client
    pub async fn new(uri: &str, db_name: &str) -> Result<Self, VitrineError> {
        info!("Connecting to MongoDB at {}", uri);

        // Use serverSelectionTimeoutMS to avoid hanging on unreachable MongoDB
        let timeout_uri = if uri.contains('?') {
            format!("{}&serverSelectionTimeoutMS=3000&connectTimeoutMS=3000", uri)
        } else {
            format!("{}?serverSelectionTimeoutMS=3000&connectTimeoutMS=3000", uri)
        };

        let client = Client::with_uri_str(&timeout_uri)
            .await
            .map_err(|e| VitrineError::Database(format!("Failed to connect to MongoDB: {}", e)))?;

        // Verify connection with timeout
        client
            .database(db_name)
            .run_command(doc! { "ping": 1 })
            .await
            .map_err(|e| VitrineError::Database(format!("MongoDB ping failed: {}", e)))?;

        info!("Connected to MongoDB database '{}'", db_name);

        Ok(Self {
            client,
            db_name: db_name.to_string(),
        })
    }

    /// Get a typed collection
    pub async fn collection<T>(&self, name: &str) -> Result<MongoCollection<T>, VitrineError>
    where
        T: Serialize + DeserializeOwned + Unpin + Send + Sync + IntoIndexes + Timestamped,
    {
        MongoCollection::new(&self.client, &self.db_name, name).await
    }

    /// Get the raw MongoDB client
    pub fn inner(&self) -> &Client {
        &self.client
    }

    /// Get the database name
    pub fn db_name(&self) -> &str {
        &self.db_name
    }
}

/// Typed MongoDB collection with automatic indexing
#[derive(Debug, Clone)]
pub struct MongoCollection<T>
where
    T: Serialize + DeserializeOwned + Unpin + Send + Sync,
{
    inner: Collection<T>,
}

impl<T> MongoCollection<T>
where
    T: Serialize + DeserializeOwned + Unpin + Send + Sync + IntoIndexes + Timestamped,
{
    /// Create a new collection and apply indexes
    pub async fn new(
        client: &Client,
        db_name: &str,
        collection_name: &str,
    ) -> Result<Self, VitrineError> {
        let collection = client.database(db_name).collection::<T>(collection_name);
        let mongo_collection = MongoCollection { inner: collection };

        // Apply indexes
        mongo_collection.apply_indexes().await?;

        Ok(mongo_collection)
    }

    /// Apply schema-defined indexes
    async fn apply_indexes(&self) -> Result<(), VitrineError> {
        let schema_indices = T::into_indices();

        if schema_indices.is_empty() {
            return Ok(());
        }

        let indices: Vec<IndexModel> = schema_indices
            .into_iter()
            .map(|(keys, opts)| IndexModel::builder().keys(keys).options(opts).build())
            .collect();

        self.inner
            .create_indexes(indices)
            .await
            .map_err(|e| VitrineError::Database(format!("Failed to create indexes: {}", e)))?;

        Ok(())
    }

    /// Insert a document, stamping both timestamps, and return it as stored
    pub async fn insert_one(&self, mut item: T) -> Result<T, VitrineError> {
        let now = Utc::now();
        item.set_created_at(now);
        item.set_updated_at(now);

        self.inner
            .insert_one(&item)
            .await
            .map_err(|e| VitrineError::Database(format!("Insert failed: {}", e)))?;

        Ok(item)
    }

    /// Find one document by filter
    pub async fn find_one(&self, filter: Document) -> Result<Option<T>, VitrineError> {
        self.inner
            .find_one(filter)
            .await
            .map_err(|e| VitrineError::Database(format!("Find failed: {}", e)))
    }

    /// Find many documents by filter, optionally sorted and capped
    pub async fn find_many(
        &self,
        filter: Document,
        sort: Option<Document>,
        limit: Option<i64>,
    ) -> Result<Vec<T>, VitrineError> {
        use futures_util::StreamExt;

        let mut options = FindOptions::default();
        options.sort = sort;
        options.limit = limit;

        let cursor = self
            .inner
            .find(filter)
            .with_options(options)
            .await
            .map_err(|e| VitrineError::Database(format!("Find failed: {}", e)))?;

        let results: Vec<T> = cursor
            .filter_map(|doc| async {
                match doc {
                    Ok(d) => Some(d),
                    Err(e) => {
                        error!("Error reading document: {}", e);
                        None
                    }
                }
            })
            .collect()
            .await;

        Ok(results)
    }

    /// Update one document
    pub async fn update_one(
        &self,
        filter: Document,
        update: impl Into<UpdateModifications>,
    ) -> Result<UpdateResult, VitrineError> {
        self.inner
            .update_one(filter, update.into())
            .await
            .map_err(|e| VitrineError::Database(format!("Update failed: {}", e)))
    }

    /// Delete one document, returning whether anything was removed
    pub async fn delete_one(&self, filter: Document) -> Result<bool, VitrineError> {
        let result = self
            .inner
            .delete_one(filter)
            .await
            .map_err(|e| VitrineError::Database(format!("Delete failed: {}", e)))?;

        Ok(result.deleted_count > 0)
    }

    /// Replace a document matching the filter, inserting it if absent.
    /// Stamps both timestamps on the replacement document.
    pub async fn replace_upsert(&self, filter: Document, mut item: T) -> Result<(), VitrineError> {
        let now = Utc::now();
        item.set_created_at(now);
        item.set_updated_at(now);

        let options = ReplaceOptions::builder().upsert(true).build();

        self.inner
            .replace_one(filter, &item)
            .with_options(options)
            .await
            .map_err(|e| VitrineError::Database(format!("Upsert failed: {}", e)))?;

        Ok(())
    }

    /// Get the underlying collection for advanced operations
    pub fn inner(&self) -> &Collection<T> {
        &self.inner
    }
}

#[cfg(test)]
mod tests {
    // Integration tests would require a running MongoDB instance
    // See docker-compose.dev.yml for local testing
}
