use crate::error::StorageError;
use crate::short_id::ShortId;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Result type for record store operations.
pub type Result<T> = std::result::Result<T, StorageError>;

/// A stored `id -> longUrl` mapping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TinyUrlRecord {
    /// Primary key of the mapping.
    pub id: ShortId,
    /// The original URL that was shortened.
    pub long_url: String,
}

impl TinyUrlRecord {
    pub fn new(id: ShortId, long_url: impl Into<String>) -> Self {
        Self {
            id,
            long_url: long_url.into(),
        }
    }
}

/// A read-only view of a record store.
///
/// The resolve path only needs this half of [`RecordStore`].
#[async_trait]
pub trait ReadRecordStore: Send + Sync + 'static {
    /// Retrieves the record for a given id.
    /// Returns `None` if the id does not exist.
    async fn get(&self, id: &ShortId) -> Result<Option<TinyUrlRecord>>;
}

#[async_trait]
pub trait RecordStore: ReadRecordStore {
    /// Unconditionally inserts or replaces the record stored under `record.id`.
    async fn put(&self, record: TinyUrlRecord) -> Result<()>;
}

#[async_trait]
impl<T: ReadRecordStore + ?Sized> ReadRecordStore for Arc<T> {
    async fn get(&self, id: &ShortId) -> Result<Option<TinyUrlRecord>> {
        (**self).get(id).await
    }
}

#[async_trait]
impl<T: RecordStore + ?Sized> RecordStore for Arc<T> {
    async fn put(&self, record: TinyUrlRecord) -> Result<()> {
        (**self).put(record).await
    }
}
