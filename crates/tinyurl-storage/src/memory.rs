use async_trait::async_trait;
use dashmap::DashMap;
use std::sync::Arc;
use tinyurl_core::repository::{ReadRecordStore, RecordStore, Result, TinyUrlRecord};
use tinyurl_core::ShortId;

/// In-memory implementation of the record store using DashMap.
///
/// Clones share the same underlying map, so one repository can back both
/// the create and the resolve service. Every `put` is immediately visible
/// to subsequent `get` calls.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    storage: Arc<DashMap<String, String>>,
}

impl InMemoryRepository {
    /// Creates a new in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new in-memory repository with the specified capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            storage: Arc::new(DashMap::with_capacity(capacity)),
        }
    }

    /// Number of stored mappings.
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }
}

#[async_trait]
impl ReadRecordStore for InMemoryRepository {
    async fn get(&self, id: &ShortId) -> Result<Option<TinyUrlRecord>> {
        Ok(self
            .storage
            .get(id.as_str())
            .map(|entry| TinyUrlRecord::new(id.clone(), entry.value().clone())))
    }
}

#[async_trait]
impl RecordStore for InMemoryRepository {
    async fn put(&self, record: TinyUrlRecord) -> Result<()> {
        self.storage.insert(record.id.into(), record.long_url);
        Ok(())
    }
}
