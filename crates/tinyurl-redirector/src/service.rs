use std::sync::Arc;

use async_trait::async_trait;
use tinyurl_core::{ReadRecordStore, Redirector, ServiceError, ShortId, TinyUrlRecord};
use tracing::{debug, trace, warn};

/// Service for resolving ids back to their long URLs.
///
/// Uses a read-only store. Unknown ids, malformed ids and store failures
/// all come back as [`ServiceError::NotFound`]; store failures are logged
/// first so backend outages remain visible.
#[derive(Debug, Clone)]
pub struct ResolveService<R> {
    repository: Arc<R>,
}

impl<R: ReadRecordStore> ResolveService<R> {
    /// Creates a new ResolveService with the given store.
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Resolves an id to its stored record.
    ///
    /// # Returns
    ///
    /// * `Ok(record)` - The stored mapping
    /// * `Err(ServiceError::NotFound)` - The id is malformed, unknown, or the
    ///   lookup failed
    pub async fn resolve(&self, id: &str) -> Result<TinyUrlRecord, ServiceError> {
        Redirector::resolve(self, id).await
    }
}

#[async_trait]
impl<R: ReadRecordStore> Redirector for ResolveService<R> {
    async fn resolve(&self, id: &str) -> Result<TinyUrlRecord, ServiceError> {
        trace!(id = %id, "resolving short id");

        let short_id = match ShortId::new(id) {
            Ok(short_id) => short_id,
            Err(e) => {
                debug!(id = %id, error = %e, "malformed short id");
                return Err(ServiceError::NotFound(id.to_string()));
            }
        };

        match self.repository.get(&short_id).await {
            Ok(Some(record)) => {
                debug!(id = %id, url = %record.long_url, "resolved short id");
                Ok(record)
            }
            Ok(None) => {
                trace!(id = %id, "short id not found");
                Err(ServiceError::NotFound(id.to_string()))
            }
            Err(e) => {
                warn!(id = %id, error = %e, "lookup failed, reporting not found");
                Err(ServiceError::NotFound(id.to_string()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::mock;
    use tinyurl_core::{RecordStore, StorageError};
    use tinyurl_storage::InMemoryRepository;

    mock! {
        Store {}

        #[async_trait]
        impl ReadRecordStore for Store {
            async fn get(&self, id: &ShortId) -> tinyurl_core::repository::Result<Option<TinyUrlRecord>>;
        }
    }

    async fn setup_with_record(id: &str, url: &str) -> ResolveService<InMemoryRepository> {
        let repo = InMemoryRepository::new();
        repo.put(TinyUrlRecord::new(ShortId::new(id).unwrap(), url))
            .await
            .unwrap();
        ResolveService::new(repo)
    }

    #[tokio::test]
    async fn resolve_existing_id() {
        let service = setup_with_record("lzbfxd8mrui8", "https://aws.amazon.com").await;

        let record = service.resolve("lzbfxd8mrui8").await.unwrap();
        assert_eq!(record.long_url, "https://aws.amazon.com");
    }

    #[tokio::test]
    async fn resolve_nonexistent_id() {
        let service = setup_with_record("lzbfxd8mrui8", "https://aws.amazon.com").await;

        let err = service.resolve("abc123").await.unwrap_err();
        assert_eq!(err, ServiceError::NotFound("abc123".to_string()));
    }

    #[tokio::test]
    async fn malformed_id_skips_store() {
        let mut store = MockStore::new();
        store.expect_get().never();
        let service = ResolveService::new(store);

        let err = service.resolve("doesNotExist").await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));

        let err = service.resolve("").await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
    }

    #[tokio::test]
    async fn store_failure_reads_as_not_found() {
        let mut store = MockStore::new();
        store
            .expect_get()
            .times(1)
            .returning(|_| Err(StorageError::Timeout("GetItem".to_string())));
        let service = ResolveService::new(store);

        let err = service.resolve("abc123").await.unwrap_err();
        assert_eq!(err, ServiceError::NotFound("abc123".to_string()));
    }

    #[tokio::test]
    async fn usable_through_trait_object() {
        let service = setup_with_record("abc", "https://example.com").await;
        let redirector: Arc<dyn Redirector> = Arc::new(service);

        let record = redirector.resolve("abc").await.unwrap();
        assert_eq!(record.long_url, "https://example.com");
    }
}
