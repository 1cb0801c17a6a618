use crate::error::ServiceError;
use crate::repository::TinyUrlRecord;
use async_trait::async_trait;

#[async_trait]
pub trait Redirector: Send + Sync + 'static {
    /// Resolves an id to its stored record.
    ///
    /// Unknown ids and lookup failures both yield [`ServiceError::NotFound`].
    async fn resolve(&self, id: &str) -> Result<TinyUrlRecord, ServiceError>;
}
