use crate::error::ServiceError;
use crate::short_id::ShortId;
use async_trait::async_trait;

type Result<T> = std::result::Result<T, ServiceError>;

/// Parameters for creating a tiny URL.
#[derive(Debug, Clone)]
pub struct CreateParams {
    /// The URL to shorten. `None` models a request without the field.
    pub long_url: Option<String>,
    /// Base used to compose the public tiny URL, e.g. `https://aws.com`.
    pub public_origin: String,
}

impl CreateParams {
    pub fn new(long_url: impl Into<String>, public_origin: impl Into<String>) -> Self {
        Self {
            long_url: Some(long_url.into()),
            public_origin: public_origin.into(),
        }
    }
}

/// Outcome of a successful create.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Created {
    pub id: ShortId,
    pub tiny_url: String,
}

#[async_trait]
pub trait Shortener: Send + Sync + 'static {
    /// Validates the input, derives the id, persists the mapping and returns
    /// the public tiny URL.
    async fn create(&self, params: CreateParams) -> Result<Created>;
}
