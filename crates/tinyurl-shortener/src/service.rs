use async_trait::async_trait;
use std::fmt::{Display, Formatter};
use std::sync::Arc;
use tinyurl_core::{
    CreateParams, Created, ReadRecordStore, RecordStore, ServiceError, ShortId, Shortener,
    TinyUrlRecord,
};
use tinyurl_generator::Generator;
use tracing::{debug, trace, warn};

/// What to do when a new URL hashes onto an id that already maps to a
/// different URL.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CollisionPolicy {
    /// Overwrite the existing mapping. Concurrent colliding creates resolve
    /// to whichever write lands last.
    #[default]
    LastWriteWins,
    /// Read the id first and fail with [`ServiceError::Collision`] if it maps
    /// to another URL. The read and the write are separate store calls, so
    /// two concurrent colliding creates can still both succeed.
    Reject,
}

impl Display for CollisionPolicy {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            CollisionPolicy::LastWriteWins => write!(f, "last-write-wins"),
            CollisionPolicy::Reject => write!(f, "reject"),
        }
    }
}

/// A concrete implementation of the [`Shortener`] trait.
///
/// This service wraps a [`RecordStore`] and a [`Generator`] to handle:
/// - Input validation (the long URL must be present and non-empty)
/// - Id derivation
/// - Persisting the mapping with the configured [`CollisionPolicy`]
/// - Composing the public tiny URL
#[derive(Debug, Clone)]
pub struct CreateService<R, G> {
    repository: Arc<R>,
    generator: Arc<G>,
    collision_policy: CollisionPolicy,
}

impl<R: RecordStore, G: Generator> CreateService<R, G> {
    /// Creates a new `CreateService` using last-write-wins on collisions.
    pub fn new(repository: R, generator: G) -> Self {
        Self {
            repository: Arc::new(repository),
            generator: Arc::new(generator),
            collision_policy: CollisionPolicy::default(),
        }
    }

    pub fn with_collision_policy(mut self, policy: CollisionPolicy) -> Self {
        self.collision_policy = policy;
        self
    }

    pub fn collision_policy(&self) -> CollisionPolicy {
        self.collision_policy
    }

    /// Shortens `params.long_url`, see [`Shortener::create`].
    pub async fn create(&self, params: CreateParams) -> Result<Created, ServiceError> {
        Shortener::create(self, params).await
    }

    fn validate_long_url(long_url: Option<String>) -> Result<String, ServiceError> {
        match long_url {
            None => Err(ServiceError::Validation("long URL is missing".to_string())),
            Some(url) if url.is_empty() => {
                Err(ServiceError::Validation("long URL is empty".to_string()))
            }
            Some(url) => Ok(url),
        }
    }

    async fn ensure_no_collision(&self, record: &TinyUrlRecord) -> Result<(), ServiceError> {
        let Some(existing) = self.repository.get(&record.id).await? else {
            return Ok(());
        };

        if existing.long_url != record.long_url {
            warn!(
                id = %record.id,
                existing_url = %existing.long_url,
                new_url = %record.long_url,
                "rejecting colliding short id"
            );
            return Err(ServiceError::Collision {
                id: record.id.to_string(),
                existing_url: existing.long_url,
            });
        }

        Ok(())
    }
}

#[async_trait]
impl<R: RecordStore, G: Generator> Shortener for CreateService<R, G> {
    async fn create(&self, params: CreateParams) -> Result<Created, ServiceError> {
        let long_url = Self::validate_long_url(params.long_url)?;

        let id: ShortId = self.generator.generate(&long_url).into();
        trace!(id = %id, long_url = %long_url, "derived short id");

        let record = TinyUrlRecord::new(id.clone(), long_url);

        if self.collision_policy == CollisionPolicy::Reject {
            self.ensure_no_collision(&record).await?;
        }

        self.repository.put(record).await?;

        let tiny_url = id.to_url(&params.public_origin);
        debug!(id = %id, tiny_url = %tiny_url, "created tiny url");

        Ok(Created { id, tiny_url })
    }
}
