use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_sdk_dynamodb::config::{Credentials, Region};
use aws_sdk_dynamodb::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};
use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client;
use std::collections::HashMap;
use tinyurl_core::error::StorageError;
use tinyurl_core::repository::{ReadRecordStore, RecordStore, Result, TinyUrlRecord};
use tinyurl_core::ShortId;
use tracing::{debug, trace};
use typed_builder::TypedBuilder;

/// Partition key attribute.
pub const ID_ATTRIBUTE: &str = "id";
/// Attribute holding the long URL.
pub const URL_ATTRIBUTE: &str = "url";

/// Service error codes that mean the table cannot serve requests right now.
const UNAVAILABLE_CODES: &[&str] = &[
    "ResourceNotFoundException",
    "ProvisionedThroughputExceededException",
    "RequestLimitExceeded",
    "ThrottlingException",
    "InternalServerError",
    "ServiceUnavailable",
];

/// Connection settings for [`DynamoDbRepository::connect`].
#[derive(Debug, Clone, TypedBuilder)]
pub struct DynamoDbConfig {
    /// Name of the table holding the mappings.
    #[builder(setter(into))]
    pub table_name: String,
    /// Region override; the SDK default chain is used when `None`.
    #[builder(default)]
    pub region: Option<String>,
    /// Endpoint override, e.g. a DynamoDB Local instance.
    #[builder(default)]
    pub endpoint_url: Option<String>,
    /// Static credentials; the SDK default chain is used when `None`.
    #[builder(default)]
    pub credentials: Option<Credentials>,
}

/// DynamoDB implementation of the record store contract.
///
/// One item per id: partition key `id` (S) and attribute `url` (S). Writes
/// are unconditional `PutItem` upserts. Reads are strongly consistent so a
/// resolve that follows a create always observes it.
#[derive(Debug, Clone)]
pub struct DynamoDbRepository {
    client: Client,
    table_name: String,
}

impl DynamoDbRepository {
    /// Creates a repository from an existing client.
    pub fn new(client: Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }

    /// Creates a repository by loading the default AWS configuration chain,
    /// applying the region, endpoint and credential overrides from `config`.
    pub async fn connect(config: DynamoDbConfig) -> Self {
        let mut loader = aws_config::defaults(BehaviorVersion::latest());
        if let Some(region) = config.region {
            loader = loader.region(Region::new(region));
        }
        if let Some(endpoint_url) = config.endpoint_url {
            loader = loader.endpoint_url(endpoint_url);
        }
        if let Some(credentials) = config.credentials {
            loader = loader.credentials_provider(credentials);
        }
        let sdk_config = loader.load().await;

        Self::new(Client::new(&sdk_config), config.table_name)
    }

    /// Returns a reference to the underlying client.
    pub fn client(&self) -> &Client {
        &self.client
    }

    pub fn table_name(&self) -> &str {
        &self.table_name
    }
}

fn record_from_item(id: &ShortId, item: &HashMap<String, AttributeValue>) -> Result<TinyUrlRecord> {
    let long_url = item
        .get(URL_ATTRIBUTE)
        .and_then(|value| value.as_s().ok())
        .filter(|url| !url.is_empty())
        .ok_or_else(|| {
            StorageError::InvalidData(format!(
                "item '{}' has no non-empty string attribute '{}'",
                id, URL_ATTRIBUTE
            ))
        })?;

    Ok(TinyUrlRecord::new(id.clone(), long_url.clone()))
}

fn map_sdk_error<E, R>(err: SdkError<E, R>) -> StorageError
where
    E: ProvideErrorMetadata + std::error::Error + 'static,
    R: std::fmt::Debug,
{
    let message = DisplayErrorContext(&err).to_string();

    match &err {
        SdkError::TimeoutError(_) => StorageError::Timeout(message),
        SdkError::DispatchFailure(_) => StorageError::Unavailable(message),
        SdkError::ServiceError(service) => match service.err().code() {
            Some(code) if UNAVAILABLE_CODES.contains(&code) => StorageError::Unavailable(message),
            _ => StorageError::Rejected(message),
        },
        _ => StorageError::Operation(message),
    }
}

#[async_trait]
impl ReadRecordStore for DynamoDbRepository {
    async fn get(&self, id: &ShortId) -> Result<Option<TinyUrlRecord>> {
        trace!(id = %id, table = %self.table_name, "GetItem");

        let output = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .key(ID_ATTRIBUTE, AttributeValue::S(id.as_str().to_owned()))
            .consistent_read(true)
            .send()
            .await
            .map_err(map_sdk_error)?;

        let Some(item) = output.item else {
            return Ok(None);
        };

        record_from_item(id, &item).map(Some)
    }
}

#[async_trait]
impl RecordStore for DynamoDbRepository {
    async fn put(&self, record: TinyUrlRecord) -> Result<()> {
        trace!(id = %record.id, table = %self.table_name, "PutItem");
        let id = record.id.to_string();

        self.client
            .put_item()
            .table_name(&self.table_name)
            .item(ID_ATTRIBUTE, AttributeValue::S(record.id.into()))
            .item(URL_ATTRIBUTE, AttributeValue::S(record.long_url))
            .send()
            .await
            .map_err(map_sdk_error)?;

        debug!(id = %id, "stored mapping");
        Ok(())
    }
}
