use crate::{Result, TestInfraError};
use aws_sdk_dynamodb::config::{BehaviorVersion, Credentials, Region};
use aws_sdk_dynamodb::types::{
    AttributeDefinition, BillingMode, KeySchemaElement, KeyType, ScalarAttributeType,
};
use aws_sdk_dynamodb::Client;
use testcontainers::core::{IntoContainerPort, WaitFor};
use testcontainers::runners::AsyncRunner;
use testcontainers::{ContainerAsync, GenericImage};
use typed_builder::TypedBuilder;

const DYNAMODB_LOCAL_PORT: u16 = 8000;

#[derive(TypedBuilder)]
pub struct DynamoDbLocalConfig {
    #[builder(default = "2.5.2".to_string())]
    tag: String,
    #[builder(default = "us-west-2".to_string())]
    region: String,
}

/// Test fixture for a disposable DynamoDB Local server.
pub struct DynamoDbLocal {
    container: ContainerAsync<GenericImage>,
    config: DynamoDbLocalConfig,
}

impl DynamoDbLocal {
    /// Starts an in-memory DynamoDB Local container.
    pub async fn new(config: DynamoDbLocalConfig) -> Result<Self> {
        let container = GenericImage::new("amazon/dynamodb-local", config.tag.as_str())
            .with_exposed_port(DYNAMODB_LOCAL_PORT.tcp())
            .with_wait_for(WaitFor::message_on_stdout("Initializing DynamoDB Local"))
            .start()
            .await?;

        Ok(Self { container, config })
    }

    pub async fn host(&self) -> Result<String> {
        let host = self.container.get_host().await?.to_string();
        Ok(match host.as_str() {
            "localhost" => String::from("127.0.0.1"),
            _ => host,
        })
    }

    pub async fn port(&self) -> Result<u16> {
        Ok(self
            .container
            .get_host_port_ipv4(DYNAMODB_LOCAL_PORT)
            .await?)
    }

    pub async fn endpoint_url(&self) -> Result<String> {
        let host = self.host().await?;
        let port = self.port().await?;
        Ok(format!("http://{}:{}", host, port))
    }

    pub fn region(&self) -> &str {
        &self.config.region
    }

    /// Builds a client pointed at the container with static dummy credentials.
    pub async fn client(&self) -> Result<Client> {
        let config = aws_sdk_dynamodb::Config::builder()
            .behavior_version(BehaviorVersion::latest())
            .region(Region::new(self.config.region.clone()))
            .endpoint_url(self.endpoint_url().await?)
            .credentials_provider(Credentials::new(
                "local",
                "local",
                None,
                None,
                "tinyurl-test-infra",
            ))
            .build();

        Ok(Client::from_conf(config))
    }

    /// Creates a table keyed by the string partition key `partition_key`.
    pub async fn create_table(
        &self,
        client: &Client,
        table_name: &str,
        partition_key: &str,
    ) -> Result<()> {
        let attribute = AttributeDefinition::builder()
            .attribute_name(partition_key)
            .attribute_type(ScalarAttributeType::S)
            .build()
            .map_err(|e| TestInfraError::DynamoDb(e.to_string()))?;
        let key = KeySchemaElement::builder()
            .attribute_name(partition_key)
            .key_type(KeyType::Hash)
            .build()
            .map_err(|e| TestInfraError::DynamoDb(e.to_string()))?;

        client
            .create_table()
            .table_name(table_name)
            .attribute_definitions(attribute)
            .key_schema(key)
            .billing_mode(BillingMode::PayPerRequest)
            .send()
            .await
            .map_err(|e| TestInfraError::DynamoDb(e.to_string()))?;

        Ok(())
    }

    /// Returns the underlying container reference.
    pub fn container(&self) -> &ContainerAsync<GenericImage> {
        &self.container
    }
}
