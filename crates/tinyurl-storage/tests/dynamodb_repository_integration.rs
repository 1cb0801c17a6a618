use aws_sdk_dynamodb::config::Credentials;
use aws_sdk_dynamodb::types::AttributeValue;
use tinyurl_core::{ShortId, TinyUrlRecord};
use tinyurl_storage::dynamodb::{ID_ATTRIBUTE, URL_ATTRIBUTE};
use tinyurl_storage::{
    DynamoDbConfig, DynamoDbRepository, ReadRecordStore, RecordStore, StorageError,
};
use tinyurl_test_infra::dynamodb::{DynamoDbLocal, DynamoDbLocalConfig};

const TABLE: &str = "tbl_tiny_url";

struct Fixture {
    dynamodb: DynamoDbLocal,
    repo: DynamoDbRepository,
}

impl Fixture {
    async fn start() -> Self {
        let dynamodb = DynamoDbLocal::new(DynamoDbLocalConfig::builder().build())
            .await
            .expect("start dynamodb local");
        let client = dynamodb.client().await.expect("dynamodb client");

        dynamodb
            .create_table(&client, TABLE, ID_ATTRIBUTE)
            .await
            .expect("create table");

        Self {
            dynamodb,
            repo: DynamoDbRepository::new(client, TABLE),
        }
    }
}

fn id(value: &str) -> ShortId {
    ShortId::new(value).unwrap()
}

#[tokio::test]
async fn put_and_get_record() {
    let fixture = Fixture::start().await;
    let record = TinyUrlRecord::new(id("lzbfxd8mrui8"), "https://aws.amazon.com");

    fixture.repo.put(record.clone()).await.unwrap();

    let got = fixture.repo.get(&id("lzbfxd8mrui8")).await.unwrap();
    assert_eq!(got, Some(record));
}

#[tokio::test]
async fn get_unknown_id_returns_none() {
    let fixture = Fixture::start().await;

    let got = fixture.repo.get(&id("doesnotexist")).await.unwrap();
    assert_eq!(got, None);
}

#[tokio::test]
async fn put_overwrites_existing_item() {
    let fixture = Fixture::start().await;

    fixture
        .repo
        .put(TinyUrlRecord::new(id("abc"), "https://first.example"))
        .await
        .unwrap();
    fixture
        .repo
        .put(TinyUrlRecord::new(id("abc"), "https://second.example"))
        .await
        .unwrap();

    let got = fixture.repo.get(&id("abc")).await.unwrap().unwrap();
    assert_eq!(got.long_url, "https://second.example");
}

#[tokio::test]
async fn item_uses_id_and_url_attributes() {
    let fixture = Fixture::start().await;

    fixture
        .repo
        .put(TinyUrlRecord::new(id("abc"), "https://example.com"))
        .await
        .unwrap();

    let output = fixture
        .repo
        .client()
        .get_item()
        .table_name(TABLE)
        .key(ID_ATTRIBUTE, AttributeValue::S("abc".into()))
        .send()
        .await
        .unwrap();
    let item = output.item.expect("item should exist");

    assert_eq!(item.len(), 2);
    assert_eq!(
        item.get(URL_ATTRIBUTE).and_then(|v| v.as_s().ok()).map(String::as_str),
        Some("https://example.com")
    );
}

#[tokio::test]
async fn missing_table_is_unavailable() {
    let fixture = Fixture::start().await;
    let repo = DynamoDbRepository::new(fixture.repo.client().clone(), "no_such_table");

    let err = repo.get(&id("abc")).await.unwrap_err();
    assert!(matches!(err, StorageError::Unavailable(_)), "got {err:?}");
}

#[tokio::test]
async fn connect_with_endpoint_override() {
    let fixture = Fixture::start().await;
    let endpoint = fixture.dynamodb.endpoint_url().await.unwrap();

    let repo = DynamoDbRepository::connect(
        DynamoDbConfig::builder()
            .table_name(TABLE)
            .region(Some(fixture.dynamodb.region().to_string()))
            .endpoint_url(Some(endpoint))
            .credentials(Some(Credentials::new("local", "local", None, None, "static")))
            .build(),
    )
    .await;

    repo.put(TinyUrlRecord::new(id("viaconnect"), "https://example.com"))
        .await
        .unwrap();
    assert!(fixture.repo.get(&id("viaconnect")).await.unwrap().is_some());
}
