//! Record store backends.

pub mod dynamodb;
pub mod memory;

pub use dynamodb::{DynamoDbConfig, DynamoDbRepository};
pub use memory::InMemoryRepository;
pub use tinyurl_core::repository::{ReadRecordStore, RecordStore, Result, TinyUrlRecord};
pub use tinyurl_core::StorageError;
