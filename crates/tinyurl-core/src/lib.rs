//! Core types and traits for the TinyURL shortener.
//!
//! This crate provides the types shared by the create path, the resolve
//! path and the storage backends.

pub mod base36;
pub mod error;
pub mod redirector;
pub mod repository;
pub mod short_id;
pub mod shortener;

pub use error::{CoreError, ServiceError, StorageError};
pub use redirector::Redirector;
pub use repository::{ReadRecordStore, RecordStore, TinyUrlRecord};
pub use short_id::{ShortId, TINY_URL_PATH_SEGMENT};
pub use shortener::{CreateParams, Created, Shortener};
