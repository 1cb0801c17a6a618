//! Resolve path of the TinyURL service.
//!
//! This crate provides a [`ResolveService`] that maps an id back to its
//! long URL through a read-only store.
//!
//! # Example
//!
//! ```rust
//! use tinyurl_core::{RecordStore, ShortId, TinyUrlRecord};
//! use tinyurl_redirector::ResolveService;
//! use tinyurl_storage::InMemoryRepository;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let repo = InMemoryRepository::new();
//! repo.put(TinyUrlRecord::new(
//!     ShortId::new("lzbfxd8mrui8")?,
//!     "https://aws.amazon.com",
//! ))
//! .await?;
//!
//! let service = ResolveService::new(repo);
//! let record = service.resolve("lzbfxd8mrui8").await?;
//! println!("Redirect to: {}", record.long_url);
//! # Ok(())
//! # }
//! ```

pub mod service;

pub use service::ResolveService;
pub use tinyurl_core::Redirector;
