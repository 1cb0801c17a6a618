//! Disposable containers for integration tests. Requires a Docker daemon.

pub mod dynamodb;
pub mod error;

pub use error::{Result, TestInfraError};
