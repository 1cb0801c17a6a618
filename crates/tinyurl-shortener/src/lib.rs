//! Create path of the TinyURL service.
//!
//! This crate provides [`CreateService`], which turns a long URL into a
//! stored mapping and a public tiny URL. Core types are re-exported from
//! `tinyurl_core`.

pub mod service;

pub use service::{CollisionPolicy, CreateService};
pub use tinyurl_core::{CreateParams, Created, ServiceError, Shortener};
