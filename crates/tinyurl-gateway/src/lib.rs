//! HTTP boundary of the TinyURL service.
//!
//! Exposes `POST /t/createTinyUrl` and `GET /t/{id}` on top of the
//! [`Shortener`](tinyurl_core::Shortener) and
//! [`Redirector`](tinyurl_core::Redirector) services.

pub mod app;
pub mod cors;
pub mod error;
pub mod handlers;
pub mod model;
pub mod state;

pub use app::App;
pub use cors::AllowedOrigins;
pub use error::AppError;
pub use state::AppState;
