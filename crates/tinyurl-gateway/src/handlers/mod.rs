mod health;
mod url;

pub use health::health_handler;
pub use url::{create_route_get_handler, create_tiny_url_handler, resolve_tiny_url_handler};
