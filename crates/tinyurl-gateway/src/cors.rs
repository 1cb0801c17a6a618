use axum::http::header::{AUTHORIZATION, CONTENT_LENGTH, CONTENT_TYPE};
use axum::http::{HeaderName, HeaderValue, Method};
use tower_http::cors::{Any, CorsLayer};
use tracing::warn;

const X_REQUESTED_WITH: HeaderName = HeaderName::from_static("x-requested-with");

/// Origins allowed to call the API from a browser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AllowedOrigins {
    Any,
    List(Vec<HeaderValue>),
}

impl AllowedOrigins {
    /// Parses a comma separated origin list. `*` anywhere in the list, or a
    /// list with no usable entries, allows every origin.
    pub fn parse(raw: &str) -> Self {
        let mut origins = Vec::new();
        for origin in raw.split(',').map(str::trim).filter(|o| !o.is_empty()) {
            if origin == "*" {
                return AllowedOrigins::Any;
            }
            match HeaderValue::from_str(origin) {
                Ok(value) => origins.push(value),
                Err(e) => warn!(origin = %origin, error = %e, "ignoring invalid allowed origin"),
            }
        }

        if origins.is_empty() {
            AllowedOrigins::Any
        } else {
            AllowedOrigins::List(origins)
        }
    }
}

/// Credentials are only advertised for an explicit origin list; browsers
/// reject `Access-Control-Allow-Credentials` next to a wildcard origin.
pub fn cors_layer(allowed_origins: &AllowedOrigins) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION, CONTENT_LENGTH, X_REQUESTED_WITH]);

    match allowed_origins {
        AllowedOrigins::Any => layer.allow_origin(Any),
        AllowedOrigins::List(origins) => layer
            .allow_origin(origins.clone())
            .allow_credentials(true),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wildcard_allows_any() {
        assert_eq!(AllowedOrigins::parse("*"), AllowedOrigins::Any);
        assert_eq!(
            AllowedOrigins::parse("https://a.example, *"),
            AllowedOrigins::Any
        );
    }

    #[test]
    fn empty_list_allows_any() {
        assert_eq!(AllowedOrigins::parse(""), AllowedOrigins::Any);
        assert_eq!(AllowedOrigins::parse(" , "), AllowedOrigins::Any);
    }

    #[test]
    fn explicit_list_is_trimmed() {
        assert_eq!(
            AllowedOrigins::parse("https://a.example, https://b.example ,"),
            AllowedOrigins::List(vec![
                HeaderValue::from_static("https://a.example"),
                HeaderValue::from_static("https://b.example"),
            ])
        );
    }

    #[test]
    fn invalid_entries_are_skipped() {
        assert_eq!(
            AllowedOrigins::parse("https://a.example,bad\u{7f}origin"),
            AllowedOrigins::List(vec![HeaderValue::from_static("https://a.example")])
        );
    }
}
