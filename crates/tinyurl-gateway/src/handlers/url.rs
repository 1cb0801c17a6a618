use crate::error::{AppError, Result};
use crate::model::{CreateTinyUrlRequest, CreateTinyUrlResponse};
use crate::state::AppState;
use axum::body::Bytes;
use axum::extract::rejection::{BytesRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::{header, HeaderMap, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use tinyurl_core::{CreateParams, ServiceError};
use tracing::{debug, info};

/// Creates a tiny URL for the `longUrl` in the body.
///
/// The body is parsed leniently: a missing content type, malformed JSON or a
/// missing `longUrl` all reach the service as an absent URL and fail
/// validation there. An unreadable or oversized body fails the same way.
pub async fn create_tiny_url_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: std::result::Result<Bytes, BytesRejection>,
) -> Result<Response> {
    let body = body.map_err(|rejection| {
        AppError::Create(ServiceError::Validation(format!(
            "unreadable request body: {rejection}"
        )))
    })?;
    let request = serde_json::from_slice::<CreateTinyUrlRequest>(&body).unwrap_or_else(|e| {
        debug!(error = %e, "unreadable create request body");
        CreateTinyUrlRequest::default()
    });

    let public_origin = request_origin(&headers)
        .or_else(|| state.public_origin())
        .ok_or(AppError::MissingOrigin)?
        .to_string();

    let created = state
        .shortener()
        .create(CreateParams {
            long_url: request.long_url,
            public_origin,
        })
        .await
        .map_err(AppError::Create)?;

    info!(id = %created.id, tiny_url = %created.tiny_url, "created tiny url");
    Ok((
        StatusCode::CREATED,
        Json(CreateTinyUrlResponse {
            tiny_url: created.tiny_url,
        }),
    )
        .into_response())
}

/// Redirects to the long URL stored under `id`.
pub async fn resolve_tiny_url_handler(
    path: std::result::Result<Path<String>, PathRejection>,
    State(state): State<AppState>,
) -> Result<Response> {
    let Path(id) = path.map_err(|rejection| {
        AppError::Resolve(ServiceError::NotFound(format!("undecodable id: {rejection}")))
    })?;
    let record = state
        .redirector()
        .resolve(&id)
        .await
        .map_err(AppError::Resolve)?;

    let location = HeaderValue::from_str(&record.long_url)
        .map_err(|e| AppError::InvalidLocation(format!("{id}: {e}")))?;

    debug!(id = %id, location = %record.long_url, "redirecting");
    Ok((StatusCode::FOUND, [(header::LOCATION, location)]).into_response())
}

/// `GET` on the create route. The path is not an id, so it is reported the
/// same way as any unknown id.
pub async fn create_route_get_handler() -> AppError {
    AppError::Resolve(ServiceError::NotFound(
        "createTinyUrl is not a short id".to_string(),
    ))
}

/// `Origin` header of the request. Browsers send the literal `null` for
/// opaque origins, which is treated as absent.
fn request_origin(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::ORIGIN)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|origin| !origin.is_empty() && *origin != "null")
}
