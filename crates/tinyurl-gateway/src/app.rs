use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::cors::{cors_layer, AllowedOrigins};
use crate::handlers::{
    create_route_get_handler, create_tiny_url_handler, health_handler, resolve_tiny_url_handler,
};
use crate::state::AppState;

pub struct App {}

impl App {
    pub fn router(state: AppState, allowed_origins: &AllowedOrigins) -> Router {
        Router::new()
            .route("/health", get(health_handler))
            .nest(
                "/t",
                Router::new()
                    .route(
                        "/createTinyUrl",
                        post(create_tiny_url_handler).get(create_route_get_handler),
                    )
                    .route("/{id}", get(resolve_tiny_url_handler)),
            )
            .layer(cors_layer(allowed_origins))
            .layer(TraceLayer::new_for_http())
            .with_state(state)
    }
}
