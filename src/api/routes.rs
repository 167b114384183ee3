//! Application route configuration.

use axum::{
    extract::State,
    http::StatusCode,
    middleware,
    response::{Html, Json},
    routing::get,
    Router,
};
use serde::Serialize;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use super::context::context_middleware;
use super::handlers::{auth_routes, follow_routes, post_routes, user_routes};
use super::AppState;

/// Create the application router with all routes configured
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .merge(auth_routes())
        .merge(user_routes())
        .merge(follow_routes())
        .merge(post_routes())
        // Authenticate every request exactly once; handlers read the
        // injected context.
        .layer(middleware::from_fn_with_state(
            state.clone(),
            context_middleware,
        ))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Root endpoint
async fn root() -> Html<&'static str> {
    Html("<h1>Hello World!</h1>")
}

/// Health check response
#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// Health check endpoint with database connectivity check
async fn health(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let error = match &state.database {
        Some(db) => db.ping().await.err().map(|e| e.user_message()),
        // Stores were injected without a database handle; nothing to ping.
        None => None,
    };

    match error {
        None => (
            StatusCode::OK,
            Json(HealthResponse {
                status: "healthy",
                error: None,
            }),
        ),
        Some(error) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(HealthResponse {
                status: "unhealthy",
                error: Some(error),
            }),
        ),
    }
}
