//! Registration and login handlers.

use axum::{extract::State, response::Json, routing::post, Router};
use serde::Deserialize;

use crate::api::AppState;
use crate::types::{TokenResult, UserResult};

/// User registration request
#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub username: String,
    pub password: String,
}

/// Login request
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Create registration/login routes
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/users", post(create_user))
        .route("/login", post(login))
}

/// Register a new user
async fn create_user(
    State(state): State<AppState>,
    Json(payload): Json<CreateUserRequest>,
) -> Json<UserResult> {
    let result = state
        .auth_service
        .create_user(payload.username, payload.password)
        .await;

    Json(result.into())
}

/// Check credentials and issue a token
async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Json<TokenResult> {
    let result = state
        .auth_service
        .login(payload.username, payload.password)
        .await;

    Json(result.into())
}
