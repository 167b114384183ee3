//! Follow-graph mutation handlers.

use axum::{extract::State, response::Json, routing::post, Extension, Router};
use serde::Deserialize;

use crate::api::{AppState, AuthContext};
use crate::types::MessageResult;

/// Follow/unfollow target
#[derive(Debug, Deserialize)]
pub struct FollowRequest {
    pub username: String,
}

/// Create follow-graph routes
pub fn follow_routes() -> Router<AppState> {
    Router::new()
        .route("/follow", post(follow))
        .route("/unfollow", post(unfollow))
}

/// Follow a user. The edge supplies the authenticated caller as the
/// mutated side of the pair; clients only ever name the target.
async fn follow(
    State(state): State<AppState>,
    Extension(context): Extension<AuthContext>,
    Json(payload): Json<FollowRequest>,
) -> Json<MessageResult> {
    let result = match context.require() {
        Ok(current) => state
            .social_graph_service
            .follow(current, &payload.username)
            .await
            .map(str::to_string),
        Err(e) => Err(e),
    };

    Json(result.into())
}

/// Unfollow a user
async fn unfollow(
    State(state): State<AppState>,
    Extension(context): Extension<AuthContext>,
    Json(payload): Json<FollowRequest>,
) -> Json<MessageResult> {
    let result = match context.require() {
        Ok(current) => state
            .social_graph_service
            .unfollow(current, &payload.username)
            .await
            .map(str::to_string),
        Err(e) => Err(e),
    };

    Json(result.into())
}
