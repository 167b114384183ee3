//! User resolution handlers.

use axum::{
    extract::{Path, Query, State},
    response::Json,
    routing::get,
    Extension, Router,
};
use serde::Deserialize;

use crate::api::{AppState, AuthContext};
use crate::config::DEFAULT_RESOLVE_DEPTH;
use crate::types::UserResult;

/// Expansion depth selector. Defaults to one hop (the feed view); the
/// resolution service clamps to its hard maximum.
#[derive(Debug, Deserialize)]
pub struct DepthQuery {
    pub depth: Option<u32>,
}

impl DepthQuery {
    fn depth(&self) -> u32 {
        self.depth.unwrap_or(DEFAULT_RESOLVE_DEPTH)
    }
}

/// Create user query routes
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users/:username", get(get_user))
        .route("/me", get(me))
}

/// Resolve any user by username
async fn get_user(
    State(state): State<AppState>,
    Path(username): Path<String>,
    Query(query): Query<DepthQuery>,
) -> Json<UserResult> {
    let result = state
        .resolution_service
        .get_user(&username, query.depth())
        .await;

    Json(result.into())
}

/// Resolve the authenticated caller ("am I logged in" at depth 0, the
/// one-hop feed view at the default depth)
async fn me(
    State(state): State<AppState>,
    Extension(context): Extension<AuthContext>,
    Query(query): Query<DepthQuery>,
) -> Json<UserResult> {
    let result = match context.require() {
        Ok(username) => {
            state
                .resolution_service
                .get_user(username, query.depth())
                .await
        }
        Err(e) => Err(e),
    };

    Json(result.into())
}
