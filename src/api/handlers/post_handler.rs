//! Post handlers.

use axum::{
    extract::{Path, State},
    response::Json,
    routing::{get, post},
    Extension, Router,
};
use serde::Deserialize;

use crate::api::{AppState, AuthContext};
use crate::types::{PostDetailResult, PostListResult, PostResult};

/// Post creation request
#[derive(Debug, Deserialize)]
pub struct CreatePostRequest {
    pub title: String,
    pub content: String,
}

/// Create post routes
pub fn post_routes() -> Router<AppState> {
    Router::new()
        .route("/posts", post(create_post))
        .route("/posts/:id", get(get_post))
        .route("/users/:username/posts", get(posts_by_user))
}

/// Create a post as the authenticated caller
async fn create_post(
    State(state): State<AppState>,
    Extension(context): Extension<AuthContext>,
    Json(payload): Json<CreatePostRequest>,
) -> Json<PostResult> {
    let result = match context.require() {
        Ok(author) => {
            state
                .post_service
                .create_post(author, payload.title, payload.content)
                .await
        }
        Err(e) => Err(e),
    };

    Json(result.into())
}

/// Fetch a single post with its author expanded
async fn get_post(State(state): State<AppState>, Path(id): Path<String>) -> Json<PostDetailResult> {
    Json(state.post_service.get_post(&id).await.into())
}

/// All posts by a user, in creation order
async fn posts_by_user(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Json<PostListResult> {
    Json(state.post_service.get_posts_by_user(&username).await.into())
}
