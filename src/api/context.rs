//! Per-request authentication context.
//!
//! The token is verified exactly once, here; everything downstream
//! receives an immutable context value. A missing, expired, or invalid
//! token never rejects the request — it yields an anonymous context, and
//! gated operations answer with an authentication error union member.

use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};

use crate::api::AppState;
use crate::config::BEARER_TOKEN_PREFIX;
use crate::errors::{AppError, AppResult};

/// Authenticated-or-anonymous caller identity.
#[derive(Clone, Debug)]
pub enum AuthContext {
    Authenticated { username: String },
    Anonymous,
}

impl AuthContext {
    /// The caller's username, if authenticated.
    pub fn username(&self) -> Option<&str> {
        match self {
            AuthContext::Authenticated { username } => Some(username),
            AuthContext::Anonymous => None,
        }
    }

    /// Require an authenticated caller; gated handlers call this before
    /// invoking any domain operation.
    pub fn require(&self) -> AppResult<&str> {
        self.username().ok_or(AppError::Authentication)
    }
}

/// Authentication middleware.
///
/// Reads the optional bearer token, verifies it, and injects the
/// resulting context into the request extensions. Runs on every route.
pub async fn context_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    let context = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(strip_bearer)
        .and_then(|token| state.auth_service.verify_token(token))
        .map(|claims| AuthContext::Authenticated {
            username: claims.username,
        })
        .unwrap_or(AuthContext::Anonymous);

    request.extensions_mut().insert(context);

    next.run(request).await
}

/// Clients have sent both "Bearer" and "bearer"; accept any case.
fn strip_bearer(header: &str) -> Option<&str> {
    let prefix = header.get(..BEARER_TOKEN_PREFIX.len())?;
    if prefix.eq_ignore_ascii_case(BEARER_TOKEN_PREFIX) {
        Some(header[BEARER_TOKEN_PREFIX.len()..].trim())
    } else {
        None
    }
}
