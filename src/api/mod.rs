//! API layer - HTTP edge
//!
//! Translates requests into domain-service calls and `AppResult`s into
//! tagged response unions. The edge authenticates once per request; domain
//! services never look at tokens.

pub mod context;
pub mod handlers;
pub mod routes;
pub mod state;

pub use context::AuthContext;
pub use routes::create_router;
pub use state::AppState;
