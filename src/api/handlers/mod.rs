//! Request handlers.
//!
//! Every handler answers HTTP 200 with a tagged union; gated handlers
//! check the auth context before touching a domain service.

mod auth_handler;
mod follow_handler;
mod post_handler;
mod user_handler;

pub use auth_handler::auth_routes;
pub use follow_handler::follow_routes;
pub use post_handler::post_routes;
pub use user_handler::user_routes;
