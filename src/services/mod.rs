//! Application services layer - Use cases and business logic.
//!
//! Services orchestrate domain logic over the injected store traits.
//! Every operation returns `AppResult`; expected failures are taxonomy
//! variants, never panics or raw driver errors.

mod auth_service;
pub mod container;
mod post_service;
mod social_graph_service;
mod user_resolution_service;

pub use auth_service::{AuthService, Authenticator, Claims, TokenResponse};
pub use container::{ServiceContainer, Services};
pub use post_service::{PostManager, PostService};
pub use social_graph_service::{FollowManager, SocialGraphService};
pub use user_resolution_service::{UserResolutionService, UserResolver};
