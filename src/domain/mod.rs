//! Domain layer - Core business entities and logic
//!
//! Storage-facing documents (`User`, `Post`), the hash-free view types the
//! API returns, and the `Password` value object.

pub mod password;
pub mod post;
pub mod user;

pub use password::Password;
pub use post::{Post, PostDetail, PostView};
pub use user::{User, UserView};
