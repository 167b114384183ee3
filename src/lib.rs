//! Social API - a social-graph backend
//!
//! Users register and authenticate, publish posts, and follow one
//! another; posts from followed users are retrievable as a one-hop feed.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Documents, views, and the password value object
//! - **services**: Auth, social graph, user resolution, posts
//! - **infra**: MongoDB bootstrap and the store traits
//! - **api**: HTTP edge (auth context, handlers, routes)
//! - **types**: Tagged response unions
//! - **errors**: Centralized error taxonomy
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server
//! cargo run -- serve
//!
//! # Provision collections, validators and indexes
//! cargo run -- init-db
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;
pub mod types;

// Re-export commonly used types at crate root
pub use api::{AppState, AuthContext};
pub use config::Config;
pub use domain::{Password, Post, PostView, User, UserView};
pub use errors::{AppError, AppResult};
