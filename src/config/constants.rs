//! Application-wide constants
//!
//! Centralized location for magic values to improve maintainability.

// =============================================================================
// Authentication & Security
// =============================================================================

/// Default token expiration in hours
pub const DEFAULT_JWT_EXPIRATION_HOURS: i64 = 1;

/// Minimum JWT secret length (security requirement)
pub const MIN_JWT_SECRET_LENGTH: usize = 32;

/// Seconds per hour (for token expiration calculation)
pub const SECONDS_PER_HOUR: i64 = 3600;

/// Authorization header prefix for Bearer tokens (matched case-insensitively)
pub const BEARER_TOKEN_PREFIX: &str = "Bearer ";

/// Token type identifier returned alongside issued tokens
pub const TOKEN_TYPE_BEARER: &str = "Bearer";

// =============================================================================
// Follow-graph resolution
// =============================================================================

/// Default expansion depth: one hop, the shape of a feed view
pub const DEFAULT_RESOLVE_DEPTH: u32 = 1;

/// Hard maximum expansion depth. Part of the public contract: requests for
/// deeper expansion are clamped, which also bounds the work a cyclic follow
/// chain can cost.
pub const MAX_RESOLVE_DEPTH: u32 = 3;

// =============================================================================
// Server Configuration
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 3000;

// =============================================================================
// Database
// =============================================================================

/// Default MongoDB connection URI (for development)
pub const DEFAULT_MONGODB_URI: &str = "mongodb://localhost:27017";

/// Default database name
pub const DEFAULT_DATABASE_NAME: &str = "social";

/// Users collection name
pub const COLLECTION_USERS: &str = "users";

/// Posts collection name
pub const COLLECTION_POSTS: &str = "posts";

// =============================================================================
// Document constraints
//
// These mirror the collection schema validators; the validators are the
// authoritative enforcement point.
// =============================================================================

/// Minimum username length
pub const USERNAME_MIN_LENGTH: u32 = 3;

/// Maximum username length
pub const USERNAME_MAX_LENGTH: u32 = 25;

/// Username pattern: word characters only
pub const USERNAME_PATTERN: &str = r"^\w+$";

/// Minimum post title length
pub const TITLE_MIN_LENGTH: u32 = 1;

/// Maximum post title length
pub const TITLE_MAX_LENGTH: u32 = 50;

/// Post title pattern: word characters and spaces
pub const TITLE_PATTERN: &str = r"^[\w ]+$";

/// Minimum post content length
pub const CONTENT_MIN_LENGTH: u32 = 1;

/// Maximum post content length
pub const CONTENT_MAX_LENGTH: u32 = 500;
