//! Store traits - the storage collaborator contract.
//!
//! The domain services depend on these traits, never on a concrete driver,
//! so stores can be swapped for doubles in tests. The contract deliberately
//! stays small: insert (unique-key and schema enforcement happen server
//! side), keyed lookup, filtered find, and single-document atomic
//! conditional updates for the follow set and post list.

use async_trait::async_trait;
use bson::oid::ObjectId;

use crate::domain::{Post, User};
use crate::errors::AppResult;

#[cfg(test)]
use mockall::automock;

mod mongo;

pub use mongo::{MongoPostStore, MongoUserStore};

/// User collection access.
///
/// The `add_following`/`remove_following`/`push_post` mutations must be
/// single atomic conditional updates returning the post-update document;
/// concurrent calls for the same user may interleave but never lose an
/// update.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Insert a new user. Fails with `Duplicate` on a username collision
    /// and `Validation` when the document violates the collection schema.
    async fn insert(&self, user: &User) -> AppResult<()>;

    /// Find a user by unique username.
    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>>;

    /// Atomically add `target` to the user's follow set. Returns the
    /// updated document, or `None` when no such user exists. Adding an
    /// already-present member is a no-op, not an error.
    async fn add_following(&self, username: &str, target: &str) -> AppResult<Option<User>>;

    /// Atomically remove `target` from the user's follow set. Removing an
    /// absent member is a no-op.
    async fn remove_following(&self, username: &str, target: &str) -> AppResult<Option<User>>;

    /// Atomically append a post reference to the user's post list.
    async fn push_post(&self, username: &str, post_id: ObjectId) -> AppResult<Option<User>>;
}

/// Post collection access.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait PostStore: Send + Sync {
    /// Insert a new post and return its assigned id. Fails with
    /// `Validation` when the document violates the collection schema.
    async fn insert(&self, post: &Post) -> AppResult<ObjectId>;

    /// Find a post by id.
    async fn find_by_id(&self, id: ObjectId) -> AppResult<Option<Post>>;

    /// All posts by an author, in creation order. An unknown author yields
    /// an empty list.
    async fn find_by_author(&self, author: &str) -> AppResult<Vec<Post>>;
}
