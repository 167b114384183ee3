//! User document and view types.

use bson::oid::ObjectId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::post::PostView;

/// User document as persisted in the `users` collection.
///
/// `password_hash` never leaves the auth/storage boundary: every external
/// return goes through [`UserView`], which has no hash field at all.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub username: String,
    pub password_hash: String,
    #[serde(with = "bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub created: DateTime<Utc>,
    /// Usernames this user follows. Set semantics: no duplicates, order
    /// irrelevant, mutated only through atomic `$addToSet`/`$pull`.
    pub following: Vec<String>,
    /// References to authored posts, in creation order.
    pub posts: Vec<ObjectId>,
}

impl User {
    /// Create a new user document with an empty graph and post list.
    pub fn new(username: String, password_hash: String) -> Self {
        Self {
            username,
            password_hash,
            created: Utc::now(),
            following: Vec::new(),
            posts: Vec::new(),
        }
    }
}

/// User as returned to clients: hash-stripped, with the follow graph
/// expanded to the requested depth.
///
/// A "stub" is the unexpanded form: username and creation time with empty
/// `following` and `posts`.
#[derive(Debug, Clone, Serialize)]
pub struct UserView {
    pub username: String,
    pub created: DateTime<Utc>,
    pub following: Vec<UserView>,
    pub posts: Vec<PostView>,
}

impl UserView {
    /// Shallow, unexpanded view of a user document.
    pub fn stub(user: &User) -> Self {
        Self {
            username: user.username.clone(),
            created: user.created,
            following: Vec::new(),
            posts: Vec::new(),
        }
    }
}
