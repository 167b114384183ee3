//! Post document and view types.

use bson::oid::ObjectId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::user::UserView;

/// Post document as persisted in the `posts` collection.
///
/// Ownership is by author username, not by back-pointer; "posts by user"
/// is always answerable from an author filter alone.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub author: String,
    pub title: String,
    pub content: String,
    #[serde(with = "bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub created: DateTime<Utc>,
}

impl Post {
    /// Create a new post document; the id is assigned at insert time.
    pub fn new(author: String, title: String, content: String) -> Self {
        Self {
            id: None,
            author,
            title,
            content,
            created: Utc::now(),
        }
    }
}

/// Post as returned to clients, with the author as a plain username.
#[derive(Debug, Clone, Serialize)]
pub struct PostView {
    pub id: String,
    pub author: String,
    pub title: String,
    pub content: String,
    pub created: DateTime<Utc>,
}

impl From<Post> for PostView {
    fn from(post: Post) -> Self {
        Self {
            id: post.id.map(|id| id.to_hex()).unwrap_or_default(),
            author: post.author,
            title: post.title,
            content: post.content,
            created: post.created,
        }
    }
}

/// Post with its author resolved into a full (hash-stripped) user view.
///
/// `author` is `None` when the referenced user no longer resolves; the
/// post itself is still returned.
#[derive(Debug, Clone, Serialize)]
pub struct PostDetail {
    pub id: String,
    pub author: Option<UserView>,
    pub title: String,
    pub content: String,
    pub created: DateTime<Utc>,
}

impl PostDetail {
    pub fn new(post: Post, author: Option<UserView>) -> Self {
        Self {
            id: post.id.map(|id| id.to_hex()).unwrap_or_default(),
            author,
            title: post.title,
            content: post.content,
            created: post.created,
        }
    }
}
