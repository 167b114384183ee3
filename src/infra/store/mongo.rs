//! MongoDB store implementations.
//!
//! Write failures are classified by the server's structured error codes,
//! never by message text.

use async_trait::async_trait;
use bson::{doc, oid::ObjectId};
use futures::TryStreamExt;
use mongodb::error::{ErrorKind, WriteFailure};
use mongodb::options::ReturnDocument;
use mongodb::Collection;

use super::{PostStore, UserStore};
use crate::domain::{Post, User};
use crate::errors::{AppError, AppResult};
use crate::infra::Database;

/// Duplicate key violation (unique index).
const CODE_DUPLICATE_KEY: i32 = 11000;

/// Document rejected by the collection's schema validator.
const CODE_DOCUMENT_VALIDATION: i32 = 121;

/// Classify an insert/update failure into the error taxonomy.
///
/// Inserts report violations as write errors; findAndModify reports them
/// as command errors. Both carry the same structured codes.
fn classify_write(entity: &'static str, err: mongodb::error::Error) -> AppError {
    let failure = match &*err.kind {
        ErrorKind::Write(WriteFailure::WriteError(e)) => Some((e.code, e.message.clone())),
        ErrorKind::Command(e) => Some((e.code, e.message.clone())),
        _ => None,
    };

    match failure {
        Some((CODE_DUPLICATE_KEY, _)) => AppError::duplicate(entity),
        Some((CODE_DOCUMENT_VALIDATION, message)) => AppError::validation(message),
        _ => AppError::Database(err),
    }
}

/// `UserStore` backed by the `users` collection.
pub struct MongoUserStore {
    users: Collection<User>,
}

impl MongoUserStore {
    pub fn new(db: &Database) -> Self {
        Self { users: db.users() }
    }

    async fn update_returning(&self, username: &str, update: bson::Document) -> AppResult<Option<User>> {
        self.users
            .find_one_and_update(doc! { "username": username }, update)
            .return_document(ReturnDocument::After)
            .await
            .map_err(|e| classify_write("User", e))
    }
}

#[async_trait]
impl UserStore for MongoUserStore {
    async fn insert(&self, user: &User) -> AppResult<()> {
        self.users
            .insert_one(user)
            .await
            .map_err(|e| classify_write("User", e))?;
        Ok(())
    }

    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        Ok(self.users.find_one(doc! { "username": username }).await?)
    }

    async fn add_following(&self, username: &str, target: &str) -> AppResult<Option<User>> {
        self.update_returning(username, doc! { "$addToSet": { "following": target } })
            .await
    }

    async fn remove_following(&self, username: &str, target: &str) -> AppResult<Option<User>> {
        self.update_returning(username, doc! { "$pull": { "following": target } })
            .await
    }

    async fn push_post(&self, username: &str, post_id: ObjectId) -> AppResult<Option<User>> {
        self.update_returning(username, doc! { "$push": { "posts": post_id } })
            .await
    }
}

/// `PostStore` backed by the `posts` collection.
pub struct MongoPostStore {
    posts: Collection<Post>,
}

impl MongoPostStore {
    pub fn new(db: &Database) -> Self {
        Self { posts: db.posts() }
    }
}

#[async_trait]
impl PostStore for MongoPostStore {
    async fn insert(&self, post: &Post) -> AppResult<ObjectId> {
        let result = self
            .posts
            .insert_one(post)
            .await
            .map_err(|e| classify_write("Post", e))?;

        result
            .inserted_id
            .as_object_id()
            .ok_or_else(|| AppError::internal("Post insert returned a non-ObjectId id"))
    }

    async fn find_by_id(&self, id: ObjectId) -> AppResult<Option<Post>> {
        Ok(self.posts.find_one(doc! { "_id": id }).await?)
    }

    async fn find_by_author(&self, author: &str) -> AppResult<Vec<Post>> {
        // ObjectIds are monotonic per process; _id order is creation order.
        let cursor = self
            .posts
            .find(doc! { "author": author })
            .sort(doc! { "_id": 1 })
            .await?;

        Ok(cursor.try_collect().await?)
    }
}
