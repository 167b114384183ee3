//! Post service - creation and retrieval of authored posts.

use async_trait::async_trait;
use bson::oid::ObjectId;
use std::sync::Arc;

use crate::domain::{Post, PostDetail, PostView, UserView};
use crate::errors::{AppError, AppResult};
use crate::infra::{PostStore, UserStore};

/// Post operations trait for dependency injection.
#[async_trait]
pub trait PostService: Send + Sync {
    /// Create a post for `author` and link it from the author's post list.
    async fn create_post(&self, author: &str, title: String, content: String)
        -> AppResult<PostView>;

    /// Fetch a post by id, with the author resolved into a hash-free view.
    async fn get_post(&self, id: &str) -> AppResult<PostDetail>;

    /// All posts by an author, creation order. Empty is success.
    async fn get_posts_by_user(&self, author: &str) -> AppResult<Vec<PostView>>;
}

/// Concrete implementation of PostService.
pub struct PostManager {
    users: Arc<dyn UserStore>,
    posts: Arc<dyn PostStore>,
}

impl PostManager {
    /// Create new post service instance
    pub fn new(users: Arc<dyn UserStore>, posts: Arc<dyn PostStore>) -> Self {
        Self { users, posts }
    }
}

#[async_trait]
impl PostService for PostManager {
    async fn create_post(
        &self,
        author: &str,
        title: String,
        content: String,
    ) -> AppResult<PostView> {
        let post = Post::new(author.to_string(), title, content);
        let id = self.posts.insert(&post).await?;

        // The insert and the list append are two writes without a shared
        // transaction. If the append fails the post is orphaned but
        // unreachable (reads go through the author filter); log it in
        // full and surface the failure instead of masking it.
        match self.users.push_post(author, id).await {
            Ok(Some(_)) => {}
            Ok(None) => {
                tracing::error!(
                    "Post {} created but author '{}' has no document to link it from",
                    id,
                    author
                );
                return Err(AppError::internal(
                    "Post created but could not be linked to its author",
                ));
            }
            Err(e) => {
                tracing::error!(
                    "Post {} created but linking from '{}' failed: {:?}",
                    id,
                    author,
                    e
                );
                return Err(AppError::internal(
                    "Post created but could not be linked to its author",
                ));
            }
        }

        let persisted = self
            .posts
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::internal(format!("Post {} vanished after insert", id)))?;

        tracing::info!("Post {} created by '{}'", id, author);
        Ok(PostView::from(persisted))
    }

    async fn get_post(&self, id: &str) -> AppResult<PostDetail> {
        // An id that cannot name a document is indistinguishable from an
        // absent one at this surface.
        let object_id = ObjectId::parse_str(id)
            .map_err(|_| AppError::not_found("No such post exists"))?;

        let post = self
            .posts
            .find_by_id(object_id)
            .await?
            .ok_or_else(|| AppError::not_found("No such post exists"))?;

        let author = self
            .users
            .find_by_username(&post.author)
            .await?
            .map(|user| UserView::stub(&user));

        if author.is_none() {
            tracing::warn!("Post {} references missing author '{}'", id, post.author);
        }

        Ok(PostDetail::new(post, author))
    }

    async fn get_posts_by_user(&self, author: &str) -> AppResult<Vec<PostView>> {
        Ok(self
            .posts
            .find_by_author(author)
            .await?
            .into_iter()
            .map(PostView::from)
            .collect())
    }
}
