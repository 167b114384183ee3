//! User resolution service - depth-bounded follow-graph expansion.

use async_trait::async_trait;
use futures::future::{BoxFuture, FutureExt};
use std::sync::Arc;

use crate::config::MAX_RESOLVE_DEPTH;
use crate::domain::{PostView, UserView};
use crate::errors::{AppError, AppResult};
use crate::infra::{PostStore, UserStore};

/// Follow-graph resolution trait for dependency injection.
#[async_trait]
pub trait UserResolutionService: Send + Sync {
    /// Resolve a user into a hash-free view with their authored posts,
    /// expanding the follow graph `depth` hops.
    ///
    /// At depth 0 the `following` entries are shallow stubs (username and
    /// creation time only); each additional hop substitutes the followed
    /// users' own resolution one level shallower. `depth` is clamped to
    /// [`MAX_RESOLVE_DEPTH`], which is part of the contract: it is the only
    /// thing bounding the work a cyclic follow chain can cost.
    async fn get_user(&self, username: &str, depth: u32) -> AppResult<UserView>;
}

/// Concrete implementation of UserResolutionService.
///
/// Every resolved user independently re-queries the store; with the depth
/// cap the extra reads stay bounded, and simplicity wins over batching.
pub struct UserResolver {
    users: Arc<dyn UserStore>,
    posts: Arc<dyn PostStore>,
}

impl UserResolver {
    /// Create new resolution service instance
    pub fn new(users: Arc<dyn UserStore>, posts: Arc<dyn PostStore>) -> Self {
        Self { users, posts }
    }

    fn resolve<'a>(&'a self, username: &'a str, depth: u32) -> BoxFuture<'a, AppResult<UserView>> {
        async move {
            let user = self
                .users
                .find_by_username(username)
                .await?
                .ok_or_else(|| AppError::not_found("No such user exists"))?;

            let mut following = Vec::with_capacity(user.following.len());
            for followed in &user.following {
                if depth > 0 {
                    match self.resolve(followed, depth - 1).await {
                        Ok(view) => following.push(view),
                        // A follow edge may go stale if its target vanishes;
                        // skip it rather than failing the whole resolution.
                        Err(AppError::NotFound(_)) => {
                            tracing::warn!(
                                "Skipping stale follow target '{}' of '{}'",
                                followed,
                                username
                            );
                        }
                        Err(e) => return Err(e),
                    }
                } else if let Some(target) = self.users.find_by_username(followed).await? {
                    following.push(UserView::stub(&target));
                } else {
                    tracing::warn!(
                        "Skipping stale follow target '{}' of '{}'",
                        followed,
                        username
                    );
                }
            }

            let posts = self
                .posts
                .find_by_author(username)
                .await?
                .into_iter()
                .map(PostView::from)
                .collect();

            Ok(UserView {
                username: user.username,
                created: user.created,
                following,
                posts,
            })
        }
        .boxed()
    }
}

#[async_trait]
impl UserResolutionService for UserResolver {
    async fn get_user(&self, username: &str, depth: u32) -> AppResult<UserView> {
        self.resolve(username, depth.min(MAX_RESOLVE_DEPTH)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Post, User};
    use crate::infra::{MockPostStore, MockUserStore};

    /// user0 -> user1 -> user2, with one post per user.
    fn chain_user_store() -> MockUserStore {
        let mut store = MockUserStore::new();
        store.expect_find_by_username().returning(|name| {
            let mut user = User::new(name.to_string(), "hashed".to_string());
            match name {
                "user0" => user.following.push("user1".to_string()),
                "user1" => user.following.push("user2".to_string()),
                "user2" => {}
                _ => return Ok(None),
            }
            Ok(Some(user))
        });
        store
    }

    fn chain_post_store() -> MockPostStore {
        let mut store = MockPostStore::new();
        store.expect_find_by_author().returning(|author| {
            let mut post = Post::new(
                author.to_string(),
                format!("Post by {}", author),
                "Some text".to_string(),
            );
            post.id = Some(bson::oid::ObjectId::new());
            Ok(vec![post])
        });
        store
    }

    fn resolver() -> UserResolver {
        UserResolver::new(Arc::new(chain_user_store()), Arc::new(chain_post_store()))
    }

    #[tokio::test]
    async fn unknown_user_is_not_found() {
        let result = resolver().get_user("doesnotexist", 1).await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn depth_zero_keeps_following_as_stubs() {
        let view = resolver().get_user("user0", 0).await.unwrap();

        assert_eq!(view.posts.len(), 1);
        assert_eq!(view.following.len(), 1);

        let stub = &view.following[0];
        assert_eq!(stub.username, "user1");
        assert!(stub.following.is_empty());
        assert!(stub.posts.is_empty());
    }

    #[tokio::test]
    async fn depth_one_expands_exactly_one_hop() {
        let view = resolver().get_user("user0", 1).await.unwrap();

        let followed = &view.following[0];
        assert_eq!(followed.username, "user1");
        assert_eq!(followed.posts.len(), 1);
        assert_eq!(followed.posts[0].title, "Post by user1");

        // user2 is two hops out: present only as a stub.
        let second_hop = &followed.following[0];
        assert_eq!(second_hop.username, "user2");
        assert!(second_hop.posts.is_empty());
        assert!(second_hop.following.is_empty());
    }

    #[tokio::test]
    async fn cyclic_graph_terminates_at_the_depth_cap() {
        let mut users = MockUserStore::new();
        users.expect_find_by_username().returning(|name| {
            let mut user = User::new(name.to_string(), "hashed".to_string());
            let other = if name == "user0" { "user1" } else { "user0" };
            user.following.push(other.to_string());
            Ok(Some(user))
        });
        let mut posts = MockPostStore::new();
        posts.expect_find_by_author().returning(|_| Ok(vec![]));

        let resolver = UserResolver::new(Arc::new(users), Arc::new(posts));

        // Far beyond the cap; the clamp has to terminate the cycle.
        let view = resolver.get_user("user0", 1000).await.unwrap();

        let mut hops = 0;
        let mut cursor = &view;
        while let Some(next) = cursor.following.first() {
            hops += 1;
            cursor = next;
        }
        assert_eq!(hops, MAX_RESOLVE_DEPTH + 1);
    }

    #[tokio::test]
    async fn stale_follow_targets_are_skipped() {
        let mut users = MockUserStore::new();
        users.expect_find_by_username().returning(|name| {
            if name == "user0" {
                let mut user = User::new(name.to_string(), "hashed".to_string());
                user.following.push("ghost".to_string());
                Ok(Some(user))
            } else {
                Ok(None)
            }
        });
        let mut posts = MockPostStore::new();
        posts.expect_find_by_author().returning(|_| Ok(vec![]));

        let resolver = UserResolver::new(Arc::new(users), Arc::new(posts));
        let view = resolver.get_user("user0", 1).await.unwrap();

        assert!(view.following.is_empty());
    }
}
