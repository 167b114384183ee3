//! Social graph service - follow/unfollow edge mutation.

use async_trait::async_trait;
use std::sync::Arc;

use crate::errors::{AppError, AppResult};
use crate::infra::UserStore;

/// Message returned on a successful follow, repeated or not.
pub const FOLLOWED_MESSAGE: &str = "Successfully followed user";

/// Message returned on a successful unfollow, repeated or not.
pub const UNFOLLOWED_MESSAGE: &str = "Successfully unfollowed user";

/// Follow-graph mutation trait for dependency injection.
///
/// Both operations are idempotent: repeating a follow or removing an edge
/// that was never there still succeeds. `current` always comes from the
/// authenticated context, never from client input, so a caller can only
/// mutate their own graph.
#[async_trait]
pub trait SocialGraphService: Send + Sync {
    /// Add `target` to `current`'s follow set.
    async fn follow(&self, current: &str, target: &str) -> AppResult<&'static str>;

    /// Remove `target` from `current`'s follow set.
    async fn unfollow(&self, current: &str, target: &str) -> AppResult<&'static str>;
}

/// Concrete implementation of SocialGraphService.
pub struct FollowManager {
    users: Arc<dyn UserStore>,
}

impl FollowManager {
    /// Create new social graph service instance
    pub fn new(users: Arc<dyn UserStore>) -> Self {
        Self { users }
    }

    async fn ensure_target_exists(&self, target: &str) -> AppResult<()> {
        if self.users.find_by_username(target).await?.is_none() {
            return Err(AppError::not_found("No such user exists"));
        }
        Ok(())
    }

    /// The authenticated user's document disappearing mid-request cannot
    /// happen in normal operation (users are never deleted); treat it as
    /// an internal fault rather than a caller error.
    fn missing_current(current: &str) -> AppError {
        AppError::internal(format!(
            "Authenticated user '{}' has no stored document",
            current
        ))
    }
}

#[async_trait]
impl SocialGraphService for FollowManager {
    async fn follow(&self, current: &str, target: &str) -> AppResult<&'static str> {
        self.ensure_target_exists(target).await?;

        // Single $addToSet keeps concurrent follows for the same user from
        // losing each other; re-adding an existing edge is a no-op.
        match self.users.add_following(current, target).await? {
            Some(_) => {
                tracing::debug!("'{}' now follows '{}'", current, target);
                Ok(FOLLOWED_MESSAGE)
            }
            None => Err(Self::missing_current(current)),
        }
    }

    async fn unfollow(&self, current: &str, target: &str) -> AppResult<&'static str> {
        self.ensure_target_exists(target).await?;

        match self.users.remove_following(current, target).await? {
            Some(_) => {
                tracing::debug!("'{}' no longer follows '{}'", current, target);
                Ok(UNFOLLOWED_MESSAGE)
            }
            None => Err(Self::missing_current(current)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::User;
    use crate::infra::MockUserStore;
    use mockall::predicate::eq;

    fn existing(name: &str) -> User {
        User::new(name.to_string(), "hashed".to_string())
    }

    #[tokio::test]
    async fn follow_checks_target_existence() {
        let mut store = MockUserStore::new();
        store
            .expect_find_by_username()
            .with(eq("doesnotexist"))
            .returning(|_| Ok(None));

        let service = FollowManager::new(Arc::new(store));
        let result = service.follow("user0", "doesnotexist").await;

        assert!(matches!(result, Err(AppError::NotFound(_))));
        assert_eq!(
            result.unwrap_err().user_message(),
            "No such user exists"
        );
    }

    #[tokio::test]
    async fn follow_uses_one_atomic_update() {
        let mut store = MockUserStore::new();
        store
            .expect_find_by_username()
            .with(eq("user1"))
            .returning(|name| Ok(Some(existing(name))));
        store
            .expect_add_following()
            .with(eq("user0"), eq("user1"))
            .times(1)
            .returning(|current, target| {
                let mut user = existing(current);
                user.following.push(target.to_string());
                Ok(Some(user))
            });

        let service = FollowManager::new(Arc::new(store));
        let message = service.follow("user0", "user1").await.unwrap();

        assert_eq!(message, FOLLOWED_MESSAGE);
    }

    #[tokio::test]
    async fn unfollow_of_missing_target_is_not_found() {
        let mut store = MockUserStore::new();
        store
            .expect_find_by_username()
            .with(eq("doesnotexist"))
            .returning(|_| Ok(None));

        let service = FollowManager::new(Arc::new(store));
        let result = service.unfollow("user0", "doesnotexist").await;

        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn unfollow_of_never_followed_user_succeeds() {
        let mut store = MockUserStore::new();
        store
            .expect_find_by_username()
            .with(eq("user1"))
            .returning(|name| Ok(Some(existing(name))));
        store
            .expect_remove_following()
            .with(eq("user0"), eq("user1"))
            .returning(|current, _| Ok(Some(existing(current))));

        let service = FollowManager::new(Arc::new(store));
        let message = service.unfollow("user0", "user1").await.unwrap();

        assert_eq!(message, UNFOLLOWED_MESSAGE);
    }
}
