//! Service Container - centralized service wiring.
//!
//! Owns the construction of every domain service over a shared pair of
//! store handles, so the edge only ever sees trait objects.

use std::sync::Arc;

use super::{
    AuthService, Authenticator, FollowManager, PostManager, PostService, SocialGraphService,
    UserResolutionService, UserResolver,
};
use crate::config::Config;
use crate::infra::{Database, MongoPostStore, MongoUserStore, PostStore, UserStore};

/// Service container trait for dependency injection.
pub trait ServiceContainer: Send + Sync {
    /// Get authentication service
    fn auth(&self) -> Arc<dyn AuthService>;

    /// Get social graph service
    fn social_graph(&self) -> Arc<dyn SocialGraphService>;

    /// Get user resolution service
    fn resolution(&self) -> Arc<dyn UserResolutionService>;

    /// Get post service
    fn posts(&self) -> Arc<dyn PostService>;
}

/// Concrete implementation of ServiceContainer
pub struct Services {
    auth_service: Arc<dyn AuthService>,
    social_graph_service: Arc<dyn SocialGraphService>,
    resolution_service: Arc<dyn UserResolutionService>,
    post_service: Arc<dyn PostService>,
}

impl Services {
    /// Wire all services over a pair of store handles.
    ///
    /// This is the seam tests use to substitute store doubles.
    pub fn from_stores(
        users: Arc<dyn UserStore>,
        posts: Arc<dyn PostStore>,
        config: Config,
    ) -> Self {
        Self {
            auth_service: Arc::new(Authenticator::new(users.clone(), config)),
            social_graph_service: Arc::new(FollowManager::new(users.clone())),
            resolution_service: Arc::new(UserResolver::new(users.clone(), posts.clone())),
            post_service: Arc::new(PostManager::new(users, posts)),
        }
    }

    /// Wire all services over the MongoDB stores.
    pub fn from_database(db: &Database, config: Config) -> Self {
        let users: Arc<dyn UserStore> = Arc::new(MongoUserStore::new(db));
        let posts: Arc<dyn PostStore> = Arc::new(MongoPostStore::new(db));
        Self::from_stores(users, posts, config)
    }
}

impl ServiceContainer for Services {
    fn auth(&self) -> Arc<dyn AuthService> {
        self.auth_service.clone()
    }

    fn social_graph(&self) -> Arc<dyn SocialGraphService> {
        self.social_graph_service.clone()
    }

    fn resolution(&self) -> Arc<dyn UserResolutionService> {
        self.resolution_service.clone()
    }

    fn posts(&self) -> Arc<dyn PostService> {
        self.post_service.clone()
    }
}
