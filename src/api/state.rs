//! Application state - Dependency injection container.

use std::sync::Arc;

use crate::config::Config;
use crate::infra::{Database, PostStore, UserStore};
use crate::services::{
    AuthService, PostService, ServiceContainer, Services, SocialGraphService,
    UserResolutionService,
};

/// Application state containing all services (DI container).
#[derive(Clone)]
pub struct AppState {
    /// Authentication service
    pub auth_service: Arc<dyn AuthService>,
    /// Social graph service
    pub social_graph_service: Arc<dyn SocialGraphService>,
    /// User resolution service
    pub resolution_service: Arc<dyn UserResolutionService>,
    /// Post service
    pub post_service: Arc<dyn PostService>,
    /// Database handle, when the state was built over MongoDB. Absent when
    /// stores are injected directly (tests).
    pub database: Option<Arc<Database>>,
}

impl AppState {
    /// Create application state over the MongoDB stores.
    pub fn from_database(database: Arc<Database>, config: Config) -> Self {
        let container = Services::from_database(&database, config);
        Self::from_container(&container, Some(database))
    }

    /// Create application state over injected store handles.
    pub fn from_stores(
        users: Arc<dyn UserStore>,
        posts: Arc<dyn PostStore>,
        config: Config,
    ) -> Self {
        let container = Services::from_stores(users, posts, config);
        Self::from_container(&container, None)
    }

    fn from_container(container: &Services, database: Option<Arc<Database>>) -> Self {
        Self {
            auth_service: container.auth(),
            social_graph_service: container.social_graph(),
            resolution_service: container.resolution(),
            post_service: container.posts(),
            database,
        }
    }
}
