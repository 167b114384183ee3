//! Shared test support: an in-memory store double.
//!
//! Implements both store traits over a single mutex so set/list mutations
//! are atomic exactly like the single-document conditional updates the
//! MongoDB stores issue. Enforces the same rules as the collection schema
//! validators (unique username, patterns, lengths) so validation and
//! duplicate-key paths behave as they do against the real database.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use bson::oid::ObjectId;
use once_cell::sync::Lazy;
use regex::Regex;

use social_api::domain::{Post, User};
use social_api::errors::{AppError, AppResult};
use social_api::infra::{PostStore, UserStore};
use social_api::Config;

static USERNAME_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\w{3,25}$").unwrap());
static TITLE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[\w ]{1,50}$").unwrap());

pub fn test_config() -> Config {
    Config::for_testing("test-secret-key-minimum-32-chars!!")
}

#[derive(Default)]
struct State {
    users: HashMap<String, User>,
    /// Insertion order doubles as creation order.
    posts: Vec<Post>,
}

#[derive(Default)]
pub struct MemoryStore {
    state: Mutex<State>,
}

impl MemoryStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn user_count(&self) -> usize {
        self.state.lock().unwrap().users.len()
    }

    pub fn post_count(&self) -> usize {
        self.state.lock().unwrap().posts.len()
    }

    pub fn user(&self, username: &str) -> Option<User> {
        self.state.lock().unwrap().users.get(username).cloned()
    }
}

fn validate_user(user: &User) -> AppResult<()> {
    if !USERNAME_RE.is_match(&user.username) {
        return Err(AppError::validation(format!(
            "users schema rejected username '{}'",
            user.username
        )));
    }
    Ok(())
}

fn validate_post(post: &Post) -> AppResult<()> {
    if !USERNAME_RE.is_match(&post.author) {
        return Err(AppError::validation(format!(
            "posts schema rejected author '{}'",
            post.author
        )));
    }
    if !TITLE_RE.is_match(&post.title) {
        return Err(AppError::validation(format!(
            "posts schema rejected title '{}'",
            post.title
        )));
    }
    let content_length = post.content.chars().count();
    if content_length < 1 || content_length > 500 {
        return Err(AppError::validation(
            "posts schema rejected content length",
        ));
    }
    Ok(())
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn insert(&self, user: &User) -> AppResult<()> {
        validate_user(user)?;
        let mut state = self.state.lock().unwrap();
        if state.users.contains_key(&user.username) {
            return Err(AppError::duplicate("User"));
        }
        state.users.insert(user.username.clone(), user.clone());
        Ok(())
    }

    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        Ok(self.state.lock().unwrap().users.get(username).cloned())
    }

    async fn add_following(&self, username: &str, target: &str) -> AppResult<Option<User>> {
        let mut state = self.state.lock().unwrap();
        Ok(state.users.get_mut(username).map(|user| {
            if !user.following.iter().any(|f| f == target) {
                user.following.push(target.to_string());
            }
            user.clone()
        }))
    }

    async fn remove_following(&self, username: &str, target: &str) -> AppResult<Option<User>> {
        let mut state = self.state.lock().unwrap();
        Ok(state.users.get_mut(username).map(|user| {
            user.following.retain(|f| f != target);
            user.clone()
        }))
    }

    async fn push_post(&self, username: &str, post_id: ObjectId) -> AppResult<Option<User>> {
        let mut state = self.state.lock().unwrap();
        Ok(state.users.get_mut(username).map(|user| {
            user.posts.push(post_id);
            user.clone()
        }))
    }
}

#[async_trait]
impl PostStore for MemoryStore {
    async fn insert(&self, post: &Post) -> AppResult<ObjectId> {
        validate_post(post)?;
        let id = ObjectId::new();
        let mut persisted = post.clone();
        persisted.id = Some(id);
        self.state.lock().unwrap().posts.push(persisted);
        Ok(id)
    }

    async fn find_by_id(&self, id: ObjectId) -> AppResult<Option<Post>> {
        Ok(self
            .state
            .lock()
            .unwrap()
            .posts
            .iter()
            .find(|p| p.id == Some(id))
            .cloned())
    }

    async fn find_by_author(&self, author: &str) -> AppResult<Vec<Post>> {
        Ok(self
            .state
            .lock()
            .unwrap()
            .posts
            .iter()
            .filter(|p| p.author == author)
            .cloned()
            .collect())
    }
}
