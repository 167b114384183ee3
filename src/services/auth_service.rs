//! Authentication service - credential hashing and token lifecycle.

use async_trait::async_trait;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::config::{Config, SECONDS_PER_HOUR, TOKEN_TYPE_BEARER};
use crate::domain::{Password, User, UserView};
use crate::errors::{AppError, AppResult};
use crate::infra::UserStore;

/// Hash verified in place of a stored one when the user does not exist,
/// so response timing does not reveal which usernames are taken.
const DUMMY_HASH: &str =
    "$argon2id$v=19$m=19456,t=2,p=1$c29tZXNhbHRzb21lc2FsdA$vtnW7idF9u2xFNIDhx9rUJEPegvSPAwCKVFIbZVPy1o";

/// Token claims payload
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub username: String,
    pub exp: i64,
    pub iat: i64,
}

/// Token returned after successful authentication
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub token: String,
    pub token_type: String,
    /// Token lifetime in seconds
    pub expires_in: i64,
}

/// Authentication service trait for dependency injection.
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Register a new user. The returned view never carries the hash.
    async fn create_user(&self, username: String, password: String) -> AppResult<UserView>;

    /// Check credentials and return a freshly issued token.
    async fn login(&self, username: String, password: String) -> AppResult<TokenResponse>;

    /// Verify a token and extract its claims.
    ///
    /// Returns `None` for expired, malformed, or badly signed tokens; the
    /// caller treats that as an anonymous context. Verification never
    /// fails a request outright and has no side effects.
    fn verify_token(&self, token: &str) -> Option<Claims>;
}

/// Issue a signed token for a username (shared helper)
fn issue_token(username: &str, config: &Config) -> AppResult<TokenResponse> {
    let now = Utc::now();
    let expires_at = now + Duration::hours(config.jwt_expiration_hours);

    let claims = Claims {
        username: username.to_string(),
        exp: expires_at.timestamp(),
        iat: now.timestamp(),
    };

    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(config.jwt_secret_bytes()),
    )?;

    Ok(TokenResponse {
        token,
        token_type: TOKEN_TYPE_BEARER.to_string(),
        expires_in: config.jwt_expiration_hours * SECONDS_PER_HOUR,
    })
}

/// Concrete implementation of AuthService.
pub struct Authenticator {
    users: Arc<dyn UserStore>,
    config: Config,
}

impl Authenticator {
    /// Create new auth service instance
    pub fn new(users: Arc<dyn UserStore>, config: Config) -> Self {
        Self { users, config }
    }
}

#[async_trait]
impl AuthService for Authenticator {
    async fn create_user(&self, username: String, password: String) -> AppResult<UserView> {
        // Username constraints are enforced by the store's schema
        // validator; a rejection comes back as Validation, a unique-key
        // collision as Duplicate("User").
        let password_hash = Password::new(&password)?.into_string();
        let user = User::new(username, password_hash);

        self.users.insert(&user).await?;
        tracing::info!("User '{}' created", user.username);

        Ok(UserView::stub(&user))
    }

    async fn login(&self, username: String, password: String) -> AppResult<TokenResponse> {
        let user = self.users.find_by_username(&username).await?;

        if let Some(User { password_hash, .. }) = &user {
            // Schema requires a hash, so an empty one means the record is
            // corrupt; say so server-side, not to the caller.
            if password_hash.is_empty() {
                return Err(AppError::internal(format!(
                    "Login attempted for '{}', but the record has no password hash",
                    username
                )));
            }
        }

        let stored_hash = user
            .as_ref()
            .map(|u| u.password_hash.as_str())
            .unwrap_or(DUMMY_HASH);
        let password_valid = Password::from_hash(stored_hash.to_string()).verify(&password);

        if user.is_none() || !password_valid {
            return Err(AppError::Unauthorized);
        }

        issue_token(&username, &self.config)
    }

    fn verify_token(&self, token: &str) -> Option<Claims> {
        let result = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.config.jwt_secret_bytes()),
            &Validation::default(),
        );

        match result {
            Ok(data) => Some(data.claims),
            Err(e) if matches!(e.kind(), jsonwebtoken::errors::ErrorKind::ExpiredSignature) => {
                tracing::debug!("Expired token, treating request as anonymous");
                None
            }
            Err(e) => {
                tracing::warn!("Token verification failed, treating request as anonymous: {}", e);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::MockUserStore;

    fn test_config() -> Config {
        Config::for_testing("test-secret-key-minimum-32-chars!!")
    }

    fn stored_user(username: &str, password: &str) -> User {
        User::new(
            username.to_string(),
            Password::new(password).unwrap().into_string(),
        )
    }

    #[tokio::test]
    async fn login_issues_verifiable_token() {
        let mut store = MockUserStore::new();
        store
            .expect_find_by_username()
            .returning(|name| Ok(Some(stored_user(name, "abcdefghij"))));

        let auth = Authenticator::new(Arc::new(store), test_config());
        let response = auth
            .login("user0".to_string(), "abcdefghij".to_string())
            .await
            .unwrap();

        assert_eq!(response.token_type, "Bearer");
        assert_eq!(response.expires_in, 3600);

        let claims = auth.verify_token(&response.token).expect("token should verify");
        assert_eq!(claims.username, "user0");
        assert!(claims.exp > claims.iat);
    }

    #[tokio::test]
    async fn login_rejects_wrong_password() {
        let mut store = MockUserStore::new();
        store
            .expect_find_by_username()
            .returning(|name| Ok(Some(stored_user(name, "abcdefghij"))));

        let auth = Authenticator::new(Arc::new(store), test_config());
        let result = auth
            .login("user0".to_string(), "NotTheRightPassword!".to_string())
            .await;

        assert!(matches!(result, Err(AppError::Unauthorized)));
    }

    #[tokio::test]
    async fn login_rejects_unknown_user() {
        let mut store = MockUserStore::new();
        store.expect_find_by_username().returning(|_| Ok(None));

        let auth = Authenticator::new(Arc::new(store), test_config());
        let result = auth
            .login("nobody".to_string(), "password".to_string())
            .await;

        assert!(matches!(result, Err(AppError::Unauthorized)));
    }

    #[tokio::test]
    async fn login_flags_record_without_hash() {
        let mut store = MockUserStore::new();
        store.expect_find_by_username().returning(|name| {
            let mut user = stored_user(name, "abcdefghij");
            user.password_hash = String::new();
            Ok(Some(user))
        });

        let auth = Authenticator::new(Arc::new(store), test_config());
        let result = auth
            .login("user0".to_string(), "abcdefghij".to_string())
            .await;

        assert!(matches!(result, Err(AppError::Internal(_))));
    }

    #[tokio::test]
    async fn created_view_carries_no_secrets() {
        let mut store = MockUserStore::new();
        store.expect_insert().returning(|_| Ok(()));

        let auth = Authenticator::new(Arc::new(store), test_config());
        let view = auth
            .create_user("user2".to_string(), "password".to_string())
            .await
            .unwrap();

        assert_eq!(view.username, "user2");
        assert!(view.following.is_empty());
        assert!(view.posts.is_empty());

        let json = serde_json::to_value(&view).unwrap();
        assert!(json.get("passwordHash").is_none());
        assert!(json.get("password_hash").is_none());
    }

    #[test]
    fn garbage_token_is_anonymous() {
        let auth = Authenticator::new(Arc::new(MockUserStore::new()), test_config());
        assert!(auth.verify_token("not-a-token").is_none());
    }

    #[test]
    fn expired_token_is_anonymous() {
        let config = test_config();
        let now = Utc::now().timestamp();
        let claims = Claims {
            username: "user0".to_string(),
            // Past the default verification leeway
            exp: now - 120,
            iat: now - 3720,
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(config.jwt_secret_bytes()),
        )
        .unwrap();

        let auth = Authenticator::new(Arc::new(MockUserStore::new()), config);
        assert!(auth.verify_token(&token).is_none());
    }

    #[test]
    fn token_signed_with_other_secret_is_anonymous() {
        let claims = Claims {
            username: "user0".to_string(),
            exp: Utc::now().timestamp() + 3600,
            iat: Utc::now().timestamp(),
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(b"a-completely-different-signing-key"),
        )
        .unwrap();

        let auth = Authenticator::new(Arc::new(MockUserStore::new()), test_config());
        assert!(auth.verify_token(&token).is_none());
    }
}
