//! Database connection and collection bootstrap.

use bson::{doc, Document};
use mongodb::error::ErrorKind;
use mongodb::options::IndexOptions;
use mongodb::{Client, Collection, IndexModel};

use crate::config::{Config, COLLECTION_POSTS, COLLECTION_USERS};
use crate::domain::{Post, User};
use crate::errors::AppResult;

pub mod schemas;

/// Server error code returned when a collection already exists.
const CODE_NAMESPACE_EXISTS: i32 = 48;

/// Database wrapper for connection management and collection access.
#[derive(Clone)]
pub struct Database {
    database: mongodb::Database,
}

impl Database {
    /// Connect, verify reachability, and bootstrap collections.
    ///
    /// Creates the `users` and `posts` collections with their schema
    /// validators and the unique `username` index. Safe to call against an
    /// already-initialized database.
    pub async fn connect(config: &Config) -> AppResult<Self> {
        let client = Client::with_uri_str(&config.mongodb_uri).await?;
        let database = client.database(&config.database_name);

        let db = Self { database };
        db.ping().await?;
        db.init_collections().await?;

        tracing::info!("Database connected and collections initialized");
        Ok(db)
    }

    /// Typed handle on the users collection.
    pub fn users(&self) -> Collection<User> {
        self.database.collection(COLLECTION_USERS)
    }

    /// Typed handle on the posts collection.
    pub fn posts(&self) -> Collection<Post> {
        self.database.collection(COLLECTION_POSTS)
    }

    /// Check database connectivity.
    pub async fn ping(&self) -> AppResult<()> {
        self.database.run_command(doc! { "ping": 1 }).await?;
        Ok(())
    }

    /// Create validated collections and indexes.
    pub async fn init_collections(&self) -> AppResult<()> {
        self.create_validated(COLLECTION_USERS, schemas::user_schema())
            .await?;
        self.create_validated(COLLECTION_POSTS, schemas::post_schema())
            .await?;

        let unique_username = IndexModel::builder()
            .keys(doc! { "username": 1 })
            .options(IndexOptions::builder().unique(true).build())
            .build();
        self.users().create_index(unique_username).await?;

        Ok(())
    }

    async fn create_validated(&self, name: &str, schema: Document) -> AppResult<()> {
        let result = self
            .database
            .create_collection(name)
            .validator(doc! { "$jsonSchema": schema })
            .await;

        match result {
            Ok(()) => {
                tracing::info!("Collection '{}' created", name);
                Ok(())
            }
            Err(e) if namespace_exists(&e) => {
                tracing::debug!("Collection '{}' already exists, not recreated", name);
                Ok(())
            }
            Err(e) => Err(e.into()),
        }
    }
}

fn namespace_exists(err: &mongodb::error::Error) -> bool {
    matches!(&*err.kind, ErrorKind::Command(c) if c.code == CODE_NAMESPACE_EXISTS)
}
