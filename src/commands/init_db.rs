//! Init-db command - bootstraps collections and exits.
//!
//! `serve` does this on startup too; the separate command exists for
//! provisioning a database ahead of the first deploy.

use crate::config::Config;
use crate::errors::AppResult;
use crate::infra::Database;

/// Execute the init-db command
pub async fn execute(config: Config) -> AppResult<()> {
    let database_name = config.database_name.clone();
    Database::connect(&config).await?;
    tracing::info!("Database '{}' initialized", database_name);
    Ok(())
}
