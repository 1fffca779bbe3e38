//! Application bootstrap
//!
//! Loads the environment and opens the database connection that gets injected
//! into the controllers. Called from main.rs before the server starts.

use crate::config::DatabaseConfig;
use crate::database::DbConnection;
use crate::error::AppError;

/// Load `.env` and connect to the database
pub async fn boot() -> Result<DbConnection, AppError> {
    dotenvy::dotenv().ok();

    let config = DatabaseConfig::from_env();
    DbConnection::connect(&config).await
}
