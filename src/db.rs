//! Store connection and schema bootstrap

use sqlx::{postgres::PgPoolOptions, PgPool};
use std::time::Duration;

use crate::{config::DatabaseConfig, error::Error, error::Result};

/// Idempotent schema bootstrap, safe to run every startup
const CREATE_USERS_TABLE: &str = "\
CREATE TABLE IF NOT EXISTS users (
    id          BIGSERIAL PRIMARY KEY,
    name        TEXT NOT NULL,
    email       TEXT NOT NULL UNIQUE,
    created_at  TIMESTAMPTZ NOT NULL DEFAULT NOW()
)";

/// Establish the store connection.
///
/// The pool is capped at a single connection: the service contract is one
/// logical session shared by all requests, with statements serialized at the
/// store. Failure here is fatal to startup; there is no retry policy.
pub async fn connect(config: &DatabaseConfig) -> Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(1)
        .acquire_timeout(Duration::from_secs(10))
        .connect(&config.url())
        .await
        .map_err(|e| {
            tracing::error!(
                host = %config.host,
                port = config.port,
                database = %config.name,
                error = %e,
                "Database connection failed"
            );
            Error::Connect {
                host: config.host.clone(),
                port: config.port,
                name: config.name.clone(),
                source: Box::new(e),
            }
        })?;

    tracing::info!(
        host = %config.host,
        port = config.port,
        database = %config.name,
        "Connected to database"
    );

    Ok(pool)
}

/// Create the `users` table if it does not exist
pub async fn ensure_schema(pool: &PgPool) -> Result<()> {
    sqlx::query(CREATE_USERS_TABLE)
        .execute(pool)
        .await
        .map_err(|e| Error::Store {
            public: "Failed to initialize database schema",
            source: Box::new(e),
        })?;

    tracing::info!("Database schema ready");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_is_idempotent_statement() {
        assert!(CREATE_USERS_TABLE.starts_with("CREATE TABLE IF NOT EXISTS users"));
        assert!(CREATE_USERS_TABLE.contains("TEXT NOT NULL UNIQUE"));
        assert!(CREATE_USERS_TABLE.contains("DEFAULT NOW()"));
    }
}
