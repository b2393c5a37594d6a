use pilist_domain::config::DatabaseConfig;
use pilist_domain::DomainError;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, error};

/// Opens an existing gravity database on a single connection.
///
/// The file is never created, and it must carry a `domainlist` table with
/// the `domain`, `type` and `comment` columns.
pub async fn open(path: &str, cfg: &DatabaseConfig) -> Result<SqlitePool, DomainError> {
    if !Path::new(path).is_file() {
        return Err(DomainError::InvalidDatabase(format!(
            "{} does not exist or is not a file",
            path
        )));
    }

    let options = SqliteConnectOptions::new()
        .filename(path)
        .create_if_missing(false)
        .busy_timeout(Duration::from_secs(cfg.busy_timeout_secs));

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .map_err(|e| {
            error!(path, error = %e, "Failed to open database");
            DomainError::InvalidDatabase(format!("{}: {}", path, e))
        })?;

    if let Err(e) = verify_schema(&pool).await {
        pool.close().await;
        return Err(e);
    }

    debug!(path, "Database opened");
    Ok(pool)
}

pub async fn verify_schema(pool: &SqlitePool) -> Result<(), DomainError> {
    let table: Option<String> = sqlx::query_scalar(
        "SELECT name FROM sqlite_master WHERE type = 'table' AND name = 'domainlist'",
    )
    .fetch_optional(pool)
    .await
    .map_err(|e| DomainError::DatabaseError(e.to_string()))?;

    if table.is_none() {
        return Err(DomainError::InvalidDatabase(
            "table 'domainlist' not found".to_string(),
        ));
    }

    sqlx::query("SELECT domain, type, comment FROM domainlist LIMIT 0")
        .execute(pool)
        .await
        .map_err(|e| DomainError::InvalidDatabase(format!("domainlist: {}", e)))?;

    Ok(())
}
