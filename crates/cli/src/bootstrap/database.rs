use pilist_domain::config::DatabaseConfig;
use pilist_infrastructure::database;
use sqlx::SqlitePool;
use tracing::{error, info};

pub async fn init_database(cfg: &DatabaseConfig) -> anyhow::Result<SqlitePool> {
    info!("Opening gravity database: {}", cfg.path);

    let pool = database::open(&cfg.path, cfg).await.map_err(|e| {
        error!("Failed to open database: {}", e);
        anyhow::Error::from(e)
    })?;

    info!(
        "Database ready (busy_timeout={}s)",
        cfg.busy_timeout_secs
    );

    Ok(pool)
}
