use sqlx::SqlitePool;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::debug;

/// The one database connection of a run, reachable from the interrupt path.
#[derive(Clone, Default)]
pub struct ConnectionSlot {
    pool: Arc<Mutex<Option<SqlitePool>>>,
}

impl ConnectionSlot {
    pub async fn hold(&self, pool: SqlitePool) {
        *self.pool.lock().await = Some(pool);
    }

    pub async fn close(&self) {
        if let Some(pool) = self.pool.lock().await.take() {
            pool.close().await;
            debug!("Database connection closed");
        }
    }
}
