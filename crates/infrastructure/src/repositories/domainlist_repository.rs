use async_trait::async_trait;
use pilist_application::ports::DomainListRepository;
use pilist_domain::DomainError;
use sqlx::SqlitePool;
use tracing::{debug, error, instrument};

pub struct SqliteDomainListRepository {
    pool: SqlitePool,
}

impl SqliteDomainListRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DomainListRepository for SqliteDomainListRepository {
    #[instrument(skip(self))]
    async fn count_domain(&self, domain: &str) -> Result<i64, DomainError> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM domainlist WHERE domain = ?")
            .bind(domain)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to count domain");
                DomainError::DatabaseError(e.to_string())
            })
    }

    #[instrument(skip(self, comment))]
    async fn insert_or_ignore(
        &self,
        domain: &str,
        type_code: i64,
        comment: &str,
    ) -> Result<bool, DomainError> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            error!(error = %e, "Failed to begin transaction");
            DomainError::DatabaseError(e.to_string())
        })?;

        let result = sqlx::query(
            "INSERT OR IGNORE INTO domainlist (domain, type, comment) VALUES (?, ?, ?)",
        )
        .bind(domain)
        .bind(type_code)
        .bind(comment)
        .execute(&mut *tx)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to insert domain");
            DomainError::DatabaseError(e.to_string())
        })?;

        tx.commit().await.map_err(|e| {
            error!(error = %e, "Failed to commit domain insert");
            DomainError::DatabaseError(e.to_string())
        })?;

        let inserted = result.rows_affected() > 0;
        debug!(inserted, "Domain row written");
        Ok(inserted)
    }

    async fn close(&self) {
        self.pool.close().await;
    }
}
