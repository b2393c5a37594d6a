use async_trait::async_trait;
use pilist_domain::DomainError;

/// Write side of the appliance's `domainlist` table.
#[async_trait]
pub trait DomainListRepository: Send + Sync {
    /// Number of rows whose domain text matches exactly.
    async fn count_domain(&self, domain: &str) -> Result<i64, DomainError>;

    /// Inserts one row and commits it. Returns `false` when the store
    /// ignored the row because of a uniqueness conflict.
    async fn insert_or_ignore(
        &self,
        domain: &str,
        type_code: i64,
        comment: &str,
    ) -> Result<bool, DomainError>;

    /// Releases the underlying connection. Safe to call more than once.
    async fn close(&self);
}
