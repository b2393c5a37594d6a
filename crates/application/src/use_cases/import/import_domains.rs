use pilist_domain::{DomainError, DomainRecord, ImportSummary, ListAction};
use std::sync::Arc;
use tracing::{debug, info, instrument};

use crate::ports::DomainListRepository;

/// Reconciles a normalized batch against `domainlist`, inserting only the
/// domains the store does not already know.
pub struct ImportDomainsUseCase {
    repository: Arc<dyn DomainListRepository>,
}

impl ImportDomainsUseCase {
    pub fn new(repository: Arc<dyn DomainListRepository>) -> Self {
        Self { repository }
    }

    #[instrument(skip(self, batch), fields(records = batch.len(), action = action.to_str()))]
    pub async fn execute(
        &self,
        batch: &[DomainRecord],
        action: ListAction,
    ) -> Result<ImportSummary, DomainError> {
        if batch.is_empty() {
            return Err(DomainError::EmptyBatch);
        }

        let mut summary = ImportSummary::default();

        for record in batch {
            if self.repository.count_domain(record.domain()).await? > 0 {
                summary.existing += 1;
                continue;
            }

            let inserted = self
                .repository
                .insert_or_ignore(
                    record.domain(),
                    record.kind().type_code(action),
                    record.comment(),
                )
                .await?;

            if !inserted {
                debug!(domain = %record.domain(), "Store ignored conflicting row");
            }
            summary.added += 1;
        }

        info!(
            added = summary.added,
            existing = summary.existing,
            "Domain import finished"
        );

        Ok(summary)
    }
}
