use pilist_domain::hostname::validate_host;
use pilist_domain::{DomainError, ImportBatch, ListCatalog};
use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, instrument};

use crate::ports::ListFetcher;
use crate::services::normalize;

pub const PASTE_COMMENT: &str = "Pasted content";

/// Where the operator wants the entries to come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListSelection {
    /// A curated remote list, by catalog key.
    Catalog(String),
    File(PathBuf),
    Paste(String),
}

pub struct LoadListUseCase {
    catalog: Arc<ListCatalog>,
    fetcher: Arc<dyn ListFetcher>,
}

impl LoadListUseCase {
    pub fn new(catalog: Arc<ListCatalog>, fetcher: Arc<dyn ListFetcher>) -> Self {
        Self { catalog, fetcher }
    }

    #[instrument(skip(self, selection))]
    pub async fn execute(&self, selection: &ListSelection) -> Result<ImportBatch, DomainError> {
        let batch = match selection {
            ListSelection::Catalog(key) => self.load_catalog(key).await?,
            ListSelection::File(path) => {
                let text = tokio::fs::read_to_string(path)
                    .await
                    .map_err(|e| DomainError::IoError(format!("{}: {}", path.display(), e)))?;
                let label = format!("File: {}", path.display());
                normalize(&text, &label, None)
            }
            ListSelection::Paste(text) => {
                let validator: &dyn Fn(&str) -> bool = &validate_host;
                normalize(text, PASTE_COMMENT, Some(validator))
            }
        };

        info!(records = batch.len(), "List loaded");
        Ok(batch)
    }

    async fn load_catalog(&self, key: &str) -> Result<ImportBatch, DomainError> {
        let source = self
            .catalog
            .get(key)
            .ok_or_else(|| DomainError::ListSourceNotFound(key.to_string()))?;

        let text = self.fetcher.fetch(&source.url).await?;
        let mut batch = normalize(&text, &source.comment, None);

        let mut fetched: HashSet<&str> = HashSet::new();
        fetched.insert(&*source.key);

        for include_key in &source.includes {
            if !fetched.insert(&**include_key) {
                continue;
            }

            let include = self
                .catalog
                .get(include_key)
                .ok_or_else(|| DomainError::ListSourceNotFound(include_key.to_string()))?;

            let text = self.fetcher.fetch(&include.url).await?;
            // Included lists are recorded under the selected source's label.
            batch.extend(normalize(&text, &source.comment, None));
        }

        Ok(batch)
    }
}
