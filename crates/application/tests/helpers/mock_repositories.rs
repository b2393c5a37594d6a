#![allow(dead_code)]

use async_trait::async_trait;
use pilist_application::ports::{DomainListRepository, ListFetcher};
use pilist_domain::DomainError;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredRow {
    pub domain: String,
    pub type_code: i64,
    pub comment: String,
}

#[derive(Clone)]
pub struct MockDomainListRepository {
    rows: Arc<RwLock<Vec<StoredRow>>>,
    fail_after_inserts: Arc<RwLock<Option<usize>>>,
    unique_domains: bool,
    count_calls: Arc<RwLock<usize>>,
    insert_calls: Arc<RwLock<usize>>,
    closed: Arc<RwLock<bool>>,
}

impl MockDomainListRepository {
    pub fn new() -> Self {
        Self {
            rows: Arc::new(RwLock::new(Vec::new())),
            fail_after_inserts: Arc::new(RwLock::new(None)),
            unique_domains: false,
            count_calls: Arc::new(RwLock::new(0)),
            insert_calls: Arc::new(RwLock::new(0)),
            closed: Arc::new(RwLock::new(false)),
        }
    }

    pub fn with_domains(domains: Vec<&str>) -> Self {
        let repo = Self::new();
        let rows = domains
            .into_iter()
            .map(|d| StoredRow {
                domain: d.to_string(),
                type_code: 0,
                comment: "seed".to_string(),
            })
            .collect();
        Self {
            rows: Arc::new(RwLock::new(rows)),
            ..repo
        }
    }

    /// Behaves like a table with a UNIQUE(domain) constraint.
    pub fn with_unique_domains(mut self) -> Self {
        self.unique_domains = true;
        self
    }

    pub async fn fail_after_inserts(&self, n: usize) {
        *self.fail_after_inserts.write().await = Some(n);
    }

    pub async fn rows(&self) -> Vec<StoredRow> {
        self.rows.read().await.clone()
    }

    pub async fn count(&self) -> usize {
        self.rows.read().await.len()
    }

    pub async fn count_calls(&self) -> usize {
        *self.count_calls.read().await
    }

    pub async fn insert_calls(&self) -> usize {
        *self.insert_calls.read().await
    }

    pub async fn is_closed(&self) -> bool {
        *self.closed.read().await
    }
}

impl Default for MockDomainListRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DomainListRepository for MockDomainListRepository {
    async fn count_domain(&self, domain: &str) -> Result<i64, DomainError> {
        *self.count_calls.write().await += 1;
        let rows = self.rows.read().await;
        Ok(rows.iter().filter(|r| r.domain == domain).count() as i64)
    }

    async fn insert_or_ignore(
        &self,
        domain: &str,
        type_code: i64,
        comment: &str,
    ) -> Result<bool, DomainError> {
        let mut calls = self.insert_calls.write().await;
        if let Some(limit) = *self.fail_after_inserts.read().await {
            if *calls >= limit {
                return Err(DomainError::DatabaseError(
                    "database is locked".to_string(),
                ));
            }
        }
        *calls += 1;

        let mut rows = self.rows.write().await;
        if self.unique_domains && rows.iter().any(|r| r.domain == domain) {
            return Ok(false);
        }
        rows.push(StoredRow {
            domain: domain.to_string(),
            type_code,
            comment: comment.to_string(),
        });
        Ok(true)
    }

    async fn close(&self) {
        *self.closed.write().await = true;
    }
}

#[derive(Clone, Default)]
pub struct MockListFetcher {
    bodies: Arc<RwLock<HashMap<String, String>>>,
    requested: Arc<RwLock<Vec<String>>>,
}

impl MockListFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn serve(&self, url: &str, body: &str) {
        self.bodies
            .write()
            .await
            .insert(url.to_string(), body.to_string());
    }

    pub async fn requested(&self) -> Vec<String> {
        self.requested.read().await.clone()
    }
}

#[async_trait]
impl ListFetcher for MockListFetcher {
    async fn fetch(&self, url: &str) -> Result<String, DomainError> {
        self.requested.write().await.push(url.to_string());
        self.bodies
            .read()
            .await
            .get(url)
            .cloned()
            .ok_or_else(|| DomainError::ListFetchError(format!("HTTP 404 for {}", url)))
    }
}
