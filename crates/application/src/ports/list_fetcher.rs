use async_trait::async_trait;
use pilist_domain::DomainError;

#[async_trait]
pub trait ListFetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<String, DomainError>;
}
