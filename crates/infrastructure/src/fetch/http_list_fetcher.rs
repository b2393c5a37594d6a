use async_trait::async_trait;
use pilist_application::ports::ListFetcher;
use pilist_domain::config::FetchConfig;
use pilist_domain::DomainError;
use std::time::Duration;
use tracing::{info, instrument, warn};

pub struct HttpListFetcher {
    client: reqwest::Client,
}

impl HttpListFetcher {
    pub fn new(cfg: &FetchConfig) -> Result<Self, DomainError> {
        let client = reqwest::Client::builder()
            .user_agent(cfg.user_agent.as_str())
            .timeout(Duration::from_secs(cfg.timeout_secs))
            .build()
            .map_err(|e| DomainError::ListFetchError(e.to_string()))?;

        Ok(Self { client })
    }
}

#[async_trait]
impl ListFetcher for HttpListFetcher {
    #[instrument(skip(self))]
    async fn fetch(&self, url: &str) -> Result<String, DomainError> {
        let response = self.client.get(url).send().await.map_err(|e| {
            warn!(error = %e, "List download failed");
            DomainError::ListFetchError(format!("fetch error for {}: {}", url, e))
        })?;

        if !response.status().is_success() {
            warn!(status = response.status().as_u16(), "List download rejected");
            return Err(DomainError::ListFetchError(format!(
                "HTTP {} for {}",
                response.status().as_u16(),
                url
            )));
        }

        let text = response
            .text()
            .await
            .map_err(|e| DomainError::ListFetchError(format!("read error for {}: {}", url, e)))?;

        info!(bytes = text.len(), "Fetched list source");
        Ok(text)
    }
}
