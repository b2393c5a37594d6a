use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;

const ANUDEEP_BASE: &str = "https://raw.githubusercontent.com/anudeepND/whitelist/master/domains";

pub const ANUDEEP_ALLOW: &str = "anudeep-allow";
pub const ANUDEEP_REFERRAL: &str = "anudeep-referral";
pub const ANUDEEP_OPTIONAL: &str = "anudeep-optional";

/// A curated remote list the operator can select by key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListSource {
    pub key: Arc<str>,
    pub url: Arc<str>,
    pub comment: Arc<str>,
    /// Keys of further sources fetched alongside this one and stored under
    /// this source's comment.
    #[serde(default)]
    pub includes: Vec<Arc<str>>,
}

impl ListSource {
    pub fn new(key: &str, url: &str, comment: &str, includes: &[&str]) -> Self {
        Self {
            key: Arc::from(key),
            url: Arc::from(url),
            comment: Arc::from(comment),
            includes: includes.iter().map(|k| Arc::from(*k)).collect(),
        }
    }

    pub fn validate_key(key: &str) -> Result<(), String> {
        if key.is_empty() {
            return Err("List source key cannot be empty".to_string());
        }
        if key.chars().any(char::is_whitespace) {
            return Err(format!("List source key '{}' cannot contain whitespace", key));
        }
        Ok(())
    }

    pub fn validate_url(url: &str) -> Result<(), String> {
        if url.len() > 2048 {
            return Err("URL cannot exceed 2048 characters".to_string());
        }
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err("URL must start with http:// or https://".to_string());
        }
        Ok(())
    }

    pub fn builtin() -> Vec<ListSource> {
        vec![
            ListSource::new(
                ANUDEEP_ALLOW,
                &format!("{}/whitelist.txt", ANUDEEP_BASE),
                "AndeepND | Allowlist Only",
                &[],
            ),
            ListSource::new(
                ANUDEEP_REFERRAL,
                &format!("{}/referral-sites.txt", ANUDEEP_BASE),
                "AndeepND | Allowlist+Referral",
                &[ANUDEEP_ALLOW],
            ),
            ListSource::new(
                ANUDEEP_OPTIONAL,
                &format!("{}/optional-list.txt", ANUDEEP_BASE),
                "AndeepND | Allowlist+Optional",
                &[ANUDEEP_ALLOW],
            ),
        ]
    }
}

/// Read-only selector → source mapping, built once at startup.
#[derive(Debug, Clone)]
pub struct ListCatalog {
    order: Vec<Arc<str>>,
    sources: HashMap<Arc<str>, ListSource>,
}

impl ListCatalog {
    pub fn new(sources: Vec<ListSource>) -> Self {
        let mut order = Vec::with_capacity(sources.len());
        let mut map = HashMap::with_capacity(sources.len());
        for source in sources {
            if !map.contains_key(&source.key) {
                order.push(source.key.clone());
            }
            map.insert(source.key.clone(), source);
        }
        Self {
            order,
            sources: map,
        }
    }

    pub fn builtin() -> Self {
        Self::new(ListSource::builtin())
    }

    pub fn get(&self, key: &str) -> Option<&ListSource> {
        self.sources.get(key)
    }

    /// Sources in the order they were configured.
    pub fn iter(&self) -> impl Iterator<Item = &ListSource> {
        self.order.iter().filter_map(|key| self.sources.get(key))
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
