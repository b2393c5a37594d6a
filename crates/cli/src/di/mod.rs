use pilist_application::ports::DomainListRepository;
use pilist_application::use_cases::{ImportDomainsUseCase, LoadListUseCase};
use pilist_domain::{Config, ListCatalog};
use pilist_infrastructure::fetch::HttpListFetcher;
use std::sync::Arc;

/// Everything that can be built before the database is opened.
pub struct Services {
    pub catalog: Arc<ListCatalog>,
    pub load_list: Arc<LoadListUseCase>,
}

impl Services {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let catalog = Arc::new(config.catalog());
        let fetcher = Arc::new(HttpListFetcher::new(&config.fetch)?);

        Ok(Self {
            load_list: Arc::new(LoadListUseCase::new(catalog.clone(), fetcher)),
            catalog,
        })
    }
}

pub fn import_use_case(repository: Arc<dyn DomainListRepository>) -> ImportDomainsUseCase {
    ImportDomainsUseCase::new(repository)
}
