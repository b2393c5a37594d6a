mod domain_list_repository;
mod list_fetcher;

pub use domain_list_repository::DomainListRepository;
pub use list_fetcher::ListFetcher;
