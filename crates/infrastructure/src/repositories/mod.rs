pub mod domainlist_repository;

pub use domainlist_repository::SqliteDomainListRepository;
