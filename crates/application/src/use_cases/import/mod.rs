pub mod import_domains;

pub use import_domains::ImportDomainsUseCase;
