pub mod import;
pub mod lists;

pub use import::ImportDomainsUseCase;
pub use lists::{ListSelection, LoadListUseCase};
