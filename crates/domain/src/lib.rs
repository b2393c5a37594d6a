//! pilist Domain Layer
pub mod config;
pub mod domain_record;
pub mod errors;
pub mod hostname;
pub mod list_source;

pub use config::{CliOverrides, Config, ConfigError};
pub use domain_record::{DomainKind, DomainRecord, ImportBatch, ImportSummary, ListAction};
pub use errors::DomainError;
pub use list_source::{ListCatalog, ListSource};
