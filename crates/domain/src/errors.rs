use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum DomainError {
    #[error("No valid domains found, try again")]
    EmptyBatch,

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Not a usable gravity database: {0}")]
    InvalidDatabase(String),

    #[error("I/O error: {0}")]
    IoError(String),

    #[error("List source not found: {0}")]
    ListSourceNotFound(String),

    #[error("List fetch error: {0}")]
    ListFetchError(String),
}
