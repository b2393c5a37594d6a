pub mod database;
pub mod errors;
pub mod fetch;
pub mod logging;
pub mod root;

pub use database::DatabaseConfig;
pub use errors::ConfigError;
pub use fetch::FetchConfig;
pub use logging::LoggingConfig;
pub use root::{CliOverrides, Config};
