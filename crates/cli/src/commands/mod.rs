pub mod import;
pub mod sources;
