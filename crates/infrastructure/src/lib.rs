//! pilist Infrastructure Layer
pub mod database;
pub mod fetch;
pub mod repositories;
