//! Catalog module: domain type, store abstraction, and its implementations.

pub mod domain;
pub mod errors;
pub mod repository;
pub mod repo;

pub use domain::Bird;
pub use errors::StoreError;
pub use repository::BirdStore;
