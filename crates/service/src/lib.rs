//! Service layer for the bird catalog.
//! - Owns the persistence abstraction the HTTP handlers depend on.
//! - Keeps domain types free of storage concerns from the `models` crate.

pub mod catalog;
