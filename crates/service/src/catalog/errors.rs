use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum StoreError {
    /// Any failure from the storage medium: connection loss, query failure,
    /// row-decode failure. Never retried by the store itself.
    #[error("persistence error: {0}")]
    Persistence(String),
}
