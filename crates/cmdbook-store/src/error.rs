/// Errors from command store operations.
///
/// Absence of a record is not an error; lookups report it as `Ok(None)` and
/// mutations as `Ok(false)` / `Ok(None)`.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// I/O error from the underlying storage backend.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization or deserialization failure.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// No unused id remains; the catalog refuses new records.
    #[error("id space exhausted")]
    IdSpaceExhausted,
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
