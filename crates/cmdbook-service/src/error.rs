use cmdbook_store::StoreError;
use cmdbook_types::CommandId;

/// Errors produced by [`crate::CommandService`] operations.
///
/// `NotFound` and `IdMismatch` are the only client-addressable failures; both
/// are terminal for the request that caused them. Anything else is a store
/// fault surfacing through `Store`.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("command {0} not found")]
    NotFound(CommandId),

    #[error("body id {body_id} does not match addressed id {path_id}")]
    IdMismatch {
        path_id: CommandId,
        body_id: CommandId,
    },

    #[error("store error: {0}")]
    Store(#[from] StoreError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;
