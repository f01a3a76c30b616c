use std::sync::Arc;

use cmdbook_store::{CommandStore, InMemoryCommandStore};
use cmdbook_types::{Command, CommandDraft, CommandId};

use crate::error::{ServiceError, ServiceResult};

/// CRUD operations over an injected [`CommandStore`].
///
/// Construction is explicit; the store arrives as a trait object so callers
/// pick the backend. Clones are cheap and share the same store.
#[derive(Clone)]
pub struct CommandService {
    store: Arc<dyn CommandStore>,
}

impl CommandService {
    pub fn new(store: Arc<dyn CommandStore>) -> Self {
        Self { store }
    }

    /// Service over a fresh [`InMemoryCommandStore`].
    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryCommandStore::new()))
    }

    /// All current records in insertion order.
    pub fn list(&self) -> ServiceResult<Vec<Command>> {
        Ok(self.store.list()?)
    }

    /// The record for `id`, or [`ServiceError::NotFound`].
    pub fn get(&self, id: CommandId) -> ServiceResult<Command> {
        self.store.find(id)?.ok_or(ServiceError::NotFound(id))
    }

    /// Store `draft` under a freshly assigned id and return the stored record.
    pub fn create(&self, draft: CommandDraft) -> ServiceResult<Command> {
        let id = self.store.add(&draft)?;
        self.store.commit()?;
        tracing::debug!(%id, "created command");
        Ok(Command::from_draft(id, draft))
    }

    /// Replace the record addressed by `id` with `record`.
    ///
    /// `record.id` must agree with `id`; a disagreement is rejected as
    /// [`ServiceError::IdMismatch`] before the store is touched, even when no
    /// record exists for either id. Once the ids agree, a missing target is
    /// [`ServiceError::NotFound`].
    pub fn update(&self, id: CommandId, record: Command) -> ServiceResult<()> {
        if record.id != id {
            return Err(ServiceError::IdMismatch {
                path_id: id,
                body_id: record.id,
            });
        }
        if !self.store.replace(id, &record.draft())? {
            return Err(ServiceError::NotFound(id));
        }
        self.store.commit()?;
        tracing::debug!(%id, "updated command");
        Ok(())
    }

    /// Remove the record for `id` and return it, or [`ServiceError::NotFound`].
    pub fn delete(&self, id: CommandId) -> ServiceResult<Command> {
        let removed = self
            .store
            .remove(id)?
            .ok_or(ServiceError::NotFound(id))?;
        self.store.commit()?;
        tracing::debug!(%id, "deleted command");
        Ok(removed)
    }
}
