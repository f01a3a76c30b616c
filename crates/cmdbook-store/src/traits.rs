use cmdbook_types::{Command, CommandDraft, CommandId};

use crate::error::StoreResult;

/// Canonical storage for the command catalog.
///
/// All implementations must satisfy these invariants:
/// - Ids are assigned by the store, start at 1, strictly increase, and are
///   never reused, even after the record they named is deleted.
/// - Absence is a normal outcome, never an error.
/// - Mutations are visible to subsequent reads in the same process as soon
///   as the call returns; [`commit`](CommandStore::commit) makes them
///   durable.
/// - The check-then-mutate step inside `replace` and `remove` happens under
///   one write-lock acquisition, giving callers per-id atomicity.
/// - Reads return value copies, never references into the store.
pub trait CommandStore: Send + Sync {
    /// Insert a new record built from `draft`, assigning the next unused id.
    ///
    /// Once the id cursor has no successor the insert is refused with
    /// [`StoreError::IdSpaceExhausted`](crate::StoreError::IdSpaceExhausted);
    /// an id is never handed out twice, even at the end of the range.
    fn add(&self, draft: &CommandDraft) -> StoreResult<CommandId>;

    /// Read the record with this id.
    ///
    /// Returns `Ok(None)` if no record has the id.
    fn find(&self, id: CommandId) -> StoreResult<Option<Command>>;

    /// Overwrite all mutable fields of the record with this id.
    ///
    /// Returns `Ok(false)` (and writes nothing) if the id does not exist.
    fn replace(&self, id: CommandId, draft: &CommandDraft) -> StoreResult<bool>;

    /// Delete the record with this id and return it.
    ///
    /// Returns `Ok(None)` if the id does not exist. A removed id is never
    /// assigned again.
    fn remove(&self, id: CommandId) -> StoreResult<Option<Command>>;

    /// All current records, in insertion order.
    fn list(&self) -> StoreResult<Vec<Command>>;

    /// Number of records currently stored.
    ///
    /// Default implementation goes through [`list`](CommandStore::list).
    /// Backends may override with a cheaper count.
    fn count(&self) -> StoreResult<usize> {
        Ok(self.list()?.len())
    }

    /// Durability commit point: flush prior mutations to the backing medium.
    ///
    /// A no-op for purely in-memory backends.
    fn commit(&self) -> StoreResult<()>;
}
