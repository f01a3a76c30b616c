use std::sync::RwLock;

use cmdbook_types::{Command, CommandDraft, CommandId};

use crate::error::{StoreError, StoreResult};
use crate::state::CatalogState;
use crate::traits::CommandStore;

/// In-memory, `BTreeMap`-based command store.
///
/// Intended for tests and ephemeral serving. All records are held behind a
/// `RwLock`; reads clone the stored record. `commit` is a no-op since
/// mutations are immediately visible and the process is the durability
/// boundary.
pub struct InMemoryCommandStore {
    inner: RwLock<CatalogState>,
}

impl InMemoryCommandStore {
    /// Create a new empty store. The first assigned id is 1.
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(CatalogState::default()),
        }
    }

    /// Number of records currently stored.
    pub fn len(&self) -> usize {
        self.inner.read().expect("lock poisoned").records.len()
    }

    /// Returns `true` if the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.inner.read().expect("lock poisoned").records.is_empty()
    }

    /// Remove all records. The id cursor is not reset, so ids stay unique
    /// across a clear.
    pub fn clear(&self) {
        self.inner.write().expect("lock poisoned").records.clear();
    }
}

impl Default for InMemoryCommandStore {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandStore for InMemoryCommandStore {
    fn add(&self, draft: &CommandDraft) -> StoreResult<CommandId> {
        let mut state = self.inner.write().expect("lock poisoned");
        state.add(draft).ok_or(StoreError::IdSpaceExhausted)
    }

    fn find(&self, id: CommandId) -> StoreResult<Option<Command>> {
        let state = self.inner.read().expect("lock poisoned");
        Ok(state.records.get(&id).cloned())
    }

    fn replace(&self, id: CommandId, draft: &CommandDraft) -> StoreResult<bool> {
        let mut state = self.inner.write().expect("lock poisoned");
        Ok(state.replace(id, draft))
    }

    fn remove(&self, id: CommandId) -> StoreResult<Option<Command>> {
        let mut state = self.inner.write().expect("lock poisoned");
        Ok(state.records.remove(&id))
    }

    fn list(&self) -> StoreResult<Vec<Command>> {
        let state = self.inner.read().expect("lock poisoned");
        Ok(state.records.values().cloned().collect())
    }

    fn count(&self) -> StoreResult<usize> {
        Ok(self.len())
    }

    fn commit(&self) -> StoreResult<()> {
        Ok(())
    }
}

impl std::fmt::Debug for InMemoryCommandStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryCommandStore")
            .field("record_count", &self.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(how_to: &str) -> CommandDraft {
        CommandDraft::new(how_to, "Some Platform", "Some CommandLine")
    }

    // -----------------------------------------------------------------------
    // Id assignment
    // -----------------------------------------------------------------------

    #[test]
    fn first_id_is_one() {
        let store = InMemoryCommandStore::new();
        let id = store.add(&draft("a")).unwrap();
        assert_eq!(id, CommandId::new(1));
    }

    #[test]
    fn ids_are_sequential() {
        let store = InMemoryCommandStore::new();
        let ids: Vec<_> = (0..3).map(|_| store.add(&draft("x")).unwrap()).collect();
        assert_eq!(
            ids,
            vec![CommandId::new(1), CommandId::new(2), CommandId::new(3)]
        );
    }

    #[test]
    fn removed_ids_are_never_reassigned() {
        let store = InMemoryCommandStore::new();
        let first = store.add(&draft("a")).unwrap();
        store.add(&draft("b")).unwrap();
        assert!(store.remove(first).unwrap().is_some());

        let next = store.add(&draft("c")).unwrap();
        assert_eq!(next, CommandId::new(3));
        assert!(store.find(first).unwrap().is_none());
    }

    #[test]
    fn clear_keeps_the_id_cursor() {
        let store = InMemoryCommandStore::new();
        store.add(&draft("a")).unwrap();
        store.add(&draft("b")).unwrap();
        store.clear();
        assert!(store.is_empty());

        let id = store.add(&draft("c")).unwrap();
        assert_eq!(id, CommandId::new(3));
    }

    // -----------------------------------------------------------------------
    // Find
    // -----------------------------------------------------------------------

    #[test]
    fn add_and_find_roundtrip() {
        let store = InMemoryCommandStore::new();
        let id = store.add(&draft("list files")).unwrap();

        let found = store.find(id).unwrap().expect("should exist");
        assert_eq!(found.id, id);
        assert_eq!(found.how_to, "list files");
        assert_eq!(found.platform, "Some Platform");
    }

    #[test]
    fn find_missing_returns_none() {
        let store = InMemoryCommandStore::new();
        assert!(store.find(CommandId::new(0)).unwrap().is_none());
        assert!(store.find(CommandId::new(99)).unwrap().is_none());
    }

    // -----------------------------------------------------------------------
    // Replace
    // -----------------------------------------------------------------------

    #[test]
    fn replace_overwrites_all_mutable_fields() {
        let store = InMemoryCommandStore::new();
        let id = store.add(&draft("old")).unwrap();

        let replacement = CommandDraft::new("UPDATED", "UPDATED", "UPDATED");
        assert!(store.replace(id, &replacement).unwrap());

        let found = store.find(id).unwrap().unwrap();
        assert_eq!(found.id, id);
        assert_eq!(found.how_to, "UPDATED");
        assert_eq!(found.platform, "UPDATED");
        assert_eq!(found.command_line, "UPDATED");
    }

    #[test]
    fn replace_missing_returns_false() {
        let store = InMemoryCommandStore::new();
        store.add(&draft("keep me")).unwrap();

        assert!(!store.replace(CommandId::new(7), &draft("ghost")).unwrap());
        assert_eq!(store.len(), 1);
        assert_eq!(store.find(CommandId::new(1)).unwrap().unwrap().how_to, "keep me");
    }

    #[test]
    fn replace_leaves_other_records_untouched() {
        let store = InMemoryCommandStore::new();
        let a = store.add(&draft("a")).unwrap();
        let b = store.add(&draft("b")).unwrap();

        store.replace(a, &draft("a2")).unwrap();

        assert_eq!(store.find(b).unwrap().unwrap().how_to, "b");
    }

    // -----------------------------------------------------------------------
    // Remove
    // -----------------------------------------------------------------------

    #[test]
    fn remove_returns_the_record() {
        let store = InMemoryCommandStore::new();
        let id = store.add(&draft("to remove")).unwrap();

        let removed = store.remove(id).unwrap().expect("was present");
        assert_eq!(removed.how_to, "to remove");
        assert!(store.find(id).unwrap().is_none());
        assert!(store.remove(id).unwrap().is_none()); // second remove
    }

    #[test]
    fn remove_missing_returns_none() {
        let store = InMemoryCommandStore::new();
        assert!(store.remove(CommandId::new(1)).unwrap().is_none());
    }

    // -----------------------------------------------------------------------
    // List / count
    // -----------------------------------------------------------------------

    #[test]
    fn list_is_empty_on_a_fresh_store() {
        let store = InMemoryCommandStore::new();
        assert!(store.list().unwrap().is_empty());
        assert_eq!(store.count().unwrap(), 0);
    }

    #[test]
    fn list_is_in_insertion_order() {
        let store = InMemoryCommandStore::new();
        store.add(&draft("first")).unwrap();
        let middle = store.add(&draft("second")).unwrap();
        store.add(&draft("third")).unwrap();
        store.remove(middle).unwrap();
        store.add(&draft("fourth")).unwrap();

        let how_tos: Vec<_> = store
            .list()
            .unwrap()
            .into_iter()
            .map(|c| c.how_to)
            .collect();
        assert_eq!(how_tos, vec!["first", "third", "fourth"]);
    }

    #[test]
    fn length_tracks_adds_minus_removes() {
        let store = InMemoryCommandStore::new();
        for i in 0..5 {
            store.add(&draft(&format!("cmd-{i}"))).unwrap();
        }
        store.remove(CommandId::new(2)).unwrap();
        store.remove(CommandId::new(4)).unwrap();
        // A failed remove does not change the count.
        store.remove(CommandId::new(99)).unwrap();

        assert_eq!(store.len(), 3);
        assert_eq!(store.count().unwrap(), 3);
        assert_eq!(store.list().unwrap().len(), 3);
    }

    // -----------------------------------------------------------------------
    // Commit / misc
    // -----------------------------------------------------------------------

    #[test]
    fn commit_is_a_noop() {
        let store = InMemoryCommandStore::new();
        let id = store.add(&draft("still here")).unwrap();
        store.commit().unwrap();
        assert!(store.find(id).unwrap().is_some());
    }

    #[test]
    fn default_creates_empty_store() {
        let store = InMemoryCommandStore::default();
        assert!(store.is_empty());
    }

    #[test]
    fn debug_format() {
        let store = InMemoryCommandStore::new();
        store.add(&draft("x")).unwrap();
        let debug = format!("{store:?}");
        assert!(debug.contains("InMemoryCommandStore"));
        assert!(debug.contains("record_count"));
    }

    // -----------------------------------------------------------------------
    // Concurrency
    // -----------------------------------------------------------------------

    #[test]
    fn concurrent_reads_are_safe() {
        use std::sync::Arc;
        use std::thread;

        let store = Arc::new(InMemoryCommandStore::new());
        let id = store.add(&draft("shared")).unwrap();

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let store = Arc::clone(&store);
                thread::spawn(move || {
                    let found = store.find(id).unwrap().expect("should exist");
                    assert_eq!(found.id, id);
                })
            })
            .collect();

        for h in handles {
            h.join().expect("thread should not panic");
        }
    }

    #[test]
    fn concurrent_adds_assign_unique_ids() {
        use std::collections::HashSet;
        use std::sync::Arc;
        use std::thread;

        let store = Arc::new(InMemoryCommandStore::new());

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let store = Arc::clone(&store);
                thread::spawn(move || {
                    (0..16)
                        .map(|_| store.add(&draft("racing")).unwrap())
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        let mut all_ids = HashSet::new();
        for h in handles {
            for id in h.join().expect("thread should not panic") {
                assert!(all_ids.insert(id), "id {id} assigned twice");
            }
        }
        assert_eq!(all_ids.len(), 128);
        assert_eq!(store.len(), 128);
    }

    // -----------------------------------------------------------------------
    // Properties
    // -----------------------------------------------------------------------

    mod properties {
        use std::collections::VecDeque;

        use proptest::prelude::*;

        use super::*;

        proptest! {
            /// Interleave adds with removals of the oldest surviving record.
            /// Every assigned id must be strictly greater than all earlier
            /// ones, and the record count must equal adds minus removes.
            #[test]
            fn assigned_ids_are_unique_and_strictly_increasing(
                ops in proptest::collection::vec(any::<bool>(), 1..64),
            ) {
                let store = InMemoryCommandStore::new();
                let mut assigned = Vec::new();
                let mut live = VecDeque::new();

                for is_add in ops {
                    if is_add || live.is_empty() {
                        let id = store.add(&draft("p")).unwrap();
                        assigned.push(id);
                        live.push_back(id);
                    } else {
                        let id = live.pop_front().unwrap();
                        prop_assert!(store.remove(id).unwrap().is_some());
                    }
                }

                for pair in assigned.windows(2) {
                    prop_assert!(pair[0] < pair[1]);
                }
                prop_assert_eq!(store.len(), live.len());
            }
        }
    }
}
